#[macro_use]
extern crate matches;

use fasta_codes::diagnostics::Diagnostic;
use fasta_codes::fasta::DEFAULT_WRAP;
use fasta_codes::{ErrorKind, QuickRecord, SeqType, SequenceRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn nucl(seq: &str) -> SequenceRecord {
    SequenceRecord::new(">id desc", seq, SeqType::Nucleotide, false).unwrap()
}

#[test]
fn header() {
    let rec = SequenceRecord::new(">", "A", SeqType::Unknown, false).unwrap();
    assert_eq!(rec.id(), "");
    assert_eq!(rec.description(), "");
    assert_eq!(rec.formatted_header(), "> ");

    let rec = SequenceRecord::new(">id1  two words ", "A", SeqType::Unknown, false).unwrap();
    assert_eq!(rec.id(), "id1");
    assert_eq!(rec.description(), "two words ");

    let rec = SequenceRecord::new("no_marker", "A", SeqType::Unknown, false).unwrap();
    assert_eq!(rec.id(), "no_marker");
    assert_eq!(rec.formatted_header(), ">no_marker ");
}

#[test]
fn empty_sequence() {
    let err = SequenceRecord::new(">id", "", SeqType::Nucleotide, false).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::EmptySequence);
}

#[test]
fn type_inference() {
    let rec = SequenceRecord::new(">p", "mkvle", SeqType::Unknown, true).unwrap();
    assert_eq!(rec.seq_type(), SeqType::AminoAcid);
    assert!(rec.type_inferred());
    assert!(rec.iter().all(|c| c.supported()));
    assert_eq!(rec.sequence_string(), "MKVLE");

    // no inference without flag
    let rec = SequenceRecord::new(">p", "MKVLE", SeqType::Unknown, false).unwrap();
    assert_eq!(rec.seq_type(), SeqType::Unknown);
    assert!(!rec.type_inferred());

    // no amino acid only codes
    let rec = SequenceRecord::new(">n", "ACGT", SeqType::Unknown, true).unwrap();
    assert_eq!(rec.seq_type(), SeqType::Unknown);
    assert!(!rec.type_inferred());

    // a known type is never overridden
    let rec = SequenceRecord::new(">n", "ACGTE", SeqType::Nucleotide, true).unwrap();
    assert_eq!(rec.seq_type(), SeqType::Nucleotide);
    assert!(!rec.type_inferred());
    assert!(!rec.symbols()[4].supported());
}

#[test]
fn unknown_symbols() {
    let mut found: Vec<Diagnostic> = vec![];
    let rec = SequenceRecord::with_diagnostics(">id", "AC?T!", SeqType::Nucleotide, false, &mut found)
        .unwrap();
    assert_eq!(rec.len(), 5);
    assert_eq!(
        found,
        vec![
            Diagnostic::UnknownSymbol { symbol: '?' },
            Diagnostic::UnknownSymbol { symbol: '!' },
        ]
    );
}

#[test]
fn set_type() {
    let mut rec = SequenceRecord::new(">p", "MKVLE", SeqType::Unknown, true).unwrap();
    rec.set_seq_type(SeqType::Nucleotide);
    assert_eq!(rec.seq_type(), SeqType::Nucleotide);
    assert!(!rec.type_inferred());
    assert!(rec.symbols()[0].supported());
    assert!(!rec.symbols()[3].supported());
    assert_eq!(rec.symbols()[1].seq_type(), SeqType::Nucleotide);
}

#[test]
fn gc_content() {
    let rec = nucl("ACGTSWNN");
    assert_eq!(rec.gc_content(false).unwrap(), 3. / 8.);
    assert_eq!(rec.gc_content(true).unwrap(), 37.5);
    assert_eq!(nucl("ATTA").gc_content(false).unwrap(), 0.);
    assert_eq!(nucl("GCS").gc_content(false).unwrap(), 1.);
}

#[test]
fn gc_content_random() {
    let mut rng = StdRng::seed_from_u64(9);
    let alphabet = b"ACGTNSWKMRY-";
    for _ in 0..100 {
        let len = rng.gen_range(1..200);
        let seq: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();
        let rec = nucl(&seq);
        let ratio = rec.gc_content(false).unwrap();
        assert!((0. ..=1.).contains(&ratio), "{}", seq);
        let pct = rec.gc_content(true).unwrap();
        assert!((pct - ratio * 100.).abs() < 1e-9);
        assert!(rec.at_gc_ratio().unwrap() >= 0.);
    }
}

#[test]
fn at_gc_ratio() {
    assert_eq!(nucl("AATTGC").at_gc_ratio().unwrap(), 2.);
    assert_eq!(nucl("WSSN").at_gc_ratio().unwrap(), 0.5);
    assert_eq!(nucl("ATTAWN").at_gc_ratio().unwrap(), 0.);
    // cached value returned again
    let rec = nucl("AGC");
    assert_eq!(rec.at_gc_ratio().unwrap(), 0.5);
    assert_eq!(rec.at_gc_ratio().unwrap(), 0.5);
}

#[test]
fn nucleotide_only() {
    for seq_type in &[SeqType::AminoAcid, SeqType::Unknown] {
        let rec = SequenceRecord::new(">id", "ACGT", *seq_type, false).unwrap();
        assert_matches!(
            rec.complement().unwrap_err().kind(),
            ErrorKind::InvalidOperation { op: "complement", .. }
        );
        assert_matches!(
            rec.gc_content(false).unwrap_err().kind(),
            ErrorKind::InvalidOperation { .. }
        );
        assert_matches!(
            rec.at_gc_ratio().unwrap_err().kind(),
            ErrorKind::InvalidOperation { .. }
        );
    }
}

#[test]
fn complement() {
    let rec = nucl("ACGTUN-kmRY");
    let comp = rec.complement().unwrap();
    assert_eq!(comp.sequence_string(), "TGCAAN-MKYR");
    assert_eq!(comp.id(), "id");
    assert_eq!(comp.description(), "desc");
    assert_eq!(comp.seq_type(), SeqType::Nucleotide);
    assert!(!comp.type_inferred());
    // the original is not changed
    assert_eq!(rec.sequence_string(), "ACGTUN-KMRY");

    let err = nucl("ACXT").complement().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::NoComplement { symbol: 'X' });
}

#[test]
fn formatting() {
    let rec = nucl("ACGTACGTAC");
    assert_eq!(rec.formatted_body(4), "ACGT\nACGT\nAC");
    assert_eq!(rec.formatted_body(5), "ACGTA\nCGTAC");
    assert_eq!(rec.formatted_body(100), "ACGTACGTAC");
    assert_eq!(rec.formatted_body(0), rec.formatted_body(1));
    assert_eq!(rec.formatted_body(1).lines().count(), 10);
    assert_eq!(rec.formatted_record_wrap(4), ">id desc\nACGT\nACGT\nAC");
    assert_eq!(rec.to_string(), ">id desc\nACGTACGTAC");

    let long = nucl(&"A".repeat(DEFAULT_WRAP + 1));
    let lines: Vec<_> = long.formatted_record().lines().map(str::len).collect();
    assert_eq!(lines, vec![8, DEFAULT_WRAP, 1]);
}

#[test]
fn slicing() {
    let rec = nucl("ACGT");
    let sliced = rec.slice(1..3).unwrap();
    assert_eq!(sliced.sequence_string(), "CG");
    assert_eq!(sliced.id(), "id");
    assert_eq!(sliced.description(), "desc [SLICE OF ORIGINAL: 1..3]");
    assert_eq!(sliced.seq_type(), SeqType::Nucleotide);

    assert_eq!(rec.slice(..2).unwrap().sequence_string(), "AC");
    assert_eq!(rec.slice(2..).unwrap().description(), "desc [SLICE OF ORIGINAL: 2..4]");
    assert_eq!(rec.get(0).unwrap().sequence_string(), "A");
    assert_eq!(rec.get(0).unwrap().description(), "desc [SLICE OF ORIGINAL: 0]");

    let err = rec.slice(4..10).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::EmptySlice { start: 4, end: 4 });
    assert_matches!(rec.slice(1..1).unwrap_err().kind(), ErrorKind::EmptySlice { .. });
    assert_matches!(rec.get(10).unwrap_err().kind(), ErrorKind::EmptySlice { .. });
}

#[test]
fn iterate_again() {
    let rec = nucl("ACGT");
    let first: String = rec.iter().map(|c| c.symbol()).collect();
    let second: String = (&rec).into_iter().map(|c| c.symbol()).collect();
    assert_eq!(first, "ACGT");
    assert_eq!(first, second);
    let mut n = 0;
    for code in &rec {
        assert!(code.supported());
        n += 1;
    }
    assert_eq!(n, 4);
}

#[test]
fn quick_record() {
    let rec = QuickRecord::new(">id1 some desc", "MKVLE");
    assert_eq!(rec.id(), "id1");
    assert_eq!(rec.desc(), "some desc");
    let full = rec.to_sequence_record(SeqType::Unknown, true).unwrap();
    assert_eq!(full.seq_type(), SeqType::AminoAcid);
    assert_eq!(full.description(), "some desc");

    let empty = QuickRecord::new(">id", "");
    assert_matches!(
        empty.to_sequence_record(SeqType::Nucleotide, false).unwrap_err().kind(),
        ErrorKind::EmptySequence
    );
}
