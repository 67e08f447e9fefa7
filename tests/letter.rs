#[macro_use]
extern crate matches;

use fasta_codes::diagnostics::Diagnostic;
use fasta_codes::tables::{self, NUCLEOTIDE_DEGENERATE, NUCLEOTIDE_STANDARD};
use fasta_codes::{infer_seq_type, ErrorKind, LetterCode, SeqType};

#[test]
fn parse_length() {
    let code = LetterCode::parse("a", SeqType::Nucleotide).unwrap();
    assert_eq!(code.symbol(), 'A');
    assert_eq!(code.description(), "adenosine");

    for invalid in &["", "AC", "ab"] {
        let err = LetterCode::parse(invalid, SeqType::Nucleotide).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::InvalidArgument { .. });
    }
}

#[test]
fn classification() {
    let t = LetterCode::new('T', SeqType::AminoAcid);
    assert_eq!(t.description(), "threonine");
    assert_eq!(t.degenerate(), Some(false));
    assert!(t.supported());

    let gap = LetterCode::new('-', SeqType::Nucleotide);
    assert_eq!(gap.degenerate(), Some(true));

    // amino acid only
    let e = LetterCode::new('E', SeqType::Nucleotide);
    assert!(!e.supported());
    assert_eq!(e.degenerate(), None);
    assert_eq!(e.description(), "");

    let unknown = LetterCode::new('A', SeqType::Unknown);
    assert!(!unknown.supported());
    assert_eq!(unknown.degenerate(), None);
}

#[test]
fn change_type() {
    let mut code = LetterCode::new('n', SeqType::Nucleotide);
    assert_eq!(code.description(), "any (A/G/C/T)");
    code.set_seq_type(SeqType::AminoAcid);
    assert_eq!(code.seq_type(), SeqType::AminoAcid);
    assert_eq!(code.description(), "asparagine");
    code.set_seq_type(SeqType::Unknown);
    assert!(!code.supported());
}

#[test]
fn equality() {
    let code = LetterCode::new('g', SeqType::Nucleotide);
    assert_eq!(code, 'G');
    assert_eq!(code, 'g');
    assert_eq!(code, "g");
    assert_ne!(code, "GG");
    assert_ne!(code, "");
    // the sequence type does not matter
    assert_eq!(code, LetterCode::new('G', SeqType::AminoAcid));
    assert_ne!(code, LetterCode::new('C', SeqType::Nucleotide));
    assert_eq!(code.to_string(), "G");
}

#[test]
fn unknown_symbols() {
    let mut found: Vec<Diagnostic> = vec![];
    let code = LetterCode::with_diagnostics('j', SeqType::Nucleotide, &mut found);
    assert_eq!(code.symbol(), 'J');
    assert!(!code.supported());
    LetterCode::with_diagnostics('A', SeqType::Nucleotide, &mut found);
    LetterCode::with_diagnostics('1', SeqType::Unknown, &mut found);
    assert_eq!(
        found,
        vec![
            Diagnostic::UnknownSymbol { symbol: 'J' },
            Diagnostic::UnknownSymbol { symbol: '1' },
        ]
    );
}

#[test]
fn complement_twice() {
    for &(symbol, _) in NUCLEOTIDE_STANDARD.iter().chain(NUCLEOTIDE_DEGENERATE) {
        let code = LetterCode::new(symbol, SeqType::Nucleotide);
        let comp = code.complement().unwrap();
        assert!(comp.supported());
        assert_eq!(comp.seq_type(), SeqType::Nucleotide);
        if symbol == 'U' {
            assert_eq!(comp, 'A');
            assert_eq!(comp.complement().unwrap(), 'T');
        } else {
            assert_eq!(comp.complement().unwrap(), code, "symbol {}", symbol);
        }
    }
}

#[test]
fn complement_errors() {
    let err = LetterCode::new('A', SeqType::AminoAcid).complement().unwrap_err();
    assert_matches!(
        err.kind(),
        ErrorKind::InvalidOperation {
            seq_type: SeqType::AminoAcid,
            ..
        }
    );
    let err = LetterCode::new('A', SeqType::Unknown).complement().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::InvalidOperation { .. });

    let err = LetterCode::new('E', SeqType::Nucleotide).complement().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::NoComplement { symbol: 'E' });
}

#[test]
fn seq_type_names() {
    for t in &[SeqType::Unknown, SeqType::Nucleotide, SeqType::AminoAcid] {
        assert_eq!(t.to_string().parse::<SeqType>().unwrap(), *t);
    }
    assert_eq!("AminoAcid".parse::<SeqType>().unwrap(), SeqType::AminoAcid);
    assert_matches!(
        "protein".parse::<SeqType>().unwrap_err().kind(),
        ErrorKind::InvalidArgument { .. }
    );
    assert_eq!(SeqType::default(), SeqType::Unknown);
}

#[test]
fn inference() {
    for s in &["E", "acgtf", "*", "ACGTX", "mkvle"] {
        assert_eq!(infer_seq_type(s), Some(SeqType::AminoAcid), "{}", s);
    }
    for s in &["", "ACGT", "MKV", "nnnn-", "ACJJ"] {
        assert_eq!(infer_seq_type(s), None, "{}", s);
    }
    assert!("EFILPQZX*".chars().all(tables::is_aminoacid_only));
}
