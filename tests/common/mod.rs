#![allow(dead_code)]

use fasta_codes::diagnostics::Diagnostic;
use fasta_codes::fasta::{Reader, ReaderBuilder};
use std::io::Cursor;

pub type TestReader = Reader<Cursor<Vec<u8>>, Vec<Diagnostic>>;

lazy_static! {
    /// Multi-line FASTA with empty lines, CRLF endings and a header
    /// without sequence
    pub static ref FASTA: Vec<u8> = concat_lines(&[
        "",
        ">id desc",
        "ACCGTAGGCT",
        "CCGTAGGCTG",
        "",
        "CGTAGGCTGA",
        "CCCC\r",
        ">id2",
        ">id3 another description ",
        "ATTGTTGTTT",
        "",
        "",
        "GGGG",
        "",
    ]);
}

pub struct ExpectedRecord {
    pub head: &'static str,
    pub id: &'static str,
    pub desc: &'static str,
    pub seq: &'static str,
    /// line index (0-based) of the header
    pub line: u64,
    pub byte: u64,
    pub record: u64,
}

pub static FASTA_EXPECTED: [ExpectedRecord; 2] = [
    ExpectedRecord {
        head: ">id desc",
        id: "id",
        desc: "desc",
        seq: "ACCGTAGGCTCCGTAGGCTGCGTAGGCTGACCCC",
        line: 1,
        byte: 1,
        record: 0,
    },
    ExpectedRecord {
        head: ">id3 another description",
        id: "id3",
        desc: "another description",
        seq: "ATTGTTGTTTGGGG",
        line: 8,
        byte: 55,
        record: 1,
    },
];

pub fn concat_lines(lines: &[&str]) -> Vec<u8> {
    lines.iter().flat_map(|l| l.bytes().chain(Some(b'\n'))).collect()
}

/// Reader collecting diagnostics, with the given buffer capacity
pub fn make_reader(input: &[u8], cap: usize) -> TestReader {
    ReaderBuilder::new()
        .capacity(cap)
        .diagnostics(Vec::<Diagnostic>::new())
        .from_reader(Cursor::new(input.to_vec()))
        .unwrap()
}

/// Runs a block with readers of different buffer capacities to make sure
/// that lines crossing buffer boundaries are handled.
#[macro_export]
macro_rules! test_reader {
    ($input:expr, $reader:ident, $block:block) => {
        for cap in 1..50 {
            if let Err(_) = std::panic::catch_unwind(|| {
                #[allow(unused_mut)]
                {
                    let mut $reader = common::make_reader(&$input, cap);
                    $block
                }
            }) {
                panic!("Reader failed at capacity {}", cap);
            }
        }
    };
}
