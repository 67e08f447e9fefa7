//! This library reads and writes FASTA files and models the letter codes
//! found in nucleotide and amino acid sequences.
//!
//! Files are parsed as a stream: only one record is held in memory at a
//! time. Each record can be obtained either as a
//! [`SequenceRecord`](fasta::SequenceRecord), whose sequence consists of
//! classified [`LetterCode`](LetterCode)s, or as a lightweight
//! [`QuickRecord`](fasta::QuickRecord) containing only the header and
//! sequence text.
//!
//! # Example
//!
//! This code prints the ID and the GC content of each record in a
//! nucleotide FASTA file:
//!
//! ```no_run
//! use fasta_codes::fasta::ReaderBuilder;
//! use fasta_codes::SeqType;
//!
//! let mut reader = ReaderBuilder::new()
//!     .seq_type(SeqType::Nucleotide)
//!     .from_path("seqs.fasta")
//!     .unwrap();
//!
//! for result in reader.sequences() {
//!     let record = result.expect("Error reading record");
//!     println!("{}\t{:.2}", record.id(), record.gc_content(false).unwrap());
//! }
//! ```
//!
//! # Letter codes
//!
//! The letter codes of both nucleotide and amino acid sequences are defined
//! in the [`tables`](tables) module. Whether a symbol is *supported*, what it
//! stands for and whether it is *degenerate* (ambiguous) depends on the
//! [`SeqType`](SeqType). If the type is not known in advance, amino acid
//! sequences can be recognized by letter codes that have no nucleotide
//! meaning (see [`infer_seq_type`](infer_seq_type)).
//!
//! Symbols not found in any table do not cause errors, they are reported to
//! a [`DiagnosticSink`](diagnostics::DiagnosticSink) (by default the
//! [`log`](https://docs.rs/log) facade).
//!
//! # Iterating repeatedly
//!
//! The reader requires its input to implement `Seek`. Every call to
//! [`Reader::records()`](fasta::Reader::records) (or one of its typed
//! variants) starts reading from the beginning:
//!
//! ```
//! use fasta_codes::fasta::Reader;
//! use std::io::Cursor;
//!
//! let mut reader = Reader::new(Cursor::new(&b">id\nACGT\n"[..])).unwrap();
//! assert_eq!(reader.quick_records().count(), 1);
//! assert_eq!(reader.quick_records().count(), 1);
//! ```

extern crate buffer_redux;
extern crate memchr;

macro_rules! try_opt {
    ($expr: expr) => {
        match $expr {
            Ok(item) => item,
            Err(e) => return Some(Err(::std::convert::From::from(e))),
        }
    };
}

pub mod diagnostics;
mod error;
pub mod fasta;
mod letter;
mod position;
pub mod prelude;
pub mod tables;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::fasta::{QuickRecord, SequenceRecord};
pub use crate::letter::{infer_seq_type, LetterCode, SeqType};
pub use crate::position::Position;
