//! FASTA reading and writing
//!
//! # Example
//!
//! The following example reads all records, prints some information and
//! writes them back, wrapped at 60 characters.
//!
//! ```rust
//! use fasta_codes::fasta::{ReaderBuilder, Writer};
//! use fasta_codes::SeqType;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), fasta_codes::Error> {
//! let seq = b">id1 some description
//! ACGTTG
//! GCAT
//!
//! >id2
//! SSWW
//! ";
//!
//! let mut reader = ReaderBuilder::new()
//!     .seq_type(SeqType::Nucleotide)
//!     .from_reader(Cursor::new(&seq[..]))?;
//!
//! let mut writer = Writer::with_wrap(vec![], 60);
//!
//! for result in reader.sequences() {
//!     let rec = result?;
//!     println!(
//!         "ID: '{}', description: '{}', GC: {:.1}%",
//!         rec.id(),
//!         rec.description(),
//!         rec.gc_content(true)?
//!     );
//!     writer.write_record(&rec.complement()?)?;
//! }
//!
//! assert_eq!(
//!     writer.into_inner(),
//!     b">id1 some description\nTGCAACCGTA\n\n>id2 \nSSWW\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Record types
//!
//! * [`SequenceRecord`](SequenceRecord) stores the sequence as
//!   [`LetterCode`](crate::LetterCode) objects, classified according to the
//!   sequence type. This is what [`Reader::sequences()`](Reader::sequences)
//!   returns.
//! * [`QuickRecord`](QuickRecord) only contains the header line and the
//!   sequence text, without any validation. Reading is much faster
//!   ([`Reader::quick_records()`](Reader::quick_records)).
//!
//! [`Reader::records()`](Reader::records) returns one or the other, depending
//! on the configured [`ParseMode`](ParseMode).
//!
//! # Details on parsing and writing
//!
//! * Header lines start with `>`. The ID is separated from the description
//!   by the first stretch of whitespace.
//! * Whitespace at the start and end of each line is removed. This includes
//!   `\r`, so Windows (CRLF) line endings are handled.
//! * Empty lines are allowed anywhere in the file, they are ignored.
//! * Anything before the first header line is ignored.
//! * A header which is not followed by a sequence line (another header or
//!   the end of the input) is skipped, and a
//!   [`Diagnostic::MissingSequence`](crate::diagnostics::Diagnostic::MissingSequence)
//!   is reported.
//! * Invalid UTF-8 results in an error of kind
//!   [`ErrorKind::InvalidUtf8`](crate::ErrorKind::InvalidUtf8), after which
//!   iteration stops.
//! * [`Writer`](Writer) always writes `>` + ID + space + description,
//!   even if the description is empty, and separates records with an
//!   empty line.

mod reader;
mod record;
mod write;

pub mod parser;

pub use self::reader::*;
pub use self::record::*;
pub use self::write::*;
