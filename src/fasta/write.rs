use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use super::record::{SequenceRecord, DEFAULT_WRAP};
use crate::error::Result;
use crate::letter::{LetterCode, SeqType};

/// Writes only the header line: `>` + ID + space + description.
#[inline]
pub fn write_head<W>(mut writer: W, id: &str, desc: &str) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(b">")?;
    writer.write_all(id.as_bytes())?;
    writer.write_all(b" ")?;
    writer.write_all(desc.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes the sequence and wraps the output to a maximum width specified
/// by `wrap` (a width of 0 is treated as 1).
#[inline]
pub fn write_wrap_seq<W, S>(mut writer: W, seq: S, wrap: usize) -> io::Result<()>
where
    W: io::Write,
    S: IntoIterator<Item = char>,
{
    let wrap = wrap.max(1);
    let mut n_line = 0;
    let mut buf = [0; 4];
    for symbol in seq {
        if n_line == wrap {
            writer.write_all(b"\n")?;
            n_line = 0;
        }
        writer.write_all(symbol.encode_utf8(&mut buf).as_bytes())?;
        n_line += 1;
    }
    writer.write_all(b"\n")
}

/// FASTA writer.
///
/// Sequences are wrapped at 70 characters by default, records are separated
/// by an empty line.
///
/// # Example
///
/// ```
/// use fasta_codes::fasta::Writer;
///
/// let mut writer = Writer::with_wrap(vec![], 4);
/// writer.write_raw(">id1 desc", "ACGTAC\nGT").unwrap();
/// writer.write_raw("id2", "MKV").unwrap();
///
/// assert_eq!(
///     writer.into_inner(),
///     b">id1 desc\nACGT\nACGT\n\n>id2 \nMKV\n"
/// );
/// ```
pub struct Writer<W: io::Write> {
    writer: W,
    wrap: usize,
    num_written: u64,
}

impl<W: io::Write> Writer<W> {
    /// Creates a writer wrapping sequences at the default width of 70.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self::with_wrap(writer, DEFAULT_WRAP)
    }

    /// Creates a writer with the given line width (0 is treated as 1).
    #[inline]
    pub fn with_wrap(writer: W, wrap: usize) -> Self {
        Writer {
            writer,
            wrap: wrap.max(1),
            num_written: 0,
        }
    }

    #[inline]
    pub fn wrap(&self) -> usize {
        self.wrap
    }

    /// Number of records written so far
    #[inline]
    pub fn num_written(&self) -> u64 {
        self.num_written
    }

    /// Writes a record.
    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        if self.num_written > 0 {
            self.writer.write_all(b"\n")?;
        }
        write_head(&mut self.writer, record.id(), record.description())?;
        write_wrap_seq(
            &mut self.writer,
            record.iter().map(LetterCode::symbol),
            self.wrap,
        )?;
        self.num_written += 1;
        Ok(())
    }

    /// Writes a header line (with or without leading `>`) and a sequence.
    /// Line breaks are removed from the sequence, which must not be empty.
    pub fn write_raw(&mut self, head: &str, seq: &str) -> Result<()> {
        let seq: String = seq.split(|c| c == '\n' || c == '\r').collect();
        let record = SequenceRecord::new(head, &seq, SeqType::Unknown, false)?;
        self.write_record(&record)
    }

    /// Writes all records of an iterator.
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a SequenceRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    #[inline]
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Writer<BufWriter<File>> {
    /// Creates (or truncates) the file at the given path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Writer::new(BufWriter::new(file)))
    }
}
