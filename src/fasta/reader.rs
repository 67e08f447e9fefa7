use std::fs::File;
use std::io::{self, BufRead, Seek, SeekFrom};
use std::path::Path;
use std::str::{self, FromStr};

use memchr::memchr;

use super::parser::{Event, LineParser, RawRecord};
use super::record::{QuickRecord, SequenceRecord};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{Error, ErrorKind, Result};
use crate::letter::SeqType;
use crate::Position;

/// The default initial buffer size for readers.
pub const BUFSIZE: usize = 64 * 1024;

/// Determines what kind of records are produced by
/// [`Reader::records()`](Reader::records).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// [`SequenceRecord`](super::SequenceRecord) with classified letter codes
    #[default]
    Rich,
    /// [`QuickRecord`](super::QuickRecord), only header and sequence text,
    /// no validation.
    Quick,
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rich" => Ok(ParseMode::Rich),
            "quick" => Ok(ParseMode::Quick),
            _ => Err(Error::invalid_argument(format!(
                "parse mode must be one of: rich, quick (found '{}')",
                s
            ))),
        }
    }
}

/// Record returned by [`Reader::records()`](Reader::records), depending on
/// the [`ParseMode`](ParseMode).
#[derive(Debug, Clone)]
pub enum Entry {
    Rich(SequenceRecord),
    Quick(QuickRecord),
}

impl Entry {
    #[inline]
    pub fn as_rich(&self) -> Option<&SequenceRecord> {
        match self {
            Entry::Rich(r) => Some(r),
            Entry::Quick(_) => None,
        }
    }

    #[inline]
    pub fn as_quick(&self) -> Option<&QuickRecord> {
        match self {
            Entry::Quick(r) => Some(r),
            Entry::Rich(_) => None,
        }
    }

    #[inline]
    pub fn into_rich(self) -> Option<SequenceRecord> {
        match self {
            Entry::Rich(r) => Some(r),
            Entry::Quick(_) => None,
        }
    }

    #[inline]
    pub fn into_quick(self) -> Option<QuickRecord> {
        match self {
            Entry::Quick(r) => Some(r),
            Entry::Rich(_) => None,
        }
    }

    /// ID part of the header
    #[inline]
    pub fn id(&self) -> &str {
        match self {
            Entry::Rich(r) => r.id(),
            Entry::Quick(r) => r.id(),
        }
    }
}

/// Streaming FASTA reader.
///
/// The reader does not keep any record in memory. Each call to
/// [`records()`](Reader::records), [`sequences()`](Reader::sequences) or
/// [`quick_records()`](Reader::quick_records) rewinds the input and starts
/// parsing from the beginning with a fresh parser state. The iterators
/// borrow the reader mutably, so two passes can never interfere.
///
/// Headers without sequence are skipped and reported as
/// [`Diagnostic::MissingSequence`](crate::diagnostics::Diagnostic::MissingSequence).
///
/// # Example
///
/// ```
/// use fasta_codes::fasta::ReaderBuilder;
/// use fasta_codes::SeqType;
/// use std::io::Cursor;
///
/// let fasta = b">seq1 desc\nACGT\nACGT\n\n>seq2\nMKVLE\n";
///
/// let mut reader = ReaderBuilder::new()
///     .infer_type(true)
///     .from_reader(Cursor::new(&fasta[..]))
///     .unwrap();
///
/// let types: Vec<_> = reader.sequences()
///     .map(|r| r.unwrap().seq_type())
///     .collect();
/// assert_eq!(types, vec![SeqType::Unknown, SeqType::AminoAcid]);
///
/// // the same reader can be iterated again
/// let ids: Vec<_> = reader.quick_records()
///     .map(|r| r.unwrap().head)
///     .collect();
/// assert_eq!(ids, vec![">seq1 desc", ">seq2"]);
/// ```
pub struct Reader<R, D = LogSink>
where
    R: io::Read,
{
    buffer: buffer_redux::BufReader<R>,
    seq_type: SeqType,
    infer_type: bool,
    parse_mode: ParseMode,
    diagnostics: D,
}

impl<R> Reader<R>
where
    R: io::Read + Seek,
{
    /// Creates a new reader with the default configuration: rich parsing
    /// without type inference and unknown sequence type. Fails if the
    /// input cannot be positioned at its start.
    #[inline]
    pub fn new(reader: R) -> Result<Self> {
        ReaderBuilder::new().from_reader(reader)
    }
}

impl Reader<File> {
    /// Creates a reader from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<File>> {
        ReaderBuilder::new().from_path(path)
    }
}

impl<R, D> Reader<R, D>
where
    R: io::Read + Seek,
    D: DiagnosticSink,
{
    /// Returns a reader with the given diagnostic sink.
    #[inline]
    pub fn set_diagnostics<T: DiagnosticSink>(self, diagnostics: T) -> Reader<R, T> {
        Reader {
            buffer: self.buffer,
            seq_type: self.seq_type,
            infer_type: self.infer_type,
            parse_mode: self.parse_mode,
            diagnostics,
        }
    }

    /// Sequence type applied to every rich record
    #[inline]
    pub fn seq_type(&self) -> SeqType {
        self.seq_type
    }

    #[inline]
    pub fn infer_type(&self) -> bool {
        self.infer_type
    }

    #[inline]
    pub fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    #[inline]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    #[inline]
    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    /// Returns a reference to the underlying reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        self.buffer.get_ref()
    }

    /// Returns the underlying reader. Buffered data is lost.
    #[inline]
    pub fn into_inner(self) -> R {
        self.buffer.into_inner()
    }

    #[inline]
    fn rewind(&mut self) -> io::Result<()> {
        self.buffer.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Returns an iterator over all records, which are either
    /// [`SequenceRecord`](super::SequenceRecord) or
    /// [`QuickRecord`](super::QuickRecord), depending on the parse mode.
    #[inline]
    pub fn records(&mut self) -> Records<R, D> {
        Records {
            mode: self.parse_mode,
            inner: RawRecords::new(self),
        }
    }

    /// Returns an iterator over [`SequenceRecord`](super::SequenceRecord)
    /// regardless of the parse mode.
    #[inline]
    pub fn sequences(&mut self) -> Sequences<R, D> {
        Sequences {
            inner: RawRecords::new(self),
        }
    }

    /// Returns an iterator over [`QuickRecord`](super::QuickRecord)
    /// regardless of the parse mode.
    #[inline]
    pub fn quick_records(&mut self) -> QuickRecords<R, D> {
        QuickRecords {
            inner: RawRecords::new(self),
        }
    }
}

/// Allows building a [`Reader`](Reader) with various configuration options.
///
/// ```no_run
/// use fasta_codes::fasta::{ParseMode, ReaderBuilder};
/// use fasta_codes::diagnostics::Silent;
/// use fasta_codes::SeqType;
///
/// let mut reader = ReaderBuilder::new()
///     .seq_type(SeqType::Nucleotide)
///     .parse_mode(ParseMode::Rich)
///     .diagnostics(Silent)
///     .from_path("seqs.fasta")
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReaderBuilder<D = LogSink> {
    seq_type: SeqType,
    infer_type: bool,
    parse_mode: ParseMode,
    capacity: usize,
    diagnostics: D,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderBuilder {
    #[inline]
    pub fn new() -> Self {
        ReaderBuilder {
            seq_type: SeqType::Unknown,
            infer_type: false,
            parse_mode: ParseMode::Rich,
            capacity: BUFSIZE,
            diagnostics: LogSink,
        }
    }
}

impl<D> ReaderBuilder<D>
where
    D: DiagnosticSink,
{
    /// Sequence type of all records (default: `SeqType::Unknown`)
    #[inline]
    pub fn seq_type(mut self, seq_type: SeqType) -> Self {
        self.seq_type = seq_type;
        self
    }

    /// Try to recognize amino acid sequences if the sequence type is
    /// unknown (default: `false`)
    #[inline]
    pub fn infer_type(mut self, infer_type: bool) -> Self {
        self.infer_type = infer_type;
        self
    }

    #[inline]
    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    /// Initial buffer capacity in bytes (default: 64 KiB)
    #[inline]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[inline]
    pub fn diagnostics<T: DiagnosticSink>(self, diagnostics: T) -> ReaderBuilder<T> {
        ReaderBuilder {
            seq_type: self.seq_type,
            infer_type: self.infer_type,
            parse_mode: self.parse_mode,
            capacity: self.capacity,
            diagnostics,
        }
    }

    /// Creates the reader, positioning the input at its start.
    pub fn from_reader<R>(self, reader: R) -> Result<Reader<R, D>>
    where
        R: io::Read + Seek,
    {
        let mut rdr = Reader {
            buffer: buffer_redux::BufReader::with_capacity(self.capacity.max(1), reader),
            seq_type: self.seq_type,
            infer_type: self.infer_type,
            parse_mode: self.parse_mode,
            diagnostics: self.diagnostics,
        };
        rdr.rewind()?;
        Ok(rdr)
    }

    /// Opens the file at the given path and creates the reader.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<Reader<File, D>> {
        let file = File::open(path)?;
        self.from_reader(file)
    }
}

/// Reads a line including the terminator into `line`.
/// Returns the number of bytes read (0 at the end of the input).
fn read_line<B: BufRead>(rdr: &mut B, line: &mut Vec<u8>) -> io::Result<usize> {
    let mut num_read = 0;
    loop {
        let (done, used) = {
            let available = match rdr.fill_buf() {
                Ok(buf) => buf,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            match memchr(b'\n', available) {
                Some(pos) => {
                    line.extend_from_slice(&available[..=pos]);
                    (true, pos + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (available.is_empty(), available.len())
                }
            }
        };
        rdr.consume(used);
        num_read += used;
        if done {
            return Ok(num_read);
        }
    }
}

/// Drives the line parser, shared by all record iterators.
struct RawRecords<'a, R, D>
where
    R: io::Read,
{
    rdr: &'a mut Reader<R, D>,
    parser: LineParser,
    line: Vec<u8>,
    line_idx: u64,
    byte: u64,
    num_records: u64,
    position: Option<Position>,
    started: bool,
    finished: bool,
}

impl<'a, R, D> RawRecords<'a, R, D>
where
    R: io::Read + Seek,
    D: DiagnosticSink,
{
    #[inline]
    fn new(rdr: &'a mut Reader<R, D>) -> Self {
        RawRecords {
            rdr,
            parser: LineParser::new(),
            line: vec![],
            line_idx: 0,
            byte: 0,
            num_records: 0,
            position: None,
            started: false,
            finished: false,
        }
    }

    fn next_event(&mut self) -> Result<Option<Event>> {
        if !self.started {
            self.started = true;
            self.rdr.rewind()?;
        }
        self.line.clear();
        let n = read_line(&mut self.rdr.buffer, &mut self.line)?;
        if n == 0 {
            self.finished = true;
            return Ok(self.parser.finish());
        }
        let text = str::from_utf8(&self.line).map_err(|_| {
            let mut pos = Position::new();
            pos.set_line(self.line_idx)
                .set_byte(self.byte)
                .set_record(self.num_records);
            Error::new(ErrorKind::InvalidUtf8 { pos })
        })?;
        let event = self.parser.push_line(text.trim(), self.line_idx, self.byte);
        self.line_idx += 1;
        self.byte += n as u64;
        Ok(event)
    }

    fn next_raw(&mut self) -> Option<Result<RawRecord>> {
        while !self.finished {
            let event = match self.next_event() {
                Ok(e) => e,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            match event {
                Some(Event::Record(raw)) => {
                    let mut pos = Position::new();
                    pos.set_line(raw.line)
                        .set_byte(raw.byte)
                        .set_record(self.num_records);
                    self.position = Some(pos);
                    self.num_records += 1;
                    return Some(Ok(raw));
                }
                Some(Event::Skipped(raw)) => {
                    self.rdr.diagnostics.report(Diagnostic::MissingSequence {
                        head: raw.head,
                        line: raw.line + 1,
                    });
                }
                None => {}
            }
        }
        None
    }

    fn next_rich(&mut self) -> Option<Result<SequenceRecord>> {
        let raw = try_opt!(self.next_raw()?);
        let rdr = &mut *self.rdr;
        Some(SequenceRecord::with_diagnostics(
            &raw.head,
            &raw.seq,
            rdr.seq_type,
            rdr.infer_type,
            &mut rdr.diagnostics,
        ))
    }

    fn next_quick(&mut self) -> Option<Result<QuickRecord>> {
        let raw = try_opt!(self.next_raw()?);
        Some(Ok(QuickRecord {
            head: raw.head,
            seq: raw.seq,
        }))
    }
}

macro_rules! impl_records_iter {
    ($name:ident, $Item:ty, $next:ident, $doc:expr) => {
        #[doc = $doc]
        pub struct $name<'a, R, D = LogSink>
        where
            R: io::Read,
        {
            inner: RawRecords<'a, R, D>,
        }

        impl<'a, R, D> $name<'a, R, D>
        where
            R: io::Read + Seek,
            D: DiagnosticSink,
        {
            /// Returns the position of the last returned record, or `None`
            /// if no record was returned yet.
            #[inline]
            pub fn position(&self) -> Option<&Position> {
                self.inner.position.as_ref()
            }
        }

        impl<'a, R, D> Iterator for $name<'a, R, D>
        where
            R: io::Read + Seek,
            D: DiagnosticSink,
        {
            type Item = Result<$Item>;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.$next()
            }
        }
    };
}

impl_records_iter!(
    Sequences,
    SequenceRecord,
    next_rich,
    "Iterator over [`SequenceRecord`](super::SequenceRecord), see [`Reader::sequences()`](Reader::sequences)"
);
impl_records_iter!(
    QuickRecords,
    QuickRecord,
    next_quick,
    "Iterator over [`QuickRecord`](super::QuickRecord), see [`Reader::quick_records()`](Reader::quick_records)"
);

/// Iterator over [`Entry`](Entry), see [`Reader::records()`](Reader::records)
pub struct Records<'a, R, D = LogSink>
where
    R: io::Read,
{
    mode: ParseMode,
    inner: RawRecords<'a, R, D>,
}

impl<'a, R, D> Records<'a, R, D>
where
    R: io::Read + Seek,
    D: DiagnosticSink,
{
    /// Returns the position of the last returned record, or `None`
    /// if no record was returned yet.
    #[inline]
    pub fn position(&self) -> Option<&Position> {
        self.inner.position.as_ref()
    }
}

impl<'a, R, D> Iterator for Records<'a, R, D>
where
    R: io::Read + Seek,
    D: DiagnosticSink,
{
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.mode {
            ParseMode::Rich => self.inner.next_rich().map(|r| r.map(Entry::Rich)),
            ParseMode::Quick => self.inner.next_quick().map(|r| r.map(Entry::Quick)),
        }
    }
}
