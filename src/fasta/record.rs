use std::cell::Cell;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::slice;

use serde_derive::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::{Error, ErrorKind, Result};
use crate::letter::{infer_seq_type, LetterCode, SeqType};

/// Default line width of formatted sequences
pub const DEFAULT_WRAP: usize = 70;

/// Splits a header line into ID and description at the first stretch of
/// whitespace. One leading `>` is removed from the ID.
///
/// ```
/// use fasta_codes::fasta::split_head;
///
/// assert_eq!(split_head(">id some  description"), ("id", "some  description"));
/// assert_eq!(split_head("id"), ("id", ""));
/// assert_eq!(split_head("> desc"), ("", "desc"));
/// assert_eq!(split_head(">"), ("", ""));
/// ```
pub fn split_head(head: &str) -> (&str, &str) {
    let head = head.trim_start();
    let (id, desc) = match head.find(char::is_whitespace) {
        Some(pos) => (&head[..pos], head[pos..].trim_start()),
        None => (head, ""),
    };
    (id.strip_prefix('>').unwrap_or(id), desc)
}

/// A FASTA record made of classified letter codes.
///
/// The sequence is never empty. Derived records (complement, slices) are
/// new instances, the only internal mutation is the caching of GC content
/// and AT/GC ratio, which are calculated on first use.
///
/// # Example
///
/// ```
/// use fasta_codes::{SequenceRecord, SeqType};
///
/// let rec = SequenceRecord::new(">id1 a description", "ACGTTA", SeqType::Nucleotide, false).unwrap();
/// assert_eq!(rec.id(), "id1");
/// assert_eq!(rec.description(), "a description");
/// assert_eq!(rec.complement().unwrap().sequence_string(), "TGCAAT");
/// assert_eq!(rec.gc_content(false).unwrap(), 2. / 6.);
/// assert_eq!(rec.formatted_body(4), "ACGT\nTA");
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    id: String,
    description: String,
    symbols: Vec<LetterCode>,
    seq_type: SeqType,
    type_inferred: bool,
    gc_content: Cell<Option<f64>>,
    at_gc_ratio: Cell<Option<f64>>,
}

impl SequenceRecord {
    /// Creates a new record from a header line (with or without leading `>`)
    /// and a sequence, which must not be empty. Unknown letter codes are
    /// reported to the default [`LogSink`](crate::diagnostics::LogSink).
    ///
    /// If `infer_type` is `true` and `seq_type` is `SeqType::Unknown`,
    /// the sequence is searched for letter codes only valid for amino acids
    /// before classifying the letter codes.
    #[inline]
    pub fn new(head: &str, seq: &str, seq_type: SeqType, infer_type: bool) -> Result<Self> {
        Self::with_diagnostics(head, seq, seq_type, infer_type, LogSink)
    }

    /// Like [`new`](SequenceRecord::new), but reports unknown letter codes
    /// to `diag`.
    pub fn with_diagnostics<D>(
        head: &str,
        seq: &str,
        seq_type: SeqType,
        infer_type: bool,
        mut diag: D,
    ) -> Result<Self>
    where
        D: DiagnosticSink,
    {
        if seq.is_empty() {
            return Err(Error::new(ErrorKind::EmptySequence));
        }

        // the type has to be known before classifying the letter codes
        let (seq_type, type_inferred) = match seq_type {
            SeqType::Unknown if infer_type => match infer_seq_type(seq) {
                Some(t) => (t, true),
                None => (SeqType::Unknown, false),
            },
            t => (t, false),
        };

        let symbols = seq
            .chars()
            .map(|c| LetterCode::with_diagnostics(c, seq_type, &mut diag))
            .collect();

        let (id, description) = split_head(head);
        Ok(Self::from_parts(
            id.to_string(),
            description.to_string(),
            symbols,
            seq_type,
            type_inferred,
        ))
    }

    fn from_parts(
        id: String,
        description: String,
        symbols: Vec<LetterCode>,
        seq_type: SeqType,
        type_inferred: bool,
    ) -> Self {
        debug_assert!(!symbols.is_empty());
        SequenceRecord {
            id,
            description,
            symbols,
            seq_type,
            type_inferred,
            gc_content: Cell::new(None),
            at_gc_ratio: Cell::new(None),
        }
    }

    /// ID part of the header (may be empty)
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Description part of the header (may be empty)
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn symbols(&self) -> &[LetterCode] {
        &self.symbols
    }

    #[inline]
    pub fn seq_type(&self) -> SeqType {
        self.seq_type
    }

    /// `true` if the sequence type was inferred from the letter codes
    #[inline]
    pub fn type_inferred(&self) -> bool {
        self.type_inferred
    }

    /// Number of letter codes
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`, records cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Changes the sequence type, reclassifying all letter codes.
    pub fn set_seq_type(&mut self, seq_type: SeqType) {
        for code in &mut self.symbols {
            code.set_seq_type(seq_type);
        }
        self.seq_type = seq_type;
        self.type_inferred = false;
        self.gc_content.set(None);
        self.at_gc_ratio.set(None);
    }

    /// Returns an iterator over the letter codes. Every call starts
    /// again from the first letter code.
    #[inline]
    pub fn iter(&self) -> slice::Iter<LetterCode> {
        self.symbols.iter()
    }

    /// Returns the sequence as `String`
    pub fn sequence_string(&self) -> String {
        self.symbols.iter().map(LetterCode::symbol).collect()
    }

    #[inline]
    fn require_nucleotide(&self, op: &'static str) -> Result<()> {
        if self.seq_type != SeqType::Nucleotide {
            return Err(Error::invalid_operation(op, self.seq_type));
        }
        Ok(())
    }

    /// Returns the complementary nucleotide sequence with the same header.
    pub fn complement(&self) -> Result<SequenceRecord> {
        self.require_nucleotide("complement")?;
        let symbols = self
            .symbols
            .iter()
            .map(LetterCode::complement)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(
            self.id.clone(),
            self.description.clone(),
            symbols,
            self.seq_type,
            false,
        ))
    }

    /// GC content of a nucleotide sequence. The ambiguous code `S`
    /// (G or C) is counted as well.
    pub fn gc_content(&self, as_percentage: bool) -> Result<f64> {
        self.require_nucleotide("GC content calculation")?;
        let ratio = match self.gc_content.get() {
            Some(r) => r,
            None => {
                let gc = self.symbols.iter().filter(|c| is_strong(c.symbol())).count();
                let r = gc as f64 / self.symbols.len() as f64;
                self.gc_content.set(Some(r));
                r
            }
        };
        Ok(if as_percentage { ratio * 100. } else { ratio })
    }

    /// AT/GC ratio of a nucleotide sequence. Of the degenerate codes,
    /// only `W` (A or T) and `S` (G or C) are counted. If there is no
    /// G, C or S, the ratio is `0`.
    pub fn at_gc_ratio(&self) -> Result<f64> {
        self.require_nucleotide("AT/GC ratio calculation")?;
        if let Some(r) = self.at_gc_ratio.get() {
            return Ok(r);
        }
        let (mut at, mut gc) = (0usize, 0usize);
        for code in &self.symbols {
            let s = code.symbol();
            if is_weak(s) {
                at += 1;
            } else if is_strong(s) {
                gc += 1;
            }
        }
        let r = if gc == 0 { 0. } else { at as f64 / gc as f64 };
        self.at_gc_ratio.set(Some(r));
        Ok(r)
    }

    /// Header line: `>` + ID + space + description
    pub fn formatted_header(&self) -> String {
        format!(">{} {}", self.id, self.description)
    }

    /// The sequence, wrapped to lines of `max_line_width` characters
    /// (without final line break). A width of 0 is treated as 1.
    pub fn formatted_body(&self, max_line_width: usize) -> String {
        let width = max_line_width.max(1);
        let mut out = String::with_capacity(self.symbols.len() + self.symbols.len() / width);
        for (i, line) in self.symbols.chunks(width).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter().map(LetterCode::symbol));
        }
        out
    }

    /// Header and sequence wrapped to [`DEFAULT_WRAP`](DEFAULT_WRAP) characters.
    pub fn formatted_record(&self) -> String {
        self.formatted_record_wrap(DEFAULT_WRAP)
    }

    /// Header and sequence wrapped to `max_line_width` characters.
    pub fn formatted_record_wrap(&self, max_line_width: usize) -> String {
        let mut out = self.formatted_header();
        out.push('\n');
        out.push_str(&self.formatted_body(max_line_width));
        out
    }

    /// Returns a new record containing the given range of letter codes.
    /// Out of range bounds are clamped to the sequence length. The
    /// description notes the range of the original sequence.
    ///
    /// ```
    /// use fasta_codes::{SequenceRecord, SeqType};
    ///
    /// let rec = SequenceRecord::new(">id", "ACGT", SeqType::Nucleotide, false).unwrap();
    /// let sliced = rec.slice(1..3).unwrap();
    /// assert_eq!(sliced.sequence_string(), "CG");
    /// assert_eq!(sliced.description(), "[SLICE OF ORIGINAL: 1..3]");
    /// assert!(rec.slice(2..2).is_err());
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<SequenceRecord> {
        let len = self.symbols.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        self.sliced(start, end, format!("{}..{}", start, end))
    }

    /// Returns a new record with only the letter code at `index`.
    pub fn get(&self, index: usize) -> Result<SequenceRecord> {
        let end = index.saturating_add(1).min(self.symbols.len());
        self.sliced(index.min(end), end, index.to_string())
    }

    fn sliced(&self, start: usize, end: usize, label: String) -> Result<SequenceRecord> {
        if start >= end {
            return Err(Error::new(ErrorKind::EmptySlice { start, end }));
        }
        let marker = format!("[SLICE OF ORIGINAL: {}]", label);
        let description = if self.description.is_empty() {
            marker
        } else {
            format!("{} {}", self.description, marker)
        };
        Ok(Self::from_parts(
            self.id.clone(),
            description,
            self.symbols[start..end].to_vec(),
            self.seq_type,
            false,
        ))
    }
}

#[inline]
fn is_strong(symbol: char) -> bool {
    matches!(symbol, 'G' | 'C' | 'S')
}

#[inline]
fn is_weak(symbol: char) -> bool {
    matches!(symbol, 'A' | 'T' | 'W')
}

impl<'a> IntoIterator for &'a SequenceRecord {
    type Item = &'a LetterCode;
    type IntoIter = slice::Iter<'a, LetterCode>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Header line and unwrapped sequence
impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, ">{} {}", self.id, self.description)?;
        for code in &self.symbols {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

/// An unvalidated FASTA record as returned by quick parsing: the header
/// line (including `>`) and the concatenated sequence lines.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRecord {
    pub head: String,
    pub seq: String,
}

impl QuickRecord {
    #[inline]
    pub fn new<H: Into<String>, S: Into<String>>(head: H, seq: S) -> Self {
        QuickRecord {
            head: head.into(),
            seq: seq.into(),
        }
    }

    /// ID part of the header
    #[inline]
    pub fn id(&self) -> &str {
        split_head(&self.head).0
    }

    /// Description part of the header
    #[inline]
    pub fn desc(&self) -> &str {
        split_head(&self.head).1
    }

    /// Converts the record into a [`SequenceRecord`](SequenceRecord).
    #[inline]
    pub fn to_sequence_record(&self, seq_type: SeqType, infer_type: bool) -> Result<SequenceRecord> {
        SequenceRecord::new(&self.head, &self.seq, seq_type, infer_type)
    }
}
