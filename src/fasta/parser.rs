//! Line based state machine assembling FASTA records.

/// Header and concatenated sequence of a record, as found in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Header line including `>`
    pub head: String,
    /// Sequence lines concatenated
    pub seq: String,
    /// Index (0-based) of the header line
    pub line: u64,
    /// Byte offset of the header line
    pub byte: u64,
}

/// Result of feeding a line to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A record was completed by the current header line.
    Record(RawRecord),
    /// A header without any sequence line was followed by another header.
    /// The previous header is returned, the new one is pending.
    Skipped(RawRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No header found yet
    Seeking,
    /// Header found, collecting sequence lines
    InRecord,
}

/// Assembles records from a sequence of lines, which must already have
/// been stripped of surrounding whitespace.
///
/// * Lines before the first header are ignored.
/// * Empty lines are ignored anywhere.
/// * A header line completes the previous record.
/// * At the end of the input, [`finish`](LineParser::finish) returns the
///   last record, or `Event::Skipped` if the last header has no sequence.
///
/// ```
/// use fasta_codes::fasta::parser::{Event, LineParser};
///
/// let mut parser = LineParser::new();
/// assert!(parser.push_line(">id1", 0, 0).is_none());
/// assert!(parser.push_line("ACGT", 1, 5).is_none());
/// assert!(parser.push_line("", 2, 10).is_none());
/// assert!(parser.push_line("ACGT", 3, 11).is_none());
/// let rec = match parser.push_line(">id2", 4, 16) {
///     Some(Event::Record(r)) => r,
///     _ => unreachable!(),
/// };
/// assert_eq!((rec.head.as_str(), rec.seq.as_str()), (">id1", "ACGTACGT"));
/// // `>id2` has no sequence
/// assert!(matches!(parser.finish(), Some(Event::Skipped(r)) if r.head == ">id2"));
/// assert!(parser.finish().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LineParser {
    state: State,
    pending: RawRecord,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    #[inline]
    pub fn new() -> Self {
        LineParser {
            state: State::Seeking,
            pending: RawRecord::default(),
        }
    }

    /// Feeds one stripped line with its line index and byte offset.
    pub fn push_line(&mut self, line: &str, line_idx: u64, byte: u64) -> Option<Event> {
        let is_head = line.starts_with('>');
        match self.state {
            State::Seeking => {
                if is_head {
                    self.start_record(line, line_idx, byte);
                    self.state = State::InRecord;
                }
                None
            }
            State::InRecord => {
                if is_head {
                    let prev = std::mem::take(&mut self.pending);
                    self.start_record(line, line_idx, byte);
                    if prev.seq.is_empty() {
                        return Some(Event::Skipped(prev));
                    }
                    return Some(Event::Record(prev));
                }
                self.pending.seq.push_str(line);
                None
            }
        }
    }

    /// Signals the end of the input and returns the last record. If the
    /// last header has no sequence, it is returned as `Event::Skipped`.
    pub fn finish(&mut self) -> Option<Event> {
        if self.state == State::Seeking {
            return None;
        }
        self.state = State::Seeking;
        let last = std::mem::take(&mut self.pending);
        if last.seq.is_empty() {
            return Some(Event::Skipped(last));
        }
        Some(Event::Record(last))
    }

    #[inline]
    fn start_record(&mut self, head: &str, line_idx: u64, byte: u64) {
        self.pending.head.push_str(head);
        self.pending.line = line_idx;
        self.pending.byte = byte;
    }
}
