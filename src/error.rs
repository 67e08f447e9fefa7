use crate::letter::SeqType;
use crate::Position;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by record construction, letter code operations
/// and the FASTA reader / writer.
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`
    Io(io::Error),
    /// An argument has the wrong shape, e.g. a letter code that is not
    /// exactly one character long.
    InvalidArgument { msg: String },
    /// The operation is only defined for another sequence type
    /// (e.g. complementing an amino acid sequence).
    InvalidOperation {
        /// Name of the operation
        op: &'static str,
        /// Sequence type of the record / letter code
        seq_type: SeqType,
    },
    /// A sequence record must contain at least one symbol.
    EmptySequence,
    /// Slicing a record resulted in an empty sequence.
    EmptySlice {
        start: usize,
        end: usize,
    },
    /// The nucleotide letter code has no defined complement.
    NoComplement { symbol: char },
    /// A line of the input is not valid UTF-8.
    InvalidUtf8 {
        /// Position of the offending line (`Position::record()` refers
        /// to the record being read).
        pos: Position,
    },
}

impl ErrorKind {
    /// Returns the position for this error, if one exists.
    pub fn position(&self) -> Option<&Position> {
        match self {
            ErrorKind::InvalidUtf8 { pos } => Some(pos),
            _ => None,
        }
    }
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }

    #[inline]
    pub(crate) fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::new(ErrorKind::InvalidArgument { msg: msg.into() })
    }

    #[inline]
    pub(crate) fn invalid_operation(op: &'static str, seq_type: SeqType) -> Self {
        Error::new(ErrorKind::InvalidOperation { op, seq_type })
    }

    /// Returns a reference to the [`ErrorKind`](ErrorKind)
    /// associated with the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [`ErrorKind`](ErrorKind) associated with
    /// the error, thereby consuming the error.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }

    /// Returns the position of the error within the input, if known.
    #[inline]
    pub fn position(&self) -> Option<&Position> {
        self.kind().position()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::InvalidArgument { msg } => write!(f, "invalid argument: {}", msg),
            ErrorKind::InvalidOperation { op, seq_type } => write!(
                f,
                "{} only works with nucleotide sequences (sequence type: {})",
                op, seq_type
            ),
            ErrorKind::EmptySequence => write!(f, "sequence must not be empty"),
            ErrorKind::EmptySlice { start, end } => write!(
                f,
                "slice {}..{} resulted in an empty sequence",
                start, end
            ),
            ErrorKind::NoComplement { symbol } => write!(
                f,
                "letter code '{}' has no complement",
                symbol.escape_default()
            ),
            ErrorKind::InvalidUtf8 { pos } => {
                write!(f, "FASTA parse error: invalid UTF-8 ({}).", pos)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::Io(e))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err.into_kind() {
            ErrorKind::Io(e) => e,
            kind => io::Error::new(io::ErrorKind::InvalidData, Error::new(kind)),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}
