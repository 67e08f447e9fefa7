//! Single letter codes and sequence types.

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{Error, ErrorKind, Result};
use crate::tables;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of a sequence (or of a single letter code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeqType {
    /// No information available
    #[default]
    Unknown,
    Nucleotide,
    AminoAcid,
}

impl SeqType {
    #[inline]
    pub fn is_known(self) -> bool {
        self != SeqType::Unknown
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            SeqType::Unknown => "unknown",
            SeqType::Nucleotide => "nucleotide",
            SeqType::AminoAcid => "aminoacid",
        }
    }
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeqType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(SeqType::Unknown),
            "nucleotide" => Ok(SeqType::Nucleotide),
            "aminoacid" => Ok(SeqType::AminoAcid),
            _ => Err(Error::invalid_argument(format!(
                "sequence type must be one of: nucleotide, aminoacid, unknown (found '{}')",
                s
            ))),
        }
    }
}

/// Tries to infer the sequence type of a raw sequence.
///
/// Returns `Some(SeqType::AminoAcid)` as soon as a letter code is found that
/// can only represent an amino acid, `None` otherwise. Nucleotide sequences
/// cannot be recognized this way: all nucleotide codes are also valid amino
/// acid codes.
///
/// ```
/// use fasta_codes::{infer_seq_type, SeqType};
///
/// assert_eq!(infer_seq_type("ACGTNNACGT"), None);
/// assert_eq!(infer_seq_type("MKVLE"), Some(SeqType::AminoAcid));
/// ```
pub fn infer_seq_type(seq: &str) -> Option<SeqType> {
    seq.chars()
        .map(|c| c.to_ascii_uppercase())
        .any(tables::is_aminoacid_only)
        .then_some(SeqType::AminoAcid)
}

/// A single upper case letter code, classified according to a sequence type.
///
/// If the sequence type is known and the symbol is found in the
/// corresponding standard or degenerate table, the letter code is
/// *supported* and has a description. Symbols not found in any table
/// are still accepted, but reported as
/// [`Diagnostic::UnknownSymbol`](crate::diagnostics::Diagnostic::UnknownSymbol).
///
/// ```
/// use fasta_codes::{LetterCode, SeqType};
///
/// let code = LetterCode::new('s', SeqType::Nucleotide);
/// assert_eq!(code.symbol(), 'S');
/// assert_eq!(code.description(), "strong (G/C)");
/// assert_eq!(code.degenerate(), Some(true));
/// assert!(code.supported());
/// assert_eq!(code.complement().unwrap(), 'S');
/// ```
#[derive(Debug, Clone)]
pub struct LetterCode {
    symbol: char,
    seq_type: SeqType,
    description: &'static str,
    degenerate: Option<bool>,
    supported: bool,
}

impl LetterCode {
    /// Creates a new letter code, reporting unknown symbols to the
    /// default [`LogSink`](crate::diagnostics::LogSink).
    #[inline]
    pub fn new(symbol: char, seq_type: SeqType) -> Self {
        Self::with_diagnostics(symbol, seq_type, LogSink)
    }

    /// Creates a new letter code, reporting unknown symbols to `diag`.
    pub fn with_diagnostics<D>(symbol: char, seq_type: SeqType, mut diag: D) -> Self
    where
        D: DiagnosticSink,
    {
        let symbol = symbol.to_ascii_uppercase();
        if !tables::is_known(symbol) {
            diag.report(Diagnostic::UnknownSymbol { symbol });
        }
        Self::classified(symbol, seq_type)
    }

    /// Parses a letter code from a string, which must consist of exactly
    /// one character.
    pub fn parse(code: &str, seq_type: SeqType) -> Result<Self> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::new(c, seq_type)),
            _ => Err(Error::invalid_argument(format!(
                "letter code must be exactly one character long (found '{}')",
                code
            ))),
        }
    }

    // no reporting, `symbol` is already upper case
    fn classified(symbol: char, seq_type: SeqType) -> Self {
        let mut code = LetterCode {
            symbol,
            seq_type: SeqType::Unknown,
            description: "",
            degenerate: None,
            supported: false,
        };
        code.set_seq_type(seq_type);
        code
    }

    /// The upper case symbol
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn seq_type(&self) -> SeqType {
        self.seq_type
    }

    /// Description / name of the code. Empty if the letter code is not
    /// supported.
    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// `None` if the letter code is not supported.
    #[inline]
    pub fn degenerate(&self) -> Option<bool> {
        self.degenerate
    }

    /// `true` if the sequence type is known and the symbol is defined for it.
    #[inline]
    pub fn supported(&self) -> bool {
        self.supported
    }

    /// Changes the sequence type, updating description, degeneracy and
    /// support accordingly.
    pub fn set_seq_type(&mut self, seq_type: SeqType) {
        self.seq_type = seq_type;
        match tables::lookup(seq_type, self.symbol) {
            Some((desc, degenerate)) => {
                self.description = desc;
                self.degenerate = Some(degenerate);
                self.supported = true;
            }
            None => {
                self.description = "";
                self.degenerate = None;
                self.supported = false;
            }
        }
    }

    /// Returns the complementary nucleotide.
    ///
    /// Fails with `ErrorKind::InvalidOperation` if the sequence type
    /// is not `SeqType::Nucleotide`.
    pub fn complement(&self) -> Result<LetterCode> {
        if self.seq_type != SeqType::Nucleotide {
            return Err(Error::invalid_operation("complement", self.seq_type));
        }
        let symbol = tables::complement(self.symbol).ok_or_else(|| {
            Error::new(ErrorKind::NoComplement {
                symbol: self.symbol,
            })
        })?;
        Ok(Self::classified(symbol, self.seq_type))
    }
}

impl PartialEq for LetterCode {
    #[inline]
    fn eq(&self, other: &LetterCode) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for LetterCode {}

impl PartialEq<char> for LetterCode {
    #[inline]
    fn eq(&self, other: &char) -> bool {
        self.symbol == other.to_ascii_uppercase()
    }
}

impl PartialEq<str> for LetterCode {
    fn eq(&self, other: &str) -> bool {
        let mut chars = other.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => *self == c,
            _ => false,
        }
    }
}

impl<'a> PartialEq<&'a str> for LetterCode {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}

impl fmt::Display for LetterCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type() {
        let code = LetterCode::new('a', SeqType::Unknown);
        assert_eq!(code.symbol(), 'A');
        assert!(!code.supported());
        assert_eq!(code.degenerate(), None);
        assert_eq!(code.description(), "");
    }

    #[test]
    fn reclassify() {
        let mut code = LetterCode::new('E', SeqType::Nucleotide);
        assert!(!code.supported());
        code.set_seq_type(SeqType::AminoAcid);
        assert!(code.supported());
        assert_eq!(code.description(), "glutamate");
        assert_eq!(code.degenerate(), Some(false));
    }

    #[test]
    fn seq_type_names() {
        assert_eq!("aminoacid".parse::<SeqType>().unwrap(), SeqType::AminoAcid);
        assert_eq!("Nucleotide".parse::<SeqType>().unwrap(), SeqType::Nucleotide);
        assert!("protein".parse::<SeqType>().is_err());
        assert_eq!(SeqType::AminoAcid.to_string(), "aminoacid");
    }

    #[test]
    fn infer_lower_case() {
        assert_eq!(infer_seq_type("acgtl"), Some(SeqType::AminoAcid));
        assert_eq!(infer_seq_type("acgt-"), None);
        assert_eq!(infer_seq_type(""), None);
    }
}
