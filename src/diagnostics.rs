//! Non-fatal findings reported while building letter codes and reading files.
//!
//! Construction never fails because of a symbol that is not part of the
//! FASTA letter code tables. Instead, a [`Diagnostic`](Diagnostic) is handed
//! to a [`DiagnosticSink`](DiagnosticSink). The default sink,
//! [`LogSink`](LogSink), forwards everything to the [`log`](https://docs.rs/log)
//! facade at *warn* level. Diagnostics can also be collected into a
//! `Vec<Diagnostic>` or dropped with [`Silent`](Silent).
//!
//! # Example
//!
//! ```
//! use fasta_codes::{SequenceRecord, SeqType};
//! use fasta_codes::diagnostics::Diagnostic;
//!
//! let mut found: Vec<Diagnostic> = vec![];
//! let rec = SequenceRecord::with_diagnostics(">id", "ACJT", SeqType::Nucleotide, false, &mut found)
//!     .unwrap();
//!
//! assert_eq!(found, vec![Diagnostic::UnknownSymbol { symbol: 'J' }]);
//! assert!(!rec.symbols()[2].supported());
//! ```

use std::fmt;

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The symbol is not defined in any of the letter code tables.
    UnknownSymbol { symbol: char },
    /// A header line was not followed by any sequence line, the header
    /// was skipped.
    MissingSequence {
        /// The header line, including `>`
        head: String,
        /// Line number of the header (1-based)
        line: u64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnknownSymbol { symbol } => write!(
                f,
                "'{}' is not a valid letter code",
                symbol.escape_default()
            ),
            Diagnostic::MissingSequence { head, line } => write!(
                f,
                "header '{}' at line {} has no sequence, record skipped",
                head, line
            ),
        }
    }
}

/// Receiver of diagnostics
///
/// # Example
///
/// ```
/// use fasta_codes::diagnostics::{Diagnostic, DiagnosticSink};
///
/// // Counts unknown symbols and ignores everything else
/// struct CountUnknown(usize);
///
/// impl DiagnosticSink for CountUnknown {
///     fn report(&mut self, diag: Diagnostic) {
///         if let Diagnostic::UnknownSymbol { .. } = diag {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait DiagnosticSink {
    fn report(&mut self, diag: Diagnostic);
}

/// Standard sink: emits every diagnostic as a `log::warn!` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    #[inline]
    fn report(&mut self, diag: Diagnostic) {
        log::warn!("{}", diag);
    }
}

/// Drops all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    #[inline]
    fn report(&mut self, _: Diagnostic) {}
}

/// Collects diagnostics in order of occurrence.
impl DiagnosticSink for Vec<Diagnostic> {
    #[inline]
    fn report(&mut self, diag: Diagnostic) {
        self.push(diag);
    }
}

impl<'a, S: DiagnosticSink + ?Sized> DiagnosticSink for &'a mut S {
    #[inline]
    fn report(&mut self, diag: Diagnostic) {
        (**self).report(diag)
    }
}
