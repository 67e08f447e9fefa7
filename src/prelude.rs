#[doc(no_inline)]
pub use crate::diagnostics::{Diagnostic, DiagnosticSink};
#[doc(no_inline)]
pub use crate::fasta::{Entry, ParseMode, QuickRecord, Reader, ReaderBuilder, SequenceRecord, Writer};
#[doc(no_inline)]
pub use crate::{LetterCode, SeqType};
