//! Diagnostics for data argument parsing.
//!
//! Every problem found while tokenizing a data argument becomes a
//! [`Diagnostic`] with a severity, an [`ErrorCode`], labeled spans and an
//! optional help line. The lexer keeps going after an error, so a single
//! [`ParseError`] can carry several diagnostics.
//!
//! # Example
//!
//! ```
//! # use venny_parser::error::{Diagnostic, ErrorCode};
//! # use venny_parser::Span;
//! let diag = Diagnostic::error("unterminated quoted item")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(4..9), "quote opened here")
//!     .with_help("add a closing `\"`");
//!
//! assert_eq!(diag.to_string(), "error[E001]: unterminated quoted item");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;

use std::fmt;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use label::Label;

/// One or more diagnostics produced while parsing a data argument.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}
