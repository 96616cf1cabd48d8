//! miette rendering for [`VennyError`].
//!
//! Data argument diagnostics carry their own source snippet, so a
//! [`VennyError::Parse`] holding several of them is reported once per
//! diagnostic.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity, SourceSpan};
use thiserror::Error;

use venny::VennyError;
use venny_parser::error::Diagnostic;

/// One lexer diagnostic together with the data argument it points into.
#[derive(Debug)]
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diag.code()?;
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(if self.diag.severity().is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diag.help()?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`VennyError`] with no position to point at.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ErrorAdapter<'a>(pub &'a VennyError);

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            VennyError::Io(_) => "venny::io",
            VennyError::Parse { .. } => return None,
            VennyError::DataFile { .. } => "venny::data_file",
            VennyError::Layout(_) => "venny::layout",
            VennyError::Decompose(_) => "venny::decompose",
            VennyError::Config(_) => "venny::config",
            VennyError::Export(_) => "venny::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            VennyError::Layout(_) => "pass two, three or four `--data` arguments",
            VennyError::DataFile { .. } => "paths after `@` are relative to the working directory",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

#[derive(Debug, Error, MietteDiagnostic)]
pub enum Reportable<'a> {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Diagnostic(DiagnosticAdapter<'a>),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Error(ErrorAdapter<'a>),
}

/// Split `err` into the reports to print, in order.
pub fn to_reportables(err: &VennyError) -> Vec<Reportable<'_>> {
    match err {
        VennyError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic(DiagnosticAdapter::new(diag, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
