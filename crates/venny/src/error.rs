//! Error types for Venny operations.
//!
//! This module provides the main error type [`VennyError`] which wraps
//! various error conditions that can occur while reading set data, building
//! a diagram and exporting it.

use std::{io, path::PathBuf};

use thiserror::Error;

use venny_core::{DecomposeError, LayoutError};
use venny_parser::error::ParseError;

/// The main error type for Venny operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the data argument text next to the
/// structured diagnostics, so front ends can show source snippets.
#[derive(Debug, Error)]
pub enum VennyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Cannot read data file `{}`: {err}", .path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        err: io::Error,
    },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Decomposition error: {0}")]
    Decompose(#[from] DecomposeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for VennyError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Io(err) => Self::Io(err),
            other => Self::Export(Box::new(other)),
        }
    }
}

impl VennyError {
    /// Create a new `Parse` error with the associated data argument.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
