//! Diagram exporters.

pub mod svg;

use thiserror::Error;

use crate::Diagram;

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a [`Diagram`] into a document.
pub trait Exporter {
    /// Renders the whole document as a string.
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error>;
}
