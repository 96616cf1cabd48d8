//! # Venny Parser
//!
//! Parses the data arguments of the `venny` command line into items.
//!
//! A data argument lists the elements of one set, separated by whitespace.
//! Elements containing whitespace are double-quoted, and `@path` refers to a
//! file holding one element per line.
//!
//! ## Usage
//!
//! ```
//! # use venny_parser::{DataItem, parse};
//! let items = parse(r#"apple "passion fruit" @more.txt"#).unwrap();
//!
//! assert_eq!(items.len(), 3);
//! assert!(matches!(&items[1], DataItem::Element { value, .. } if value == "passion fruit"));
//! assert!(matches!(&items[2], DataItem::File { path, .. } if path == "more.txt"));
//! ```

pub mod error;
mod lexer;
mod span;

use log::{debug, trace};

pub use error::ParseError;
pub use span::Span;

use lexer::Token;

/// One item of a data argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataItem {
    /// A literal element, with escapes resolved.
    Element { value: String, span: Span },
    /// A reference to a file listing elements, one per line.
    File { path: String, span: Span },
}

impl DataItem {
    /// Location of the item in the data argument, including quotes and `@`.
    pub fn span(&self) -> Span {
        match self {
            DataItem::Element { span, .. } | DataItem::File { span, .. } => *span,
        }
    }
}

/// Parse a data argument into its items.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every problem found in the argument.
pub fn parse(source: &str) -> Result<Vec<DataItem>, ParseError> {
    let tokens = lexer::tokenize(source)?;

    let items: Vec<DataItem> = tokens
        .into_iter()
        .filter_map(|positioned| match positioned.token {
            Token::Item(value) => Some(DataItem::Element {
                value,
                span: positioned.span,
            }),
            Token::FileRef(path) => Some(DataItem::File {
                path,
                span: positioned.span,
            }),
            Token::Whitespace => None,
        })
        .collect();

    debug!(item_count = items.len(); "Parsed data argument");
    trace!(items:?; "Data items");
    Ok(items)
}
