//! Error codes for data argument diagnostics.

use std::fmt;

/// Stable codes identifying each kind of data argument problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unterminated quoted item.
    ///
    /// An item was opened with `"` but the argument ended before the
    /// closing quote.
    E001,

    /// Unexpected character.
    ///
    /// Items must be separated by whitespace; a quote directly touching
    /// another item is rejected.
    E002,

    /// Invalid escape sequence.
    ///
    /// Only `\"`, `\\`, `\n`, `\r` and `\t` are recognized inside quotes.
    E003,

    /// Empty file reference.
    ///
    /// An `@` was not followed by a path.
    E004,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
        }
    }

    /// Short description used as the default label text.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated quoted item",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E004 => "empty file reference",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
