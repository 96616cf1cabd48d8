//! Turning data arguments into set elements.

use std::{fs, path::PathBuf};

use log::{debug, info};

use venny_parser::DataItem;

use crate::VennyError;

/// Parses a data argument and resolves its file references.
///
/// Each `@path` item is replaced by the lines of that file, trimmed, with
/// blank lines skipped. Relative paths are resolved against the working
/// directory.
///
/// # Errors
///
/// Returns [`VennyError::Parse`] for malformed arguments and
/// [`VennyError::DataFile`] when a referenced file cannot be read.
pub fn parse_data(source: &str) -> Result<Vec<String>, VennyError> {
    let items =
        venny_parser::parse(source).map_err(|err| VennyError::new_parse_error(err, source))?;

    let mut elements = Vec::with_capacity(items.len());
    for item in items {
        match item {
            DataItem::Element { value, .. } => elements.push(value),
            DataItem::File { path, .. } => {
                let path = PathBuf::from(path);
                info!(path = path.display().to_string(); "Reading data file");
                let content = fs::read_to_string(&path)
                    .map_err(|err| VennyError::DataFile { path, err })?;
                elements.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_owned),
                );
            }
        }
    }

    debug!(element_count = elements.len(); "Resolved data argument");
    Ok(elements)
}
