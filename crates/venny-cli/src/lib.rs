//! CLI logic for the Venny diagram tool.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! the data arguments, building the diagram and writing the SVG and the
//! region summary.

pub mod error_adapter;

mod args;
mod config;
mod summary;

pub use args::Args;

use std::io::{self, Write};

use log::{debug, info};

use venny::{DiagramBuilder, VennyError};

/// Number of data arguments a diagram can be drawn for.
const SET_COUNTS: std::ops::RangeInclusive<usize> = 2..=4;

/// Run the Venny CLI application, printing the summary to stdout.
///
/// # Errors
///
/// See [`run_with_writer`].
pub fn run(args: &Args) -> Result<(), VennyError> {
    let stdout = io::stdout();
    run_with_writer(args, &mut stdout.lock())
}

/// Run the Venny CLI application, printing the summary to `writer`.
///
/// # Errors
///
/// Returns `VennyError` for:
/// - A number of data arguments other than 2, 3 or 4
/// - Configuration loading errors
/// - Malformed data arguments or unreadable data files
/// - Rendering and file I/O errors
pub fn run_with_writer(args: &Args, writer: &mut impl Write) -> Result<(), VennyError> {
    info!(
        set_count = args.data.len(),
        output_path:? = args.output;
        "Processing sets"
    );

    if !SET_COUNTS.contains(&args.data.len()) {
        return Err(VennyError::Config(format!(
            "expected 2 to 4 `--data` arguments, got {}",
            args.data.len()
        )));
    }

    let mut app_config = config::load_config(args.config.as_ref())?;
    if !args.fill.is_empty() {
        app_config = app_config.with_fill(args.fill.iter().copied().collect());
    }
    debug!(fill:% = app_config.fill(); "Label contents selected");

    let builder = DiagramBuilder::new(app_config);
    let sets = args
        .data
        .iter()
        .map(|data| builder.parse_data(data))
        .collect::<Result<Vec<_>, _>>()?;

    let diagram = builder.build(sets, args.name.iter().cloned())?;

    if let Some(output) = &args.output {
        builder.export_svg(&diagram, output)?;
        info!(output_file = output; "SVG exported successfully");
    }

    if !args.no_show {
        summary::write_summary(writer, &diagram)?;
    }

    Ok(())
}
