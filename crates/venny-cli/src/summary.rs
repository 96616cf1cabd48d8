//! Plain-text region summary printed to the terminal.

use std::io::{self, Write};

use venny::{Diagram, Pattern};

const HEADERS: [&str; 3] = ["Region", "Sets", "Label"];

/// Writes one row per region: its pattern, the sets it lies inside and its
/// label.
pub fn write_summary(writer: &mut impl Write, diagram: &Diagram) -> io::Result<()> {
    let rows: Vec<[String; 3]> = Pattern::all(diagram.set_count())
        .map(|pattern| {
            [
                pattern.to_string(),
                diagram.member_names(pattern).join(" & "),
                diagram.label(pattern).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &HEADERS, &widths)?;
    let rule = widths.map(|width| "-".repeat(width));
    write_row(writer, &rule, &widths)?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row(writer: &mut impl Write, cells: &[impl AsRef<str>], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())
}
