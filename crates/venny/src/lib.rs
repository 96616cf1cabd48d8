//! Venny - Venn diagrams for two to four sets.
//!
//! Splits the input sets into their exclusive regions, labels every region
//! and renders the result to SVG using a fixed layout per set count.

pub mod config;
pub mod draw;

mod diagram;
mod error;
mod export;
mod input;

pub use venny_core::{
    Annotation, Annotations, Decomposition, Labels, Pattern, color, decompose, geometry, layout,
    pattern,
};

pub use diagram::{DEFAULT_NAMES, Diagram};
pub use error::VennyError;

use std::{hash::Hash, path::Path};

use log::{debug, info, trace};

use venny_core::layout_for;

use config::AppConfig;
use export::Exporter;

/// Builder for decomposing sets and rendering Venn diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use venny::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let first = builder.parse_data("apple pear plum").expect("Failed to parse");
/// let second = builder.parse_data("plum cherry").expect("Failed to parse");
///
/// let diagram = builder
///     .build([first, second], ["fruit", "stone fruit"])
///     .expect("Failed to build");
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse one data argument into set elements.
    ///
    /// Items are separated by whitespace; `"..."` quotes an item and
    /// `@path` reads one item per non-empty line of a file.
    ///
    /// # Errors
    ///
    /// Returns `VennyError::Parse` for malformed input and
    /// `VennyError::DataFile` for unreadable files.
    pub fn parse_data(&self, source: &str) -> Result<Vec<String>, VennyError> {
        input::parse_data(source)
    }

    /// Decompose `sets` and bind the region labels to the layout for their
    /// count.
    ///
    /// Labels contain what the configured `fill` selects. Missing set names
    /// default to `A` to `D`.
    ///
    /// # Errors
    ///
    /// Returns `VennyError::Layout` unless there are 2, 3 or 4 sets.
    pub fn build<T, I, S, N, M>(&self, sets: I, names: N) -> Result<Diagram, VennyError>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        N: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let sets: Vec<S> = sets.into_iter().collect();
        let set_count = sets.len();
        info!(set_count; "Building diagram");

        // Reject unsupported counts before doing any work
        layout_for(set_count)?;

        let decomposition = Decomposition::new(sets)?;
        debug!(union_len = decomposition.union_len(); "Sets decomposed");

        let labels = decomposition.labels(self.config.fill());
        trace!(labels:?; "Region labels");

        let diagram = Diagram::new(set_count, labels, names)?;
        Ok(diagram)
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `VennyError::Config` for invalid colors and
    /// `VennyError::Export` when the configured canvas cannot be drawn.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, VennyError> {
        let exporter = self.svg_exporter(diagram)?;
        let svg = exporter.export_diagram(diagram)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram and write it to `path`.
    ///
    /// # Errors
    ///
    /// As [`DiagramBuilder::render_svg`], plus `VennyError::Io` when the file
    /// cannot be written.
    pub fn export_svg(&self, diagram: &Diagram, path: impl AsRef<Path>) -> Result<(), VennyError> {
        let exporter = self.svg_exporter(diagram)?;
        exporter.write_document(diagram, path.as_ref())?;
        Ok(())
    }

    fn svg_exporter(&self, diagram: &Diagram) -> Result<export::svg::Svg, VennyError> {
        let style = self.config.style();
        let colors = style
            .colors(diagram.set_count())
            .map_err(VennyError::Config)?;

        Ok(export::svg::SvgBuilder::new()
            .with_style(style)
            .with_colors(colors)
            .build())
    }
}
