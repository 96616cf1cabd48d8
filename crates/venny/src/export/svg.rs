//! SVG export of Venn diagrams.
//!
//! The document is `figsize × dpi` pixels. Axis space is fitted into a plot
//! area inside fixed margins; the legend box sits right of that area.

mod viewport;

use std::{fs, path::Path};

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use venny_core::{
    color::{Color, default_palette},
    geometry::{Point, Size},
    layout::{HAlign, VAlign},
};

use crate::{
    Diagram,
    config::StyleConfig,
    draw::{Drawable, EllipseShape, LayeredOutput, Legend, RenderLayer, Text, TextDefinition},
    export::{Error, Exporter},
};

pub use viewport::Viewport;

/// Gap between the plot area and the legend box, in font sizes.
const LEGEND_GAP: f32 = 0.5;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    style: StyleConfig,
    colors: Vec<Color>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Sets the fill colors per set. Sets beyond the list use the default
    /// palette.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            style: self.style,
            colors: self.colors,
        }
    }
}

/// SVG exporter.
#[derive(Debug)]
pub struct Svg {
    style: StyleConfig,
    colors: Vec<Color>,
}

impl Svg {
    fn set_color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_else(|| {
            let palette = default_palette();
            palette[index % palette.len()]
        })
    }

    /// Canvas size in pixels for `diagram`.
    pub fn canvas_size(&self, diagram: &Diagram) -> Size {
        self.style
            .figsize(diagram.layout().figsize())
            .scale(self.style.dpi())
    }

    /// Font size in pixels.
    fn font_px(&self) -> f32 {
        self.style.fontsize() * self.style.dpi() / 72.0
    }

    fn render_sets(&self, diagram: &Diagram, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for (index, ellipse) in diagram.layout().ellipses().iter().enumerate() {
            let radii = Size::new(
                viewport.scale(ellipse.width()) / 2.0,
                viewport.scale(ellipse.height()) / 2.0,
            );
            let shape = EllipseShape::new(radii, ellipse.angle(), self.set_color(index));
            output.merge(shape.render_to_layers(viewport.to_canvas(ellipse.center())));
        }
        output
    }

    fn render_region_labels(
        &self,
        diagram: &Diagram,
        viewport: &Viewport,
        text: &TextDefinition,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for anchor in diagram.layout().anchors() {
            let label = diagram.label(anchor.pattern());
            let position = viewport.to_canvas(anchor.position());
            output.merge(Text::new(text, label).render_to_layers(position));
        }
        output
    }

    fn render_set_names(
        &self,
        diagram: &Diagram,
        viewport: &Viewport,
        text: &TextDefinition,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let entries = diagram.layout().legend().iter().zip(diagram.names());
        for (index, (anchor, name)) in entries.enumerate() {
            let definition = text
                .clone()
                .with_color(Some(self.set_color(index).with_alpha(1.0)))
                .with_alignment(anchor.h_align(), anchor.v_align());
            let position = viewport.to_canvas(anchor.position());
            output.merge(Text::new(&definition, name).render_to_layers(position));
        }
        output
    }

    fn render_legend(
        &self,
        diagram: &Diagram,
        viewport: &Viewport,
        canvas: Size,
        text: &TextDefinition,
    ) -> LayeredOutput {
        let entries = diagram
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), self.set_color(index)))
            .collect();
        let legend = Legend::new(entries, text);
        let size = legend.size();

        let gap = text.font_size() * LEGEND_GAP;
        let x = (viewport.plot_right() + gap)
            .min(canvas.width() - size.width() - gap)
            .max(0.0);
        let y = ((canvas.height() - size.height()) / 2.0).max(0.0);
        debug!(x, y, width = size.width(), height = size.height(); "Placed legend");

        legend.render_to_layers(Point::new(x, y))
    }

    /// Builds the SVG document for `diagram`.
    pub fn render_document(&self, diagram: &Diagram) -> Result<Document, Error> {
        let canvas = self.canvas_size(diagram);
        if !(canvas.width().is_finite() && canvas.height().is_finite())
            || canvas.width() <= 0.0
            || canvas.height() <= 0.0
        {
            return Err(Error::Render(format!(
                "invalid canvas size {}x{}, check figsize and dpi",
                canvas.width(),
                canvas.height()
            )));
        }
        let font_px = self.font_px();
        if !font_px.is_finite() || font_px <= 0.0 {
            return Err(Error::Render(format!("invalid font size {font_px}")));
        }

        let viewport = Viewport::fit(diagram.layout().extent(), canvas);
        debug!(
            width = canvas.width(),
            height = canvas.height(),
            font_px;
            "Rendering diagram"
        );

        let text = TextDefinition::new()
            .with_font_size(font_px)
            .with_alignment(HAlign::Center, VAlign::Center);

        let mut output = LayeredOutput::new();
        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", "white");
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        output.merge(self.render_sets(diagram, &viewport));
        output.merge(self.render_region_labels(diagram, &viewport, &text));
        output.merge(self.render_set_names(diagram, &viewport, &text));
        output.merge(self.render_legend(diagram, &viewport, canvas, &text));

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, canvas.width(), canvas.height()))
            .set("width", canvas.width())
            .set("height", canvas.height());
        for node in output.render() {
            document = document.add(node);
        }

        Ok(document)
    }

    /// Renders `diagram` and writes it to `path`.
    pub fn write_document(&self, diagram: &Diagram, path: &Path) -> Result<(), Error> {
        let content = self.export_diagram(diagram)?;
        fs::write(path, content)?;
        info!(path = path.display().to_string(); "SVG exported");
        Ok(())
    }
}

impl Exporter for Svg {
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error> {
        Ok(self.render_document(diagram)?.to_string())
    }
}
