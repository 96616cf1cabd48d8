//! Text labels and text measurement.
//!
//! [`Text`] renders one line of text anchored at a point, aligned as
//! described by its [`TextDefinition`]. Measurement goes through a process
//! wide `cosmic-text` font system that is created on first use.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, warn};
use svg::{node::Text as SvgText, node::element as svg_element};

use venny_core::{
    color::Color,
    geometry::{Point, Size},
    layout::{HAlign, VAlign},
};

use crate::draw::{Drawable, LayeredOutput, RenderLayer};

/// Visual style of a text element.
///
/// Font sizes are in pixels.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Option<Color>,
    h_align: HAlign,
    v_align: VAlign,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Sets the fill color. `None` leaves the SVG default (black).
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Sets which side of the text touches the anchor point.
    pub fn with_alignment(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn h_align(&self) -> HAlign {
        self.h_align
    }

    pub fn v_align(&self) -> VAlign {
        self.v_align
    }

    /// Height of one line of text.
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.15
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
            color: None,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
        }
    }
}

fn text_anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn dominant_baseline(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "hanging",
        VAlign::Center => "central",
        VAlign::Bottom => "text-after-edge",
    }
}

/// One line of text with its style.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Measures the rendered size of the text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new(self.content)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", text_anchor(self.definition.h_align()))
            .set(
                "dominant-baseline",
                dominant_baseline(self.definition.v_align()),
            )
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_hex())
                .set("fill-opacity", color.alpha());
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Shared font system for text measurement.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Estimate used when shaping produced no layout runs.
    fn estimate_text_size(text: &str, text_def: &TextDefinition) -> Size {
        let font_size_px = text_def.font_size();
        Size::new(
            text.chars().count() as f32 * (font_size_px * 0.55),
            text_def.line_height(),
        )
    }

    /// Measures `text` in pixels using real font metrics.
    ///
    /// Falls back to [`TextManager::estimate_text_size`] when no font can
    /// shape the text.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let Ok(mut font_system) = self.font_system.lock() else {
            warn!("FontSystem lock is poisoned, estimating text size");
            return Self::estimate_text_size(text, text_def);
        };

        let font_size_px = text_def.font_size();
        let metrics = Metrics::new(font_size_px, text_def.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match text_def.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let attrs = Attrs::new().family(family);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut run_count = 0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            run_count += 1;
        }

        if run_count == 0 || max_width <= 0.0 {
            return Self::estimate_text_size(text, text_def);
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_approx_eq!(f32, def.font_size(), 14.0);
        assert!(def.color().is_none());
        assert_eq!(def.h_align(), HAlign::Center);
        assert_eq!(def.v_align(), VAlign::Center);
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_positive() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "Hello World").calculate_size();
        assert!(size.width() > 0.0, "Width should be positive");
        assert!(size.height() > 0.0, "Height should be positive");
    }

    #[test]
    fn test_larger_font_is_taller() {
        let small = TextDefinition::new().with_font_size(12.0);
        let large = TextDefinition::new().with_font_size(24.0);

        let small_size = Text::new(&small, "Test").calculate_size();
        let large_size = Text::new(&large, "Test").calculate_size();

        assert!(
            large_size.height() > small_size.height(),
            "Larger font height ({}) should be greater than smaller font ({})",
            large_size.height(),
            small_size.height()
        );
    }

    #[test]
    fn test_render_alignment_attributes() {
        let def = TextDefinition::new()
            .with_alignment(HAlign::Right, VAlign::Bottom)
            .with_color(Some(Color::new("red").unwrap()));
        let output = Text::new(&def, "Set A").render_to_layers(Point::new(10.0, 20.0));

        let rendered: String = output.render().iter().map(|node| node.to_string()).collect();
        assert!(rendered.contains(r#"text-anchor="end""#), "{rendered}");
        assert!(rendered.contains(r#"dominant-baseline="text-after-edge""#));
        assert!(rendered.contains(r##"fill="#ff0000""##));
        assert!(rendered.contains("Set A"));
        assert!(rendered.contains(r#"data-layer="text""#));
    }

    #[test]
    fn test_estimate_scales_with_length() {
        let def = TextDefinition::new().with_font_size(10.0);
        let size = TextManager::estimate_text_size("abcd", &def);
        assert_approx_eq!(f32, size.width(), 22.0, epsilon = 1e-4);
        assert_approx_eq!(f32, size.height(), 11.5, epsilon = 1e-4);
    }
}
