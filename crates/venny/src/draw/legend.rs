//! The legend box listing one color swatch and name per set.

use svg::node::element as svg_element;

use venny_core::{
    color::Color,
    geometry::{Point, Size},
    layout::{HAlign, VAlign},
};

use crate::draw::{Drawable, LayeredOutput, RenderLayer, Text, TextDefinition};

/// A boxed list of `(swatch, name)` rows.
///
/// The position passed to [`Drawable::render_to_layers`] is the top-left
/// corner of the box.
#[derive(Debug, Clone)]
pub struct Legend<'a> {
    entries: Vec<(&'a str, Color)>,
    text: TextDefinition,
}

impl<'a> Legend<'a> {
    /// Creates a legend whose names use the font of `text`.
    pub fn new(entries: Vec<(&'a str, Color)>, text: &TextDefinition) -> Self {
        let text = text
            .clone()
            .with_color(None)
            .with_alignment(HAlign::Left, VAlign::Center);
        Self { entries, text }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn padding(&self) -> f32 {
        self.text.font_size() * 0.5
    }

    fn swatch_size(&self) -> f32 {
        self.text.font_size() * 0.8
    }

    fn row_height(&self) -> f32 {
        self.text.line_height()
    }

    fn max_name_width(&self) -> f32 {
        self.entries
            .iter()
            .map(|(name, _)| Text::new(&self.text, name).calculate_size().width())
            .fold(0.0, f32::max)
    }
}

impl Drawable for Legend<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.is_empty() {
            return output;
        }

        let size = self.size();
        let frame = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "white")
            .set("fill-opacity", 0.8)
            .set("stroke", "#cccccc")
            .set("rx", 3.0);
        output.add_to_layer(RenderLayer::Background, Box::new(frame));

        let padding = self.padding();
        let swatch = self.swatch_size();
        let row_height = self.row_height();

        for (index, (name, color)) in self.entries.iter().enumerate() {
            let row_center = position.y() + padding + row_height * (index as f32 + 0.5);

            let rect = svg_element::Rectangle::new()
                .set("x", position.x() + padding)
                .set("y", row_center - swatch / 2.0)
                .set("width", swatch)
                .set("height", swatch)
                .set("fill", color.to_hex())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Content, Box::new(rect));

            let label_position = Point::new(position.x() + padding * 2.0 + swatch, row_center);
            output.merge(Text::new(&self.text, name).render_to_layers(label_position));
        }

        output
    }

    fn size(&self) -> Size {
        if self.is_empty() {
            return Size::default();
        }
        let padding = self.padding();
        Size::new(
            padding * 3.0 + self.swatch_size() + self.max_name_width(),
            padding * 2.0 + self.row_height() * self.entries.len() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(&'static str, Color)> {
        vec![
            ("apples", Color::new("green").unwrap()),
            ("pears", Color::new("yellow").unwrap()),
        ]
    }

    #[test]
    fn test_empty_legend_renders_nothing() {
        let legend = Legend::new(Vec::new(), &TextDefinition::new());
        assert!(legend.render_to_layers(Point::default()).is_empty());
        assert_eq!(legend.size(), Size::default());
    }

    #[test]
    fn test_legend_grows_with_entries() {
        let text = TextDefinition::new();
        let one = Legend::new(entries()[..1].to_vec(), &text);
        let two = Legend::new(entries(), &text);

        assert!(two.size().height() > one.size().height());
        assert!(one.size().width() > 0.0);
    }

    #[test]
    fn test_legend_layers() {
        let legend = Legend::new(entries(), &TextDefinition::new());
        let output = legend.render_to_layers(Point::new(5.0, 5.0));

        // Frame, then a swatch and a name per entry
        assert_eq!(output.len(), 5);

        let rendered: Vec<String> = output.render().iter().map(|node| node.to_string()).collect();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[2].contains("apples"));
        assert!(rendered[2].contains("pears"));
    }
}
