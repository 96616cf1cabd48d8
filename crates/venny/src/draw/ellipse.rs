//! Filled set ellipses.

use svg::node::element as svg_element;

use venny_core::{
    color::Color,
    geometry::{Point, Size},
};

use crate::draw::{Drawable, LayeredOutput, RenderLayer};

/// A filled, rotated ellipse in canvas coordinates.
///
/// `angle` is in degrees, counter-clockwise as seen on screen. The
/// position passed to [`Drawable::render_to_layers`] is the center.
#[derive(Debug, Clone, Copy)]
pub struct EllipseShape {
    radii: Size,
    angle: f32,
    fill: Color,
}

impl EllipseShape {
    pub fn new(radii: Size, angle: f32, fill: Color) -> Self {
        Self { radii, angle, fill }
    }

    pub fn radii(&self) -> Size {
        self.radii
    }

    pub fn fill(&self) -> Color {
        self.fill
    }
}

impl Drawable for EllipseShape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", self.radii.width())
            .set("ry", self.radii.height())
            .set("fill", self.fill.to_hex())
            .set("fill-opacity", self.fill.alpha())
            .set("stroke", "none");

        // SVG rotates clockwise because its Y axis points down
        if self.angle != 0.0 {
            ellipse = ellipse.set(
                "transform",
                format!("rotate({} {} {})", -self.angle, position.x(), position.y()),
            );
        }

        output.add_to_layer(RenderLayer::Content, Box::new(ellipse));
        output
    }

    /// Size of the axis-aligned bounding box.
    fn size(&self) -> Size {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let rx = self.radii.width();
        let ry = self.radii.height();
        Size::new(
            2.0 * (rx * cos).hypot(ry * sin),
            2.0 * (rx * sin).hypot(ry * cos),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn green() -> Color {
        Color::from_rgba(92.0 / 255.0, 192.0 / 255.0, 98.0 / 255.0, 0.5)
    }

    #[test]
    fn test_render_attributes() {
        let shape = EllipseShape::new(Size::new(40.0, 20.0), 40.0, green());
        let rendered: String = shape
            .render_to_layers(Point::new(100.0, 50.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains(r#"data-layer="content""#));
        assert!(rendered.contains(r#"cx="100""#), "{rendered}");
        assert!(rendered.contains(r#"rx="40""#));
        assert!(rendered.contains(r##"fill="#5cc062""##));
        assert!(rendered.contains(r#"fill-opacity="0.5""#));
        assert!(rendered.contains(r#"transform="rotate(-40 100 50)""#));
    }

    #[test]
    fn test_unrotated_ellipse_has_no_transform() {
        let shape = EllipseShape::new(Size::new(10.0, 10.0), 0.0, green());
        let rendered: String = shape
            .render_to_layers(Point::new(0.0, 0.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert!(!rendered.contains("transform"));
    }

    #[test]
    fn test_bounding_box() {
        let flat = EllipseShape::new(Size::new(40.0, 20.0), 0.0, green());
        assert_approx_eq!(f32, flat.size().width(), 80.0, epsilon = 1e-4);
        assert_approx_eq!(f32, flat.size().height(), 40.0, epsilon = 1e-4);

        let upright = EllipseShape::new(Size::new(40.0, 20.0), 90.0, green());
        assert_approx_eq!(f32, upright.size().width(), 40.0, epsilon = 1e-3);
        assert_approx_eq!(f32, upright.size().height(), 80.0, epsilon = 1e-3);
    }
}
