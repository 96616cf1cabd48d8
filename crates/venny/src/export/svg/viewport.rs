//! Mapping from axis space onto the SVG canvas.

use venny_core::geometry::{Point, Size};

/// Fraction of the canvas kept free on each side of the plot area.
const MARGIN_LEFT: f32 = 0.125;
const MARGIN_RIGHT: f32 = 0.1;
const MARGIN_BOTTOM: f32 = 0.11;
const MARGIN_TOP: f32 = 0.12;

/// Uniform scaling of axis space into the plot area of a canvas.
///
/// Both axes use the same scale so ellipses keep their aspect ratio. The
/// scaled drawing is centered inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas position of axis point `(0, 0)`
    origin: Point,
    scale: f32,
    plot_right: f32,
}

impl Viewport {
    /// Fits an axis range of size `extent` into `canvas`.
    pub fn fit(extent: Size, canvas: Size) -> Self {
        let plot_left = canvas.width() * MARGIN_LEFT;
        let plot_right = canvas.width() * (1.0 - MARGIN_RIGHT);
        let plot_top = canvas.height() * MARGIN_TOP;
        let plot_bottom = canvas.height() * (1.0 - MARGIN_BOTTOM);

        let plot_width = plot_right - plot_left;
        let plot_height = plot_bottom - plot_top;
        let scale = (plot_width / extent.width()).min(plot_height / extent.height());

        let content = extent.scale(scale);
        let origin = Point::new(
            plot_left + (plot_width - content.width()) / 2.0,
            plot_top + (plot_height + content.height()) / 2.0,
        );

        Self {
            origin,
            scale,
            plot_right,
        }
    }

    /// Converts an axis-space point (Y up) into canvas pixels (Y down).
    pub fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            self.origin.x() + point.x() * self.scale,
            self.origin.y() - point.y() * self.scale,
        )
    }

    /// Converts an axis-space length into pixels.
    pub fn scale(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Right edge of the plot area in canvas pixels.
    pub fn plot_right(&self) -> f32 {
        self.plot_right
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_square_extent_on_square_canvas() {
        let viewport = Viewport::fit(Size::new(1.0, 1.0), Size::new(1000.0, 1000.0));

        // Plot area is 775 wide and 770 high, so height limits the scale
        assert_approx_eq!(f32, viewport.scale(1.0), 770.0, epsilon = 1e-3);

        let bottom_left = viewport.to_canvas(Point::new(0.0, 0.0));
        let top_right = viewport.to_canvas(Point::new(1.0, 1.0));
        assert_approx_eq!(f32, bottom_left.y(), 890.0, epsilon = 1e-3);
        assert_approx_eq!(f32, top_right.y(), 120.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bottom_left.x(), 127.5, epsilon = 1e-3);
        assert_approx_eq!(f32, top_right.x(), 897.5, epsilon = 1e-3);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let viewport = Viewport::fit(Size::new(1.0, 0.7), Size::new(864.0, 672.0));
        let low = viewport.to_canvas(Point::new(0.5, 0.1));
        let high = viewport.to_canvas(Point::new(0.5, 0.6));
        assert!(high.y() < low.y());
    }

    #[test]
    fn test_drawing_stays_inside_plot_area() {
        let canvas = Size::new(864.0, 672.0);
        let viewport = Viewport::fit(Size::new(1.0, 0.7), canvas);

        let bottom_left = viewport.to_canvas(Point::new(0.0, 0.0));
        let top_right = viewport.to_canvas(Point::new(1.0, 0.7));
        assert!(bottom_left.x() >= canvas.width() * MARGIN_LEFT - 1e-3);
        assert!(top_right.x() <= viewport.plot_right() + 1e-3);
        assert!(top_right.y() >= canvas.height() * MARGIN_TOP - 1e-3);
        assert!(bottom_left.y() <= canvas.height() * (1.0 - MARGIN_BOTTOM) + 1e-3);
    }
}
