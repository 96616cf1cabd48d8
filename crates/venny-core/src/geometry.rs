//! Geometric primitives for layout tables and rendering.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Ellipse`] - A rotated ellipse described by center, diameters and angle
//!
//! # Coordinate System
//!
//! Layout tables are expressed in *axis space*, the unit-square coordinates
//! the diagrams were designed in:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **Y-axis**: Increases upward
//! - **Angles**: Degrees, counter-clockwise from the positive X axis
//!
//! The SVG renderer flips the Y axis when it maps axis space onto the canvas.

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use venny_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Rotates the point around the origin by `degrees`, counter-clockwise
    /// in a Y-up coordinate system.
    pub fn rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x.mul_add(cos, -self.y * sin),
            y: self.x.mul_add(sin, self.y * cos),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Multiplies both dimensions by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An ellipse with full diameters `width` and `height`, rotated by `angle`
/// degrees around its center.
///
/// Before rotation `width` runs along the X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point,
    width: f32,
    height: f32,
    angle: f32,
}

impl Ellipse {
    pub const fn new(center: Point, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Full diameter along the (unrotated) X axis.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Full diameter along the (unrotated) Y axis.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Returns `true` if `point` lies inside or on the boundary of the ellipse.
    ///
    /// Degenerate ellipses with a zero diameter contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        // Undo the rotation so the ellipse is axis aligned
        let local = point.sub_point(self.center).rotate(-self.angle);
        let u = local.x() / rx;
        let v = local.y() / ry;
        u.mul_add(u, v * v) <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_operations() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.add_point(Point::new(1.0, 1.0)), Point::new(4.0, 5.0));
        assert_eq!(p.sub_point(Point::new(1.0, 1.0)), Point::new(2.0, 3.0));
        assert_eq!(p.scale(2.0), Point::new(6.0, 8.0));
    }

    #[test]
    fn test_point_rotate_quarter_turn() {
        let rotated = Point::new(1.0, 0.0).rotate(90.0);
        assert_approx_eq!(f32, rotated.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, rotated.y(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_size_max_and_scale() {
        let size = Size::new(10.0, 2.0).max(Size::new(4.0, 8.0));
        assert_eq!(size, Size::new(10.0, 8.0));
        assert_eq!(size.scale(0.5), Size::new(5.0, 4.0));
    }

    #[test]
    fn test_ellipse_contains_axis_aligned() {
        let ellipse = Ellipse::new(Point::new(0.5, 0.5), 0.4, 0.2, 0.0);
        assert!(ellipse.contains(Point::new(0.5, 0.5)));
        assert!(ellipse.contains(Point::new(0.65, 0.5)));
        assert!(!ellipse.contains(Point::new(0.5, 0.65)));
        assert!(!ellipse.contains(Point::new(0.75, 0.5)));
    }

    #[test]
    fn test_ellipse_contains_rotated() {
        // Long axis turned onto the Y axis
        let ellipse = Ellipse::new(Point::new(0.0, 0.0), 0.4, 0.2, 90.0);
        assert!(ellipse.contains(Point::new(0.0, 0.15)));
        assert!(!ellipse.contains(Point::new(0.15, 0.0)));
    }

    #[test]
    fn test_degenerate_ellipse_contains_nothing() {
        let ellipse = Ellipse::new(Point::new(0.0, 0.0), 0.0, 1.0, 0.0);
        assert!(!ellipse.contains(Point::new(0.0, 0.0)));
    }
}
