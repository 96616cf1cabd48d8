//! Drawing primitives for the SVG renderer.
//!
//! Each primitive implements [`Drawable`] and renders itself into a
//! [`LayeredOutput`] in canvas coordinates (pixels, Y pointing down).

mod ellipse;
mod layer;
mod legend;
mod text;

pub use ellipse::EllipseShape;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use legend::Legend;
pub use text::{Text, TextDefinition};

use venny_core::geometry::{Point, Size};

/// Something that can be rendered at a canvas position.
pub trait Drawable {
    /// Renders the drawable anchored at `position`.
    ///
    /// What the position means (center, top-left, text anchor) is up to the
    /// implementor.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The size the drawable occupies on the canvas.
    fn size(&self) -> Size;
}
