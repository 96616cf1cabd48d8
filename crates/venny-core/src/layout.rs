//! Static layout tables for two, three and four sets.
//!
//! Each [`LayoutTable`] places one ellipse per input set on a unit-wide
//! canvas, a label anchor for every region and a legend anchor for every set
//! name. Coordinates are in axis space (see [`crate::geometry`]).
//!
//! The tables are constant; [`layout_for`] only selects one.

use log::debug;
use thiserror::Error;

use crate::{
    geometry::{Ellipse, Point, Size},
    pattern::Pattern,
};

/// Errors produced when selecting a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("no layout for {0} sets, only 2, 3 or 4 sets can be drawn")]
    UnsupportedCardinality(usize),
}

/// Horizontal text alignment relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Where the label of one region is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pattern: Pattern,
    position: Point,
}

impl Anchor {
    const fn new(width: u8, bits: u16, x: f32, y: f32) -> Self {
        Self {
            pattern: Pattern::from_raw(width, bits),
            position: Point::new(x, y),
        }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Where the name of one set is drawn.
///
/// The alignment tells which side of the text touches the anchor, so a
/// `Right`/`Bottom` label extends to the left of and above its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendAnchor {
    position: Point,
    h_align: HAlign,
    v_align: VAlign,
}

impl LegendAnchor {
    const fn new(x: f32, y: f32, h_align: HAlign, v_align: VAlign) -> Self {
        Self {
            position: Point::new(x, y),
            h_align,
            v_align,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn h_align(&self) -> HAlign {
        self.h_align
    }

    pub fn v_align(&self) -> VAlign {
        self.v_align
    }
}

/// The fixed drawing layout for one number of sets.
#[derive(Debug, PartialEq)]
pub struct LayoutTable {
    set_count: usize,
    ellipses: &'static [Ellipse],
    anchors: &'static [Anchor],
    legend: &'static [LegendAnchor],
    x_extent: f32,
    y_extent: f32,
    figsize: Size,
}

impl LayoutTable {
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// One ellipse per set, in set order.
    pub fn ellipses(&self) -> &'static [Ellipse] {
        self.ellipses
    }

    /// One anchor per non-zero pattern, in ascending pattern order.
    pub fn anchors(&self) -> &'static [Anchor] {
        self.anchors
    }

    /// One legend anchor per set, in set order.
    pub fn legend(&self) -> &'static [LegendAnchor] {
        self.legend
    }

    /// Looks up the anchor of `pattern`.
    pub fn anchor(&self, pattern: Pattern) -> Option<Point> {
        self.anchors
            .iter()
            .find(|anchor| anchor.pattern == pattern)
            .map(Anchor::position)
    }

    /// Visible axis range, `[0, width] x [0, height]`.
    pub fn extent(&self) -> Size {
        Size::new(self.x_extent, self.y_extent)
    }

    /// Default figure size in inches.
    pub fn figsize(&self) -> Size {
        self.figsize
    }
}

static TWO: LayoutTable = LayoutTable {
    set_count: 2,
    ellipses: &[
        Ellipse::new(Point::new(0.375, 0.3), 0.5, 0.5, 0.0),
        Ellipse::new(Point::new(0.625, 0.3), 0.5, 0.5, 0.0),
    ],
    anchors: &[
        Anchor::new(2, 0b01, 0.74, 0.30),
        Anchor::new(2, 0b10, 0.26, 0.30),
        Anchor::new(2, 0b11, 0.50, 0.30),
    ],
    legend: &[
        LegendAnchor::new(0.20, 0.56, HAlign::Right, VAlign::Bottom),
        LegendAnchor::new(0.80, 0.56, HAlign::Left, VAlign::Bottom),
    ],
    x_extent: 1.0,
    y_extent: 0.7,
    figsize: Size::new(9.0, 7.0),
};

static THREE: LayoutTable = LayoutTable {
    set_count: 3,
    ellipses: &[
        Ellipse::new(Point::new(0.333, 0.633), 0.5, 0.5, 0.0),
        Ellipse::new(Point::new(0.666, 0.633), 0.5, 0.5, 0.0),
        Ellipse::new(Point::new(0.5, 0.31), 0.5, 0.5, 0.0),
    ],
    anchors: &[
        Anchor::new(3, 0b001, 0.50, 0.27),
        Anchor::new(3, 0b010, 0.73, 0.65),
        Anchor::new(3, 0b011, 0.61, 0.46),
        Anchor::new(3, 0b100, 0.27, 0.65),
        Anchor::new(3, 0b101, 0.39, 0.46),
        Anchor::new(3, 0b110, 0.50, 0.65),
        Anchor::new(3, 0b111, 0.50, 0.51),
    ],
    legend: &[
        LegendAnchor::new(0.15, 0.87, HAlign::Right, VAlign::Bottom),
        LegendAnchor::new(0.85, 0.87, HAlign::Left, VAlign::Bottom),
        LegendAnchor::new(0.50, 0.02, HAlign::Center, VAlign::Top),
    ],
    x_extent: 1.0,
    y_extent: 1.0,
    figsize: Size::new(9.0, 9.0),
};

static FOUR: LayoutTable = LayoutTable {
    set_count: 4,
    ellipses: &[
        Ellipse::new(Point::new(0.350, 0.400), 0.72, 0.45, 140.0),
        Ellipse::new(Point::new(0.450, 0.500), 0.72, 0.45, 140.0),
        Ellipse::new(Point::new(0.544, 0.500), 0.72, 0.45, 40.0),
        Ellipse::new(Point::new(0.644, 0.400), 0.72, 0.45, 40.0),
    ],
    anchors: &[
        Anchor::new(4, 0b0001, 0.85, 0.42),
        Anchor::new(4, 0b0010, 0.68, 0.72),
        Anchor::new(4, 0b0011, 0.77, 0.59),
        Anchor::new(4, 0b0100, 0.32, 0.72),
        Anchor::new(4, 0b0101, 0.71, 0.30),
        Anchor::new(4, 0b0110, 0.50, 0.66),
        Anchor::new(4, 0b0111, 0.65, 0.50),
        Anchor::new(4, 0b1000, 0.14, 0.42),
        Anchor::new(4, 0b1001, 0.50, 0.17),
        Anchor::new(4, 0b1010, 0.29, 0.30),
        Anchor::new(4, 0b1011, 0.39, 0.24),
        Anchor::new(4, 0b1100, 0.23, 0.59),
        Anchor::new(4, 0b1101, 0.61, 0.24),
        Anchor::new(4, 0b1110, 0.35, 0.50),
        Anchor::new(4, 0b1111, 0.50, 0.38),
    ],
    legend: &[
        LegendAnchor::new(0.13, 0.18, HAlign::Right, VAlign::Center),
        LegendAnchor::new(0.18, 0.83, HAlign::Right, VAlign::Bottom),
        LegendAnchor::new(0.82, 0.83, HAlign::Left, VAlign::Bottom),
        LegendAnchor::new(0.87, 0.18, HAlign::Left, VAlign::Top),
    ],
    x_extent: 1.0,
    y_extent: 1.0,
    figsize: Size::new(12.0, 12.0),
};

/// Returns the layout table for `set_count` sets.
///
/// # Errors
///
/// Returns [`LayoutError::UnsupportedCardinality`] unless `set_count` is
/// 2, 3 or 4.
pub fn layout_for(set_count: usize) -> Result<&'static LayoutTable, LayoutError> {
    let table = match set_count {
        2 => &TWO,
        3 => &THREE,
        4 => &FOUR,
        other => return Err(LayoutError::UnsupportedCardinality(other)),
    };
    debug!(set_count; "Selected layout table");
    Ok(table)
}
