//! Venny Core Types and Definitions
//!
//! This crate provides the rendering-independent parts of Venny:
//!
//! - **Patterns**: Binary membership patterns identifying regions ([`pattern::Pattern`])
//! - **Decomposition**: Splitting input sets into exclusive regions and
//!   labelling them ([`decompose`] module)
//! - **Layout**: Static ellipse and anchor tables for two to four sets
//!   ([`layout`] module)
//! - **Colors**: Color handling and the default palette ([`color`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod color;
pub mod decompose;
pub mod geometry;
pub mod layout;
pub mod pattern;

pub use decompose::{Annotation, Annotations, DecomposeError, Decomposition, Labels, decompose};
pub use layout::{LayoutError, LayoutTable, layout_for};
pub use pattern::Pattern;
