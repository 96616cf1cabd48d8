//! Configuration types for Venny diagrams.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them
//! from configuration files. Every field is optional; unset values fall back
//! to the defaults of the selected layout.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: region label contents and style.
//! - [`StyleConfig`] - Colors, figure size, resolution and font size.
//!
//! # Example
//!
//! ```
//! # use venny::config::{AppConfig, StyleConfig};
//! # use venny::{Annotation, Annotations};
//! let config = AppConfig::default()
//!     .with_fill(Annotations::none().with(Annotation::Percent))
//!     .with_style(StyleConfig::default().with_dpi(72.0));
//!
//! assert!(config.fill().contains(Annotation::Percent));
//! assert_eq!(config.style().dpi(), 72.0);
//! ```

use serde::Deserialize;

use venny_core::{
    Annotations,
    color::{Color, default_palette},
    geometry::Size,
};

/// Default figure resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 96.0;

/// Default font size in points.
pub const DEFAULT_FONTSIZE: f32 = 14.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// What each region label shows.
    #[serde(default)]
    fill: Annotations,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(fill: Annotations, style: StyleConfig) -> Self {
        Self { fill, style }
    }

    pub fn fill(&self) -> &Annotations {
        &self.fill
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the label annotations, e.g. with values given on the command line.
    pub fn with_fill(mut self, fill: Annotations) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct StyleConfig {
    /// Fill colors per set as CSS color strings. Alpha is honored.
    #[serde(default)]
    colors: Option<Vec<String>>,

    /// Figure size in inches, `[width, height]`.
    #[serde(default)]
    figsize: Option<[f32; 2]>,

    #[serde(default)]
    dpi: Option<f32>,

    /// Font size of labels in points.
    #[serde(default)]
    fontsize: Option<f32>,
}

impl StyleConfig {
    /// Returns `set_count` fill colors.
    ///
    /// Configured colors are used first; missing ones are taken from the
    /// default palette at the same index.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed.
    pub fn colors(&self, set_count: usize) -> Result<Vec<Color>, String> {
        let configured = self
            .colors
            .iter()
            .flatten()
            .map(|color| Color::new(color))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid fill color in config: {err}"))?;

        let palette = default_palette();
        Ok((0..set_count)
            .map(|index| {
                configured
                    .get(index)
                    .copied()
                    .unwrap_or(palette[index % palette.len()])
            })
            .collect())
    }

    /// Returns the configured figure size in inches, or `default`.
    pub fn figsize(&self, default: Size) -> Size {
        self.figsize
            .map_or(default, |[width, height]| Size::new(width, height))
    }

    pub fn dpi(&self) -> f32 {
        self.dpi.unwrap_or(DEFAULT_DPI)
    }

    pub fn fontsize(&self) -> f32 {
        self.fontsize.unwrap_or(DEFAULT_FONTSIZE)
    }

    /// Checks that the configured values can produce a drawing.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if let Some([width, height]) = self.figsize {
            if !(width > 0.0 && height > 0.0) {
                return Err(format!("figsize must be positive, got [{width}, {height}]"));
            }
        }
        if !(self.dpi() > 0.0) {
            return Err(format!("dpi must be positive, got {}", self.dpi()));
        }
        if !(self.fontsize() > 0.0) {
            return Err(format!("fontsize must be positive, got {}", self.fontsize()));
        }
        self.colors(0).map(|_| ())
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_figsize(mut self, width: f32, height: f32) -> Self {
        self.figsize = Some([width, height]);
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn with_fontsize(mut self, fontsize: f32) -> Self {
        self.fontsize = Some(fontsize);
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use venny_core::{Annotation, color::DEFAULT_COLORS};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.fill(), Annotations::default());
        assert_approx_eq!(f32, config.style().dpi(), 96.0);
        assert_approx_eq!(f32, config.style().fontsize(), 14.0);
        assert_eq!(
            config.style().figsize(Size::new(9.0, 7.0)),
            Size::new(9.0, 7.0)
        );
    }

    #[test]
    fn test_colors_fall_back_to_palette() {
        let style = StyleConfig::default().with_colors(["red"]);
        let colors = style.colors(3).unwrap();

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].to_hex(), "#ff0000");
        let (r, g, b, _) = DEFAULT_COLORS[1];
        assert_eq!(colors[1].to_hex(), format!("#{r:02x}{g:02x}{b:02x}"));
        assert_eq!(colors[2], default_palette()[2]);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style = StyleConfig::default().with_colors(["not-a-color"]);
        let err = style.colors(2).unwrap_err();
        assert!(err.contains("not-a-color"), "{err}");
    }

    #[test]
    fn test_validate() {
        assert!(StyleConfig::default().validate().is_ok());
        assert!(StyleConfig::default().with_dpi(0.0).validate().is_err());
        assert!(StyleConfig::default().with_figsize(3.0, -1.0).validate().is_err());
        assert!(StyleConfig::default().with_fontsize(f32::NAN).validate().is_err());
        assert!(
            StyleConfig::default()
                .with_colors(["nope"])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_overrides() {
        let style = StyleConfig::default()
            .with_figsize(4.0, 3.0)
            .with_dpi(50.0)
            .with_fontsize(10.0);

        assert_eq!(style.figsize(Size::new(9.0, 9.0)), Size::new(4.0, 3.0));
        assert_approx_eq!(f32, style.dpi(), 50.0);
        assert_approx_eq!(f32, style.fontsize(), 10.0);

        let config = AppConfig::new(Annotations::all(), style.clone());
        assert!(config.fill().contains(Annotation::Logic));
        assert_eq!(*config.style(), style);
    }
}
