//! A labelled Venn diagram ready for rendering.

use log::warn;

use venny_core::{Labels, LayoutError, LayoutTable, Pattern, layout_for};

/// Names given to sets without an explicit name.
pub const DEFAULT_NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Region labels and set names bound to the layout for their set count.
///
/// The diagram does not look at set elements; it only places the labels it
/// was given. Patterns without a label are drawn as empty text.
#[derive(Debug, Clone)]
pub struct Diagram {
    layout: &'static LayoutTable,
    labels: Labels,
    names: Vec<String>,
}

impl Diagram {
    /// Creates a diagram for `set_count` sets.
    ///
    /// Missing names default to `A`, `B`, `C` and `D`; surplus names are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedCardinality`] unless `set_count`
    /// is 2, 3 or 4.
    pub fn new<I, S>(set_count: usize, labels: Labels, names: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layout = layout_for(set_count)?;

        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > set_count {
            warn!(
                name_count = names.len(),
                set_count;
                "More set names than sets, ignoring the extra names"
            );
            names.truncate(set_count);
        }
        names.extend(
            DEFAULT_NAMES[names.len()..set_count]
                .iter()
                .map(|name| (*name).to_string()),
        );

        if !labels.is_empty() && labels.width() != Some(set_count) {
            warn!(set_count; "Some region labels do not match the number of sets");
        }

        Ok(Self {
            layout,
            labels,
            names,
        })
    }

    pub fn set_count(&self) -> usize {
        self.layout.set_count()
    }

    pub fn layout(&self) -> &'static LayoutTable {
        self.layout
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Set names, one per set.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The label of `pattern`, or `""`.
    pub fn label(&self, pattern: Pattern) -> &str {
        self.labels.get(pattern)
    }

    /// Names of the sets the region of `pattern` lies inside.
    pub fn member_names(&self, pattern: Pattern) -> Vec<&str> {
        pattern
            .members()
            .filter_map(|index| self.names.get(index))
            .map(String::as_str)
            .collect()
    }
}
