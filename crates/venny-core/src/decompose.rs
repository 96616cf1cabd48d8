//! Region decomposition.
//!
//! Splits `N` input collections into the `2^N - 1` mutually exclusive regions
//! of their Venn diagram and turns each region into a display label.
//!
//! Every element of the union belongs to exactly one region: the one whose
//! [`Pattern`] has a `1` for every set containing the element and a `0` for
//! every set that does not. Classifying each union element by its membership
//! vector therefore yields the same regions as intersecting the included sets
//! and subtracting the excluded ones, and the result is a partition by
//! construction.
//!
//! # Example
//!
//! ```
//! # use venny_core::{Annotation, Annotations, decompose};
//! let sets = [vec![1, 2, 3], vec![3, 4]];
//! let fill = Annotations::none().with(Annotation::Logic).with(Annotation::Number);
//!
//! let labels = decompose(sets, &fill).unwrap();
//! assert_eq!(labels.get_str("10"), "10: 2");
//! assert_eq!(labels.get_str("01"), "01: 1");
//! assert_eq!(labels.get_str("11"), "11: 1");
//! ```

use std::{fmt, hash::Hash, str::FromStr};

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use crate::pattern::{MAX_WIDTH, Pattern};

/// Errors produced while decomposing input sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error("cannot decompose {count} sets, at most {max} are supported")]
    TooManySets { count: usize, max: usize },
}

/// One piece of information a region label can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    /// The membership pattern, e.g. `101: `
    Logic,
    /// The region cardinality
    Number,
    /// The region cardinality as a share of the union, e.g. `(22.7%)`
    Percent,
}

impl Annotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logic => "logic",
            Self::Number => "number",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Annotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logic" => Ok(Self::Logic),
            "number" => Ok(Self::Number),
            "percent" => Ok(Self::Percent),
            other => Err(format!(
                "unknown annotation `{other}`, expected one of: logic, number, percent"
            )),
        }
    }
}

/// A non-exclusive selection of [`Annotation`]s.
///
/// The order in which annotations are selected does not matter; labels are
/// always built as logic, then number, then percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Vec<Annotation>")]
pub struct Annotations {
    logic: bool,
    number: bool,
    percent: bool,
}

impl Annotations {
    /// Selects nothing; every label is the empty string.
    pub const fn none() -> Self {
        Self {
            logic: false,
            number: false,
            percent: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            logic: true,
            number: true,
            percent: true,
        }
    }

    /// Returns a copy with `annotation` selected.
    pub fn with(mut self, annotation: Annotation) -> Self {
        match annotation {
            Annotation::Logic => self.logic = true,
            Annotation::Number => self.number = true,
            Annotation::Percent => self.percent = true,
        }
        self
    }

    pub fn contains(self, annotation: Annotation) -> bool {
        match annotation {
            Annotation::Logic => self.logic,
            Annotation::Number => self.number,
            Annotation::Percent => self.percent,
        }
    }

    pub fn is_empty(self) -> bool {
        !(self.logic || self.number || self.percent)
    }
}

impl Default for Annotations {
    fn default() -> Self {
        Self::none().with(Annotation::Number)
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl From<Vec<Annotation>> for Annotations {
    fn from(annotations: Vec<Annotation>) -> Self {
        annotations.into_iter().collect()
    }
}

impl fmt::Display for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected: Vec<&str> = [Annotation::Logic, Annotation::Number, Annotation::Percent]
            .into_iter()
            .filter(|annotation| self.contains(*annotation))
            .map(Annotation::as_str)
            .collect();
        write!(f, "{}", selected.join(","))
    }
}

/// Region labels keyed by membership pattern.
///
/// Lookups for patterns without a label return the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    entries: IndexMap<Pattern, String>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label of `pattern`, returning the previous one if any.
    pub fn insert(&mut self, pattern: Pattern, label: impl Into<String>) -> Option<String> {
        self.entries.insert(pattern, label.into())
    }

    /// Returns the label of `pattern`, or `""` when it has none.
    pub fn get(&self, pattern: Pattern) -> &str {
        self.entries.get(&pattern).map_or("", String::as_str)
    }

    /// Returns the label of the pattern written as a binary string.
    ///
    /// Strings that are not valid patterns have no label.
    pub fn get_str(&self, pattern: &str) -> &str {
        pattern.parse().map_or("", |pattern| self.get(pattern))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &str)> {
        self.entries
            .iter()
            .map(|(pattern, label)| (*pattern, label.as_str()))
    }

    /// Width of the labelled patterns, or `None` if there are no labels or
    /// their widths disagree.
    pub fn width(&self) -> Option<usize> {
        let mut widths = self.entries.keys().map(|pattern| pattern.width());
        let first = widths.next()?;
        widths.all(|width| width == first).then_some(first)
    }
}

impl FromIterator<(Pattern, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (Pattern, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Labels {
    type Item = (Pattern, String);
    type IntoIter = indexmap::map::IntoIter<Pattern, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The exclusive regions of a collection of sets.
#[derive(Debug, Clone)]
pub struct Decomposition<T> {
    set_count: usize,
    union: IndexSet<T>,
    regions: IndexMap<Pattern, IndexSet<T>>,
}

impl<T> Decomposition<T>
where
    T: Eq + Hash + Clone,
{
    /// Decomposes the given sets. Duplicate elements inside one input
    /// collapse.
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::TooManySets`] for more than
    /// [`MAX_WIDTH`] sets.
    pub fn new<I, S>(sets: I) -> Result<Self, DecomposeError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let sets: Vec<IndexSet<T>> = sets
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();
        let set_count = sets.len();
        if set_count > MAX_WIDTH {
            return Err(DecomposeError::TooManySets {
                count: set_count,
                max: MAX_WIDTH,
            });
        }

        let mut union = IndexSet::new();
        for set in &sets {
            union.extend(set.iter().cloned());
        }

        let mut regions: IndexMap<Pattern, IndexSet<T>> = Pattern::all(set_count)
            .map(|pattern| (pattern, IndexSet::new()))
            .collect();

        let mut memberships = Vec::with_capacity(set_count);
        for element in &union {
            memberships.clear();
            memberships.extend(sets.iter().map(|set| set.contains(element)));
            // The union only holds elements of at least one set
            if let Some(pattern) = Pattern::from_memberships(&memberships) {
                regions.entry(pattern).or_default().insert(element.clone());
            }
        }

        debug!(
            set_count,
            union_len = union.len(),
            region_count = regions.len();
            "Decomposed sets into regions"
        );

        Ok(Self {
            set_count,
            union,
            regions,
        })
    }

    /// Number of input sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Size of the union of all input sets.
    pub fn union_len(&self) -> usize {
        self.union.len()
    }

    /// Elements of the region named by `pattern`, or `None` when the
    /// pattern has the wrong width.
    pub fn region(&self, pattern: Pattern) -> Option<&IndexSet<T>> {
        self.regions.get(&pattern)
    }

    /// Cardinality of the region named by `pattern`.
    pub fn count(&self, pattern: Pattern) -> usize {
        self.region(pattern).map_or(0, IndexSet::len)
    }

    /// Share of the union in the region, in percent.
    ///
    /// An empty union yields `0.0` for every region.
    pub fn percent(&self, pattern: Pattern) -> f64 {
        let total = self.union_len();
        if total == 0 {
            return 0.0;
        }
        self.count(pattern) as f64 / total as f64 * 100.0
    }

    /// Iterates over all regions in ascending pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &IndexSet<T>)> {
        self.regions.iter().map(|(pattern, region)| (*pattern, region))
    }

    /// Builds the label of every region.
    pub fn labels(&self, annotations: &Annotations) -> Labels {
        let labels: Labels = self
            .regions
            .keys()
            .map(|&pattern| (pattern, self.format_label(pattern, annotations)))
            .collect();

        for (pattern, label) in labels.iter() {
            trace!(pattern:%, label; "Region label");
        }
        labels
    }

    fn format_label(&self, pattern: Pattern, annotations: &Annotations) -> String {
        let mut label = String::new();
        if annotations.contains(Annotation::Logic) {
            label.push_str(&format!("{pattern}: "));
        }
        if annotations.contains(Annotation::Number) {
            label.push_str(&self.count(pattern).to_string());
        }
        if annotations.contains(Annotation::Percent) {
            label.push_str(&format!("({:.1}%)", self.percent(pattern)));
        }
        label
    }
}

/// Decomposes `sets` and labels every region with the selected annotations.
///
/// Returns one label for each of the `2^N - 1` non-zero patterns, including
/// empty regions. Zero sets yield no labels.
///
/// # Errors
///
/// Returns [`DecomposeError::TooManySets`] when more sets are given than a
/// [`Pattern`] can describe.
pub fn decompose<T, I, S>(sets: I, annotations: &Annotations) -> Result<Labels, DecomposeError>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    Decomposition::new(sets).map(|decomposition| decomposition.labels(annotations))
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn sets_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(0u8..40, 0..30), 1..=4)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Regions are pairwise disjoint and together cover the union.
    fn check_regions_partition_union(sets: Vec<Vec<u8>>) -> Result<(), TestCaseError> {
        let decomposition = Decomposition::new(sets.clone()).unwrap();

        let mut seen = IndexSet::new();
        for (_, region) in decomposition.iter() {
            for element in region {
                prop_assert!(seen.insert(*element), "element {} in two regions", element);
            }
        }

        let union: IndexSet<u8> = sets.iter().flatten().copied().collect();
        prop_assert_eq!(seen.len(), union.len());
        prop_assert!(union.iter().all(|element| seen.contains(element)));
        Ok(())
    }

    /// Each region holds exactly the elements matching its pattern.
    fn check_region_membership_matches_pattern(sets: Vec<Vec<u8>>) -> Result<(), TestCaseError> {
        let decomposition = Decomposition::new(sets.clone()).unwrap();

        for (pattern, region) in decomposition.iter() {
            for element in region {
                for (index, set) in sets.iter().enumerate() {
                    prop_assert_eq!(set.contains(element), pattern.contains(index));
                }
            }
        }
        Ok(())
    }

    /// There is one label per non-zero pattern, all of width N.
    fn check_label_count_and_width(sets: Vec<Vec<u8>>) -> Result<(), TestCaseError> {
        let set_count = sets.len();
        let labels = decompose(sets, &Annotations::default()).unwrap();

        prop_assert_eq!(labels.len(), (1 << set_count) - 1);
        prop_assert!(labels.iter().all(|(pattern, _)| pattern.width() == set_count));
        Ok(())
    }

    /// Region cardinalities sum to the union size and percentages to 100.
    fn check_counts_sum_to_union(sets: Vec<Vec<u8>>) -> Result<(), TestCaseError> {
        let decomposition = Decomposition::new(sets).unwrap();

        let total: usize = Pattern::all(decomposition.set_count())
            .map(|pattern| decomposition.count(pattern))
            .sum();
        prop_assert_eq!(total, decomposition.union_len());

        if decomposition.union_len() > 0 {
            let percent: f64 = Pattern::all(decomposition.set_count())
                .map(|pattern| decomposition.percent(pattern))
                .sum();
            prop_assert!(approx_eq!(f64, percent, 100.0, epsilon = 1e-9));
        }
        Ok(())
    }

    /// Decomposing twice gives identical labels.
    fn check_decompose_is_idempotent(sets: Vec<Vec<u8>>) -> Result<(), TestCaseError> {
        let first = decompose(sets.clone(), &Annotations::all()).unwrap();
        let second = decompose(sets, &Annotations::all()).unwrap();

        prop_assert_eq!(first, second);
        Ok(())
    }

    proptest! {
        #[test]
        fn regions_partition_union(sets in sets_strategy()) {
            check_regions_partition_union(sets)?;
        }

        #[test]
        fn region_membership_matches_pattern(sets in sets_strategy()) {
            check_region_membership_matches_pattern(sets)?;
        }

        #[test]
        fn label_count_and_width(sets in sets_strategy()) {
            check_label_count_and_width(sets)?;
        }

        #[test]
        fn counts_sum_to_union(sets in sets_strategy()) {
            check_counts_sum_to_union(sets)?;
        }

        #[test]
        fn decompose_is_idempotent(sets in sets_strategy()) {
            check_decompose_is_idempotent(sets)?;
        }
    }
}
