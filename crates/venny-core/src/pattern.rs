//! Membership patterns.
//!
//! A [`Pattern`] names one region of a Venn diagram by listing, for each input
//! set, whether the region lies inside (`1`) or outside (`0`) of it. Digit `i`
//! counted from the left belongs to set `i`, so for three sets `101` is the
//! region inside the first and third set but outside the second.
//!
//! # Example
//!
//! ```
//! # use venny_core::pattern::Pattern;
//! let pattern: Pattern = "101".parse().unwrap();
//!
//! assert_eq!(pattern.width(), 3);
//! assert!(pattern.contains(0));
//! assert!(!pattern.contains(1));
//! assert!(pattern.contains(2));
//! assert_eq!(pattern.to_string(), "101");
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Largest number of sets a pattern can describe.
pub const MAX_WIDTH: usize = 16;

/// Errors produced when parsing a [`Pattern`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern has {0} digits, at most {MAX_WIDTH} are supported")]
    TooWide(usize),

    #[error("invalid digit `{0}` in pattern, expected `0` or `1`")]
    InvalidDigit(char),

    #[error("the all-zero pattern does not name a region")]
    Zero,
}

/// A non-zero membership pattern over a fixed number of sets.
///
/// Two patterns are equal only when both their bits and their width match,
/// so `01` and `001` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    width: u8,
    bits: u16,
}

impl Pattern {
    /// Creates a pattern from its raw bits without validation.
    ///
    /// The leftmost digit is the most significant of the `width` low bits.
    /// Used by the constant layout tables; callers must keep `bits` non-zero
    /// and below `2^width`.
    pub(crate) const fn from_raw(width: u8, bits: u16) -> Self {
        Self { width, bits }
    }

    /// Creates a pattern from bits and width, returning `None` when `bits`
    /// is zero or does not fit in `width` digits.
    pub fn new(width: usize, bits: u16) -> Option<Self> {
        if width == 0 || width > MAX_WIDTH || bits == 0 {
            return None;
        }
        if width < MAX_WIDTH && u32::from(bits) >= 1 << width {
            return None;
        }
        Some(Self::from_raw(width as u8, bits))
    }

    /// Returns every non-zero pattern of the given width in ascending order.
    ///
    /// Yields `2^width - 1` patterns, or nothing when `width` is zero or
    /// larger than [`MAX_WIDTH`].
    pub fn all(width: usize) -> impl Iterator<Item = Pattern> {
        let end: u32 = if width == 0 || width > MAX_WIDTH {
            1
        } else {
            1 << width
        };
        (1..end).map(move |bits| Self::from_raw(width as u8, bits as u16))
    }

    /// Builds the pattern for a membership vector, where `memberships[i]`
    /// tells whether the region is inside set `i`.
    ///
    /// Returns `None` when no set is included or there are too many sets.
    pub fn from_memberships(memberships: &[bool]) -> Option<Self> {
        let bits = memberships
            .iter()
            .fold(0u32, |acc, &inside| (acc << 1) | u32::from(inside));
        u16::try_from(bits)
            .ok()
            .and_then(|bits| Self::new(memberships.len(), bits))
    }

    /// Number of sets this pattern describes.
    pub fn width(self) -> usize {
        self.width as usize
    }

    /// Raw bit value; the leftmost digit is the most significant bit.
    pub fn bits(self) -> u16 {
        self.bits
    }

    /// Returns `true` if the region lies inside set `index`.
    pub fn contains(self, index: usize) -> bool {
        index < self.width() && (self.bits >> (self.width() - 1 - index)) & 1 == 1
    }

    /// Indices of the sets the region lies inside, in ascending order.
    pub fn members(self) -> impl Iterator<Item = usize> {
        (0..self.width()).filter(move |&index| self.contains(index))
    }

    /// Number of sets the region lies inside.
    pub fn member_count(self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        if s.len() > MAX_WIDTH {
            return Err(PatternError::TooWide(s.chars().count()));
        }

        let mut bits = 0u16;
        for ch in s.chars() {
            let digit = match ch {
                '0' => 0,
                '1' => 1,
                other => return Err(PatternError::InvalidDigit(other)),
            };
            bits = (bits << 1) | digit;
        }

        Self::new(s.len(), bits).ok_or(PatternError::Zero)
    }
}
