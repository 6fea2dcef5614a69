// File: src/model/index.rs
use crate::error::ParseError;
use std::fmt;

/// A user-facing 1-based ordinal, stored as a 0-based offset.
///
/// Parsing is purely syntactic. Whether the offset points into a collection
/// is checked against that collection's size when a command is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(offset: usize) -> Self {
        Self(offset)
    }

    /// # Panics
    /// If `ordinal` is zero.
    pub fn from_one_based(ordinal: usize) -> Self {
        assert!(ordinal > 0, "one-based index must be positive");
        Self(ordinal - 1)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    /// Accepts `^[1-9][0-9]*$` after trimming, as long as it fits in `usize`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        let well_formed = trimmed.starts_with(|c: char| matches!(c, '1'..='9'))
            && trimmed.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(ParseError::InvalidIndex);
        }
        trimmed
            .parse::<usize>()
            .map(Self::from_one_based)
            .map_err(|_| ParseError::InvalidIndex)
    }

    /// Resolves this index against a collection of `len` items.
    pub fn checked(&self, len: usize) -> Option<usize> {
        (self.0 < len).then_some(self.0)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
