use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Closed interval of episode or season numbers.
///
/// `start > end` is allowed and describes an empty range, which is what an
/// episode match without numbers reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub const fn single(value: u32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Range from `start` to the largest representable number
    pub const fn max_range(start: u32) -> Self {
        Self {
            start,
            end: u32::MAX,
        }
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.start && value <= self.end
    }

    /// True when the two ranges overlap
    pub const fn contains_range(&self, other: &Self) -> bool {
        other.end >= self.start && other.start <= self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl IntoIterator for Range {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
