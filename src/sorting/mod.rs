//! Instrumented sorting algorithms
//!
//! Each submodule exposes a `trace` function that copies its input, sorts the
//! copy, and records a snapshot at every comparison and data movement.  The
//! input slice is never modified.  The first snapshot holds the input as
//! given; the last holds the sorted array and a `complete` event.
//!
//! - [`bubble`], [`selection`], [`insertion`]: comparison sorts, one snapshot
//!   per comparison and per swap/shift/insert
//! - [`merge`]: top-down merge sort with recursion levels, stable
//! - [`quick`]: Lomuto partition, last element as pivot
//! - [`heap`]: max-heap build followed by repeated extraction
//! - [`radix`]: LSD base-10 bucket sort over non-negative integers

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sorting tracers available to callers that dispatch by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Radix => "radix",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sort", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.trim_end_matches("_sort").trim_end_matches("-sort");
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| format!("unknown sorting algorithm '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("bubble".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Bubble));
        assert_eq!("Merge-Sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Merge));
        assert_eq!("radix_sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Radix));
        assert!("bogo".parse::<SortAlgorithm>().is_err());
    }
}
