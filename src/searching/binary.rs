//! Binary search tracer
//!
//! The interval `[left, right]` is inclusive.  `right` is reported as a signed
//! value because narrowing past index 0 leaves it at -1.

use crate::error::TraceError;
use crate::snapshot::{span, Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinarySearchEvent {
    Initial,
    CalculateMid,
    Compare,
    EliminateLeft,
    EliminateRight,
    Found,
    NotFound,
}

impl TraceEvent for BinarySearchEvent {
    fn is_terminal(self) -> bool {
        matches!(self, BinarySearchEvent::Found | BinarySearchEvent::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinarySearchState<T> {
    pub array: Vec<T>,
    pub target: T,
    pub left: usize,
    pub right: isize,
    pub mid: Option<usize>,
    pub comparing: Vec<usize>,
    pub search_range: Vec<usize>,
    /// Every index ruled out so far, ascending
    pub eliminated: Vec<usize>,
    pub found_index: Option<usize>,
}

/// Trace a binary search for `target` in ascending `values`
///
/// Fails with [`TraceError::UnsortedInput`] if `values` is not in
/// non-decreasing order.
pub fn trace<T: Element>(
    values: &[T],
    target: T,
) -> Result<Trace<BinarySearchEvent, BinarySearchState<T>>, TraceError> {
    if let Some(index) = values.windows(2).position(|w| w[0] > w[1]) {
        return Err(TraceError::UnsortedInput { index: index + 1 });
    }

    let mut rec = Recorder::new("binary_search");
    // `hi` is exclusive; the reported `right` is `hi - 1`
    let mut lo = 0usize;
    let mut hi = values.len();
    let mut eliminated: Vec<usize> = Vec::new();

    let state = |lo: usize,
                 hi: usize,
                 mid: Option<usize>,
                 comparing: Vec<usize>,
                 eliminated: &[usize]| {
        let mut eliminated = eliminated.to_vec();
        eliminated.sort_unstable();
        BinarySearchState {
            array: values.to_vec(),
            target: target.clone(),
            left: lo,
            right: hi as isize - 1,
            mid,
            comparing,
            search_range: span(lo, hi),
            eliminated,
            found_index: None,
        }
    };

    rec.record(
        BinarySearchEvent::Initial,
        format!("Searching for {} in sorted array using binary search", target),
        state(lo, hi, None, vec![], &eliminated),
    );

    while lo < hi {
        let right = hi - 1;
        let mid = (lo + right) / 2;

        rec.record(
            BinarySearchEvent::CalculateMid,
            format!("Calculate mid: ({} + {}) / 2 = {}", lo, right, mid),
            state(lo, hi, Some(mid), vec![], &eliminated),
        );

        rec.record(
            BinarySearchEvent::Compare,
            format!(
                "Comparing target {} with arr[{}] = {}",
                target, mid, values[mid]
            ),
            state(lo, hi, Some(mid), vec![mid], &eliminated),
        );

        if values[mid] == target {
            let found = BinarySearchState {
                search_range: vec![mid],
                found_index: Some(mid),
                ..state(lo, hi, Some(mid), vec![mid], &eliminated)
            };
            return Ok(rec.finish(
                BinarySearchEvent::Found,
                format!("Target {} found at index {}!", target, mid),
                found,
            ));
        }

        if values[mid] < target {
            eliminated.extend(lo..=mid);
            lo = mid + 1;
            rec.record(
                BinarySearchEvent::EliminateLeft,
                format!(
                    "{} < {}, eliminate left half. New range: [{}..{}]",
                    values[mid],
                    target,
                    lo,
                    hi as isize - 1
                ),
                state(lo, hi, Some(mid), vec![], &eliminated),
            );
        } else {
            eliminated.extend(mid..hi);
            hi = mid;
            rec.record(
                BinarySearchEvent::EliminateRight,
                format!(
                    "{} > {}, eliminate right half. New range: [{}..{}]",
                    values[mid],
                    target,
                    lo,
                    hi as isize - 1
                ),
                state(lo, hi, Some(mid), vec![], &eliminated),
            );
        }
    }

    Ok(rec.finish(
        BinarySearchEvent::NotFound,
        format!("Target {} not found in the array", target),
        state(lo, hi, None, vec![], &eliminated),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsorted_input() {
        let err = trace(&[1, 3, 2], 2).unwrap_err();
        assert_eq!(err, TraceError::UnsortedInput { index: 2 });
    }

    #[test]
    fn test_each_iteration_is_mid_then_compare() {
        let trace = trace(&[1, 2, 3, 4, 5, 6, 7], 6).unwrap();
        let events: Vec<_> = trace.events().collect();
        assert_eq!(
            events,
            vec![
                BinarySearchEvent::Initial,
                BinarySearchEvent::CalculateMid,
                BinarySearchEvent::Compare,
                BinarySearchEvent::EliminateLeft,
                BinarySearchEvent::CalculateMid,
                BinarySearchEvent::Compare,
                BinarySearchEvent::Found,
            ]
        );
        assert_eq!(trace.last().state.found_index, Some(5));
    }

    #[test]
    fn test_right_goes_negative_when_exhausted_at_front() {
        let trace = trace(&[5, 10], 1).unwrap();
        let last = trace.last();
        assert_eq!(last.event, BinarySearchEvent::NotFound);
        assert_eq!(last.state.right, -1);
        assert_eq!(last.state.eliminated, vec![0, 1]);
        assert!(last.state.search_range.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let trace = trace::<i32>(&[], 4).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().event, BinarySearchEvent::NotFound);
    }
}
