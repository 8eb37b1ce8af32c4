//! Bubble sort tracer

use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleEvent {
    Initial,
    Compare,
    Swap,
    Complete,
}

impl TraceEvent for BubbleEvent {
    fn is_terminal(self) -> bool {
        matches!(self, BubbleEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BubbleState<T> {
    pub array: Vec<T>,
    /// Adjacent pair under inspection
    pub comparing: Vec<usize>,
    pub swapped: bool,
    /// First index of the settled suffix
    pub sorted_from: usize,
}

pub fn trace<T: Element>(values: &[T]) -> Trace<BubbleEvent, BubbleState<T>> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut rec = Recorder::new("bubble_sort");

    let state = |array: &[T], comparing: Vec<usize>, swapped: bool, sorted_from: usize| {
        BubbleState {
            array: array.to_vec(),
            comparing,
            swapped,
            sorted_from,
        }
    };

    rec.record(
        BubbleEvent::Initial,
        "Initial array state",
        state(&array, vec![], false, n),
    );

    for i in 0..n {
        let sorted_from = n - i;
        for j in 0..n - i - 1 {
            rec.record(
                BubbleEvent::Compare,
                format!(
                    "Comparing {} and {} at positions {} and {}",
                    array[j],
                    array[j + 1],
                    j,
                    j + 1
                ),
                state(&array, vec![j, j + 1], false, sorted_from),
            );

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                rec.record(
                    BubbleEvent::Swap,
                    format!("Swapped elements at positions {} and {}", j, j + 1),
                    state(&array, vec![j, j + 1], true, sorted_from),
                );
            }
        }
    }

    rec.finish(
        BubbleEvent::Complete,
        "Array is now sorted!",
        state(&array, vec![], false, 0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_for_reversed_input() {
        let trace = trace(&[3, 2, 1]);
        // 2 + 1 comparisons, every one of them swaps
        assert_eq!(trace.count(BubbleEvent::Compare), 3);
        assert_eq!(trace.count(BubbleEvent::Swap), 3);
        assert_eq!(trace.last().state.array, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_input_never_swaps() {
        let trace = trace(&[1, 2, 3, 4]);
        assert_eq!(trace.count(BubbleEvent::Swap), 0);
        assert_eq!(trace.count(BubbleEvent::Compare), 6);
    }

    #[test]
    fn test_compare_indices_are_adjacent() {
        let trace = trace(&[5, 1, 4, 2, 8]);
        for snap in trace.iter().filter(|s| s.event == BubbleEvent::Compare) {
            let c = &snap.state.comparing;
            assert_eq!(c[1], c[0] + 1);
            assert!(c[1] < snap.state.array.len());
        }
    }
}
