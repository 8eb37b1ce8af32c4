//! Heap sort tracer
//!
//! Two phases: build a max-heap bottom-up, then repeatedly swap the root into
//! the sorted suffix and sift the new root down through the reduced heap.
//! A child only displaces the current largest when strictly greater, so equal
//! keys never trigger a swap.

use crate::snapshot::{span, Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapEvent {
    Initial,
    Comparing,
    Swap,
    HeapBuilt,
    Extract,
    Complete,
}

impl TraceEvent for HeapEvent {
    fn is_terminal(self) -> bool {
        matches!(self, HeapEvent::Complete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapPhase {
    Build,
    Extract,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapState<T> {
    pub array: Vec<T>,
    pub phase: HeapPhase,
    pub heap_size: usize,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    /// Indices of the sorted suffix
    pub sorted: Vec<usize>,
}

type HeapRecorder<T> = Recorder<HeapEvent, HeapState<T>>;

pub fn trace<T: Element>(values: &[T]) -> Trace<HeapEvent, HeapState<T>> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut rec = Recorder::new("heap_sort");

    let state = |array: &[T], phase: HeapPhase, heap_size: usize| HeapState {
        array: array.to_vec(),
        phase,
        heap_size,
        comparing: vec![],
        swapping: vec![],
        sorted: span(heap_size, array.len()),
    };

    rec.record(
        HeapEvent::Initial,
        "Building max heap from array",
        state(&array, HeapPhase::Build, n),
    );

    for root in (0..n / 2).rev() {
        sift_down(&mut array, n, root, HeapPhase::Build, &mut rec);
    }

    rec.record(
        HeapEvent::HeapBuilt,
        "Max heap built successfully",
        state(&array, HeapPhase::Build, n),
    );

    for end in (1..n).rev() {
        rec.record(
            HeapEvent::Extract,
            format!("Moving maximum element {} to sorted position {}", array[0], end),
            HeapState {
                swapping: vec![0, end],
                ..state(&array, HeapPhase::Extract, end + 1)
            },
        );

        array.swap(0, end);

        rec.record(
            HeapEvent::Swap,
            format!("Swapped {} to position {}", array[end], end),
            state(&array, HeapPhase::Extract, end),
        );

        sift_down(&mut array, end, 0, HeapPhase::Extract, &mut rec);
    }

    rec.finish(
        HeapEvent::Complete,
        "Heap sort completed!",
        state(&array, HeapPhase::Done, 0),
    )
}

/// Restore the heap property below `root` within `array[..heap_size]`
fn sift_down<T: Element>(
    array: &mut [T],
    heap_size: usize,
    mut root: usize,
    phase: HeapPhase,
    rec: &mut HeapRecorder<T>,
) {
    let state = |array: &[T], comparing: Vec<usize>, swapping: Vec<usize>| HeapState {
        array: array.to_vec(),
        phase,
        heap_size,
        comparing,
        swapping,
        sorted: span(heap_size, array.len()),
    };

    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size {
            rec.record(
                HeapEvent::Comparing,
                format!(
                    "Comparing parent {} with left child {}",
                    array[root], array[left]
                ),
                state(array, vec![root, left], vec![]),
            );
            if array[left] > array[largest] {
                largest = left;
            }
        }

        if right < heap_size {
            rec.record(
                HeapEvent::Comparing,
                format!(
                    "Comparing largest {} with right child {}",
                    array[largest], array[right]
                ),
                state(array, vec![largest, right], vec![]),
            );
            if array[right] > array[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        array.swap(root, largest);
        rec.record(
            HeapEvent::Swap,
            format!(
                "Swapped {} with {} to maintain heap property",
                array[largest], array[root]
            ),
            state(array, vec![], vec![root, largest]),
        );
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_extract_per_moved_element() {
        let trace = trace(&[4, 10, 3, 5, 1]);
        assert_eq!(trace.count(HeapEvent::Extract), 4);
        assert_eq!(trace.last().state.array, vec![1, 3, 4, 5, 10]);
        assert_eq!(trace.last().state.sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_heap_built_holds_max_at_root() {
        let trace = trace(&[4, 10, 3, 5, 1]);
        let built = trace
            .iter()
            .find(|s| s.event == HeapEvent::HeapBuilt)
            .unwrap();
        assert_eq!(built.state.array[0], 10);
    }

    #[test]
    fn test_equal_child_does_not_swap() {
        let trace = trace(&[5, 5, 5]);
        let build_swaps = trace
            .iter()
            .filter(|s| s.event == HeapEvent::Swap && s.state.phase == HeapPhase::Build)
            .count();
        assert_eq!(build_swaps, 0);
    }

    #[test]
    fn test_extract_is_paired_with_swap() {
        let trace = trace(&[2, 7, 1]);
        let snaps = trace.snapshots();
        for (i, snap) in snaps.iter().enumerate() {
            if snap.event == HeapEvent::Extract {
                assert_eq!(snaps[i + 1].event, HeapEvent::Swap);
                assert_eq!(snaps[i + 1].state.phase, HeapPhase::Extract);
            }
        }
    }
}
