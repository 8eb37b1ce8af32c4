//! Quick sort tracer (Lomuto partition)
//!
//! The pivot is always the last element of the current range.  After each
//! partition the left partition is sorted before the right one.

use crate::snapshot::{span, Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickEvent {
    Initial,
    RangeSelect,
    PivotSelect,
    Compare,
    Swap,
    PivotPlace,
    PartitionComplete,
    Complete,
}

impl TraceEvent for QuickEvent {
    fn is_terminal(self) -> bool {
        matches!(self, QuickEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickState<T> {
    pub array: Vec<T>,
    pub comparing: Vec<usize>,
    pub pivot: Option<usize>,
    /// Indices known to be `<=` the pivot
    pub left_partition: Vec<usize>,
    /// Indices known to be `>` the pivot
    pub right_partition: Vec<usize>,
    pub current_range: Vec<usize>,
    pub swapped: bool,
}

impl<T: Clone> QuickState<T> {
    fn plain(array: &[T]) -> Self {
        QuickState {
            array: array.to_vec(),
            comparing: vec![],
            pivot: None,
            left_partition: vec![],
            right_partition: vec![],
            current_range: vec![],
            swapped: false,
        }
    }
}

type QuickRecorder<T> = Recorder<QuickEvent, QuickState<T>>;

pub fn trace<T: Element>(values: &[T]) -> Trace<QuickEvent, QuickState<T>> {
    let mut array = values.to_vec();
    let mut rec = Recorder::new("quick_sort");

    rec.record(
        QuickEvent::Initial,
        "Initial array - quick sort partitions around pivot elements",
        QuickState::plain(&array),
    );

    if !array.is_empty() {
        let high = array.len() - 1;
        sort_range(&mut array, 0, high, &mut rec);
    }

    rec.finish(
        QuickEvent::Complete,
        "Quick sort complete! Array is now fully sorted",
        QuickState::plain(&array),
    )
}

fn sort_range<T: Element>(array: &mut [T], low: usize, high: usize, rec: &mut QuickRecorder<T>) {
    if low >= high {
        return;
    }

    rec.record(
        QuickEvent::RangeSelect,
        format!(
            "Processing range [{}..{}] with {} elements",
            low,
            high,
            high - low + 1
        ),
        QuickState {
            current_range: span(low, high + 1),
            ..QuickState::plain(array)
        },
    );

    let pivot_index = partition(array, low, high, rec);

    if pivot_index > low {
        sort_range(array, low, pivot_index - 1, rec);
    }
    sort_range(array, pivot_index + 1, high, rec);
}

/// Partition `array[low..=high]`, returning the pivot's final index
fn partition<T: Element>(
    array: &mut [T],
    low: usize,
    high: usize,
    rec: &mut QuickRecorder<T>,
) -> usize {
    let pivot = array[high].clone();
    let range = span(low, high + 1);

    rec.record(
        QuickEvent::PivotSelect,
        format!("Selected pivot {} at position {}", pivot, high),
        QuickState {
            pivot: Some(high),
            current_range: range.clone(),
            ..QuickState::plain(array)
        },
    );

    // `store` is the first index of the region greater than the pivot
    let mut store = low;
    for j in low..high {
        rec.record(
            QuickEvent::Compare,
            format!("Comparing {} with pivot {}", array[j], pivot),
            QuickState {
                comparing: vec![j, high],
                pivot: Some(high),
                left_partition: span(low, store),
                right_partition: span(store, j),
                current_range: range.clone(),
                ..QuickState::plain(array)
            },
        );

        if array[j] <= pivot {
            if store != j {
                array.swap(store, j);
                rec.record(
                    QuickEvent::Swap,
                    format!(
                        "Swapped {} and {} - smaller element moves left",
                        array[store], array[j]
                    ),
                    QuickState {
                        comparing: vec![store, j],
                        pivot: Some(high),
                        left_partition: span(low, store + 1),
                        right_partition: span(store + 1, j + 1),
                        current_range: range.clone(),
                        swapped: true,
                        ..QuickState::plain(array)
                    },
                );
            }
            store += 1;
        }
    }

    let moved = store != high;
    if moved {
        array.swap(store, high);
    }
    rec.record(
        QuickEvent::PivotPlace,
        format!("Placing pivot {} at its final position {}", pivot, store),
        QuickState {
            comparing: vec![store, high],
            pivot: Some(store),
            left_partition: span(low, store),
            right_partition: span(store + 1, high + 1),
            current_range: range,
            swapped: moved,
            ..QuickState::plain(array)
        },
    );

    rec.record(
        QuickEvent::PartitionComplete,
        format!(
            "Partition complete! Pivot {} is in its correct position {}",
            pivot, store
        ),
        QuickState {
            pivot: Some(store),
            left_partition: span(low, store),
            right_partition: span(store + 1, high + 1),
            ..QuickState::plain(array)
        },
    );

    store
}
