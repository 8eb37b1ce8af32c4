//! Selection sort tracer

use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEvent {
    Initial,
    PassStart,
    Compare,
    NewMinimum,
    Swap,
    AlreadyPlaced,
    Complete,
}

impl TraceEvent for SelectionEvent {
    fn is_terminal(self) -> bool {
        matches!(self, SelectionEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState<T> {
    pub array: Vec<T>,
    pub comparing: Vec<usize>,
    pub current_min: Option<usize>,
    /// Length of the sorted prefix
    pub sorted_boundary: usize,
    pub swapped: bool,
}

pub fn trace<T: Element>(values: &[T]) -> Trace<SelectionEvent, SelectionState<T>> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut rec = Recorder::new("selection_sort");

    rec.record(
        SelectionEvent::Initial,
        "Initial array state - selection sort moves the minimum of the unsorted part to its front",
        SelectionState {
            array: array.clone(),
            comparing: vec![],
            current_min: None,
            sorted_boundary: 0,
            swapped: false,
        },
    );

    for i in 0..n {
        let mut min_idx = i;
        rec.record(
            SelectionEvent::PassStart,
            format!(
                "Pass {}: looking for the minimum from position {} onwards",
                i + 1,
                i
            ),
            SelectionState {
                array: array.clone(),
                comparing: vec![i],
                current_min: Some(min_idx),
                sorted_boundary: i,
                swapped: false,
            },
        );

        for j in i + 1..n {
            rec.record(
                SelectionEvent::Compare,
                format!(
                    "Comparing {} at position {} with current minimum {} at position {}",
                    array[j], j, array[min_idx], min_idx
                ),
                SelectionState {
                    array: array.clone(),
                    comparing: vec![j, min_idx],
                    current_min: Some(min_idx),
                    sorted_boundary: i,
                    swapped: false,
                },
            );

            if array[j] < array[min_idx] {
                min_idx = j;
                rec.record(
                    SelectionEvent::NewMinimum,
                    format!("New minimum {} at position {}", array[min_idx], min_idx),
                    SelectionState {
                        array: array.clone(),
                        comparing: vec![j],
                        current_min: Some(min_idx),
                        sorted_boundary: i,
                        swapped: false,
                    },
                );
            }
        }

        if min_idx != i {
            array.swap(i, min_idx);
            rec.record(
                SelectionEvent::Swap,
                format!(
                    "Swapped minimum {} from position {} into position {}",
                    array[i], min_idx, i
                ),
                SelectionState {
                    array: array.clone(),
                    comparing: vec![i, min_idx],
                    current_min: Some(i),
                    sorted_boundary: i + 1,
                    swapped: true,
                },
            );
        } else {
            rec.record(
                SelectionEvent::AlreadyPlaced,
                format!("{} is already in its correct position", array[i]),
                SelectionState {
                    array: array.clone(),
                    comparing: vec![i],
                    current_min: Some(i),
                    sorted_boundary: i + 1,
                    swapped: false,
                },
            );
        }
    }

    rec.finish(
        SelectionEvent::Complete,
        "Selection sort complete! All elements are in their correct positions",
        SelectionState {
            array,
            comparing: vec![],
            current_min: None,
            sorted_boundary: n,
            swapped: false,
        },
    )
}
