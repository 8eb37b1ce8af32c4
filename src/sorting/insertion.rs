//! Insertion sort tracer
//!
//! The element being inserted is lifted out of the array and carried in
//! `current_value`; while it is held, the slot it will land in contains a
//! stale duplicate produced by the last shift.

use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionEvent {
    Initial,
    Select,
    Compare,
    Shift,
    Insert,
    Complete,
}

impl TraceEvent for InsertionEvent {
    fn is_terminal(self) -> bool {
        matches!(self, InsertionEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionState<T> {
    pub array: Vec<T>,
    pub comparing: Vec<usize>,
    pub current_value: Option<T>,
    pub sorted_boundary: usize,
    pub moved: bool,
}

pub fn trace<T: Element>(values: &[T]) -> Trace<InsertionEvent, InsertionState<T>> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut rec = Recorder::new("insertion_sort");

    rec.record(
        InsertionEvent::Initial,
        "Initial array state - the first element is considered sorted",
        InsertionState {
            array: array.clone(),
            comparing: vec![],
            current_value: None,
            sorted_boundary: n.min(1),
            moved: false,
        },
    );

    for i in 1..n {
        let current = array[i].clone();
        rec.record(
            InsertionEvent::Select,
            format!("Processing element {} at position {}", current, i),
            InsertionState {
                array: array.clone(),
                comparing: vec![i],
                current_value: Some(current.clone()),
                sorted_boundary: i,
                moved: false,
            },
        );

        // `hole` is where `current` would land if inserted now
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            rec.record(
                InsertionEvent::Compare,
                format!("Comparing {} with {} at position {}", current, array[j], j),
                InsertionState {
                    array: array.clone(),
                    comparing: vec![j, hole],
                    current_value: Some(current.clone()),
                    sorted_boundary: i,
                    moved: false,
                },
            );

            if array[j] <= current {
                break;
            }

            array[hole] = array[j].clone();
            rec.record(
                InsertionEvent::Shift,
                format!("Shifting {} right to position {}", array[hole], hole),
                InsertionState {
                    array: array.clone(),
                    comparing: vec![hole],
                    current_value: Some(current.clone()),
                    sorted_boundary: i,
                    moved: true,
                },
            );
            hole = j;
        }

        array[hole] = current.clone();
        rec.record(
            InsertionEvent::Insert,
            format!(
                "Inserted {} at position {}. Sorted portion now has {} elements",
                current,
                hole,
                i + 1
            ),
            InsertionState {
                array: array.clone(),
                comparing: vec![hole],
                current_value: None,
                sorted_boundary: i + 1,
                moved: true,
            },
        );
    }

    rec.finish(
        InsertionEvent::Complete,
        "Insertion sort complete! All elements are in their correct positions",
        InsertionState {
            array,
            comparing: vec![],
            current_value: None,
            sorted_boundary: n,
            moved: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_then_insert() {
        let trace = trace(&[2, 1]);
        let events: Vec<_> = trace.events().collect();
        assert_eq!(
            events,
            vec![
                InsertionEvent::Initial,
                InsertionEvent::Select,
                InsertionEvent::Compare,
                InsertionEvent::Shift,
                InsertionEvent::Insert,
                InsertionEvent::Complete,
            ]
        );
        assert_eq!(trace.last().state.array, vec![1, 2]);
    }

    #[test]
    fn test_stopping_comparison_is_recorded() {
        // 3 is compared against 2 and stays put
        let trace = trace(&[1, 2, 3]);
        assert_eq!(trace.count(InsertionEvent::Compare), 2);
        assert_eq!(trace.count(InsertionEvent::Shift), 0);
    }

    #[test]
    fn test_equal_elements_do_not_shift() {
        let trace = trace(&[4, 4]);
        assert_eq!(trace.count(InsertionEvent::Shift), 0);
    }
}
