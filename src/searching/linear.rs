//! Linear search tracer

use crate::snapshot::{span, Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearSearchEvent {
    Initial,
    Compare,
    Continue,
    Found,
    NotFound,
}

impl TraceEvent for LinearSearchEvent {
    fn is_terminal(self) -> bool {
        matches!(self, LinearSearchEvent::Found | LinearSearchEvent::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearSearchState<T> {
    pub array: Vec<T>,
    pub target: T,
    pub current: Option<usize>,
    pub comparing: Vec<usize>,
    /// Indices already ruled out
    pub checked: Vec<usize>,
    pub found_index: Option<usize>,
}

pub fn trace<T: Element>(
    values: &[T],
    target: T,
) -> Trace<LinearSearchEvent, LinearSearchState<T>> {
    let mut rec = Recorder::new("linear_search");
    let state = |current: Option<usize>, comparing: Vec<usize>, checked: usize| LinearSearchState {
        array: values.to_vec(),
        target: target.clone(),
        current,
        comparing,
        checked: span(0, checked),
        found_index: None,
    };

    rec.record(
        LinearSearchEvent::Initial,
        format!("Searching for {} using linear search (sequential scan)", target),
        state(None, vec![], 0),
    );

    for (i, value) in values.iter().enumerate() {
        rec.record(
            LinearSearchEvent::Compare,
            format!("Checking arr[{}] = {} against target {}", i, value, target),
            state(Some(i), vec![i], i),
        );

        if *value == target {
            return rec.finish(
                LinearSearchEvent::Found,
                format!("Target {} found at index {}!", target, i),
                LinearSearchState {
                    found_index: Some(i),
                    ..state(Some(i), vec![i], i + 1)
                },
            );
        }

        rec.record(
            LinearSearchEvent::Continue,
            format!("arr[{}] != {}, continue searching...", i, target),
            state(Some(i), vec![], i + 1),
        );
    }

    rec.finish(
        LinearSearchEvent::NotFound,
        format!("Target {} not found after checking all elements", target),
        state(None, vec![], values.len()),
    )
}
