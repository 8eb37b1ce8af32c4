//! Merge sort tracer
//!
//! Top-down recursion over inclusive index ranges.  The recursion level of
//! the range being processed travels with every snapshot so a renderer can
//! lay out the divide tree.  Ties are resolved in favour of the left run,
//! which keeps the sort stable.

use crate::snapshot::{span, Element, Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeEvent {
    Initial,
    Divide,
    MergeStart,
    Compare,
    Place,
    CopyRemaining,
    MergeComplete,
    Complete,
}

impl TraceEvent for MergeEvent {
    fn is_terminal(self) -> bool {
        matches!(self, MergeEvent::Complete)
    }
}

/// Which run an element was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeState<T> {
    pub array: Vec<T>,
    pub comparing: Vec<usize>,
    pub left_subarray: Vec<usize>,
    pub right_subarray: Vec<usize>,
    pub current_merge: Vec<usize>,
    pub recursion_level: usize,
    pub split: Option<usize>,
    pub side: Option<Side>,
}

impl<T: Clone> MergeState<T> {
    fn plain(array: &[T], level: usize) -> Self {
        MergeState {
            array: array.to_vec(),
            comparing: vec![],
            left_subarray: vec![],
            right_subarray: vec![],
            current_merge: vec![],
            recursion_level: level,
            split: None,
            side: None,
        }
    }
}

type MergeRecorder<T> = Recorder<MergeEvent, MergeState<T>>;

pub fn trace<T: Element>(values: &[T]) -> Trace<MergeEvent, MergeState<T>> {
    let mut array = values.to_vec();
    let mut rec = Recorder::new("merge_sort");

    rec.record(
        MergeEvent::Initial,
        "Initial array - merge sort will recursively divide and then merge",
        MergeState::plain(&array, 0),
    );

    if !array.is_empty() {
        let right = array.len() - 1;
        sort_range(&mut array, 0, right, 0, &mut rec);
    }

    rec.finish(
        MergeEvent::Complete,
        "Merge sort complete! Array is now fully sorted",
        MergeState::plain(&array, 0),
    )
}

fn sort_range<T: Element>(
    array: &mut [T],
    left: usize,
    right: usize,
    level: usize,
    rec: &mut MergeRecorder<T>,
) {
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;
    rec.record(
        MergeEvent::Divide,
        format!(
            "Level {}: dividing range [{}..{}] at position {}",
            level, left, right, mid
        ),
        MergeState {
            left_subarray: span(left, mid + 1),
            right_subarray: span(mid + 1, right + 1),
            current_merge: span(left, right + 1),
            split: Some(mid),
            ..MergeState::plain(array, level)
        },
    );

    sort_range(array, left, mid, level + 1, rec);
    sort_range(array, mid + 1, right, level + 1, rec);
    merge(array, left, mid, right, level, rec);
}

fn merge<T: Element>(
    array: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    level: usize,
    rec: &mut MergeRecorder<T>,
) {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();
    let left_ids = span(left, mid + 1);
    let right_ids = span(mid + 1, right + 1);

    rec.record(
        MergeEvent::MergeStart,
        format!(
            "Level {}: merging [{}..{}] and [{}..{}]",
            level,
            left,
            mid,
            mid + 1,
            right
        ),
        MergeState {
            left_subarray: left_ids.clone(),
            right_subarray: right_ids.clone(),
            current_merge: span(left, right + 1),
            split: Some(mid),
            ..MergeState::plain(array, level)
        },
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        rec.record(
            MergeEvent::Compare,
            format!(
                "Comparing {} (left) with {} (right)",
                left_run[i], right_run[j]
            ),
            MergeState {
                comparing: vec![left + i, mid + 1 + j],
                left_subarray: left_ids.clone(),
                right_subarray: right_ids.clone(),
                current_merge: vec![k],
                split: Some(mid),
                ..MergeState::plain(array, level)
            },
        );

        let side = if left_run[i] <= right_run[j] {
            array[k] = left_run[i].clone();
            i += 1;
            Side::Left
        } else {
            array[k] = right_run[j].clone();
            j += 1;
            Side::Right
        };

        rec.record(
            MergeEvent::Place,
            format!(
                "Placed {} from {} run at position {}",
                array[k],
                side.as_str(),
                k
            ),
            MergeState {
                left_subarray: left_ids.clone(),
                right_subarray: right_ids.clone(),
                current_merge: vec![k],
                split: Some(mid),
                side: Some(side),
                ..MergeState::plain(array, level)
            },
        );
        k += 1;
    }

    for (value, side) in left_run[i..]
        .iter()
        .map(|v| (v, Side::Left))
        .chain(right_run[j..].iter().map(|v| (v, Side::Right)))
    {
        array[k] = value.clone();
        rec.record(
            MergeEvent::CopyRemaining,
            format!(
                "Copying remaining element {} from {} run",
                value,
                side.as_str()
            ),
            MergeState {
                left_subarray: if side == Side::Left {
                    left_ids.clone()
                } else {
                    vec![]
                },
                right_subarray: if side == Side::Right {
                    right_ids.clone()
                } else {
                    vec![]
                },
                current_merge: vec![k],
                split: Some(mid),
                side: Some(side),
                ..MergeState::plain(array, level)
            },
        );
        k += 1;
    }

    rec.record(
        MergeEvent::MergeComplete,
        format!("Level {}: merge complete for [{}..{}]", level, left, right),
        MergeState {
            current_merge: span(left, right + 1),
            ..MergeState::plain(array, level)
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_precedes_halves() {
        let trace = trace(&[4, 3, 2, 1]);
        let first_divide = trace
            .iter()
            .find(|s| s.event == MergeEvent::Divide)
            .unwrap();
        assert_eq!(first_divide.state.split, Some(1));
        assert_eq!(first_divide.state.recursion_level, 0);
        assert_eq!(first_divide.state.left_subarray, vec![0, 1]);
        assert_eq!(first_divide.state.right_subarray, vec![2, 3]);
        assert_eq!(trace.count(MergeEvent::Divide), 3);
        assert_eq!(trace.last().state.array, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_compare_is_followed_by_place() {
        let trace = trace(&[5, 2, 9, 1, 7]);
        let snaps = trace.snapshots();
        for (i, snap) in snaps.iter().enumerate() {
            if snap.event == MergeEvent::Compare {
                assert_eq!(snaps[i + 1].event, MergeEvent::Place);
                assert!(snaps[i + 1].state.side.is_some());
            }
        }
    }

    #[test]
    fn test_tie_takes_left() {
        let trace = trace(&[2, 2]);
        let place = trace
            .iter()
            .find(|s| s.event == MergeEvent::Place)
            .unwrap();
        assert_eq!(place.state.side, Some(Side::Left));
    }

    #[test]
    fn test_levels_deepen() {
        let trace = trace(&[8, 7, 6, 5, 4, 3, 2, 1]);
        let max_level = trace
            .iter()
            .filter(|s| s.event == MergeEvent::Divide)
            .map(|s| s.state.recursion_level)
            .max();
        assert_eq!(max_level, Some(2));
    }
}
