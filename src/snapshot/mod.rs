//! Snapshot recording for step-by-step replay
//!
//! Every tracer in this crate is built on the same primitive: a [`Recorder`]
//! that appends an immutable [`Snapshot`] each time something observable
//! happens, and is closed with a terminal event to yield a [`Trace`].
//!
//! Snapshots own a full copy of the visualized structure.  The recorder takes
//! the state by value, so nothing a tracer does afterwards can reach back into
//! a snapshot that has already been emitted.

use crate::error::TraceError;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace_span, Span};

/// Values that can be sorted, searched and stored in a traced structure
pub trait Element: Ord + Clone + fmt::Debug + fmt::Display + Serialize {}

impl<T> Element for T where T: Ord + Clone + fmt::Debug + fmt::Display + Serialize {}

/// Per-algorithm event vocabulary
///
/// Implementors serialize as snake_case tags (`compare`, `eliminate_left`, ...).
pub trait TraceEvent: Copy + Eq + fmt::Debug + Serialize {
    /// Whether this event may close a trace
    fn is_terminal(self) -> bool;
}

/// One step of an algorithm's execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<E, S> {
    pub step: usize,
    pub event: E,
    pub description: String,
    #[serde(flatten)]
    pub state: S,
}

/// Complete, ordered output of one tracer invocation
///
/// A trace is never empty and always ends with a terminal event.  It can only
/// be produced by [`Recorder::finish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<E, S> {
    snapshots: Vec<Snapshot<E, S>>,
}

impl<E: TraceEvent, S> Trace<E, S> {
    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true for a finished trace
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot<E, S>] {
        &self.snapshots
    }

    pub fn get(&self, step: usize) -> Option<&Snapshot<E, S>> {
        self.snapshots.get(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<E, S>> {
        self.snapshots.iter()
    }

    /// The initial snapshot
    pub fn first(&self) -> &Snapshot<E, S> {
        &self.snapshots[0]
    }

    /// The terminal snapshot
    pub fn last(&self) -> &Snapshot<E, S> {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Event tags in step order
    pub fn events(&self) -> impl Iterator<Item = E> + '_ {
        self.snapshots.iter().map(|s| s.event)
    }

    /// Number of snapshots carrying `event`
    pub fn count(&self, event: E) -> usize {
        self.events().filter(|e| *e == event).count()
    }

    pub fn into_snapshots(self) -> Vec<Snapshot<E, S>> {
        self.snapshots
    }
}

impl<E: TraceEvent, S: Serialize> Trace<E, S> {
    /// Serialize to a compact JSON array
    pub fn to_json(&self) -> Result<String, TraceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON array
    pub fn to_json_pretty(&self) -> Result<String, TraceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a, E, S> IntoIterator for &'a Trace<E, S> {
    type Item = &'a Snapshot<E, S>;
    type IntoIter = std::slice::Iter<'a, Snapshot<E, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Accumulates snapshots for a single tracer run
///
/// The recorder is the explicit context threaded through recursive tracers
/// (merge sort, quick sort, heapify, tree traversal); step indices are
/// assigned here and nowhere else, so they are gapless by construction.
#[derive(Debug)]
pub struct Recorder<E, S> {
    snapshots: Vec<Snapshot<E, S>>,
    span: Span,
}

impl<E: TraceEvent, S> Recorder<E, S> {
    pub fn new(tracer: &'static str) -> Self {
        Recorder {
            snapshots: Vec::new(),
            span: trace_span!("tracer", tracer),
        }
    }

    /// Append a snapshot
    pub fn record(&mut self, event: E, description: impl Into<String>, state: S) {
        let step = self.snapshots.len();
        self.snapshots.push(Snapshot {
            step,
            event,
            description: description.into(),
            state,
        });
    }

    /// Index the next recorded snapshot will receive
    pub fn next_step(&self) -> usize {
        self.snapshots.len()
    }

    /// Event of the most recent snapshot
    pub fn last_event(&self) -> Option<E> {
        self.snapshots.last().map(|s| s.event)
    }

    /// Record the terminal snapshot and close the trace
    pub fn finish(mut self, event: E, description: impl Into<String>, state: S) -> Trace<E, S> {
        debug_assert!(event.is_terminal(), "{:?} cannot close a trace", event);
        self.record(event, description, state);
        let steps = self.snapshots.len();
        self.span.in_scope(|| debug!(steps, terminal = ?event, "trace finished"));
        Trace {
            snapshots: self.snapshots,
        }
    }
}

/// Indices `start..end` as a list, the form every range field uses
pub(crate) fn span(start: usize, end: usize) -> Vec<usize> {
    (start..end).collect()
}
