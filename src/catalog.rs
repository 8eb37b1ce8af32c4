//! Type-erased dispatch over every tracer
//!
//! Each tracer returns its own strongly typed [`Trace`].  Front ends that
//! pick the algorithm at runtime (the CLI, the replay viewer) go through
//! [`Request::run`] instead, which produces a [`Replay`]: the same snapshots
//! with the algorithm-specific state converted to JSON values.

use crate::dynamic::fibonacci;
use crate::error::TraceError;
use crate::graph::{bfs, dfs, dijkstra, Graph, TraversalAlgorithm, WeightedGraph};
use crate::linear::queue::{self, QueueOp};
use crate::linear::stack::{self, StackOp};
use crate::searching::{binary, linear, SearchAlgorithm};
use crate::snapshot::{Trace, TraceEvent};
use crate::sorting::{bubble, heap, insertion, merge, quick, radix, selection, SortAlgorithm};
use crate::tree::{Bst, TraversalOrder};
use serde::Serialize;
use serde_json::{Map, Value};

/// What to do with the tree once the values are in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BstAction {
    /// Trace the insertions themselves
    Insert,
    /// Build the tree silently, then trace a search
    Search(i64),
    /// Build the tree silently, then trace a traversal
    Traverse(TraversalOrder),
}

/// One tracer invocation with its input
#[derive(Debug, Clone)]
pub enum Request {
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i64>,
    },
    Search {
        algorithm: SearchAlgorithm,
        values: Vec<i64>,
        target: i64,
    },
    Traverse {
        algorithm: TraversalAlgorithm,
        graph: Graph,
        start: usize,
    },
    Dijkstra {
        graph: WeightedGraph,
        start: String,
    },
    Bst {
        values: Vec<i64>,
        action: BstAction,
    },
    Stack {
        ops: Vec<StackOp<i64>>,
    },
    Queue {
        ops: Vec<QueueOp<i64>>,
    },
    Fibonacci {
        n: u32,
        memoized: bool,
    },
}

impl Request {
    /// Human-readable algorithm name, used as the replay title
    pub fn title(&self) -> String {
        match self {
            Request::Sort { algorithm, .. } => format!("{}", algorithm),
            Request::Search { algorithm, .. } => match algorithm {
                SearchAlgorithm::Binary => "binary search".to_string(),
                SearchAlgorithm::Linear => "linear search".to_string(),
            },
            Request::Traverse { algorithm, .. } => match algorithm {
                TraversalAlgorithm::Dfs => "depth-first search".to_string(),
                TraversalAlgorithm::Bfs => "breadth-first search".to_string(),
            },
            Request::Dijkstra { .. } => "dijkstra shortest paths".to_string(),
            Request::Bst { action, .. } => match action {
                BstAction::Insert => "bst insert".to_string(),
                BstAction::Search(_) => "bst search".to_string(),
                BstAction::Traverse(order) => format!("bst {} traversal", order),
            },
            Request::Stack { .. } => "stack operations".to_string(),
            Request::Queue { .. } => "queue operations".to_string(),
            Request::Fibonacci { memoized, .. } => {
                if *memoized {
                    "fibonacci (memoized recursion)".to_string()
                } else {
                    "fibonacci (bottom-up table)".to_string()
                }
            }
        }
    }

    /// Run the tracer and erase its types
    pub fn run(&self) -> Result<Replay, TraceError> {
        let title = self.title();
        match self {
            Request::Sort { algorithm, values } => match algorithm {
                SortAlgorithm::Bubble => Replay::from_trace(title, &bubble::trace(values)),
                SortAlgorithm::Selection => Replay::from_trace(title, &selection::trace(values)),
                SortAlgorithm::Insertion => Replay::from_trace(title, &insertion::trace(values)),
                SortAlgorithm::Merge => Replay::from_trace(title, &merge::trace(values)),
                SortAlgorithm::Quick => Replay::from_trace(title, &quick::trace(values)),
                SortAlgorithm::Heap => Replay::from_trace(title, &heap::trace(values)),
                SortAlgorithm::Radix => {
                    let digits = values
                        .iter()
                        .map(|&v| {
                            u64::try_from(v).map_err(|_| TraceError::NegativeRadixValue { value: v })
                        })
                        .collect::<Result<Vec<u64>, _>>()?;
                    Replay::from_trace(title, &radix::trace(&digits))
                }
            },
            Request::Search {
                algorithm,
                values,
                target,
            } => match algorithm {
                SearchAlgorithm::Binary => {
                    Replay::from_trace(title, &binary::trace(values, *target)?)
                }
                SearchAlgorithm::Linear => {
                    Replay::from_trace(title, &linear::trace(values, *target))
                }
            },
            Request::Traverse {
                algorithm,
                graph,
                start,
            } => match algorithm {
                TraversalAlgorithm::Dfs => Replay::from_trace(title, &dfs::trace(graph, *start)?),
                TraversalAlgorithm::Bfs => Replay::from_trace(title, &bfs::trace(graph, *start)?),
            },
            Request::Dijkstra { graph, start } => {
                Replay::from_trace(title, &dijkstra::trace(graph, start)?)
            }
            Request::Bst { values, action } => match action {
                BstAction::Insert => {
                    let mut tree = Bst::new();
                    Replay::from_trace(title, &tree.insert_all(values))
                }
                BstAction::Search(target) => {
                    Replay::from_trace(title, &Bst::from_keys(values).search(target))
                }
                BstAction::Traverse(order) => {
                    Replay::from_trace(title, &Bst::from_keys(values).traversal(*order))
                }
            },
            Request::Stack { ops } => Replay::from_trace(title, &stack::trace(ops)),
            Request::Queue { ops } => Replay::from_trace(title, &queue::trace(ops)),
            Request::Fibonacci { n, memoized } => {
                if *memoized {
                    Replay::from_trace(title, &fibonacci::trace_memoized(*n)?)
                } else {
                    Replay::from_trace(title, &fibonacci::trace_table(*n)?)
                }
            }
        }
    }
}

/// A trace with its state erased to JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    pub title: String,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub event: String,
    pub description: String,
    /// Every snapshot field other than the three above
    pub state: Map<String, Value>,
}

impl Replay {
    pub fn from_trace<E, S>(
        title: impl Into<String>,
        trace: &Trace<E, S>,
    ) -> Result<Self, TraceError>
    where
        E: TraceEvent,
        S: Serialize,
    {
        let frames = trace
            .iter()
            .map(|snapshot| -> Result<ReplayFrame, TraceError> {
                let Value::Object(mut fields) = serde_json::to_value(snapshot)? else {
                    return Err(TraceError::Serialization {
                        message: format!("step {} did not serialize to an object", snapshot.step),
                    });
                };
                let event = match fields.remove("event") {
                    Some(Value::String(tag)) => tag,
                    other => {
                        return Err(TraceError::Serialization {
                            message: format!(
                                "step {} has a non-string event {:?}",
                                snapshot.step, other
                            ),
                        })
                    }
                };
                fields.remove("step");
                fields.remove("description");
                Ok(ReplayFrame {
                    step: snapshot.step,
                    event,
                    description: snapshot.description.clone(),
                    state: fields,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Replay {
            title: title.into(),
            frames,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, step: usize) -> Option<&ReplayFrame> {
        self.frames.get(step)
    }

    pub fn last(&self) -> Option<&ReplayFrame> {
        self.frames.last()
    }
}

impl ReplayFrame {
    /// The `array` field as integers, if this frame has one
    pub fn array(&self) -> Option<Vec<i64>> {
        self.state
            .get("array")?
            .as_array()?
            .iter()
            .map(Value::as_i64)
            .collect()
    }

    /// Indices listed under `key`, empty if absent
    pub fn indices(&self, key: &str) -> Vec<usize> {
        match self.state.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_u64)
                .map(|i| i as usize)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// One line per step, as printed by the text output format
    pub fn summary(&self) -> String {
        format!("[{:>3}] {:<20} {}", self.step, self.event, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_split_header_from_state() {
        let request = Request::Sort {
            algorithm: SortAlgorithm::Bubble,
            values: vec![2, 1],
        };
        let replay = request.run().unwrap();
        assert_eq!(replay.title, "bubble sort");
        let first = replay.frame(0).unwrap();
        assert_eq!(first.event, "initial");
        assert!(!first.state.contains_key("step"));
        assert_eq!(first.array(), Some(vec![2, 1]));
        assert_eq!(replay.last().unwrap().array(), Some(vec![1, 2]));
    }

    #[test]
    fn test_radix_rejects_negative() {
        let request = Request::Sort {
            algorithm: SortAlgorithm::Radix,
            values: vec![3, -1],
        };
        assert_eq!(
            request.run().unwrap_err(),
            TraceError::NegativeRadixValue { value: -1 }
        );
    }

    #[test]
    fn test_bst_search_request() {
        let request = Request::Bst {
            values: vec![50, 30, 70],
            action: BstAction::Search(70),
        };
        let replay = request.run().unwrap();
        assert_eq!(replay.last().unwrap().event, "found");
    }

    #[test]
    fn test_comparing_indices() {
        let request = Request::Search {
            algorithm: SearchAlgorithm::Linear,
            values: vec![4, 5],
            target: 5,
        };
        let replay = request.run().unwrap();
        assert_eq!(replay.frame(1).unwrap().indices("comparing"), vec![0]);
    }
}
