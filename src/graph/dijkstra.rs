//! Dijkstra shortest-path tracer
//!
//! The frontier is a binary heap with lazy deletion: a relaxation pushes a
//! new `(distance, node)` entry without removing the old one, and entries for
//! nodes that have already been settled are dropped silently when popped.
//! Equal distances pop in node insertion order.

use super::WeightedGraph;
use crate::error::TraceError;
use crate::snapshot::{Recorder, Trace, TraceEvent};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DijkstraEvent {
    Initialization,
    VisitingNode,
    ExaminingEdge,
    DistanceUpdated,
    DistanceNotUpdated,
    Completed,
}

impl TraceEvent for DijkstraEvent {
    fn is_terminal(self) -> bool {
        matches!(self, DijkstraEvent::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraState {
    pub graph: BTreeMap<String, Vec<(String, u64)>>,
    /// Tentative distances; `None` is infinity
    pub distances: BTreeMap<String, Option<u64>>,
    /// Predecessor on the best known path
    pub previous: BTreeMap<String, String>,
    /// Settled nodes in settle order
    pub visited: Vec<String>,
    pub current_node: Option<String>,
    /// Live frontier entries, nearest first
    pub priority_queue: Vec<(u64, String)>,
    pub examining_edge: Option<(String, String, u64)>,
}

impl DijkstraState {
    pub fn distance(&self, label: &str) -> Option<u64> {
        self.distances.get(label).copied().flatten()
    }

    /// Walk the predecessor links back from `target`
    ///
    /// Returns `None` when the walk does not end at `start`, i.e. `target`
    /// is unreachable.
    pub fn path_to(&self, start: &str, target: &str) -> Option<Vec<String>> {
        if !self.distances.contains_key(target) {
            return None;
        }
        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(prev) = self.previous.get(current) {
            // predecessor links form a tree, so a longer walk means a cycle
            if path.len() > self.previous.len() {
                return None;
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        (path[0] == start).then_some(path)
    }
}

type Frontier = BinaryHeap<Reverse<(u64, usize)>>;

pub fn trace(
    graph: &WeightedGraph,
    start: &str,
) -> Result<Trace<DijkstraEvent, DijkstraState>, TraceError> {
    let source = graph.index_of(start)?;
    let n = graph.node_count();

    let mut rec = Recorder::new("dijkstra");
    let view = graph.to_view();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut order: Vec<usize> = Vec::new();
    let mut frontier = Frontier::new();

    dist[source] = Some(0);
    frontier.push(Reverse((0, source)));

    let state = |dist: &[Option<u64>],
                 prev: &[Option<usize>],
                 settled: &[bool],
                 order: &[usize],
                 frontier: &Frontier,
                 current: Option<usize>,
                 edge: Option<(usize, usize, u64)>| {
        let mut queue: Vec<(u64, usize)> = frontier
            .iter()
            .map(|Reverse(entry)| *entry)
            .filter(|&(_, node)| !settled[node])
            .collect();
        queue.sort_unstable();
        DijkstraState {
            graph: view.clone(),
            distances: dist
                .iter()
                .enumerate()
                .map(|(id, d)| (graph.label(id).to_string(), *d))
                .collect(),
            previous: prev
                .iter()
                .enumerate()
                .filter_map(|(id, p)| {
                    p.map(|p| (graph.label(id).to_string(), graph.label(p).to_string()))
                })
                .collect(),
            visited: order.iter().map(|&id| graph.label(id).to_string()).collect(),
            current_node: current.map(|id| graph.label(id).to_string()),
            priority_queue: queue
                .into_iter()
                .map(|(d, id)| (d, graph.label(id).to_string()))
                .collect(),
            examining_edge: edge.map(|(u, v, w)| {
                (graph.label(u).to_string(), graph.label(v).to_string(), w)
            }),
        }
    };

    rec.record(
        DijkstraEvent::Initialization,
        format!("Starting Dijkstra's algorithm from node {}", start),
        state(&dist, &prev, &settled, &order, &frontier, Some(source), None),
    );

    while let Some(Reverse((current_distance, current))) = frontier.pop() {
        if settled[current] {
            continue;
        }
        settled[current] = true;
        order.push(current);

        rec.record(
            DijkstraEvent::VisitingNode,
            format!(
                "Visiting node {} with distance {}",
                graph.label(current),
                current_distance
            ),
            state(&dist, &prev, &settled, &order, &frontier, Some(current), None),
        );

        for &(neighbor, weight) in graph.neighbors(current) {
            if settled[neighbor] {
                continue;
            }
            let edge = Some((current, neighbor, weight));
            rec.record(
                DijkstraEvent::ExaminingEdge,
                format!(
                    "Examining edge from {} to {} with weight {}",
                    graph.label(current),
                    graph.label(neighbor),
                    weight
                ),
                state(&dist, &prev, &settled, &order, &frontier, Some(current), edge),
            );

            let candidate = current_distance.checked_add(weight).ok_or_else(|| {
                TraceError::ArithmeticOverflow {
                    operation: format!(
                        "distance {} + weight {}",
                        current_distance, weight
                    ),
                }
            })?;

            let improves = dist[neighbor].map_or(true, |known| candidate < known);
            if improves {
                dist[neighbor] = Some(candidate);
                prev[neighbor] = Some(current);
                frontier.push(Reverse((candidate, neighbor)));
                rec.record(
                    DijkstraEvent::DistanceUpdated,
                    format!(
                        "Updated distance to {}: {} (via {})",
                        graph.label(neighbor),
                        candidate,
                        graph.label(current)
                    ),
                    state(&dist, &prev, &settled, &order, &frontier, Some(current), edge),
                );
            } else {
                let known = dist[neighbor].unwrap_or(candidate);
                rec.record(
                    DijkstraEvent::DistanceNotUpdated,
                    format!(
                        "Distance to {} not updated: {} >= {}",
                        graph.label(neighbor),
                        candidate,
                        known
                    ),
                    state(&dist, &prev, &settled, &order, &frontier, Some(current), edge),
                );
            }
        }
    }

    Ok(rec.finish(
        DijkstraEvent::Completed,
        "Dijkstra's algorithm completed - shortest paths found",
        state(&dist, &prev, &settled, &order, &frontier, None, None),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.add_undirected_edge("A", "B", 1);
        graph.add_undirected_edge("B", "C", 1);
        graph.add_undirected_edge("A", "C", 5);
        graph
    }

    #[test]
    fn test_longer_direct_edge_is_not_taken() {
        let trace = trace(&line(), "A").unwrap();
        let last = &trace.last().state;
        assert_eq!(last.distance("C"), Some(2));
        assert_eq!(
            last.path_to("A", "C"),
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
        assert_eq!(trace.count(DijkstraEvent::DistanceUpdated), 3);
        assert!(last.priority_queue.is_empty());
    }

    #[test]
    fn test_worse_route_is_not_updated() {
        let mut graph = WeightedGraph::new();
        graph.add_undirected_edge("A", "B", 1);
        graph.add_undirected_edge("A", "C", 1);
        graph.add_undirected_edge("B", "C", 5);
        let trace = trace(&graph, "A").unwrap();
        assert_eq!(trace.count(DijkstraEvent::DistanceNotUpdated), 1);
        assert_eq!(trace.last().state.distance("C"), Some(1));
    }

    #[test]
    fn test_unreachable_node_has_no_path() {
        let mut graph = line();
        graph.add_node("Z");
        let trace = trace(&graph, "A").unwrap();
        let last = &trace.last().state;
        assert_eq!(last.distance("Z"), None);
        assert_eq!(last.path_to("A", "Z"), None);
        assert_eq!(last.visited, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_start() {
        assert_eq!(
            trace(&line(), "Q").unwrap_err(),
            TraceError::UnknownNode {
                label: "Q".to_string()
            }
        );
    }

    #[test]
    fn test_weight_overflow() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", u64::MAX);
        graph.add_edge("B", "C", 1);
        assert!(matches!(
            trace(&graph, "A"),
            Err(TraceError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_update_is_preceded_by_examine() {
        let trace = trace(&line(), "A").unwrap();
        let snaps = trace.snapshots();
        for (i, snap) in snaps.iter().enumerate() {
            if matches!(
                snap.event,
                DijkstraEvent::DistanceUpdated | DijkstraEvent::DistanceNotUpdated
            ) {
                assert_eq!(snaps[i - 1].event, DijkstraEvent::ExaminingEdge);
            }
        }
    }
}
