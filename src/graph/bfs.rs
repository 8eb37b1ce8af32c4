//! Breadth-first traversal tracer
//!
//! Vertices are marked visited as they are enqueued (the start vertex before
//! the loop begins), so each vertex enters the queue at most once.  `level` is
//! the hop distance from the start to the vertex being processed, which is
//! the BFS layer it belongs to.

use super::Graph;
use crate::error::TraceError;
use crate::snapshot::{Recorder, Trace, TraceEvent};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BfsEvent {
    Start,
    Dequeue,
    Visit,
    ExploreEdge,
    Enqueue,
    Complete,
}

impl TraceEvent for BfsEvent {
    fn is_terminal(self) -> bool {
        matches!(self, BfsEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsState {
    pub graph: Graph,
    pub current_vertex: Option<usize>,
    /// Front to back
    pub queue: Vec<usize>,
    pub visited: Vec<usize>,
    pub path: Vec<usize>,
    pub exploring_edge: Option<(usize, usize)>,
    pub level: usize,
}

pub fn trace(graph: &Graph, start: usize) -> Result<Trace<BfsEvent, BfsState>, TraceError> {
    graph.check_vertex(start)?;

    let mut rec = Recorder::new("bfs");
    // hop distance, set when a vertex is discovered; doubles as the visited mark
    let mut depth: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    let mut path: Vec<usize> = Vec::new();

    let state = |current: Option<usize>,
                 queue: &VecDeque<usize>,
                 depth: &[Option<usize>],
                 path: &[usize],
                 edge: Option<(usize, usize)>,
                 level: usize| BfsState {
        graph: graph.clone(),
        current_vertex: current,
        queue: queue.iter().copied().collect(),
        visited: depth
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|_| v))
            .collect(),
        path: path.to_vec(),
        exploring_edge: edge,
        level,
    };

    rec.record(
        BfsEvent::Start,
        format!("Starting BFS from vertex {}", start),
        state(None, &queue, &depth, &path, None, 0),
    );

    depth[start] = Some(0);
    let mut deepest = 0;

    while let Some(current) = queue.pop_front() {
        let level = depth[current].unwrap_or(0);
        deepest = deepest.max(level);
        path.push(current);

        rec.record(
            BfsEvent::Dequeue,
            format!("Dequeue vertex {} from front of queue", current),
            state(Some(current), &queue, &depth, &path, None, level),
        );
        rec.record(
            BfsEvent::Visit,
            format!("Visit vertex {} at level {}", current, level),
            state(Some(current), &queue, &depth, &path, None, level),
        );

        let mut neighbors = graph.neighbors(current).to_vec();
        neighbors.sort_unstable();
        for neighbor in neighbors {
            if depth[neighbor].is_some() {
                continue;
            }
            rec.record(
                BfsEvent::ExploreEdge,
                format!("Explore edge ({}, {})", current, neighbor),
                state(
                    Some(current),
                    &queue,
                    &depth,
                    &path,
                    Some((current, neighbor)),
                    level,
                ),
            );
            depth[neighbor] = Some(level + 1);
            queue.push_back(neighbor);
            rec.record(
                BfsEvent::Enqueue,
                format!("Enqueue vertex {} to back of queue", neighbor),
                state(Some(current), &queue, &depth, &path, None, level),
            );
        }
    }

    let description = format!("BFS complete! Visited order: {:?}", path);
    Ok(rec.finish(
        BfsEvent::Complete,
        description,
        state(None, &queue, &depth, &path, None, deepest),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_hop_distance() {
        // path graph 0 - 1 - 2 - 3
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)], true).unwrap();
        let trace = trace(&graph, 0).unwrap();
        let levels: Vec<(usize, usize)> = trace
            .iter()
            .filter(|s| s.event == BfsEvent::Visit)
            .filter_map(|s| s.state.current_vertex.map(|v| (v, s.state.level)))
            .collect();
        assert_eq!(levels, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(trace.last().state.level, 3);
    }

    #[test]
    fn test_each_vertex_enqueued_once() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)], true).unwrap();
        let trace = trace(&graph, 0).unwrap();
        assert_eq!(trace.count(BfsEvent::Enqueue), 3);
        assert_eq!(trace.count(BfsEvent::Dequeue), 4);
    }

    #[test]
    fn test_start_is_not_marked_in_first_snapshot() {
        let graph = Graph::from_edges(2, &[(0, 1)], true).unwrap();
        let trace = trace(&graph, 1).unwrap();
        assert!(trace.first().state.visited.is_empty());
        assert_eq!(trace.first().state.queue, vec![1]);
        assert_eq!(trace.last().state.path, vec![1, 0]);
    }
}
