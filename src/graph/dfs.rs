//! Depth-first traversal tracer
//!
//! Uses an explicit stack rather than recursion.  A vertex is marked visited
//! when it is popped, not when it is pushed, so the same vertex can sit on the
//! stack more than once; the stale copies surface as `already_visited`.
//! Neighbours are pushed in descending id order, which makes the traversal
//! pop them in ascending order.

use super::Graph;
use crate::error::TraceError;
use crate::snapshot::{Recorder, Trace, TraceEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DfsEvent {
    Start,
    Pop,
    Visit,
    ExploreEdge,
    Push,
    AlreadyVisited,
    Complete,
}

impl TraceEvent for DfsEvent {
    fn is_terminal(self) -> bool {
        matches!(self, DfsEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsState {
    pub graph: Graph,
    pub current_vertex: Option<usize>,
    /// Bottom to top
    pub stack: Vec<usize>,
    /// Visited vertices, ascending
    pub visited: Vec<usize>,
    /// Visit order
    pub path: Vec<usize>,
    pub exploring_edge: Option<(usize, usize)>,
}

pub fn trace(graph: &Graph, start: usize) -> Result<Trace<DfsEvent, DfsState>, TraceError> {
    graph.check_vertex(start)?;

    let mut rec = Recorder::new("dfs");
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    let mut path: Vec<usize> = Vec::new();

    let state = |current: Option<usize>,
                 stack: &[usize],
                 visited: &[bool],
                 path: &[usize],
                 edge: Option<(usize, usize)>| DfsState {
        graph: graph.clone(),
        current_vertex: current,
        stack: stack.to_vec(),
        visited: visited
            .iter()
            .enumerate()
            .filter_map(|(v, seen)| seen.then_some(v))
            .collect(),
        path: path.to_vec(),
        exploring_edge: edge,
    };

    rec.record(
        DfsEvent::Start,
        format!("Starting DFS from vertex {}", start),
        state(None, &stack, &visited, &path, None),
    );

    while let Some(current) = stack.pop() {
        rec.record(
            DfsEvent::Pop,
            format!("Pop vertex {} from stack", current),
            state(Some(current), &stack, &visited, &path, None),
        );

        if visited[current] {
            rec.record(
                DfsEvent::AlreadyVisited,
                format!("Vertex {} already visited, skip", current),
                state(Some(current), &stack, &visited, &path, None),
            );
            continue;
        }

        visited[current] = true;
        path.push(current);
        rec.record(
            DfsEvent::Visit,
            format!("Visit vertex {} and mark as visited", current),
            state(Some(current), &stack, &visited, &path, None),
        );

        let mut neighbors = graph.neighbors(current).to_vec();
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        for neighbor in neighbors {
            if visited[neighbor] {
                continue;
            }
            rec.record(
                DfsEvent::ExploreEdge,
                format!("Explore edge ({}, {})", current, neighbor),
                state(
                    Some(current),
                    &stack,
                    &visited,
                    &path,
                    Some((current, neighbor)),
                ),
            );
            stack.push(neighbor);
            rec.record(
                DfsEvent::Push,
                format!("Push vertex {} to stack", neighbor),
                state(Some(current), &stack, &visited, &path, None),
            );
        }
    }

    let description = format!("DFS complete! Visited order: {:?}", path);
    Ok(rec.finish(
        DfsEvent::Complete,
        description,
        state(None, &stack, &visited, &path, None),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_stack_entries_are_skipped() {
        // triangle: 2 is pushed twice (from 0 and from 1)
        let graph = Graph::from_edges(3, &[(0, 1), (0, 2), (1, 2)], true).unwrap();
        let trace = trace(&graph, 0).unwrap();
        assert_eq!(trace.last().state.path, vec![0, 1, 2]);
        assert_eq!(trace.count(DfsEvent::AlreadyVisited), 1);
    }

    #[test]
    fn test_each_push_follows_explore() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (2, 3)], true).unwrap();
        let trace = trace(&graph, 0).unwrap();
        let snaps = trace.snapshots();
        for (i, snap) in snaps.iter().enumerate() {
            if snap.event == DfsEvent::Push {
                assert_eq!(snaps[i - 1].event, DfsEvent::ExploreEdge);
            }
        }
        assert_eq!(trace.count(DfsEvent::Push), 3);
    }

    #[test]
    fn test_unreachable_vertices_are_not_visited() {
        let graph = Graph::from_edges(4, &[(0, 1)], true).unwrap();
        let trace = trace(&graph, 0).unwrap();
        assert_eq!(trace.last().state.visited, vec![0, 1]);
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = Graph::new(2);
        assert!(trace(&graph, 5).is_err());
    }
}
