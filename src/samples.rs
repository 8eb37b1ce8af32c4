//! Canonical demo inputs
//!
//! Used by the CLI when an input is omitted, and by tests that pin down the
//! well-known outcomes for these inputs.

use crate::error::TraceError;
use crate::graph::{Graph, WeightedGraph};
use crate::linear::queue::QueueOp;
use crate::linear::stack::StackOp;

pub const ARRAY: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

pub const SORTED_ARRAY: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

pub const SEARCH_TARGET: i64 = 25;

pub const GRAPH_VERTICES: usize = 6;

pub const GRAPH_EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)];

pub const WEIGHTED_EDGES: [(&str, &str, u64); 9] = [
    ("A", "B", 4),
    ("A", "C", 2),
    ("B", "C", 1),
    ("B", "D", 5),
    ("C", "D", 8),
    ("C", "E", 10),
    ("D", "E", 2),
    ("D", "F", 6),
    ("E", "F", 3),
];

pub const DIJKSTRA_START: &str = "A";

pub const BST_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

pub const BST_TARGET: i64 = 40;

/// Six vertices, undirected:
/// `{0:[1,2], 1:[0,3,4], 2:[0,5], 3:[1,4], 4:[1,3], 5:[2]}`
pub fn graph() -> Result<Graph, TraceError> {
    Graph::from_edges(GRAPH_VERTICES, &GRAPH_EDGES, true)
}

/// Six labelled nodes `A`..`F` with undirected weighted edges
pub fn weighted_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for label in ["A", "B", "C", "D", "E", "F"] {
        graph.add_node(label);
    }
    for (a, b, w) in WEIGHTED_EDGES {
        graph.add_undirected_edge(a, b, w);
    }
    graph
}

/// Ends with one pop too many
pub fn stack_ops() -> Vec<StackOp<i64>> {
    vec![
        StackOp::Push(10),
        StackOp::Push(20),
        StackOp::Push(30),
        StackOp::Peek,
        StackOp::Pop,
        StackOp::Push(40),
        StackOp::Pop,
        StackOp::Pop,
        StackOp::Pop,
        StackOp::Pop,
    ]
}

/// Ends with one dequeue too many
pub fn queue_ops() -> Vec<QueueOp<i64>> {
    vec![
        QueueOp::Enqueue(10),
        QueueOp::Enqueue(20),
        QueueOp::Enqueue(30),
        QueueOp::Front,
        QueueOp::Dequeue,
        QueueOp::Enqueue(40),
        QueueOp::Dequeue,
        QueueOp::Dequeue,
        QueueOp::Dequeue,
        QueueOp::Dequeue,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_adjacency() {
        let graph = graph().unwrap();
        assert_eq!(graph.neighbors(1), &[0, 3, 4]);
        assert_eq!(graph.neighbors(5), &[2]);
    }

    #[test]
    fn test_weighted_graph_insertion_order() {
        let graph = weighted_graph();
        let c = graph.index_of("C").unwrap();
        let labels: Vec<&str> = graph
            .neighbors(c)
            .iter()
            .map(|&(to, _)| graph.label(to))
            .collect();
        assert_eq!(labels, vec!["A", "B", "D", "E"]);
    }
}
