//! Graph representations and instrumented graph algorithms
//!
//! - [`Graph`]: unweighted, vertices are `0..vertex_count`, used by [`dfs`]
//!   and [`bfs`]
//! - [`WeightedGraph`]: labelled nodes with non-negative integer weights,
//!   used by [`dijkstra`]
//!
//! Both are built by the caller and only read by the tracers.  Every snapshot
//! carries its own copy of the graph so a trace stands on its own.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use crate::error::TraceError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalAlgorithm {
    Dfs,
    Bfs,
}

/// Adjacency-list graph over dense vertex ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    vertices: usize,
    adjacency_list: Vec<Vec<usize>>,
    /// Directed pairs in insertion order, each recorded once
    edges: Vec<(usize, usize)>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            adjacency_list: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Build a graph from `(u, v)` pairs
    pub fn from_edges(
        vertices: usize,
        edges: &[(usize, usize)],
        bidirectional: bool,
    ) -> Result<Self, TraceError> {
        let mut graph = Graph::new(vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v, bidirectional)?;
        }
        Ok(graph)
    }

    /// Add `u -> v`, and `v -> u` as well when `bidirectional`
    ///
    /// Adding an edge that already exists changes nothing.
    pub fn add_edge(&mut self, u: usize, v: usize, bidirectional: bool) -> Result<(), TraceError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.insert_directed(u, v);
        if bidirectional {
            self.insert_directed(v, u);
        }
        Ok(())
    }

    fn insert_directed(&mut self, u: usize, v: usize) {
        if !self.adjacency_list[u].contains(&v) {
            self.adjacency_list[u].push(v);
        }
        if !self.edges.contains(&(u, v)) {
            self.edges.push((u, v));
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency_list
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn check_vertex(&self, vertex: usize) -> Result<(), TraceError> {
        if vertex < self.vertices {
            Ok(())
        } else {
            Err(TraceError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertices,
            })
        }
    }
}

/// Graph with labelled nodes and weighted directed edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    labels: Vec<String>,
    adjacency: Vec<Vec<(usize, u64)>>,
    index: FxHashMap<String, usize>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `label`, adding the node if it is new
    pub fn add_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.adjacency.push(Vec::new());
        self.index.insert(label.to_string(), id);
        id
    }

    /// Add a directed edge; neighbours are examined in insertion order
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.adjacency[from].push((to, weight));
    }

    /// Add the edge in both directions
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: u64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn index_of(&self, label: &str) -> Result<usize, TraceError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| TraceError::UnknownNode {
                label: label.to_string(),
            })
    }

    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn neighbors(&self, id: usize) -> &[(usize, u64)] {
        &self.adjacency[id]
    }

    /// Label-keyed adjacency, the form stored in snapshots
    pub fn to_view(&self) -> BTreeMap<String, Vec<(String, u64)>> {
        self.labels
            .iter()
            .zip(&self.adjacency)
            .map(|(label, edges)| {
                let edges = edges
                    .iter()
                    .map(|&(to, w)| (self.labels[to].clone(), w))
                    .collect();
                (label.clone(), edges)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_edges_recorded_once() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, true).unwrap();
        graph.add_edge(1, 0, true).unwrap();
        assert_eq!(graph.edges(), &[(0, 1), (1, 0)]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_directed_edge() {
        let graph = Graph::from_edges(3, &[(0, 2)], false).unwrap();
        assert_eq!(graph.neighbors(0), &[2]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut graph = Graph::new(2);
        assert_eq!(
            graph.add_edge(0, 2, true),
            Err(TraceError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_weighted_nodes_are_interned() {
        let mut graph = WeightedGraph::new();
        graph.add_undirected_edge("A", "B", 4);
        graph.add_undirected_edge("B", "C", 1);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.index_of("C"), Ok(2));
        assert_eq!(graph.neighbors(1), &[(0, 4), (2, 1)]);
        assert!(graph.index_of("Z").is_err());
    }
}
