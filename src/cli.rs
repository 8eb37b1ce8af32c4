//! CLI definitions and argument types.

use std::path::PathBuf;

use algotrace::catalog::{BstAction, Request};
use algotrace::config::Limits;
use algotrace::error::TraceError;
use algotrace::graph::{Graph, TraversalAlgorithm, WeightedGraph};
use algotrace::linear::parse_ops;
use algotrace::samples;
use algotrace::searching::SearchAlgorithm;
use algotrace::sorting::SortAlgorithm;
use algotrace::tree::TraversalOrder;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "algotrace")]
#[command(about = "Step through classic algorithms one snapshot at a time")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How to present the trace
    #[arg(long, value_enum, global = true, default_value = "tui")]
    pub format: FormatArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trace a sorting algorithm
    Sort {
        #[arg(short, long, value_enum)]
        algorithm: SortArg,

        /// Comma-separated integers (defaults to the sample array)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<i64>>,
    },
    /// Trace a search
    Search {
        #[arg(short, long, value_enum)]
        algorithm: SearchArg,

        /// Comma-separated integers (defaults to the sorted sample array)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<i64>>,

        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<i64>,
    },
    /// Trace a depth- or breadth-first traversal
    Graph {
        #[arg(short, long, value_enum)]
        algorithm: TraversalArg,

        /// Number of vertices; required together with --edges
        #[arg(long, requires = "edges")]
        vertices: Option<usize>,

        /// Undirected edges such as "0-1,0-2"
        #[arg(long, requires = "vertices")]
        edges: Option<String>,

        #[arg(long, default_value = "0")]
        start: usize,
    },
    /// Trace Dijkstra's shortest paths
    Dijkstra {
        /// Undirected weighted edges such as "A-B:4,B-C:1"
        #[arg(long)]
        edges: Option<String>,

        #[arg(long, default_value = "A")]
        start: String,
    },
    /// Trace binary search tree operations
    Bst {
        /// Comma-separated integers, inserted in order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<i64>>,

        /// Build the tree, then trace a search for this value
        #[arg(long, conflicts_with = "traverse", allow_hyphen_values = true)]
        search: Option<i64>,

        /// Build the tree, then trace a traversal
        #[arg(long, value_enum)]
        traverse: Option<OrderArg>,
    },
    /// Trace stack operations
    Stack {
        /// Such as "push 10,pop,peek"
        #[arg(long)]
        ops: Option<String>,
    },
    /// Trace queue operations
    Queue {
        /// Such as "enqueue 10,dequeue,front"
        #[arg(long)]
        ops: Option<String>,
    },
    /// Trace a Fibonacci computation
    Fibonacci {
        #[arg(short)]
        n: u32,

        /// Top-down recursion with a memo instead of the bottom-up table
        #[arg(long)]
        memoized: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Interactive replay viewer
    #[default]
    Tui,
    /// The whole replay as JSON on stdout
    Json,
    /// One line per step on stdout
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

impl From<SortArg> for SortAlgorithm {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Bubble => SortAlgorithm::Bubble,
            SortArg::Selection => SortAlgorithm::Selection,
            SortArg::Insertion => SortAlgorithm::Insertion,
            SortArg::Merge => SortAlgorithm::Merge,
            SortArg::Quick => SortAlgorithm::Quick,
            SortArg::Heap => SortAlgorithm::Heap,
            SortArg::Radix => SortAlgorithm::Radix,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchArg {
    Binary,
    Linear,
}

impl From<SearchArg> for SearchAlgorithm {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Binary => SearchAlgorithm::Binary,
            SearchArg::Linear => SearchAlgorithm::Linear,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TraversalArg {
    Dfs,
    Bfs,
}

impl From<TraversalArg> for TraversalAlgorithm {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::Dfs => TraversalAlgorithm::Dfs,
            TraversalArg::Bfs => TraversalAlgorithm::Bfs,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OrderArg {
    Inorder,
    Preorder,
    Postorder,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Inorder => TraversalOrder::InOrder,
            OrderArg::Preorder => TraversalOrder::PreOrder,
            OrderArg::Postorder => TraversalOrder::PostOrder,
        }
    }
}

impl Commands {
    /// Resolve arguments into a tracer request, filling gaps from the samples
    ///
    /// Sizes that would be allocated up front are checked against `limits`
    /// here; the rest is left to [`Limits::check`] on the finished request.
    pub fn to_request(&self, limits: &Limits) -> Result<Request> {
        let request = match self {
            Commands::Sort { algorithm, values } => Request::Sort {
                algorithm: (*algorithm).into(),
                values: values.clone().unwrap_or_else(|| samples::ARRAY.to_vec()),
            },
            Commands::Search {
                algorithm,
                values,
                target,
            } => Request::Search {
                algorithm: (*algorithm).into(),
                values: values
                    .clone()
                    .unwrap_or_else(|| samples::SORTED_ARRAY.to_vec()),
                target: target.unwrap_or(samples::SEARCH_TARGET),
            },
            Commands::Graph {
                algorithm,
                vertices,
                edges,
                start,
            } => {
                let graph = match (vertices, edges) {
                    (Some(vertices), Some(edges)) => {
                        limits.check_vertices(*vertices)?;
                        Graph::from_edges(*vertices, &parse_edges(edges)?, true)?
                    }
                    _ => samples::graph()?,
                };
                Request::Traverse {
                    algorithm: (*algorithm).into(),
                    graph,
                    start: *start,
                }
            }
            Commands::Dijkstra { edges, start } => Request::Dijkstra {
                graph: match edges {
                    Some(edges) => parse_weighted_edges(edges)?,
                    None => samples::weighted_graph(),
                },
                start: start.clone(),
            },
            Commands::Bst {
                values,
                search,
                traverse,
            } => Request::Bst {
                values: values.clone().unwrap_or_else(|| samples::BST_VALUES.to_vec()),
                action: match (search, traverse) {
                    (Some(target), _) => BstAction::Search(*target),
                    (None, Some(order)) => BstAction::Traverse((*order).into()),
                    (None, None) => BstAction::Insert,
                },
            },
            Commands::Stack { ops } => Request::Stack {
                ops: match ops {
                    Some(ops) => parse_ops(ops)?,
                    None => samples::stack_ops(),
                },
            },
            Commands::Queue { ops } => Request::Queue {
                ops: match ops {
                    Some(ops) => parse_ops(ops)?,
                    None => samples::queue_ops(),
                },
            },
            Commands::Fibonacci { n, memoized } => Request::Fibonacci {
                n: *n,
                memoized: *memoized,
            },
        };
        Ok(request)
    }
}

fn invalid(input: &str, reason: &str) -> TraceError {
    TraceError::InvalidOperation {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse "0-1,0-2" into vertex pairs
fn parse_edges(input: &str) -> Result<Vec<(usize, usize)>, TraceError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| -> Result<(usize, usize), TraceError> {
            let (u, v) = part
                .split_once('-')
                .ok_or_else(|| invalid(part, "expected an edge like 0-1"))?;
            let u = u.trim().parse().map_err(|_| invalid(part, "bad vertex id"))?;
            let v = v.trim().parse().map_err(|_| invalid(part, "bad vertex id"))?;
            Ok((u, v))
        })
        .collect()
}

/// Parse "A-B:4,B-C:1" into an undirected weighted graph
fn parse_weighted_edges(input: &str) -> Result<WeightedGraph, TraceError> {
    let mut graph = WeightedGraph::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (pair, weight) = part
            .split_once(':')
            .ok_or_else(|| invalid(part, "expected an edge like A-B:4"))?;
        let (a, b) = pair
            .split_once('-')
            .ok_or_else(|| invalid(part, "expected an edge like A-B:4"))?;
        let weight: u64 = weight
            .trim()
            .parse()
            .map_err(|_| invalid(part, "weight must be a non-negative integer"))?;
        graph.add_undirected_edge(a.trim(), b.trim(), weight);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace::config::ConfigError;

    #[test]
    fn test_parse_cli() {
        let cli = Cli::try_parse_from([
            "algotrace",
            "--format",
            "json",
            "sort",
            "--algorithm",
            "quick",
            "--values",
            "3,-1,2",
        ])
        .unwrap();
        assert_eq!(cli.format, FormatArg::Json);
        match cli.command.to_request(&Limits::default()).unwrap() {
            Request::Sort { algorithm, values } => {
                assert_eq!(algorithm, SortAlgorithm::Quick);
                assert_eq!(values, vec![3, -1, 2]);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_defaults_come_from_samples() {
        let cli = Cli::try_parse_from(["algotrace", "stack"]).unwrap();
        match cli.command.to_request(&Limits::default()).unwrap() {
            Request::Stack { ops } => assert_eq!(ops, samples::stack_ops()),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_parse_weighted_edges() {
        let graph = parse_weighted_edges("A-B:4, B-C:1").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(parse_weighted_edges("A-B").is_err());
        assert!(parse_weighted_edges("A-B:-2").is_err());
    }

    #[test]
    fn test_parse_edges() {
        assert_eq!(parse_edges("0-1,1-2").unwrap(), vec![(0, 1), (1, 2)]);
        assert!(parse_edges("0:1").is_err());
    }

    #[test]
    fn test_vertex_count_checked_before_building_graph() {
        let cli = Cli::try_parse_from([
            "algotrace",
            "graph",
            "-a",
            "dfs",
            "--vertices",
            "18446744073709551615",
            "--edges",
            "0-1",
        ])
        .unwrap();
        let err = cli.command.to_request(&Limits::default()).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::LimitExceeded { what, limit, .. }) => {
                assert_eq!(*what, "graph");
                assert_eq!(*limit, 26);
            }
            other => panic!("expected LimitExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_vertex_count_at_limit_builds_graph() {
        let cli = Cli::try_parse_from([
            "algotrace", "graph", "-a", "bfs", "--vertices", "26", "--edges", "0-25",
        ])
        .unwrap();
        match cli.command.to_request(&Limits::default()).unwrap() {
            Request::Traverse { graph, .. } => assert_eq!(graph.vertex_count(), 26),
            other => panic!("unexpected request {:?}", other),
        }
    }
}
