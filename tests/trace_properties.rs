// Properties every trace upholds, checked across all tracers

use std::fmt;

use algotrace::catalog::{BstAction, Request};
use algotrace::dynamic::fibonacci;
use algotrace::graph::TraversalAlgorithm;
use algotrace::samples;
use algotrace::searching::SearchAlgorithm;
use algotrace::sorting::{merge, SortAlgorithm};
use algotrace::tree::TraversalOrder;
use serde::Serialize;

/// Small deterministic inputs, including empty and duplicate-heavy ones
fn inputs() -> Vec<Vec<i64>> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 100) as i64
    };
    let mut inputs = vec![vec![], vec![5], vec![2, 2, 2], vec![9, 8, 7, 6, 5, 4, 3, 2, 1]];
    for len in 2..=10 {
        inputs.push((0..len).map(|_| next()).collect());
    }
    inputs
}

fn every_request() -> Vec<Request> {
    let mut requests = Vec::new();
    for values in inputs() {
        for algorithm in SortAlgorithm::ALL {
            requests.push(Request::Sort {
                algorithm,
                values: values.clone(),
            });
        }
        let mut sorted = values.clone();
        sorted.sort();
        for algorithm in [SearchAlgorithm::Binary, SearchAlgorithm::Linear] {
            requests.push(Request::Search {
                algorithm,
                values: sorted.clone(),
                target: 42,
            });
        }
    }
    for algorithm in [TraversalAlgorithm::Dfs, TraversalAlgorithm::Bfs] {
        requests.push(Request::Traverse {
            algorithm,
            graph: samples::graph().unwrap(),
            start: 2,
        });
    }
    requests.push(Request::Dijkstra {
        graph: samples::weighted_graph(),
        start: "D".to_string(),
    });
    for action in [
        BstAction::Insert,
        BstAction::Search(60),
        BstAction::Traverse(TraversalOrder::PostOrder),
    ] {
        requests.push(Request::Bst {
            values: samples::BST_VALUES.to_vec(),
            action,
        });
    }
    requests.push(Request::Stack {
        ops: samples::stack_ops(),
    });
    requests.push(Request::Queue {
        ops: samples::queue_ops(),
    });
    for memoized in [false, true] {
        requests.push(Request::Fibonacci { n: 7, memoized });
    }
    requests
}

#[test]
fn test_steps_are_gapless_and_at_least_two() {
    for request in every_request() {
        let replay = request.run().unwrap();
        assert!(replay.len() >= 2, "{} has {} steps", replay.title, replay.len());
        for (i, frame) in replay.frames.iter().enumerate() {
            assert_eq!(frame.step, i, "{} step numbering", replay.title);
        }
    }
}

#[test]
fn test_tracing_is_deterministic() {
    for request in every_request() {
        let first = serde_json::to_string(&request.run().unwrap()).unwrap();
        let second = serde_json::to_string(&request.run().unwrap()).unwrap();
        assert_eq!(first, second, "{}", request.title());
    }
}

#[test]
fn test_sorts_end_with_sorted_permutation() {
    for values in inputs() {
        let mut expected = values.clone();
        expected.sort();
        for algorithm in SortAlgorithm::ALL {
            let replay = Request::Sort {
                algorithm,
                values: values.clone(),
            }
            .run()
            .unwrap();
            let first = replay.frame(0).and_then(|f| f.array());
            let last = replay.last().and_then(|f| f.array());
            assert_eq!(first, Some(values.clone()), "{} input", algorithm);
            assert_eq!(last, Some(expected.clone()), "{} on {:?}", algorithm, values);
        }
    }
}

#[test]
fn test_trace_json_has_flat_snapshots() {
    let trace = fibonacci::trace_table(3).unwrap();
    let json: serde_json::Value = serde_json::from_str(&trace.to_json().unwrap()).unwrap();
    let snapshots = json.as_array().expect("trace serializes as an array");
    assert_eq!(snapshots.len(), trace.len());
    assert_eq!(snapshots[0]["event"], "initialization");
    assert_eq!(snapshots[0]["step"], 0);
    assert!(snapshots[0].get("dp_table").is_some());
}

/// Orders by `key` only, so equal keys can be told apart by `tag`
#[derive(Debug, Clone, Serialize)]
struct Card {
    key: u8,
    tag: char,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.tag)
    }
}

#[test]
fn test_merge_sort_is_stable() {
    let cards: Vec<Card> = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')]
        .into_iter()
        .map(|(key, tag)| Card { key, tag })
        .collect();
    let trace = merge::trace(&cards);
    let tags: String = trace.last().state.array.iter().map(|c| c.tag).collect();
    assert_eq!(tags, "bedacf");
}
