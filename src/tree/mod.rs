//! Binary search tree with traced operations
//!
//! Nodes live in an arena (`Vec<Node<K>>`) and refer to their children by
//! index, so the tree has no back-pointers and no shared ownership.  The tree
//! is never rebalanced.  Unlike the other tracers a [`Bst`] is long-lived: a
//! caller may insert into it, then search it, then traverse it, getting one
//! trace per operation.
//!
//! Snapshots hold the tree as a nested [`TreeShape`], built fresh for each
//! snapshot.

use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEvent {
    Initial,
    InsertStart,
    Compare,
    GoLeft,
    GoRight,
    InsertComplete,
    Duplicate,
    SearchStart,
    Found,
    NotFound,
    TraversalStart,
    Visit,
    Complete,
}

impl TraceEvent for TreeEvent {
    fn is_terminal(self) -> bool {
        matches!(
            self,
            TreeEvent::InsertComplete
                | TreeEvent::Duplicate
                | TreeEvent::Found
                | TreeEvent::NotFound
                | TreeEvent::Complete
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, rule) = match self {
            TraversalOrder::InOrder => ("inorder", "Left → Root → Right"),
            TraversalOrder::PreOrder => ("preorder", "Root → Left → Right"),
            TraversalOrder::PostOrder => ("postorder", "Left → Right → Root"),
        };
        if f.alternate() {
            write!(f, "{}", rule)
        } else {
            write!(f, "{}", name)
        }
    }
}

/// Owned nested form of the tree, as stored in snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeShape<K> {
    pub val: K,
    pub left: Option<Box<TreeShape<K>>>,
    pub right: Option<Box<TreeShape<K>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeState<K> {
    /// `None` for an empty tree
    pub tree: Option<TreeShape<K>>,
    pub current_node: Option<K>,
    /// Value being inserted or searched for
    pub operand: Option<K>,
    /// Keys on the descent from the root to `current_node`
    pub path: Vec<K>,
    pub comparing: Vec<K>,
    /// Keys visited so far by a traversal
    pub result: Vec<K>,
}

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Bst<K> {
    nodes: Vec<Node<K>>,
    root: Option<usize>,
}

type TreeRecorder<K> = Recorder<TreeEvent, TreeState<K>>;

/// Place a new node can be linked into
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    /// Empty child link under `parent`, the left one when `left` is set
    Child { parent: usize, left: bool },
}

/// Where a descent from the root ended
enum Descent {
    Hit,
    Vacant(Slot),
}

impl<K: Element> Default for Bst<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Element> Bst<K> {
    pub fn new() -> Self {
        Bst {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Build a tree by inserting `keys` in order, without tracing
    pub fn from_keys(keys: &[K]) -> Self {
        let mut tree = Bst::new();
        for key in keys {
            tree.insert_silent(key.clone());
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&K> {
        self.root.map(|id| &self.nodes[id].key)
    }

    pub fn contains(&self, key: &K) -> bool {
        matches!(self.locate(key), Descent::Hit)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.collect_in_order(self.root, &mut out);
        out
    }

    fn collect_in_order(&self, node: Option<usize>, out: &mut Vec<K>) {
        if let Some(id) = node {
            self.collect_in_order(self.nodes[id].left, out);
            out.push(self.nodes[id].key.clone());
            self.collect_in_order(self.nodes[id].right, out);
        }
    }

    pub fn shape(&self) -> Option<TreeShape<K>> {
        self.root.map(|id| self.shape_of(id))
    }

    fn shape_of(&self, id: usize) -> TreeShape<K> {
        let node = &self.nodes[id];
        TreeShape {
            val: node.key.clone(),
            left: node.left.map(|l| Box::new(self.shape_of(l))),
            right: node.right.map(|r| Box::new(self.shape_of(r))),
        }
    }

    fn locate(&self, key: &K) -> Descent {
        let Some(mut current) = self.root else {
            return Descent::Vacant(Slot::Root);
        };
        loop {
            let node = &self.nodes[current];
            let (child, left) = match key.cmp(&node.key) {
                Ordering::Equal => return Descent::Hit,
                Ordering::Less => (node.left, true),
                Ordering::Greater => (node.right, false),
            };
            match child {
                Some(next) => current = next,
                None => {
                    return Descent::Vacant(Slot::Child {
                        parent: current,
                        left,
                    })
                }
            }
        }
    }

    fn attach(&mut self, key: K, slot: Slot) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            key,
            left: None,
            right: None,
        });
        match slot {
            Slot::Root => self.root = Some(id),
            Slot::Child { parent, left: true } => self.nodes[parent].left = Some(id),
            Slot::Child {
                parent,
                left: false,
            } => self.nodes[parent].right = Some(id),
        }
        id
    }

    fn insert_silent(&mut self, key: K) -> bool {
        match self.locate(&key) {
            Descent::Hit => false,
            Descent::Vacant(slot) => {
                self.attach(key, slot);
                true
            }
        }
    }

    fn state(
        &self,
        current: Option<usize>,
        operand: Option<&K>,
        path: &[K],
        comparing: Option<usize>,
        result: &[K],
    ) -> TreeState<K> {
        TreeState {
            tree: self.shape(),
            current_node: current.map(|id| self.nodes[id].key.clone()),
            operand: operand.cloned(),
            path: path.to_vec(),
            comparing: comparing
                .map(|id| vec![self.nodes[id].key.clone()])
                .unwrap_or_default(),
            result: result.to_vec(),
        }
    }

    /// Insert one value and trace the descent
    ///
    /// The trace ends with `insert_complete`, or with `duplicate` if the value
    /// is already present, in which case the tree is unchanged.
    pub fn insert(&mut self, value: K) -> Trace<TreeEvent, TreeState<K>> {
        let mut rec = Recorder::new("bst_insert");
        let (event, description, state) = self.insert_steps(value, &mut rec);
        rec.finish(event, description, state)
    }

    /// Insert every value in order as one trace
    ///
    /// Starts from a snapshot of the tree as it is now and closes with
    /// `complete` after the last insertion.
    pub fn insert_all(&mut self, values: &[K]) -> Trace<TreeEvent, TreeState<K>> {
        let mut rec = Recorder::new("bst_insert_all");
        let description = if self.is_empty() {
            "Empty Binary Search Tree - ready for insertions".to_string()
        } else {
            format!("Binary Search Tree with {} nodes", self.len())
        };
        rec.record(
            TreeEvent::Initial,
            description,
            self.state(None, None, &[], None, &[]),
        );

        for value in values {
            let (event, description, state) = self.insert_steps(value.clone(), &mut rec);
            rec.record(event, description, state);
        }

        let keys = self.keys();
        rec.finish(
            TreeEvent::Complete,
            format!("Inserted {} values; tree holds {} nodes", values.len(), self.len()),
            self.state(None, None, &[], None, &keys),
        )
    }

    /// Record the steps of one insertion and return its closing snapshot
    /// unrecorded, so the caller decides whether it ends the trace
    fn insert_steps(
        &mut self,
        value: K,
        rec: &mut TreeRecorder<K>,
    ) -> (TreeEvent, String, TreeState<K>) {
        rec.record(
            TreeEvent::InsertStart,
            format!("Inserting value {} into BST", value),
            self.state(None, Some(&value), &[], None, &[]),
        );

        let Some(mut current) = self.root else {
            let id = self.attach(value.clone(), Slot::Root);
            let path = [value.clone()];
            return (
                TreeEvent::InsertComplete,
                format!("Tree is empty. {} becomes the root node", value),
                self.state(Some(id), Some(&value), &path, None, &[]),
            );
        };

        let mut path: Vec<K> = Vec::new();
        loop {
            let key = self.nodes[current].key.clone();
            path.push(key.clone());
            rec.record(
                TreeEvent::Compare,
                format!("Comparing {} with {}", value, key),
                self.state(Some(current), Some(&value), &path, Some(current), &[]),
            );

            let (go_left, child) = match value.cmp(&key) {
                Ordering::Equal => {
                    return (
                        TreeEvent::Duplicate,
                        format!(
                            "Value {} already exists in BST. Skipping insertion.",
                            value
                        ),
                        self.state(Some(current), Some(&value), &path, Some(current), &[]),
                    );
                }
                Ordering::Less => (true, self.nodes[current].left),
                Ordering::Greater => (false, self.nodes[current].right),
            };

            let (event, description) = if go_left {
                (
                    TreeEvent::GoLeft,
                    format!("{} < {}, go to left subtree", value, key),
                )
            } else {
                (
                    TreeEvent::GoRight,
                    format!("{} > {}, go to right subtree", value, key),
                )
            };
            rec.record(
                event,
                description,
                self.state(Some(current), Some(&value), &path, None, &[]),
            );

            match child {
                Some(next) => current = next,
                None => {
                    let id = self.attach(
                        value.clone(),
                        Slot::Child {
                            parent: current,
                            left: go_left,
                        },
                    );
                    path.push(value.clone());
                    let side = if go_left { "left" } else { "right" };
                    return (
                        TreeEvent::InsertComplete,
                        format!("Inserted {} as {} child of {}", value, side, key),
                        self.state(Some(id), Some(&value), &path, None, &[]),
                    );
                }
            }
        }
    }

    /// Trace a search for `target`, ending with `found` or `not_found`
    pub fn search(&self, target: &K) -> Trace<TreeEvent, TreeState<K>> {
        let mut rec = Recorder::new("bst_search");
        rec.record(
            TreeEvent::SearchStart,
            format!("Searching for {} in BST", target),
            self.state(None, Some(target), &[], None, &[]),
        );

        let mut path: Vec<K> = Vec::new();
        let mut node = self.root;
        while let Some(current) = node {
            let key = &self.nodes[current].key;
            path.push(key.clone());
            rec.record(
                TreeEvent::Compare,
                format!("Comparing target {} with {}", target, key),
                self.state(Some(current), Some(target), &path, Some(current), &[]),
            );

            match target.cmp(key) {
                Ordering::Equal => {
                    return rec.finish(
                        TreeEvent::Found,
                        format!("Target {} found!", target),
                        self.state(Some(current), Some(target), &path, Some(current), &[]),
                    );
                }
                Ordering::Less => {
                    rec.record(
                        TreeEvent::GoLeft,
                        format!("{} < {}, search left subtree", target, key),
                        self.state(Some(current), Some(target), &path, None, &[]),
                    );
                    node = self.nodes[current].left;
                }
                Ordering::Greater => {
                    rec.record(
                        TreeEvent::GoRight,
                        format!("{} > {}, search right subtree", target, key),
                        self.state(Some(current), Some(target), &path, None, &[]),
                    );
                    node = self.nodes[current].right;
                }
            }
        }

        let description = if self.is_empty() {
            format!("Tree is empty. {} not found.", target)
        } else {
            format!("Target {} not found in BST", target)
        };
        rec.finish(
            TreeEvent::NotFound,
            description,
            self.state(None, Some(target), &path, None, &[]),
        )
    }

    /// Trace a depth-first traversal
    ///
    /// Only visits are recorded; descending into a subtree is not a step.
    pub fn traversal(&self, order: TraversalOrder) -> Trace<TreeEvent, TreeState<K>> {
        let mut rec = Recorder::new("bst_traversal");
        rec.record(
            TreeEvent::TraversalStart,
            format!("Starting {} traversal", order),
            self.state(None, None, &[], None, &[]),
        );

        let mut result = Vec::with_capacity(self.len());
        self.walk(self.root, order, &mut result, &mut rec);

        rec.finish(
            TreeEvent::Complete,
            format!("{} traversal complete: {:?}", order, result),
            self.state(None, None, &[], None, &result),
        )
    }

    fn walk(
        &self,
        node: Option<usize>,
        order: TraversalOrder,
        result: &mut Vec<K>,
        rec: &mut TreeRecorder<K>,
    ) {
        let Some(id) = node else {
            return;
        };
        let (left, right) = (self.nodes[id].left, self.nodes[id].right);

        if order == TraversalOrder::PreOrder {
            self.visit(id, order, result, rec);
        }
        self.walk(left, order, result, rec);
        if order == TraversalOrder::InOrder {
            self.visit(id, order, result, rec);
        }
        self.walk(right, order, result, rec);
        if order == TraversalOrder::PostOrder {
            self.visit(id, order, result, rec);
        }
    }

    fn visit(
        &self,
        id: usize,
        order: TraversalOrder,
        result: &mut Vec<K>,
        rec: &mut TreeRecorder<K>,
    ) {
        let key = self.nodes[id].key.clone();
        result.push(key.clone());
        rec.record(
            TreeEvent::Visit,
            format!("Visit node {} ({}: {:#})", key, order, order),
            self.state(Some(id), None, &[], None, result),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bst<i32> {
        Bst::from_keys(&[50, 30, 70, 20, 40, 60, 80])
    }

    #[test]
    fn test_insert_into_empty_tree_makes_root() {
        let mut tree = Bst::new();
        let trace = tree.insert(5);
        let events: Vec<_> = trace.events().collect();
        assert_eq!(events, vec![TreeEvent::InsertStart, TreeEvent::InsertComplete]);
        assert_eq!(tree.root(), Some(&5));
    }

    #[test]
    fn test_duplicate_leaves_tree_unchanged() {
        let mut tree = sample();
        let before = tree.shape();
        let trace = tree.insert(40);
        assert_eq!(trace.last().event, TreeEvent::Duplicate);
        assert_eq!(trace.count(TreeEvent::Compare), 3);
        assert_eq!(tree.shape(), before);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_insert_descends_to_vacant_slot() {
        let mut tree = sample();
        let trace = tree.insert(65);
        let last = trace.last();
        assert_eq!(last.event, TreeEvent::InsertComplete);
        assert_eq!(last.state.path, vec![50, 70, 60, 65]);
        assert_eq!(last.description, "Inserted 65 as right child of 60");
        assert!(tree.contains(&65));
    }

    #[test]
    fn test_search_miss() {
        let tree = sample();
        let trace = tree.search(&45);
        assert_eq!(trace.last().event, TreeEvent::NotFound);
        assert_eq!(trace.last().state.path, vec![50, 30, 40]);
    }

    #[test]
    fn test_search_empty_tree() {
        let tree: Bst<i32> = Bst::new();
        let trace = tree.search(&1);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().event, TreeEvent::NotFound);
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample();
        let result = |order| tree.traversal(order).last().state.result.clone();
        assert_eq!(result(TraversalOrder::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(result(TraversalOrder::PreOrder), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(result(TraversalOrder::PostOrder), vec![20, 40, 30, 60, 80, 70, 50]);
    }

    #[test]
    fn test_visit_snapshots_accumulate_result() {
        let tree = sample();
        let trace = tree.traversal(TraversalOrder::InOrder);
        let visits: Vec<usize> = trace
            .iter()
            .filter(|s| s.event == TreeEvent::Visit)
            .map(|s| s.state.result.len())
            .collect();
        assert_eq!(visits, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_traced_inserts_match_silent_build() {
        let mut traced = Bst::new();
        for key in [50, 30, 70, 20, 40, 60, 80] {
            traced.insert(key);
        }
        assert_eq!(traced.shape(), sample().shape());
        assert_eq!(traced.len(), 7);
    }

    #[test]
    fn test_insert_all_closes_with_complete() {
        let mut tree = Bst::new();
        let trace = tree.insert_all(&[2, 1, 2]);
        assert_eq!(trace.first().event, TreeEvent::Initial);
        assert_eq!(trace.last().event, TreeEvent::Complete);
        assert_eq!(trace.count(TreeEvent::InsertComplete), 2);
        assert_eq!(trace.count(TreeEvent::Duplicate), 1);
        assert_eq!(trace.last().state.result, vec![1, 2]);
    }
}
