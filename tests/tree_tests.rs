// Integration tests for the binary search tree tracer

use algotrace::samples;
use algotrace::tree::{Bst, TraversalOrder, TreeEvent};

fn sample_tree() -> Bst<i64> {
    Bst::from_keys(&samples::BST_VALUES)
}

#[test]
fn test_sample_tree_shape() {
    let tree = sample_tree();
    let shape = tree.shape().expect("tree is empty");
    assert_eq!(shape.val, 50);
    assert_eq!(shape.left.as_ref().map(|n| n.val), Some(30));
    assert_eq!(shape.right.as_ref().map(|n| n.val), Some(70));
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_search_follows_one_root_path() {
    let trace = sample_tree().search(&samples::BST_TARGET);
    assert_eq!(trace.count(TreeEvent::Compare), 3);
    assert_eq!(trace.last().event, TreeEvent::Found);
    assert_eq!(trace.last().state.path, vec![50, 30, 40]);
}

#[test]
fn test_search_missing_key() {
    let trace = sample_tree().search(&65);
    assert_eq!(trace.last().event, TreeEvent::NotFound);
    assert_eq!(trace.last().state.path, vec![50, 70, 60]);
}

#[test]
fn test_inorder_traversal_is_sorted() {
    let trace = sample_tree().traversal(TraversalOrder::InOrder);
    let mut expected = samples::BST_VALUES.to_vec();
    expected.sort();
    assert_eq!(trace.last().state.result, expected);
    assert_eq!(trace.count(TreeEvent::Visit), 7);
}

#[test]
fn test_pre_and_post_order() {
    let tree = sample_tree();
    assert_eq!(
        tree.traversal(TraversalOrder::PreOrder).last().state.result,
        vec![50, 30, 20, 40, 70, 60, 80]
    );
    assert_eq!(
        tree.traversal(TraversalOrder::PostOrder).last().state.result,
        vec![20, 40, 30, 60, 80, 70, 50]
    );
}

#[test]
fn test_duplicate_insert_leaves_tree_unchanged() {
    let mut tree = sample_tree();
    let before = tree.shape();
    let trace = tree.insert(60);
    assert_eq!(trace.last().event, TreeEvent::Duplicate);
    assert_eq!(tree.shape(), before);
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_insert_all_narrates_every_key() {
    let mut tree = Bst::new();
    let trace = tree.insert_all(&samples::BST_VALUES);
    assert_eq!(trace.first().event, TreeEvent::Initial);
    assert_eq!(trace.last().event, TreeEvent::Complete);
    assert_eq!(trace.count(TreeEvent::InsertStart), 7);
    assert_eq!(tree.keys(), vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn test_tree_built_by_traced_inserts() {
    let mut tree = Bst::new();
    tree.insert_all(&samples::BST_VALUES);

    let shape = tree.shape().expect("tree is empty");
    assert_eq!(shape.val, 50);
    assert_eq!(shape.left.as_ref().map(|n| n.val), Some(30));
    assert_eq!(shape.right.as_ref().map(|n| n.val), Some(70));
    assert_eq!(tree.len(), 7);

    let trace = tree.search(&samples::BST_TARGET);
    assert_eq!(trace.count(TreeEvent::Compare), 3);
    assert_eq!(trace.last().event, TreeEvent::Found);
    assert_eq!(trace.last().state.path, vec![50, 30, 40]);
}
