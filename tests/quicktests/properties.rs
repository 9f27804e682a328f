use bst_avl::{traversal, Error, Node, Policy, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn build(policy: Policy, xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::with_policy(policy);
    for x in xs {
        let _ = tree.insert(*x);
    }
    tree
}

/// Whether every stored balance factor is within `-1..=1`.
fn all_balanced(node: Option<&Node<i8>>) -> bool {
    node.map_or(true, |n| {
        n.balance_factor().abs() <= 1 && all_balanced(n.left()) && all_balanced(n.right())
    })
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                let _ = tree.insert(*k);
                set.insert(*k);
            }
            Op::Delete(k) => {
                let _ = tree.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i8>, balanced: bool) -> bool {
    let policy = if balanced { Policy::Balanced } else { Policy::Unbalanced };
    let tree = build(policy, &xs);

    traversal::in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn balanced_after_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = Tree::balanced();
    xs.iter().all(|x| {
        let _ = tree.insert(*x);
        all_balanced(tree.root())
    })
}

#[quickcheck]
fn insert_search_delete_round_trip(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = build(Policy::Unbalanced, &xs);
    let _ = tree.insert(k);

    let found = tree.search(&k).map(|n| *n.key()) == Some(k);
    let deleted = tree.delete(&k) == Ok(k);
    found && deleted && tree.search(&k).is_none()
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = build(Policy::Balanced, &xs);
    let _ = tree.insert(k);
    let before: Vec<i8> = tree.iter().copied().collect();

    tree.insert(k) == Err(Error::DuplicateKey) && tree.iter().copied().eq(before)
}

#[quickcheck]
fn min_max_bound_in_order(xs: Vec<i8>) -> bool {
    let tree = build(Policy::Unbalanced, &xs);
    let keys = traversal::in_order(&tree);

    match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => tree.min() == Ok(*first) && tree.max() == Ok(*last),
        _ => tree.min() == Err(Error::EmptyTree) && tree.max() == Err(Error::EmptyTree),
    }
}

#[quickcheck]
fn extremes_have_no_outer_neighbour(xs: Vec<i8>, balanced: bool) -> bool {
    let policy = if balanced { Policy::Balanced } else { Policy::Unbalanced };
    let tree = build(policy, &xs);

    match (tree.min(), tree.max()) {
        (Ok(min), Ok(max)) => tree.predecessor(min) == Ok(None) && tree.successor(max) == Ok(None),
        _ => xs.is_empty(),
    }
}

#[quickcheck]
fn agrees_with_btreeset(ops: Vec<Op<i8>>, balanced: bool) -> bool {
    let policy = if balanced { Policy::Balanced } else { Policy::Unbalanced };
    let mut tree = Tree::with_policy(policy);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn failed_delete_changes_nothing(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = build(Policy::Balanced, &xs);
    if tree.contains(&k) {
        return true;
    }
    let before: Vec<_> = traversal::dump(&tree)
        .into_iter()
        .map(|e| (e.depth, *e.key, e.balance))
        .collect();

    let result = tree.delete(&k);
    let after: Vec<_> = traversal::dump(&tree)
        .into_iter()
        .map(|e| (e.depth, *e.key, e.balance))
        .collect();

    result.is_err() && before == after
}

#[quickcheck]
fn levels_and_height_agree(xs: Vec<i8>) -> bool {
    let tree = build(Policy::Balanced, &xs);
    let levels = traversal::levels(&tree);

    levels.keys().last().copied() == traversal::height(&tree)
        && levels.values().map(Vec::len).sum::<usize>() == tree.len()
}
