//! Read-only walks over a [`Tree`]. Nothing in here can modify the tree; everything is built from
//! [`Tree::root`] and the accessors on [`Node`]. The walks keep their own stacks instead of
//! recursing, so an unbalanced tree that degenerated into a long chain is no problem.
//!
//! # Examples
//!
//! ```
//! use bst_avl::{traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [8, 3, 10, 1, 6] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(traversal::pre_order(&tree), [&8, &3, &1, &6, &10]);
//! assert_eq!(traversal::breadth_first(&tree), [&8, &3, &10, &1, &6]);
//! assert_eq!(traversal::height(&tree), Some(2));
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::fmt::{self, Write};

use crate::node::Node;
use crate::tree::Tree;

/// One line of a [`dump`]: a node's depth below the root, its key and its balance factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<K> {
    /// Number of edges between the root and this node.
    pub depth: usize,
    /// The node's key.
    pub key: K,
    /// The node's balance factor, see [`Node::balance_factor`].
    pub balance: i8,
}

/// Node, then left subtree, then right subtree.
pub fn pre_order<K>(tree: &Tree<K>) -> Vec<&K> {
    let mut out = Vec::with_capacity(tree.len());
    let mut stack: Vec<&Node<K>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.key());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

/// Left subtree, then node, then right subtree: the keys in ascending order.
pub fn in_order<K>(tree: &Tree<K>) -> Vec<&K> {
    tree.iter().collect()
}

/// Left subtree, then right subtree, then node.
pub fn post_order<K>(tree: &Tree<K>) -> Vec<&K> {
    // Node, right, left, reversed.
    let mut out = Vec::with_capacity(tree.len());
    let mut stack: Vec<&Node<K>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.key());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out.reverse();
    out
}

/// Level by level from the root down, left to right within a level.
pub fn breadth_first<K>(tree: &Tree<K>) -> Vec<&K> {
    let mut out = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<&Node<K>> = tree.root().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        out.push(node.key());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    out
}

/// The keys visible when looking at the tree from its left side: the first key of every level.
pub fn left_view<K>(tree: &Tree<K>) -> Vec<&K> {
    levels(tree)
        .into_values()
        .filter_map(|level| level.into_iter().next())
        .collect()
}

/// Depths of all leaves, from the leftmost leaf to the rightmost. The root is at depth 0.
pub fn leaf_depths<K>(tree: &Tree<K>) -> Vec<usize> {
    let mut out = Vec::new();
    for (node, depth) in with_depths(tree) {
        if node.is_leaf() {
            out.push(depth);
        }
    }
    out
}

/// Number of edges on the longest path from the root down to a leaf. A lone root has height 0;
/// an empty tree has none.
pub fn height<K>(tree: &Tree<K>) -> Option<usize> {
    leaf_depths(tree).into_iter().max()
}

/// Keys grouped by depth, left to right within each depth.
pub fn levels<K>(tree: &Tree<K>) -> BTreeMap<usize, Vec<&K>> {
    let mut out: BTreeMap<usize, Vec<&K>> = BTreeMap::new();
    for (node, depth) in with_depths(tree) {
        out.entry(depth).or_default().push(node.key());
    }
    out
}

/// Every node with its depth and balance factor, from the rightmost node to the leftmost. This is
/// the order [`render`] draws them in.
pub fn dump<K>(tree: &Tree<K>) -> Vec<Entry<&K>> {
    let mut out = Vec::with_capacity(tree.len());
    let mut stack = Vec::new();
    let mut next = tree.root().map(|root| (root, 0));
    loop {
        // Everything on the right spine comes out before the node it hangs from.
        while let Some((node, depth)) = next {
            stack.push((node, depth));
            next = node.right().map(|right| (right, depth + 1));
        }
        let Some((node, depth)) = stack.pop() else {
            break;
        };
        out.push(Entry {
            depth,
            key: node.key(),
            balance: node.balance_factor(),
        });
        next = node.left().map(|left| (left, depth + 1));
    }
    out
}

/// Every node with its depth, in pre-order. Nodes on the same level come out left to right.
fn with_depths<K>(tree: &Tree<K>) -> Vec<(&Node<K>, usize)> {
    let mut out = Vec::with_capacity(tree.len());
    let mut stack: Vec<(&Node<K>, usize)> = Vec::new();
    stack.extend(tree.root().map(|root| (root, 0)));
    while let Some((node, depth)) = stack.pop() {
        out.push((node, depth));
        stack.extend(node.right().map(|right| (right, depth + 1)));
        stack.extend(node.left().map(|left| (left, depth + 1)));
    }
    out
}

/// Draws the tree on its side: the root on the left, right subtrees above their parents and left
/// subtrees below. Each node is written as `--[key(balance)`.
///
/// ```
/// use bst_avl::{traversal, Tree};
///
/// let mut tree = Tree::balanced();
/// for key in [1, 2, 3] {
///     tree.insert(key).unwrap();
/// }
///
/// let expected = "           --[3(0)\n    --[2(0)\n           --[1(0)\n";
/// assert_eq!(traversal::render(&tree), expected);
/// ```
pub fn render<K: fmt::Display>(tree: &Tree<K>) -> String {
    const INDENT: usize = 7;
    let mut out = String::new();
    for entry in dump(tree) {
        // Writing to a `String` can't fail.
        let _ = writeln!(
            out,
            "{:>width$}{}({})",
            "--[",
            entry.key,
            entry.balance,
            width = INDENT * (entry.depth + 1)
        );
    }
    out
}
