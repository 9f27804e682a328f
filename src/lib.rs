//! A Binary Search Tree (BST) over unique keys with an optional height-balancing (AVL) policy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are defined recursively using the notion of a [`Node`]. A `Node` stores a key
//! and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root to a leaf. Left
//! alone, the height depends on insertion order and ascending keys degrade the tree into a list.
//!
//! ## Balancing
//!
//! A [`Tree`] built with [`Policy::Balanced`] records in every node the difference between the
//! heights of its left and right subtrees (its balance factor) and, after every insertion,
//! rotates any subtree where that difference reached two. That keeps the height at `O(lg N)`.
//! Deletion does not rebalance.
//!
//! ## Parents
//!
//! Nodes own their children and nothing else; there are no parent pointers. Operations that need
//! to climb the tree ([`Tree::predecessor`], [`Tree::successor`]) find each parent with
//! [`Tree::parent`], which walks down from the root.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod node;
mod rotation;
mod tree;

pub mod traversal;

pub use balance::Policy;
pub use error::Error;
pub use node::Node;
pub use tree::{Iter, Tree};

#[cfg(test)]
mod test;
