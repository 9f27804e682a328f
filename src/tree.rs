//! A binary search tree over unique keys with an optional self-balancing policy.
//!
//! # Examples
//!
//! ```
//! use bst_avl::{Error, Tree};
//!
//! let mut tree = Tree::balanced();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), Err(Error::EmptyTree));
//!
//! for key in [1, 2, 3] {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Inserting 3 rotated the tree around 2.
//! assert_eq!(tree.root().map(|n| *n.key()), Some(2));
//!
//! // Keys are unique.
//! assert_eq!(tree.insert(2), Err(Error::DuplicateKey));
//!
//! assert_eq!(tree.successor(&1), Ok(Some(&2)));
//! assert_eq!(tree.successor(&3), Ok(None));
//!
//! assert_eq!(tree.delete(&2), Ok(2));
//! assert_eq!(tree.delete(&2), Err(Error::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::balance::Policy;
use crate::error::Error;
use crate::node::{self, Link, Node};
use crate::rotation;

/// A binary search tree. Keys are unique and kept in order; whether the tree keeps itself
/// height-balanced is decided once, by the [`Policy`] it is built with.
pub struct Tree<K> {
    root: Link<K>,
    policy: Policy,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for Tree<K> {
    /// Copies the tree node for node, balance factors included. Children are copied before their
    /// parent from an explicit stack, so the depth of the tree doesn't matter.
    fn clone(&self) -> Self {
        let mut copied: Vec<Link<K>> = Vec::new();
        let mut pending: Vec<(Option<&Node<K>>, bool)> = vec![(self.root(), false)];
        while let Some((node, children_done)) = pending.pop() {
            let Some(node) = node else {
                copied.push(None);
                continue;
            };
            if children_done {
                let right = copied.pop().flatten();
                let left = copied.pop().flatten();
                copied.push(Some(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                    balance: node.balance,
                })));
            } else {
                pending.push((Some(node), true));
                pending.push((node.right(), false));
                pending.push((node.left(), false));
            }
        }
        Self {
            root: copied.pop().flatten(),
            policy: self.policy,
            len: self.len,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("policy", &self.policy)
            .field("len", &self.len)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Dropping the root directly would recurse once per level, which a degenerate unbalanced
        // tree can make arbitrarily deep.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty, unbalanced `Tree`.
    pub fn new() -> Self {
        Self::with_policy(Policy::Unbalanced)
    }

    /// Generates a new, empty, self-balancing `Tree`.
    pub fn balanced() -> Self {
        Self::with_policy(Policy::Balanced)
    }

    /// Generates a new, empty `Tree` following the given `policy`.
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            root: None,
            policy,
            len: 0,
        }
    }

    /// The balancing policy this tree was built with.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree. This is the entry point for read-only walks
    /// over the structure, like the ones in [`traversal`][crate::traversal].
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Inserts `key` into the tree. If the key is already present, the tree is left untouched
    /// and [`Error::DuplicateKey`] is returned.
    ///
    /// An unbalanced tree can degenerate into a chain (for example when keys arrive in order);
    /// inserting into it still works at any depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), Error>
    where
        K: Ord,
    {
        let policy = self.policy;
        let result = match self.root.as_mut() {
            Some(root) if policy == Policy::Balanced => root.insert(key),
            _ => node::insert(&mut self.root, key),
        };
        if let Err(err) = result {
            tracing::debug!(%err, "insert rejected");
            return Err(err);
        }

        // The root has no parent to rotate it, so the tree does.
        if policy == Policy::Balanced
            && self.root.as_ref().is_some_and(|root| root.balance.abs() > 1)
        {
            self.root = self.root.take().map(rotation::rebalance);
        }

        self.len += 1;
        tracing::trace!(len = self.len, "inserted key");
        Ok(())
    }

    /// Finds the node holding `key`. Not finding it is an ordinary outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Result<&K, Error> {
        self.root().map(Node::min).ok_or(Error::EmptyTree)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Result<&K, Error> {
        self.root().map(Node::max).ok_or(Error::EmptyTree)
    }

    /// Finds the parent of `node` by walking down from the root. `node` must be a node of this
    /// very tree (for example one returned by [`Tree::search`]); a node that merely holds an
    /// equal key is not found and is reported as [`Error::StructuralInconsistency`].
    ///
    /// Returns `Ok(None)` for the root.
    pub fn parent(&self, node: &Node<K>) -> Result<Option<&Node<K>>, Error>
    where
        K: Ord,
    {
        let mut current = self.root().ok_or(Error::EmptyTree)?;
        if node.is(Some(current)) {
            return Ok(None);
        }
        loop {
            let child = match node.key.cmp(&current.key) {
                Ordering::Less => current.left(),
                Ordering::Greater => current.right(),
                Ordering::Equal => None,
            };
            let child = child.ok_or(Error::StructuralInconsistency)?;
            if node.is(Some(child)) {
                return Ok(Some(current));
            }
            current = child;
        }
    }

    /// The largest key smaller than `key`, or `Ok(None)` if `key` is the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for key in [8, 3, 10, 1, 6] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// assert_eq!(tree.predecessor(&8), Ok(Some(&6)));
    /// assert_eq!(tree.predecessor(&10), Ok(Some(&8)));
    /// assert_eq!(tree.predecessor(&1), Ok(None));
    /// assert_eq!(tree.predecessor(&7), Err(Error::KeyNotFound));
    /// ```
    pub fn predecessor(&self, key: &K) -> Result<Option<&K>, Error>
    where
        K: Ord,
    {
        let node = self.locate(key)?;
        if let Some(left) = node.left() {
            return Ok(Some(left.max()));
        }
        // Climb while we are a left child; the first parent we are a right child of is smaller.
        let mut current = node;
        while let Some(parent) = self.parent(current)? {
            if current.is(parent.right()) {
                return Ok(Some(&parent.key));
            }
            current = parent;
        }
        Ok(None)
    }

    /// The smallest key larger than `key`, or `Ok(None)` if `key` is the largest key.
    pub fn successor(&self, key: &K) -> Result<Option<&K>, Error>
    where
        K: Ord,
    {
        let node = self.locate(key)?;
        if let Some(right) = node.right() {
            return Ok(Some(right.min()));
        }
        let mut current = node;
        while let Some(parent) = self.parent(current)? {
            if current.is(parent.left()) {
                return Ok(Some(&parent.key));
            }
            current = parent;
        }
        Ok(None)
    }

    /// Deletes `key` from the tree and returns it. Deleting a key that isn't in the tree, which
    /// includes any key of an empty tree, fails with [`Error::KeyNotFound`] before anything is
    /// modified.
    ///
    /// Deletion never rotates: under [`Policy::Balanced`] the tree can lose its balance, and the
    /// balance factors on the path to the deleted node are not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert_eq!(tree.delete(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K, Error>
    where
        K: Ord,
    {
        let removed = node::remove(&mut self.root, key).ok_or(Error::KeyNotFound)?;
        self.len -= 1;
        tracing::trace!(len = self.len, "deleted key");
        Ok(removed)
    }

    fn locate(&self, key: &K) -> Result<&Node<K>, Error>
    where
        K: Ord,
    {
        self.root()
            .ok_or(Error::EmptyTree)?
            .find(key)
            .ok_or(Error::KeyNotFound)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}
