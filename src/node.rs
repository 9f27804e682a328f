//! The structural unit of a [`Tree`][crate::Tree].
//!
//! A `Node` owns its children outright. It never stores a pointer back to its parent: the parent
//! of a node is found by walking down from the root (see [`Tree::parent`][crate::Tree::parent]),
//! so moving subtrees around during rotations or deletions can never leave a stale back-pointer.

use std::cmp::Ordering;
use std::ptr;

use crate::balance::{self, Side};
use crate::error::Error;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A node of a binary search tree. Every key in the left subtree is smaller than `key` and every
/// key in the right subtree is larger.
///
/// The derived `Clone` and `Debug` descend into both subtrees recursively; [`Tree`][crate::Tree]
/// implements both without recursion.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// Height of the left subtree minus height of the right subtree. Only maintained by
    /// [`Policy::Balanced`][crate::Policy::Balanced]; always 0 otherwise.
    pub(crate) balance: i8,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            balance: 0,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The balance factor: height of the left subtree minus height of the right subtree.
    ///
    /// Once an insertion into a [`Policy::Balanced`][crate::Policy::Balanced] tree returns, this
    /// is one of `-1`, `0` or `1` for every node. Deletions do not update it.
    pub fn balance_factor(&self) -> i8 {
        self.balance
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The smallest key in the subtree rooted at this node.
    pub fn min(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The largest key in the subtree rooted at this node.
    pub fn max(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    /// Identity, not equality: whether `other` is this very node.
    pub(crate) fn is(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| ptr::eq(self, other))
    }

    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut node = self;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Inserts `key` into the subtree rooted at this node, keeping the balance factors of every
    /// node on the path up to date and rotating any child subtree that falls out of balance. The
    /// node itself is left for its parent (or the tree) to fix.
    ///
    /// This recurses once per level, which the balancing keeps logarithmic. Unbalanced trees go
    /// through the free function `insert` instead.
    pub(crate) fn insert(&mut self, key: K) -> Result<(), Error>
    where
        K: Ord,
    {
        let side = match key.cmp(&self.key) {
            Ordering::Less => Side::Left,
            Ordering::Equal => return Err(Error::DuplicateKey),
            Ordering::Greater => Side::Right,
        };

        match self.child_mut(side) {
            Some(child) => {
                let before = child.balance;
                child.insert(key)?;
                balance::settle(self, side, before);
            }
            None => {
                *self.link_mut(side) = Some(Self::leaf(key));
                balance::grew(self, side);
            }
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        Ok(())
    }

    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        self.link_mut(side).as_deref_mut()
    }
}

/// Hangs a new leaf holding `key` in the empty slot below `link` where it belongs. No balance
/// factor is touched, and the walk down is a loop, so a degenerate chain of any length is fine.
pub(crate) fn insert<K: Ord>(mut link: &mut Link<K>, key: K) -> Result<(), Error> {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return Err(Error::DuplicateKey),
            Ordering::Greater => &mut node.right,
        };
    }
    *link = Some(Node::leaf(key));
    Ok(())
}

/// Removes `key` from the subtree in `link` and returns it, or `None` if it isn't there (in which
/// case nothing was changed).
///
/// A leaf is detached and a node with a single child is replaced by that child. A node with two
/// children takes over the key of its in-order successor, and the successor (which has no left
/// child) is unlinked from the right subtree instead.
pub(crate) fn remove<K: Ord>(mut link: &mut Link<K>, key: &K) -> Option<K> {
    loop {
        let ordering = key.cmp(&link.as_ref()?.key);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => break,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }

    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_min(&mut node.right)?;
        return Some(std::mem::replace(&mut node.key, successor));
    }
    let mut removed = link.take()?;
    *link = removed.left.take().or_else(|| removed.right.take());
    Some(removed.key)
}

/// Unlinks the leftmost node of the subtree in `link`, splicing its right child into its place.
fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.key)
}
