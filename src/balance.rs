//! The balancing policy: how a finished insertion below a node is folded back into that node's
//! balance factor, and when the [`rotation`][crate::rotation] engine has to step in.
//!
//! Insertion changes the height of any subtree by at most one level. A child whose balance factor
//! moved away from zero grew by one level, so its parent leans one step further towards it. A
//! child whose balance factor didn't change, or moved back to zero, kept its height and nothing
//! above it needs to change. A child that ended up at `±2` is rotated in place by its parent;
//! the rotation restores the height the child had before the insertion, so the change stops
//! propagating there.

use crate::node::Node;
use crate::rotation;

/// Whether a [`Tree`][crate::Tree] rebalances itself on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// A plain binary search tree. Its shape depends entirely on insertion order.
    #[default]
    Unbalanced,
    /// A height-balanced (AVL) tree. Every insertion keeps the balance factor of every node in
    /// `-1..=1`.
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// How much the parent's balance factor moves when the child on this side grows.
    fn weight(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// A new leaf was hung on `parent`'s empty `side`.
pub(crate) fn grew<K>(parent: &mut Node<K>, side: Side) {
    parent.balance += side.weight();
}

/// Folds an insertion into `parent`'s child on `side` back into `parent`. `before` is the child's
/// balance factor from before the insertion.
pub(crate) fn settle<K>(parent: &mut Node<K>, side: Side, before: i8) {
    let link = parent.link_mut(side);
    let Some(after) = link.as_ref().map(|child| child.balance) else {
        return;
    };
    if after == 0 || after == before {
        return;
    }

    if after.abs() > 1 {
        *link = link.take().map(rotation::rebalance);
    } else {
        parent.balance += side.weight();
    }
}
