//! Constant-time restructuring of a subtree whose balance factor reached `±2`.
//!
//! Every rotation takes ownership of the root of the subtree being fixed and returns the new
//! root; relinking it into the parent (or the tree's root slot) is the caller's job. Balance
//! factors of the nodes that move are recomputed from the balance factors they had before the
//! rotation, which keeps them exact however deep the surrounding subtrees are.
//!
//! See [the Wikipedia page][wiki] for the terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use crate::node::Node;

type Subtree<K> = Box<Node<K>>;

/// Picks and runs the rotation that fixes `root`. Which one runs depends only on the sign of
/// `root`'s balance factor and the balance factor of the child on the heavy side.
///
/// A subtree that isn't out of balance, or whose heavy side is missing (which can only happen
/// once balance factors have drifted after deletions), is returned unchanged.
pub(crate) fn rebalance<K>(root: Subtree<K>) -> Subtree<K> {
    let left = root.left().map(Node::balance_factor);
    let right = root.right().map(Node::balance_factor);
    let rotation: fn(Subtree<K>) -> Subtree<K> = match (root.balance, left, right) {
        (b, Some(l), _) if b > 1 && l >= 0 => rotate_right,
        (b, Some(_), _) if b > 1 => rotate_left_right,
        (b, _, Some(r)) if b < -1 && r <= 0 => rotate_left,
        (b, _, Some(_)) if b < -1 => rotate_right_left,
        _ => return root,
    };
    tracing::debug!(balance = root.balance, ?left, ?right, "rebalancing subtree");
    rotation(root)
}

/// Rotate `old_root` to the right. This moves its left child up and `old_root` down. Used when
/// the left side is too tall.
///
/// ```text
///      old_root                new_root
///       /    \                  /    \
///   new_root  z    rotate ->   x   old_root
///    /   \                          /   \
///   x     y                        y     z
/// ```
pub(crate) fn rotate_right<K>(mut old_root: Subtree<K>) -> Subtree<K> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };
    tracing::trace!("rotate right");

    old_root.left = new_root.right.take();
    old_root.balance = old_root.balance - 1 - new_root.balance.max(0);
    new_root.balance = new_root.balance - 1 + old_root.balance.min(0);

    new_root.right = Some(old_root);
    new_root
}

/// Rotate `old_root` to the left. The mirror image of [`rotate_right`], used when the right side
/// is too tall.
pub(crate) fn rotate_left<K>(mut old_root: Subtree<K>) -> Subtree<K> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };
    tracing::trace!("rotate left");

    old_root.right = new_root.left.take();
    old_root.balance = old_root.balance + 1 - new_root.balance.min(0);
    new_root.balance = new_root.balance + 1 + old_root.balance.max(0);

    new_root.left = Some(old_root);
    new_root
}

/// The left child leans right: straighten it out with a left rotation, then rotate right.
pub(crate) fn rotate_left_right<K>(mut root: Subtree<K>) -> Subtree<K> {
    root.left = root.left.take().map(rotate_left);
    rotate_right(root)
}

/// The right child leans left: straighten it out with a right rotation, then rotate left.
pub(crate) fn rotate_right_left<K>(mut root: Subtree<K>) -> Subtree<K> {
    root.right = root.right.take().map(rotate_right);
    rotate_left(root)
}
