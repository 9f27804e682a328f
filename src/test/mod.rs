
use crate::node::Node;

/// Checks every node below `node` against its real subtree heights: the stored balance factor
/// must match them and be within `-1..=1`. Returns the height of `node` in nodes.
pub(crate) fn assert_avl<K>(node: Option<&Node<K>>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let left = assert_avl(node.left());
    let right = assert_avl(node.right());
    let actual = left as isize - right as isize;

    assert_eq!(node.balance as isize, actual, "stale balance factor");
    assert!(actual.abs() <= 1, "unbalanced node");
    left.max(right) + 1
}
