//! Failures reported by [`Tree`][crate::Tree] operations.

/// Every way a tree operation can fail. None of them leave the tree partially modified: an
/// operation that returns an `Error` has not touched the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key is already stored. Inserting it again is a no-op.
    #[error("key already exists in the tree")]
    DuplicateKey,
    /// The key the operation targets is not stored in the tree.
    #[error("key does not exist in the tree")]
    KeyNotFound,
    /// The operation needs at least one node.
    #[error("tree is empty")]
    EmptyTree,
    /// A node could not be reached from the root of the tree it was looked up in.
    #[error("node is not reachable from the root of this tree")]
    StructuralInconsistency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_distinct() {
        assert_ne!(Error::KeyNotFound, Error::EmptyTree);
        assert_ne!(Error::KeyNotFound, Error::DuplicateKey);
        assert_eq!(Error::EmptyTree.to_string(), "tree is empty");
    }
}
