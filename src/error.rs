/// Errors returned by [`OrderedTree`][crate::OrderedTree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The value asked to be deleted isn't stored in the tree.
    #[error("value not found in tree")]
    NotFound,
}

/// Shorthand for results of fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
