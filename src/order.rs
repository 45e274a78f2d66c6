/// The depth-first order in which [`OrderedTree::traverse`][crate::OrderedTree::traverse]
/// visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields values in
    /// non-decreasing order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}
