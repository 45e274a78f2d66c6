//! This crate exposes an unbalanced, owned Binary Search Tree (BST) that
//! stores a multiset of ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have up to two child `Node`s. The invariants of this
//! BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are kept as
//!    separate `Node`s and always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing so inserting already sorted values degrades it into a list.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree, TreeError};
//!
//! let mut tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
//!
//! assert_eq!(tree.traverse(Order::In), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.to_string(), "[5, 3, 1, 4, 8, 7, 9]");
//!
//! assert_eq!(tree.delete(&5), Ok(()));
//! assert_eq!(tree.delete(&5), Err(TreeError::NotFound));
//! assert_eq!(tree.size(), 6);
//! ```
//!
//! The tree is not synchronized. Sharing it mutably across threads requires
//! external locking.

#![deny(missing_docs)]

mod error;
mod order;
pub mod ordered;

pub use error::{TreeError, TreeResult};
pub use order::Order;
pub use ordered::OrderedTree;
