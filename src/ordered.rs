//! An owned BST. Every node exclusively owns its children through a `Box` so the structure is
//! always a strict tree. Deletion rewrites the exact child slot holding the deleted node instead
//! of tracking parent pointers.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting the same value twice stores it twice.
//! tree.insert(1);
//! tree.insert(1);
//! assert_eq!(tree.size(), 2);
//!
//! // Deleting removes a single copy.
//! tree.delete(&1).unwrap();
//! assert!(tree.contains(&1));
//! assert_eq!(tree.traverse(Order::In), vec![1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::{Order, TreeError, TreeResult};

/// A child slot: either empty or exclusively owning a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of ordered values. Values less than a node go to its left
/// subtree and all other values, including duplicates, go to its right subtree.
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    // TODO stack based drop. Dropping a degenerate tree recurses once per level.
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values stored in the tree. This walks every node so it is `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 2].into_iter().collect();
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The number of levels on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts the given value as a new leaf. Duplicates are never merged or rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.traverse(Order::Pre), vec![2, 1, 2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_mut() {
            Some(root) => root.insert(value, 0),
            None => {
                trace!(depth = 0, "inserted root");
                self.root = Some(Node::new_boxed(value));
            }
        }
    }

    /// Returns `true` if some node in the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root().map_or(false, |n| n.contains(value))
    }

    /// Collects references to the values of the tree in the given order.
    pub fn traverse_refs(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.walk(order, &mut values);
        }
        values
    }

    /// Collects copies of the values of the tree in the given order. [`Order::In`] yields the
    /// values sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::In), vec![1, 3, 4, 5, 7, 8, 9]);
    /// assert_eq!(tree.traverse(Order::Pre), vec![5, 3, 1, 4, 8, 7, 9]);
    /// assert_eq!(tree.traverse(Order::Post), vec![1, 4, 3, 7, 9, 8, 5]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse_refs(order).into_iter().cloned().collect()
    }

    /// Renders the pre-order traversal as `"[v0, v1, ..., vn]"`. An empty tree renders as `"[]"`.
    /// This is the same text as the tree's [`Display`][fmt::Display] output.
    pub fn to_display_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Deletes one node holding `value`, the first one found searching down from the root. If no
    /// node holds `value`, [`TreeError::NotFound`] is returned and the tree is left untouched.
    ///
    /// A node with two children takes the value of its in-order predecessor, and the
    /// predecessor's node is removed instead. Either way exactly one node is freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree, TreeError};
    ///
    /// let mut tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Ok(()));
    /// assert_eq!(tree.traverse(Order::Pre), vec![1, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn delete(&mut self, value: &T) -> TreeResult<()>
    where
        T: Ord,
    {
        delete_from(&mut self.root, value)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.traverse_refs(Order::Pre).into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Searches `link` for `value` and removes the first node found holding it.
fn delete_from<T>(link: &mut Link<T>, value: &T) -> TreeResult<()>
where
    T: Ord,
{
    let Some(node) = link.as_mut() else {
        trace!("delete missed");
        return Err(TreeError::NotFound);
    };
    match value.cmp(&node.value) {
        Ordering::Less => delete_from(&mut node.left, value),
        Ordering::Equal => remove(link).map(drop).ok_or(TreeError::NotFound),
        Ordering::Greater => delete_from(&mut node.right, value),
    }
}

/// Removes the node held in `link` and returns its value. The rest of its subtree stays in the
/// slot.
fn remove<T>(link: &mut Link<T>) -> Option<T>
where
    T: Ord,
{
    let node = link.as_mut()?;
    match (node.left.is_some(), node.right.is_some()) {
        (true, true) => {
            debug!("deleting node with two children, promoting its predecessor");
            let predecessor = take_rightmost(&mut node.left)?;
            let removed = mem::replace(&mut node.value, predecessor);
            if cfg!(debug_assertions) {
                node.check_local_order();
            }
            return Some(removed);
        }
        (false, false) => debug!("deleting leaf node"),
        _ => debug!("deleting node with one child"),
    }
    splice(link)
}

/// Detaches the rightmost node of the subtree in `link` and returns its value. Its left subtree,
/// if any, takes its place.
fn take_rightmost<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.right.is_some() {
        link.as_mut().and_then(|node| take_rightmost(&mut node.right))
    } else {
        splice(link)
    }
}

/// Removes the node in `link`, which has at most one child, and moves that child's subtree up
/// into the slot.
fn splice<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let Node { value, left, right } = *node;
    debug_assert!(left.is_none() || right.is_none());

    *link = left.or(right);
    Some(value)
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Inserts `value` below this node, which sits `depth` levels under the root.
    fn insert(&mut self, value: T, depth: usize)
    where
        T: Ord,
    {
        let slot = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot {
            Some(child) => child.insert(value, depth + 1),
            None => {
                trace!(depth = depth + 1, "inserted leaf");
                *slot = Some(Self::new_boxed(value));
            }
        }

        if cfg!(debug_assertions) {
            self.check_local_order();
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().map_or(false, |n| n.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.contains(value)),
        }
    }

    fn walk<'a>(&'a self, order: Order, values: &mut Vec<&'a T>) {
        if order == Order::Pre {
            values.push(&self.value);
        }
        if let Some(left) = self.left() {
            left.walk(order, values);
        }
        if order == Order::In {
            values.push(&self.value);
        }
        if let Some(right) = self.right() {
            right.walk(order, values);
        }
        if order == Order::Post {
            values.push(&self.value);
        }
    }

    /// Asserts this node is ordered with respect to its children. Promoting a predecessor can
    /// leave an equal duplicate on the left so the left check is non-strict.
    fn check_local_order(&self)
    where
        T: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.value <= self.value);
        }
        if let Some(right) = self.right() {
            assert!(right.value >= self.value);
        }
    }
}
