//! An unbalanced BST keyed by word categories. Each node owns its children through a `Box` so
//! there is exactly one owner for every node and deleting a node hands its children back to its
//! parent's slot.
//!
//! Unlike a map, inserting a key that is already present does not overwrite anything. Ties are
//! routed to the right, so the new node lands below the old one and [`Tree::find`] keeps
//! returning the shallowest (oldest) value until that node is deleted.
//!
//! # Examples
//!
//! ```
//! use treeheap::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find("noun"), None);
//!
//! tree.insert("noun", "cat");
//! tree.insert("verb", "jump");
//! tree.insert("adverb", "quickly");
//! assert_eq!(tree.find("verb"), Some("jump"));
//!
//! // In-order traversal visits categories alphabetically.
//! let categories: Vec<_> = tree.inorder().map(|(category, _)| category).collect();
//! assert_eq!(categories, ["adverb", "noun", "verb"]);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete("noun"), Some("cat".to_string()));
//! assert_eq!(tree.find("noun"), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

type Link = Option<Box<Node>>;

/// A Binary Search Tree mapping a category to a word. This can be used for inserting, finding,
/// and deleting entries as well as walking them depth-first in any of the three canonical orders.
pub struct Tree {
    root: Link,
    len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    // A degenerate tree is a linked list, so the default recursive drop could blow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    // Re-inserting in pre-order rebuilds the exact same shape, duplicates included.
    fn clone(&self) -> Self {
        self.preorder().collect()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inorder()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Tree
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a str, &'a str);
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree. Duplicate keys each count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a new leaf holding `key` and `value`. Keys strictly less than a node's key go
    /// left, everything else (including an equal key) goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeheap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert("noun", "cat");
    /// tree.insert("noun", "dog");
    ///
    /// // The shallower node shadows the newer one.
    /// assert_eq!(tree.find("noun"), Some("cat"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        trace!(%key, "inserting");

        let slot = descend(&mut self.root, &key, false);
        *slot = Some(Node::new_boxed(key, value.into()));
        self.len += 1;
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeheap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("verb", "jump");
    ///
    /// assert_eq!(tree.find("verb"), Some("jump"));
    /// assert_eq!(tree.find("adjective"), None);
    /// ```
    pub fn find(&self, key: &str) -> Option<&str> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(node.key.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }

        None
    }

    /// Deletes the shallowest node containing the given key and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children is not unlinked itself. Instead it takes over the key and value
    /// of its in-order successor and the successor's node is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeheap::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("noun", "cat");
    ///
    /// assert_eq!(tree.delete("noun"), Some("cat".to_string()));
    /// assert_eq!(tree.delete("noun"), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let slot = descend(&mut self.root, key, true);
        let Some(mut node) = slot.take() else {
            debug!(key, "nothing to delete");
            return None;
        };
        self.len -= 1;
        debug!(key, "deleting");

        match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *slot = child;
                Some(node.value)
            }
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let successor =
                    take_leftmost(&mut right).expect("A right child has a leftmost node");
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = *successor;

                node.key = successor_key;
                let value = mem::replace(&mut node.value, successor_value);
                node.left = Some(left);
                node.right = right;
                *slot = Some(node);

                Some(value)
            }
        }
    }

    /// Walks the tree in the given `order`.
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        Traversal {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, Step::Expand))
                .into_iter()
                .collect(),
            order,
        }
    }

    /// Walks the tree visiting each node before its left then right subtrees.
    pub fn preorder(&self) -> Traversal<'_> {
        self.traverse(Order::Pre)
    }

    /// Walks the tree visiting the left subtree, then the node, then the right subtree. This
    /// yields keys in non-decreasing order.
    pub fn inorder(&self) -> Traversal<'_> {
        self.traverse(Order::In)
    }

    /// Walks the tree visiting both subtrees (left first) before the node itself.
    pub fn postorder(&self) -> Traversal<'_> {
        self.traverse(Order::Post)
    }
}

/// Walks down from `link` the way `key` routes (ties go right) and returns the first empty link.
/// When `stop_at_match` is set, stops early at the link holding the shallowest node keyed by
/// `key`.
fn descend<'a>(mut link: &'a mut Link, key: &str, stop_at_match: bool) -> &'a mut Link {
    while let Some(node) = link.as_deref() {
        let ordering = key.cmp(node.key.as_str());
        if stop_at_match && ordering == Ordering::Equal {
            break;
        }

        let node = link.as_mut().expect("`while let` saw a node");
        link = match ordering {
            Ordering::Less => &mut node.left,
            Ordering::Equal | Ordering::Greater => &mut node.right,
        };
    }

    link
}

/// Unlinks the leftmost node of the subtree at `link`, splicing its right child into its place.
fn take_leftmost(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        link = &mut link.as_mut().expect("Checked for a left child").left;
    }

    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

/// A single entry in the tree. Children are owned, so moving a `Box<Node>` moves its subtree.
struct Node {
    key: String,
    value: String,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(key: String, value: String) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// The three depth-first orders a [`Tree`] can be walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left, right.
    Pre,
    /// Left, node, right.
    In,
    /// Left, right, node.
    Post,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pre => "Preorder",
            Self::In => "Inorder",
            Self::Post => "Postorder",
        };
        f.write_str(name)
    }
}

enum Step {
    /// Push the node's children and itself in the traversal's order.
    Expand,
    /// Yield the node.
    Visit,
}

/// A depth-first walk over a [`Tree`] yielding `(key, value)` pairs. It uses an explicit stack so
/// degenerate trees can't overflow the call stack.
pub struct Traversal<'a> {
    stack: Vec<(&'a Node, Step)>,
    order: Order,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, step)) = self.stack.pop() {
            match step {
                Step::Visit => return Some((&node.key, &node.value)),
                Step::Expand => {
                    let left = node.left.as_deref().map(|left| (left, Step::Expand));
                    let right = node.right.as_deref().map(|right| (right, Step::Expand));
                    let visit = Some((node, Step::Visit));

                    // Pushed backwards: the last frame pushed is the first one popped.
                    let frames = match self.order {
                        Order::Pre => [right, left, visit],
                        Order::In => [right, visit, left],
                        Order::Post => [visit, right, left],
                    };
                    self.stack.extend(frames.into_iter().flatten());
                }
            }
        }

        None
    }
}
