//! This crate exposes a Binary Search Tree and a binary max-heap
//! mostly for educational purposes, along with the two console
//! demos that drive them.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. The most important invariants
//! of the [`tree::Tree`] here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key.
//!
//! The tree never rebalances, so its height depends entirely on insertion
//! order. BSTs naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Binary Heap
//!
//! A binary max-heap keeps its records in an array that is read as a
//! complete binary tree where every parent ranks at least as high as its
//! children. The highest ranked record is always in the first slot. See
//! [`heap::Heap`].
//!
//! ## Demos
//!
//! [`madlibs`] fills a story template from words stored in a tree and
//! [`lineup`] schedules a music festival with a heap. Both talk to the user
//! through a [`console::Console`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod console;
pub mod error;
pub mod heap;
pub mod lineup;
pub mod madlibs;
pub mod tree;
