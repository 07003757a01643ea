//! # bptree-index
//! A generic in-memory B+ tree index: an ordered associative container
//! mapping a `u64` hash to a caller-supplied value of arbitrary type.
//!
//! ## Features
//! - Logarithmic insert, lookup, and delete under a caller-chosen
//!   branching factor (`degree`).
//! - The caller supplies the hash function, so the same tree shape can
//!   back either a keyed container or a set of hashed values.
//! - Deep cloning with full structural independence from the source.
//!
//! ## Usage
//! This crate exposes [`Tree`] as its only entry point; [`Node`] is
//! exported for callers that want to inspect tree shape directly (as
//! the test suite does).
//!
//! ```
//! use bptree_index::Tree;
//!
//! let mut t = Tree::new(4, |v: &i32| *v as u64);
//! t.insert(7);
//! assert_eq!(t.search(&7), Ok(&7));
//! assert!(t.delete(&7));
//! assert!(t.search(&7).is_err());
//! ```
// =====================================================================
// File: lib.rs
//
//   This crate implements the B+ tree node algebra and the thin `Tree`
//   façade built on top of it. See `index/node.rs` for the split,
//   dissolve, and boundary-propagation mechanics, and `index/tree.rs`
//   for the public API surface.
// =====================================================================

pub mod error;
pub use error::{BPTreeError, Result};

pub mod index;
pub use index::{Node, Tree};
