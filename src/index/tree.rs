// =====================================================================
// File: index/tree.rs
//
// Description:
//   Implements `Tree<T>`, the thin façade over the `Node<T>` algebra in
//   `node.rs`. `Tree` owns the root edge, the branching factor, and the
//   caller-supplied hash function; every structural rule (split sizes,
//   dissolve, boundary propagation) lives in `Node` itself.
//
// Notes:
//   * `hash_fn` is an `Rc<dyn Fn(&T) -> u64>` rather than a generic type
//     parameter so `Tree<T>` stays a single concrete type per `T`, and
//     so `deep_copy_from` can share it with a fresh tree via
//     `Rc::clone` instead of requiring the closure to implement
//     `Clone`.
// =====================================================================

use std::rc::Rc;

use super::Node;
use crate::error::Result;

/// A generic in-memory B+ tree index mapping `u64` hashes, derived from
/// caller values via `hash_fn`, back to those values.
pub struct Tree<T> {
    degree: usize,
    root: Box<Node<T>>,
    hash_fn: Rc<dyn Fn(&T) -> u64>,
}

impl<T> Tree<T> {
    /// Creates an empty tree with the given branching factor and
    /// hashing function.
    ///
    /// # Panics
    /// If `degree < 3`. A degree below 3 cannot express the occupancy
    /// floor (`degree / 2`) the node algebra relies on to keep at least
    /// one other entry on a dissolve.
    ///
    /// # Example
    /// ```
    /// use bptree_index::Tree;
    ///
    /// let mut t: Tree<String> = Tree::new(4, |s: &String| s.len() as u64);
    /// t.insert("hi".to_string());
    /// assert!(t.search(&"hi".to_string()).is_ok());
    /// ```
    pub fn new<F>(degree: usize, hash_fn: F) -> Self
    where
        F: Fn(&T) -> u64 + 'static,
    {
        assert!(degree >= 3, "tree degree must be >= 3, got {degree}");
        Self {
            degree,
            root: Box::new(Node::new_leaf(degree, std::ptr::null_mut())),
            hash_fn: Rc::new(hash_fn),
        }
    }

    /// The branching factor this tree was constructed with.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The root node, for callers that want to walk the tree shape
    /// directly (tests, diagnostics).
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    fn hash_of(&self, value: &T) -> u64 {
        (self.hash_fn)(value)
    }

    /// Inserts `value`, keyed by `hash_fn(&value)`. Overwrites any
    /// existing value under the same hash.
    pub fn insert(&mut self, value: T) {
        let hash = self.hash_of(&value);
        log::trace!("tree insert hash={hash}");
        self.root.insert_entry(hash, value);
    }

    /// Looks up the value equal to `value` under `hash_fn`.
    ///
    /// # Errors
    /// `NotFound` if no entry with that hash exists.
    pub fn search(&self, value: &T) -> Result<&T> {
        let hash = self.hash_of(value);
        self.search_by_hash(hash)
    }

    /// Looks up the value stored at `hash` directly.
    ///
    /// # Errors
    /// `NotFound` if no entry with that hash exists.
    pub fn search_by_hash(&self, hash: u64) -> Result<&T> {
        let leaf = self.search_leaf(hash)?;
        leaf.get_item_by_hash(hash)
    }

    /// Descends from the root to the leaf whose range would contain
    /// `hash`, without asserting the hash is actually present there.
    ///
    /// # Errors
    /// `EmptyTree` is never returned by this crate's representation
    /// (the root always exists, even when empty) but is kept for
    /// callers written against implementations that model the root as
    /// nullable.
    pub fn search_leaf(&self, hash: u64) -> Result<&Node<T>> {
        let mut current: &Node<T> = &self.root;
        while !current.is_leaf() {
            let idx = current.child_index_for(hash);
            current = current.child_at(idx);
        }
        Ok(current)
    }

    /// Removes the value equal to `value` under `hash_fn`. Returns
    /// `true` if an entry was removed, `false` if it was already
    /// absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let hash = self.hash_of(value);
        self.delete_by_hash(hash)
    }

    /// Removes the entry at `hash`. Returns `true` if an entry was
    /// removed, `false` if it was already absent.
    pub fn delete_by_hash(&mut self, hash: u64) -> bool {
        log::trace!("tree delete hash={hash}");
        self.root.delete_entry(hash)
    }
}

impl<T: Clone> Tree<T> {
    /// Rebuilds `self` as a structurally independent copy of `other`:
    /// no node or value is shared between the two trees afterward,
    /// except the hash function itself (cheaply shared via `Rc`, since
    /// it is pure and has no mutable state for the two trees to race
    /// on).
    pub fn deep_copy_from(&mut self, other: &Tree<T>) {
        self.degree = other.degree;
        self.hash_fn = Rc::clone(&other.hash_fn);
        self.root = Box::new(Node::new_leaf(other.degree, std::ptr::null_mut()));
        other.root.deep_copy_into(&mut self.root);
    }
}

impl<T> std::fmt::Debug for Tree<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("degree", &self.degree)
            .field("root", &self.root)
            .finish()
    }
}
