//! Node trait definitions.
//!
//! Nodes live in a `Vec`-backed arena and every "pointer" is an
//! `Option<u32>` index into it. Tree-manipulation functions take the arena
//! slice plus node indices.
//!
//! - [`Node`]: read-only shape (key, left, right). Enough for descent,
//!   traversal and validation.
//! - [`LinkedNode`]: adds the parent back-link and the setters needed by
//!   rotations.

/// Read-only binary-tree node over a `u32` key.
pub trait Node {
    fn k(&self) -> u32;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
}

/// Mutable node with a parent back-link.
///
/// Invariant: if `p()` is `Some(q)`, then `q`'s `l()` or `r()` is this node.
pub trait LinkedNode: Node {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Membership query over a dense key universe `0..len()`.
///
/// `contains` takes `&mut self` because a self-adjusting implementation
/// restructures itself on every hit. Static implementations simply ignore
/// the exclusivity.
pub trait MembershipSet {
    fn contains(&mut self, key: i64) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
