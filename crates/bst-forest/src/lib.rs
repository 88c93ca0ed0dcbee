//! Two binary search trees over a dense key universe `0..n`.
//!
//! - [`SplayTree`] starts as a right-leaning chain and splays every key it
//!   finds to the root, so lookups take `&mut self`.
//! - [`WeightBalancedTree`] is built once from per-key access weights by
//!   recursively splitting each key range where the weight on both sides is
//!   most even, and is read-only afterward.
//!
//! Both implement [`MembershipSet`]. Nodes live in a `Vec` arena and link
//! to each other through `Option<u32>` indices.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`LinkedNode`] and [`MembershipSet`] traits |
//! [`splay`] | `rotate`, zig / zig-zig / zig-zag, `splay` |
//! [`splay_tree`] | [`SplayTree`] |
//! [`weight_balanced`] | [`WeightBalancedTree`], [`find_split_point`] |
//! [`util`] | descent, traversal, validation, `print_tree` |
//! [`error`] | [`ForestError`] |

pub mod error;
pub mod splay;
pub mod splay_tree;
pub mod types;
pub mod util;
pub mod weight_balanced;

pub use error::ForestError;
pub use splay::{is_left_child, rotate, splay, zig, zig_zag, zig_zig};
pub use splay_tree::{SplayNode, SplayTree};
pub use types::{LinkedNode, MembershipSet, Node};
pub use weight_balanced::{find_split_point, Split, WeightBalancedTree, WeightedNode};
