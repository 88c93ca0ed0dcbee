//! Static BST whose shape is driven by per-key access weights.
//!
//! Each subtree root is the key chosen by [`find_split_point`] over the
//! subtree's key range, so heavy keys sit near the root. The tree is never
//! modified after [`WeightBalancedTree::new`] returns.

pub mod split;

use tracing::debug;

use crate::error::{check_weights, ForestError};
use crate::types::{MembershipSet, Node};
use crate::util::{self, assert_bst, find, print_tree, size};

pub use split::{find_split_point, Split};

/// Weight-balanced tree node. No parent link; nothing ever walks upward.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: u32,
    pub w: f64,
}

impl WeightedNode {
    pub fn new(k: u32, w: f64) -> Self {
        Self {
            l: None,
            r: None,
            k,
            w,
        }
    }
}

impl Node for WeightedNode {
    fn k(&self) -> u32 {
        self.k
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

/// A subrange still waiting for its root, and where to hang it.
struct Pending {
    parent: Option<(u32, Side)>,
    start: usize,
    end: usize,
    sum: f64,
}

/// Immutable BST over the keys `0..n` built from `n` access weights.
///
/// Lookups take `&self`; a built tree can be shared between threads.
#[derive(Clone, Debug)]
pub struct WeightBalancedTree {
    root: Option<u32>,
    arena: Vec<WeightedNode>,
}

impl WeightBalancedTree {
    /// Builds the tree for keys `0..weights.len()`, where `weights[k]` is
    /// the weight of key `k`.
    ///
    /// Fails on NaN, infinite or negative weights. An empty slice gives an
    /// empty tree.
    pub fn new(weights: &[f64]) -> Result<Self, ForestError> {
        check_weights(weights)?;
        let mut arena: Vec<WeightedNode> = Vec::with_capacity(weights.len());
        if weights.is_empty() {
            return Ok(Self { root: None, arena });
        }

        // Explicit work stack: a skewed weight distribution can make the
        // tree as deep as it is wide.
        let mut stack = vec![Pending {
            parent: None,
            start: 0,
            end: weights.len(),
            sum: weights.iter().sum(),
        }];
        while let Some(Pending {
            parent,
            start,
            end,
            sum,
        }) = stack.pop()
        {
            let split = find_split_point(start, end, sum, weights);
            let idx = arena.len() as u32;
            arena.push(WeightedNode::new(split.index as u32, weights[split.index]));
            match parent {
                Some((p, Side::Left)) => arena[p as usize].l = Some(idx),
                Some((p, Side::Right)) => arena[p as usize].r = Some(idx),
                None => {}
            }
            if split.index + 1 != end {
                stack.push(Pending {
                    parent: Some((idx, Side::Right)),
                    start: split.index + 1,
                    end,
                    sum: split.sum_after,
                });
            }
            if split.index != start {
                stack.push(Pending {
                    parent: Some((idx, Side::Left)),
                    start,
                    end: split.index,
                    sum: split.sum_before,
                });
            }
        }

        let tree = Self {
            root: Some(0),
            arena,
        };
        debug!(
            keys = weights.len(),
            root = tree.root_key(),
            height = tree.height(),
            "built weight-balanced tree"
        );
        Ok(tree)
    }

    /// Membership test. Never restructures.
    pub fn contains(&self, key: i64) -> bool {
        self.find_key(key).is_some()
    }

    pub fn find_key(&self, key: i64) -> Option<u32> {
        let key = u32::try_from(key).ok()?;
        find(&self.arena, self.root, key)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<u32> {
        self.root.map(|r| self.arena[r as usize].k)
    }

    pub fn node(&self, idx: u32) -> &WeightedNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> u32 {
        self.arena[idx as usize].k
    }

    pub fn weight(&self, idx: u32) -> f64 {
        self.arena[idx as usize].w
    }

    pub fn left_key(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l.map(|l| self.key(l))
    }

    pub fn right_key(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r.map(|r| self.key(r))
    }

    pub fn arena(&self) -> &[WeightedNode] {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        util::keys(&self.arena, self.root)
    }

    /// Checks BST order and that every node is reachable from the root.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_bst(&self.arena, self.root)?;
        let reachable = size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(format!(
                "Reachable nodes {reachable} != allocated {}",
                self.arena.len()
            ));
        }
        Ok(())
    }

    pub fn to_string(&self, tab: &str) -> String {
        print_tree(&self.arena, self.root, tab, |n| format!("{} ({})", n.k, n.w))
    }
}

impl MembershipSet for WeightBalancedTree {
    fn contains(&mut self, key: i64) -> bool {
        WeightBalancedTree::contains(self, key)
    }

    fn len(&self) -> usize {
        WeightBalancedTree::len(self)
    }
}
