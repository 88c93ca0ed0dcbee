use tracing::{debug, trace};

use crate::error::{check_len, check_weights, ForestError};
use crate::splay::splay;
use crate::types::{LinkedNode, MembershipSet, Node};
use crate::util::{self, assert_bst, assert_links, find, print_tree, size};

/// Splay-tree node with a parent back-link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplayNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: u32,
}

impl SplayNode {
    pub fn new(k: u32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl Node for SplayNode {
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

impl LinkedNode for SplayNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Self-adjusting BST over the keys `0..n`.
///
/// Starts as a right-leaning chain and splays every key it finds to the
/// root. Nodes are allocated once, at construction; queries only relink
/// them. Arena index `i` always holds key `i`.
#[derive(Clone, Debug)]
pub struct SplayTree {
    root: Option<u32>,
    arena: Vec<SplayNode>,
}

impl SplayTree {
    /// Builds the chain `0 → 1 → … → n-1` where `n = weights.len()`.
    ///
    /// Access weights have no bearing on a splay tree's shape; they are
    /// validated like [`WeightBalancedTree::new`](crate::WeightBalancedTree::new)
    /// does and otherwise only their count is used.
    pub fn new(weights: &[f64]) -> Result<Self, ForestError> {
        check_weights(weights)?;
        let tree = Self::with_len(weights.len())?;
        debug!(keys = weights.len(), "built splay tree chain");
        Ok(tree)
    }

    /// Same as [`SplayTree::new`] without a weights slice.
    pub fn with_len(len: usize) -> Result<Self, ForestError> {
        let n = check_len(len)?;
        let mut arena: Vec<SplayNode> = (0..n).map(SplayNode::new).collect();
        for i in 1..n {
            arena[i as usize - 1].r = Some(i);
            arena[i as usize].p = Some(i - 1);
        }
        let root = if n == 0 { None } else { Some(0) };
        Ok(Self { root, arena })
    }

    /// Membership test. A hit splays the key to the root; a miss leaves
    /// the tree untouched.
    pub fn contains(&mut self, key: i64) -> bool {
        let Some(node) = self.find_key(key) else {
            return false;
        };
        self.root = Some(splay(&mut self.arena, node));
        trace!(key, "splayed to root");
        true
    }

    /// Locates `key` without restructuring.
    pub fn find_key(&self, key: i64) -> Option<u32> {
        let key = u32::try_from(key).ok()?;
        find(&self.arena, self.root, key)
    }

    /// Whether `node` is its parent's left child. `false` for the root, for
    /// `None` and for an index outside the arena.
    pub fn is_left_child(&self, node: Option<u32>) -> bool {
        match node {
            Some(idx) if (idx as usize) < self.arena.len() => {
                crate::splay::is_left_child(&self.arena, idx)
            }
            _ => false,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<u32> {
        self.root.map(|r| self.arena[r as usize].k)
    }

    pub fn node(&self, idx: u32) -> &SplayNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> u32 {
        self.arena[idx as usize].k
    }

    pub fn arena(&self) -> &[SplayNode] {
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

    /// Keys in ascending order. Does not splay.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        util::keys(&self.arena, self.root)
    }

    /// Checks BST order, parent/child agreement and that every allocated
    /// node is still reachable from the root.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_bst(&self.arena, self.root)?;
        assert_links(&self.arena, self.root)?;
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
        print_tree(&self.arena, self.root, tab, |n| n.k.to_string())
    }
}

impl MembershipSet for SplayTree {
    fn contains(&mut self, key: i64) -> bool {
        SplayTree::contains(self, key)
    }

    fn len(&self) -> usize {
        SplayTree::len(self)
    }
}
