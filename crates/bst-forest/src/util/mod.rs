//! Arena helpers shared by both trees.
//!
//! Read-only helpers (`find`, `keys`, `size`, `height`, `assert_bst`) only
//! need [`Node`]; the link helpers and [`assert_links`] need
//! [`LinkedNode`].

pub mod print;

use crate::types::{LinkedNode, Node};

pub use print::print_tree;

#[inline]
pub(crate) fn get_k<N: Node>(arena: &[N], idx: u32) -> u32 {
    arena[idx as usize].k()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn get_p<N: LinkedNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn set_p<N: LinkedNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: LinkedNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: LinkedNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Iterative BST descent. Returns the index of the node holding `key`.
pub fn find<N: Node>(arena: &[N], root: Option<u32>, key: u32) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let k = get_k(arena, i);
        if k == key {
            return Some(i);
        }
        curr = if key < k {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// In-order key iterator. Uses an explicit stack, so it works for nodes
/// without parent links.
pub fn keys<N: Node>(arena: &[N], root: Option<u32>) -> Keys<'_, N> {
    let mut it = Keys {
        arena,
        stack: Vec::new(),
    };
    it.push_left(root);
    it
}

pub struct Keys<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<N: Node> Keys<'_, N> {
    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<N: Node> Iterator for Keys<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(get_k(self.arena, i))
    }
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    keys(arena, root).count()
}

/// Number of nodes on the longest root-to-leaf path; `0` for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Checks that an in-order walk yields strictly increasing keys, which is
/// equivalent to the BST property for every node.
pub fn assert_bst<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    let mut prev: Option<u32> = None;
    for k in keys(arena, root) {
        if let Some(p) = prev {
            if p >= k {
                return Err(format!("Keys out of order: {p} before {k}"));
            }
        }
        prev = Some(k);
    }
    Ok(())
}

/// Checks parent/child agreement on every edge reachable from `root`.
pub fn assert_links<N: LinkedNode>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        if let Some(l) = get_l(arena, i) {
            if get_p(arena, l) != Some(i) {
                return Err(format!(
                    "Left child of {} not connected both ways",
                    get_k(arena, i)
                ));
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            if get_p(arena, r) != Some(i) {
                return Err(format!(
                    "Right child of {} not connected both ways",
                    get_k(arena, i)
                ));
            }
            stack.push(r);
        }
    }
    Ok(())
}
