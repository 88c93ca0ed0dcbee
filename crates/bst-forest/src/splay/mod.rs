//! Splay-tree rotations over parent-linked arena nodes.
//!
//! Every relink goes through [`connect`], which attaches a child to the
//! left or right slot of its new parent by comparing keys rather than by
//! remembering which slot it came from. Handedness checks use the same
//! rule: a node is a left child iff its key is less than its parent's.

use crate::types::LinkedNode;
use crate::util::{get_k, get_l, get_p, get_r, set_l, set_p, set_r};

// ── linking ───────────────────────────────────────────────────────────────

/// Makes `child` a child of `parent`, choosing the slot by key order.
///
/// A `None` child is a no-op. A `None` parent detaches `child` (it becomes
/// a root); the caller is responsible for updating the tree's root index.
fn connect<N: LinkedNode>(arena: &mut [N], parent: Option<u32>, child: Option<u32>) {
    let Some(child) = child else {
        return;
    };
    set_p(arena, child, parent);
    let Some(parent) = parent else {
        return;
    };
    if get_k(arena, parent) < get_k(arena, child) {
        set_r(arena, parent, Some(child));
    } else {
        set_l(arena, parent, Some(child));
    }
}

/// Whether `node` hangs off the left of its parent. The root is never a
/// left child.
pub fn is_left_child<N: LinkedNode>(arena: &[N], node: u32) -> bool {
    match get_p(arena, node) {
        Some(p) => get_k(arena, node) < get_k(arena, p),
        None => false,
    }
}

// ── rotations ─────────────────────────────────────────────────────────────

/// Single rotation: `node` takes its parent's place.
///
/// ```text
///       g              g
///       |              |
///       p              n
///      / \            / \
///     n   c    →     a   p
///    / \                / \
///   a   b              b   c
/// ```
///
/// The grandparent (if any) adopts `node`, the inner subtree `b` moves to
/// the old parent, and the old parent becomes `node`'s child. All four
/// touched edges are rewritten on both ends.
///
/// # Panics
///
/// If `node` is the root. Callers only rotate nodes that have a parent.
pub fn rotate<N: LinkedNode>(arena: &mut [N], node: u32) {
    let parent = get_p(arena, node).expect("rotate: node must not be the root");
    let grandparent = get_p(arena, parent);
    connect(arena, grandparent, Some(node));
    if get_k(arena, node) < get_k(arena, parent) {
        let inner = get_r(arena, node);
        set_l(arena, parent, None);
        connect(arena, Some(parent), inner);
    } else {
        let inner = get_l(arena, node);
        set_r(arena, parent, None);
        connect(arena, Some(parent), inner);
    }
    connect(arena, Some(node), Some(parent));
}

/// `node`'s parent is the root.
pub fn zig<N: LinkedNode>(arena: &mut [N], node: u32) {
    rotate(arena, node);
}

/// `node` and its parent lean the same way: lift the parent first.
pub fn zig_zig<N: LinkedNode>(arena: &mut [N], node: u32) {
    let parent = get_p(arena, node).expect("zig_zig: node must not be the root");
    rotate(arena, parent);
    rotate(arena, node);
}

/// `node` and its parent lean opposite ways: lift `node` twice.
pub fn zig_zag<N: LinkedNode>(arena: &mut [N], node: u32) {
    rotate(arena, node);
    rotate(arena, node);
}

/// One splay step: lifts `node` by one level (zig) or two (zig-zig,
/// zig-zag). No-op on the root.
pub fn splay_step<N: LinkedNode>(arena: &mut [N], node: u32) {
    let Some(parent) = get_p(arena, node) else {
        return;
    };
    if get_p(arena, parent).is_none() {
        zig(arena, node);
    } else if is_left_child(arena, node) ^ is_left_child(arena, parent) {
        zig_zag(arena, node);
    } else {
        zig_zig(arena, node);
    }
}

/// Splays `node` all the way up and returns it as the new root index.
pub fn splay<N: LinkedNode>(arena: &mut [N], node: u32) -> u32 {
    while get_p(arena, node).is_some() {
        splay_step(arena, node);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splay_tree::SplayNode;
    use crate::util::{assert_bst, assert_links, keys};

    /// Builds `keys` as a BST by plain insertion; returns the arena and
    /// the root index. Arena index equals insertion order.
    fn build(keys: &[u32]) -> (Vec<SplayNode>, Option<u32>) {
        let mut arena: Vec<SplayNode> = Vec::new();
        let mut root = None;
        for (idx, &k) in keys.iter().enumerate() {
            let idx = idx as u32;
            arena.push(SplayNode::new(k));
            let Some(mut curr) = root else {
                root = Some(idx);
                continue;
            };
            loop {
                let next = if k < arena[curr as usize].k {
                    arena[curr as usize].l
                } else {
                    arena[curr as usize].r
                };
                match next {
                    Some(n) => curr = n,
                    None => {
                        connect(&mut arena, Some(curr), Some(idx));
                        break;
                    }
                }
            }
        }
        (arena, root)
    }

    fn check(arena: &[SplayNode], root: u32) {
        assert_bst(arena, Some(root)).unwrap();
        assert_links(arena, Some(root)).unwrap();
    }

    #[test]
    fn rotate_left_child_moves_inner_subtree() {
        // 4 / (2 / 1, 3), 5
        let (mut arena, _) = build(&[4, 2, 5, 1, 3]);
        rotate(&mut arena, 1);
        let n2 = &arena[1];
        assert_eq!(n2.p, None);
        assert_eq!(n2.l, Some(3));
        assert_eq!(n2.r, Some(0));
        let n4 = &arena[0];
        assert_eq!(n4.p, Some(1));
        assert_eq!(n4.l, Some(4));
        assert_eq!(n4.r, Some(2));
        check(&arena, 1);
    }

    #[test]
    fn rotate_right_child_reattaches_to_grandparent() {
        // 1 \ 3 / (2, 4)  under root 0
        let (mut arena, _) = build(&[0, 1, 3, 2, 4]);
        rotate(&mut arena, 2);
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[2].p, Some(0));
        assert_eq!(arena[2].l, Some(1));
        assert_eq!(arena[1].r, Some(3));
        assert_eq!(arena[3].p, Some(1));
        check(&arena, 0);
    }

    #[test]
    #[should_panic(expected = "must not be the root")]
    fn rotate_root_panics() {
        let (mut arena, _) = build(&[1, 0]);
        rotate(&mut arena, 0);
    }

    #[test]
    fn handedness_follows_key_order() {
        let (arena, _) = build(&[1, 0, 2]);
        assert!(!is_left_child(&arena, 0));
        assert!(is_left_child(&arena, 1));
        assert!(!is_left_child(&arena, 2));
    }

    #[test]
    fn zig_zig_on_left_spine() {
        let (mut arena, _) = build(&[3, 2, 1, 0]);
        splay_step(&mut arena, 2);
        // Key 1 is the new root; 2 and 3 hang off its right spine.
        assert_eq!(arena[2].p, None);
        assert_eq!(arena[2].r, Some(1));
        assert_eq!(arena[1].r, Some(0));
        check(&arena, 2);
    }

    #[test]
    fn zig_zag_lifts_node_between_parent_and_grandparent() {
        let (mut arena, _) = build(&[0, 2, 1]);
        splay_step(&mut arena, 2);
        assert_eq!(arena[2].p, None);
        assert_eq!(arena[2].l, Some(0));
        assert_eq!(arena[2].r, Some(1));
        check(&arena, 2);
    }

    #[test]
    fn splay_deep_node_keeps_order() {
        let input = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15];
        let (mut arena, _) = build(&input);
        for idx in [10u32, 7, 14, 0, 3] {
            let root = splay(&mut arena, idx);
            assert_eq!(root, idx);
            check(&arena, root);
            let mut sorted = input.to_vec();
            sorted.sort_unstable();
            assert_eq!(keys(&arena, Some(root)).collect::<Vec<_>>(), sorted);
        }
    }
}
