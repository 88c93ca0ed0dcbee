use crate::types::Node;

/// Renders the subtree under `root` one node per line, children indented
/// two spaces below their parent and tagged `←` (left) or `→` (right).
///
/// ```text
/// Tree
/// └─ 1
///   ← 0
///   → 3
///     ← 2
/// ```
///
/// An empty tree renders as `Tree ∅`. `label` formats a single node.
pub fn print_tree<N, F>(arena: &[N], root: Option<u32>, tab: &str, label: F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    let Some(root) = root else {
        return "Tree ∅".to_string();
    };
    let mut out = String::from("Tree");
    let mut stack = vec![(root, tab.to_string(), "└─")];
    while let Some((i, tab, side)) = stack.pop() {
        let n = &arena[i as usize];
        out.push('\n');
        out.push_str(&tab);
        out.push_str(side);
        out.push(' ');
        out.push_str(&label(n));
        let child_tab = format!("{tab}  ");
        // Right is pushed first so the left subtree prints first.
        if let Some(r) = n.r() {
            stack.push((r, child_tab.clone(), "→"));
        }
        if let Some(l) = n.l() {
            stack.push((l, child_tab, "←"));
        }
    }
    out
}
