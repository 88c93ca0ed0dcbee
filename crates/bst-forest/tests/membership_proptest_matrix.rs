use bst_forest::{SplayTree, WeightBalancedTree};
use proptest::prelude::*;

proptest! {
    #[test]
    fn splay_tree_holds_invariants_under_queries(
        n in 0usize..64,
        queries in prop::collection::vec(-4i64..70, 0..128),
    ) {
        let mut tree = SplayTree::with_len(n).unwrap();
        for key in queries {
            let expected = (0..n as i64).contains(&key);
            let root_before = tree.root_index();
            prop_assert_eq!(tree.contains(key), expected);
            if expected {
                prop_assert_eq!(tree.root_key(), Some(key as u32));
            } else {
                prop_assert_eq!(tree.root_index(), root_before);
            }
            let valid = tree.assert_valid();
            prop_assert!(valid.is_ok(), "{:?}", valid);
        }
        for key in 0..n as i64 {
            prop_assert!(tree.contains(key));
        }
        prop_assert_eq!(tree.keys().collect::<Vec<_>>(), (0..n as u32).collect::<Vec<_>>());
    }

    #[test]
    fn weight_balanced_covers_every_key(
        weights in prop::collection::vec(0.0f64..10.0, 0..96),
    ) {
        let n = weights.len();
        let tree = WeightBalancedTree::new(&weights).unwrap();
        let valid = tree.assert_valid();
        prop_assert!(valid.is_ok(), "{:?}", valid);
        prop_assert_eq!(tree.len(), n);
        prop_assert!(tree.height() <= n);
        for key in -2..n as i64 + 2 {
            prop_assert_eq!(tree.contains(key), (0..n as i64).contains(&key));
        }
    }

    #[test]
    fn weight_balanced_root_holds_its_weight(
        weights in prop::collection::vec(0.0f64..10.0, 1..48),
    ) {
        let tree = WeightBalancedTree::new(&weights).unwrap();
        let root = tree.root_index().unwrap();
        prop_assert_eq!(tree.weight(root), weights[tree.key(root) as usize]);
    }
}
