use rbtree::logging::init_test_logging;
use rbtree::{Color, InsertError, RBTree};

fn tree_of(keys: &[i32]) -> RBTree<i32> {
    let mut tree = RBTree::new();
    for &k in keys {
        tree.insert(k).unwrap();
        tree.check_invariants().unwrap();
    }
    tree
}

fn level_order_colors(tree: &RBTree<i32>) -> Vec<(i32, Color)> {
    tree.level_order().map(|n| (*n.key(), n.color())).collect()
}

#[test]
fn mixed_insertions_settle_on_eight() {
    init_test_logging();
    let tree = tree_of(&[9, 8, 5, 11, 20, 13]);

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 8, 9, 11, 13, 20]);
    assert_eq!(*tree.root().unwrap().key(), 8);
    assert_eq!(
        level_order_colors(&tree),
        [
            (8, Color::Black),
            (5, Color::Black),
            (11, Color::Red),
            (9, Color::Black),
            (20, Color::Black),
            (13, Color::Red),
        ]
    );
    assert_eq!(tree.len(), 6);
}

#[test]
fn negative_and_positive_keys() {
    init_test_logging();
    let tree = tree_of(&[2, 5, 3, 8, 1, 0, -3, -2, 20, 13]);

    assert_eq!(tree.to_in_order_string(), "[ -3, -2, 0, 1, 2, 3, 5, 8, 13, 20 ]");
    assert_eq!(tree.to_level_order_string(), "[ 3, 1, 8, -2, 2, 5, 20, -3, 0, 13 ]");
    assert_eq!(*tree.root().unwrap().key(), 3);

    // 2*log₂(11) ≈ 6.92
    assert!(tree.height() as f64 <= 2.0 * 11f64.log2());
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.check_invariants(), Ok(1));
}

#[test]
fn small_sequences() {
    init_test_logging();
    assert_eq!(tree_of(&[3, 2, 1]).to_string(), "level order: [ 2, 1, 3 ]\nin order: [ 1, 2, 3 ]");
    assert_eq!(tree_of(&[29, 19, 99, 69, 39]).to_level_order_string(), "[ 29, 19, 69, 39, 99 ]");
    assert_eq!(tree_of(&[7, 14, 18, 23]).root().unwrap().color(), Color::Black);
}

#[test]
fn size_tracks_successful_inserts_only() {
    init_test_logging();
    let mut tree = RBTree::new();
    assert!(tree.is_empty());

    for (i, k) in [10, 20, 30].into_iter().enumerate() {
        tree.insert(k).unwrap();
        assert_eq!(tree.len(), i + 1);
    }
    assert_eq!(tree.insert(20), Err(InsertError::DuplicateKey));
    assert_eq!(tree.insert_opt(None), Err(InsertError::InvalidInput));
    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());
    assert!(tree.contains(&30));
    assert!(!tree.contains(&40));
}

#[test]
fn errors_display() {
    assert_eq!(InsertError::DuplicateKey.to_string(), "this RBTree already contains that key");
    assert_eq!(InsertError::InvalidInput.to_string(), "this RBTree cannot store absent keys");

    let mut tree = tree_of(&[1, 2, 3]);
    let (one, three) = (tree.find(&1).unwrap(), tree.find(&3).unwrap());
    let err = tree.rotate(one, three).unwrap_err();
    assert_eq!(err.to_string(), "cannot rotate #0 with #2: #2 is not the parent of #0");
}

#[test]
fn reversed_alternating_and_scattered_orders() {
    init_test_logging();
    let n = 2000;
    let orders: [Vec<i32>; 3] = [
        (0..n).rev().collect(),
        // 0, -1, 1, -2, 2, ...
        (0..n).map(|i| if i % 2 == 0 { i / 2 } else { -(i / 2) - 1 }).collect(),
        // 7919 is prime, so this visits every residue exactly once
        (0..n).map(|i| (i * 7919) % n).collect(),
    ];

    for keys in orders {
        let mut tree = RBTree::new();
        for &k in &keys {
            tree.insert(k).unwrap();
            tree.check_invariants().unwrap();
        }
        let mut sorted = keys.clone();
        sorted.sort();
        assert!(tree.iter().eq(sorted.iter()));
        assert_eq!(tree.len(), keys.len());
    }
}
