use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use crate::map::{Map, NodeView};

/// An operation on a `Map`.
#[derive(Clone, Debug)]
enum Op<K> where K: Clone + Ord {
    /// Insert a key into the map.
    Insert(K),
    /// Remove the key at index `n % map.len()` from the map.
    Remove(usize),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary + Ord {
    fn arbitrary(g: &mut Gen) -> Op<K> {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(usize::arbitrary(g))
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given map.
    fn exec(self, map: &mut Map<K, ()>) {
        match self {
            Op::Insert(key) => { map.insert(key, ()); }
            Op::Remove(index) => if !map.is_empty() {
                let key = map.iter().nth(index % map.len()).unwrap().0.clone();
                map.remove(&key);
            },
        }
    }
}

fn assert_search_order<K, V>(map: &Map<K, V>) where K: Ord {
    fn check<K, V>(node: Option<NodeView<K, V>>, lo: Option<&K>, hi: Option<&K>)
        where K: Ord {

        if let Some(node) = node {
            if let Some(lo) = lo { assert!(lo < node.key()); }
            if let Some(hi) = hi { assert!(node.key() < hi); }
            check(node.left(), lo, Some(node.key()));
            check(node.right(), Some(node.key()), hi);
        }
    }

    check(map.root_node(), None, None);
}

#[quickcheck]
fn search_order_holds_after_any_ops(ops: Vec<Op<u32>>) -> bool {
    let mut map = Map::new();
    for op in ops { op.exec(&mut map); }
    assert_search_order(&map);
    true
}

#[quickcheck]
fn len_matches_traversal(ops: Vec<Op<u32>>) -> bool {
    let mut map = Map::new();
    for op in ops { op.exec(&mut map); }
    map.len() == map.iter().count()
}

#[test]
fn remove_of_a_leaf_detaches_it() {
    let mut map = Map::new();
    map.insert(2, "b");
    map.insert(1, "a");

    assert_eq!(map.remove(&1), Some((1, "a")));
    assert_eq!(map.len(), 1);
    assert_eq!(map.root(), Some((&2, &"b")));
    assert!(map.root_node().unwrap().left().is_none());
}

#[test]
fn remove_splices_a_single_child() {
    let mut map = Map::new();
    map.insert(3, "c");
    map.insert(1, "a");
    map.insert(2, "b");

    // 1 has only a right child, which takes its place under 3.
    assert_eq!(map.remove(&1), Some((1, "a")));
    assert_eq!(map.len(), 2);

    let root = map.root_node().unwrap();
    assert_eq!(root.key(), &3);
    assert_eq!(root.left().unwrap().key(), &2);
    assert_search_order(&map);
}

#[test]
fn remove_with_two_children_promotes_the_successor() {
    let mut map = Map::new();
    for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")] {
        map.insert(key, value);
    }

    assert_eq!(map.len(), 5);
    assert_eq!(map.min(), Some((&1, &"a")));
    assert_eq!(map.max(), Some((&8, &"h")));
    assert_eq!(map.root(), Some((&5, &"e")));
    assert_eq!(map.iter().collect::<Vec<_>>(),
               [(&1, &"a"), (&3, &"c"), (&4, &"d"), (&5, &"e"), (&8, &"h")]);

    // The root has two children, so the smallest entry of its right
    // subtree moves into its place.
    assert_eq!(map.remove(&5), Some((5, "e")));

    assert_eq!(map.len(), 4);
    assert_eq!(map.root(), Some((&8, &"h")));
    assert!(!map.contains_key(&5));
    assert_eq!(map.iter().collect::<Vec<_>>(),
               [(&1, &"a"), (&3, &"c"), (&4, &"d"), (&8, &"h")]);
    assert_search_order(&map);
}

#[test]
fn successor_leaves_its_old_position_once() {
    let mut map = Map::new();
    for key in [4, 2, 8, 6, 9, 5, 7] { map.insert(key, ()); }

    // 4's successor is 5, the leftmost entry of its right subtree; its
    // old slot under 6 must end up empty.
    assert_eq!(map.remove(&4), Some((4, ())));
    assert_eq!(map.len(), 6);

    let root = map.root_node().unwrap();
    assert_eq!(root.key(), &5);

    let six = root.right().unwrap().left().unwrap();
    assert_eq!(six.key(), &6);
    assert!(six.left().is_none());
    assert_eq!(six.right().unwrap().key(), &7);
    assert_search_order(&map);
}

#[test]
fn insert_of_an_equivalent_key_keeps_the_shape() {
    let mut map = Map::new();
    for key in [2, 1, 3] { map.insert(key, "old"); }

    assert_eq!(map.insert(2, "new"), Some("old"));
    assert_eq!(map.len(), 3);
    assert_eq!(map.root(), Some((&2, &"new")));
    assert_eq!(map.get(&2), Some(&"new"));
}

#[test]
fn clones_do_not_share_nodes() {
    let mut map = Map::new();
    for key in [2, 1, 3] { map.insert(key, key * 10); }

    let mut copy = map.clone();
    copy.insert(4, 40);
    *copy.get_mut(&1).unwrap() = 0;
    map.remove(&3);

    assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &10), (&2, &20)]);
    assert_eq!(copy.iter().collect::<Vec<_>>(),
               [(&1, &0), (&2, &20), (&3, &30), (&4, &40)]);
    assert_search_order(&map);
    assert_search_order(&copy);
}
