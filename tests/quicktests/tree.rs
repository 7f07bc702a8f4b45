use treeheap::tree::Tree;

use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// Keys are only inserted when absent so the tree never holds
/// duplicates and the two should always agree.
fn do_ops(ops: &[Op<i8, i8>], bst: &mut Tree, map: &mut HashMap<String, String>) {
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let (k, v) = (k.to_string(), v.to_string());
                if !map.contains_key(&k) {
                    bst.insert(k.clone(), v.clone());
                    map.insert(k, v);
                }
            }
            Op::Remove(k) => {
                let k = k.to_string();
                assert_eq!(bst.delete(&k), map.remove(&k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && map
            .iter()
            .all(|(key, value)| tree.find(key) == Some(value.as_str()))
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(x.as_str(), x.as_str());
    }

    xs.iter().all(|x| tree.find(x) == Some(x.as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(x.as_str(), x.as_str());
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(x.to_string(), x.to_string());
    }
    for delete in &deletes {
        // We may have inserted the same key multiple times - delete each one.
        while tree.delete(&delete.to_string()).is_some() {}
    }

    let mut still_present = xs;
    for delete in &deletes {
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.len() == still_present.len()
        && deletes.iter().all(|x| tree.find(&x.to_string()).is_none())
        && still_present
            .iter()
            .all(|x| tree.find(&x.to_string()).is_some())
}

#[quickcheck]
fn delete_missing_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree = xs
        .iter()
        .filter(|&&x| x != missing)
        .map(|x| (x.to_string(), x.to_string()))
        .collect();
    let before: Vec<_> = tree
        .preorder()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let deleted = tree.delete(&missing.to_string());
    let after: Vec<_> = tree
        .preorder()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    deleted.is_none() && before == after
}

#[quickcheck]
fn delete_once_shrinks_by_one(xs: Vec<i8>) -> bool {
    let unique: HashSet<_> = xs.iter().copied().collect();
    let mut tree: Tree = unique.iter().map(|x| (x.to_string(), "")).collect();

    unique.iter().all(|x| {
        let len = tree.len();
        let key = x.to_string();
        tree.delete(&key).is_some() && tree.find(&key).is_none() && tree.len() == len - 1
    }) && tree.is_empty()
}

#[quickcheck]
fn traversals_visit_every_node(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| (x.to_string(), "")).collect();

    let mut inorder: Vec<_> = tree.inorder().collect();
    let mut preorder: Vec<_> = tree.preorder().collect();
    let mut postorder: Vec<_> = tree.postorder().collect();
    let sorted = inorder.windows(2).all(|pair| pair[0].0 <= pair[1].0);

    inorder.sort_unstable();
    preorder.sort_unstable();
    postorder.sort_unstable();
    sorted && inorder.len() == xs.len() && inorder == preorder && preorder == postorder
}
