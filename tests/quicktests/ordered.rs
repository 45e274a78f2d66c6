use ordered_tree::{Order, OrderedTree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

#[quickcheck]
fn size_counts_insertions(xs: Vec<i8>) -> bool {
    build(&xs).size() == xs.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    build(&xs).traverse(Order::In) == sorted(&xs)
}

#[quickcheck]
fn every_order_visits_every_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected = sorted(&xs);

    [Order::Pre, Order::Post].iter().all(|order| {
        let mut values = tree.traverse(*order);
        values.sort();
        values == expected
    })
}

#[quickcheck]
fn pre_order_starts_with_first_insert(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.traverse(Order::Pre).first() == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn display_matches_pre_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let rendered: Vec<String> = tree
        .traverse(Order::Pre)
        .iter()
        .map(|x| x.to_string())
        .collect();

    tree.to_display_string() == format!("[{}]", rendered.join(", "))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, picks: Vec<usize>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs.clone();

    for pick in picks {
        if xs.is_empty() {
            break;
        }
        let target = xs[pick % xs.len()];
        let size = tree.size();
        match still_present.iter().position(|x| *x == target) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if tree.delete(&target) != Ok(()) || tree.size() != size - 1 {
                    return false;
                }
            }
            None => {
                if tree.delete(&target) != Err(TreeError::NotFound) || tree.size() != size {
                    return false;
                }
            }
        }
    }

    tree.traverse(Order::In) == sorted(&still_present)
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn delete_missing_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree = build(&xs);
    let pre = tree.traverse(Order::Pre);
    let post = tree.traverse(Order::Post);

    tree.delete(&missing) == Err(TreeError::NotFound)
        && tree.size() == xs.len()
        && tree.traverse(Order::Pre) == pre
        && tree.traverse(Order::Post) == post
}

#[quickcheck]
fn deleting_sole_value_empties_tree(x: i8, y: i8) -> bool {
    let mut tree = OrderedTree::new();
    tree.insert(x);

    let emptied = tree.delete(&x) == Ok(()) && tree.is_empty() && !tree.contains(&x);

    tree.insert(y);
    emptied && tree.size() == 1 && tree.contains(&y) && tree.to_string() == format!("[{}]", y)
}
