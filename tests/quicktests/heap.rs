use treeheap::error::HeapError;
use treeheap::heap::{build_heap, sort_descending, Heap, Record};

use quickcheck_macros::quickcheck;

fn records(ranks: &[i32]) -> Vec<Record> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| Record::new(format!("band {}", i), rank))
        .collect()
}

fn is_heap(heap: &Heap) -> bool {
    let slots = heap.as_slice();
    (1..slots.len()).all(|i| slots[(i - 1) / 2].rank >= slots[i].rank)
}

#[quickcheck]
fn inserts_keep_heap_order(xs: Vec<i32>) -> bool {
    let mut heap = Heap::new();
    records(&xs).into_iter().all(|record| {
        heap.insert(record);
        is_heap(&heap)
    }) && heap.peek().map(|record| record.rank) == xs.iter().max().copied()
}

#[quickcheck]
fn draining_yields_descending_ranks(xs: Vec<i32>) -> bool {
    let mut heap: Heap = records(&xs).into_iter().collect();
    let mut drained = Vec::new();
    while let Ok(record) = heap.remove_root() {
        drained.push(record.rank);
    }

    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    drained == expected && heap.remove_root() == Err(HeapError::Empty)
}

#[quickcheck]
fn remove_at_any_slot(xs: Vec<i32>, index: usize) -> bool {
    let mut heap = build_heap(records(&xs));
    let before = heap.clone();

    match heap.remove_at(index) {
        Ok(removed) => {
            index < xs.len()
                && before.as_slice()[index] == removed
                && heap.len() + 1 == xs.len()
                && is_heap(&heap)
        }
        Err(err) => {
            err == HeapError::OutOfRange {
                index,
                len: xs.len(),
            } && heap == before
        }
    }
}

#[quickcheck]
fn sorted_view_matches_sort_descending(xs: Vec<i32>) -> bool {
    let input = records(&xs);
    let heap = build_heap(input.clone());
    let from_heap: Vec<_> = heap.sorted().into_iter().map(|r| r.rank).collect();
    let from_input: Vec<_> = sort_descending(&input).into_iter().map(|r| r.rank).collect();

    from_heap == from_input
}

#[test]
fn festival_example() {
    let mut heap = Heap::new();
    for (name, popularity) in [("The Rockers", 85), ("The Melodies", 90), ("The Groovers", 78)] {
        heap.insert(Record::new(name, popularity));
    }
    assert_eq!(heap.peek().map(|record| record.rank), Some(90));

    assert_eq!(heap.remove_root().map(|record| record.rank), Ok(90));
    let left: Vec<_> = heap.iter().map(|record| record.rank).collect();
    assert_eq!(left, [85, 78]);
}
