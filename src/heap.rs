//! An array-backed max-heap of named records ranked by an integer. The records live in a `Vec`
//! read as a complete binary tree: the children of slot `i` are at `2i + 1` and `2i + 2`.
//!
//! Every mutation restores order with a full rebuild, calling [`sift_down`] on each parent slot
//! from the last one back to the root. That costs `O(N)` per insert or removal where a targeted
//! sift-up or sift-down would cost `O(lg N)`, but it means the heap after any operation is exactly
//! what [`heapify`] would make of the same slots.
//!
//! # Examples
//!
//! ```
//! use treeheap::heap::{Heap, Record};
//!
//! let mut heap = Heap::new();
//!
//! heap.insert(Record::new("The Rockers", 85));
//! heap.insert(Record::new("The Melodies", 90));
//! heap.insert(Record::new("The Groovers", 78));
//! assert_eq!(heap.peek().map(|record| record.rank), Some(90));
//!
//! // Removing the root hands back the highest ranked record.
//! let headliner = heap.remove_root().unwrap();
//! assert_eq!(headliner.name, "The Melodies");
//! assert_eq!(heap.peek().map(|record| record.rank), Some(85));
//! ```

use std::fmt;
use std::slice;

use tracing::{debug, trace};

use crate::error::HeapError;

/// A name with a rank to order it by. Only the rank takes part in heap ordering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    /// What the record is called (e.g. a band name).
    pub name: String,
    /// How highly the record ranks (e.g. a band's popularity).
    pub rank: i32,
}

impl Record {
    /// Construct a new `Record`.
    pub fn new(name: impl Into<String>, rank: i32) -> Self {
        Self {
            name: name.into(),
            rank,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rank)
    }
}

/// A binary max-heap of [`Record`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Heap {
    records: Vec<Record>,
}

impl From<Vec<Record>> for Heap {
    fn from(records: Vec<Record>) -> Self {
        build_heap(records)
    }
}

impl FromIterator<Record> for Heap {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        build_heap(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Heap {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Heap {
    /// Generate a new, empty `Heap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many records are in the heap.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the heap holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The highest ranked record, if there is one.
    pub fn peek(&self) -> Option<&Record> {
        self.records.first()
    }

    /// The records in slot order (i.e. level by level, not sorted).
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over the records in slot order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Gives up the backing `Vec` in slot order.
    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }

    /// Appends `record` and rebuilds heap order over every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeheap::heap::{Heap, Record};
    ///
    /// let mut heap = Heap::new();
    /// heap.insert(Record::new("The Rockers", 85));
    /// heap.insert(Record::new("The Melodies", 90));
    ///
    /// assert_eq!(heap.peek(), Some(&Record::new("The Melodies", 90)));
    /// ```
    pub fn insert(&mut self, record: Record) {
        trace!(name = %record.name, rank = record.rank, "inserting");
        self.records.push(record);
        heapify(&mut self.records);
    }

    /// Removes and returns the highest ranked record. The last record takes its slot and heap
    /// order is rebuilt.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] when there is nothing to remove. The heap is left as it was.
    pub fn remove_root(&mut self) -> Result<Record, HeapError> {
        if self.records.is_empty() {
            debug!("no root to remove");
            return Err(HeapError::Empty);
        }

        let root = self.records.swap_remove(0);
        heapify(&mut self.records);
        debug!(name = %root.name, rank = root.rank, "removed root");
        Ok(root)
    }

    /// Removes and returns the record in slot `index`. The last record is swapped into its place
    /// and heap order is rebuilt.
    ///
    /// # Errors
    ///
    /// [`HeapError::OutOfRange`] when `index` isn't a slot in the heap. The heap is left as it
    /// was.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeheap::error::HeapError;
    /// use treeheap::heap::{Heap, Record};
    ///
    /// let mut heap: Heap = vec![Record::new("a", 1), Record::new("b", 2)].into();
    ///
    /// assert_eq!(heap.remove_at(1), Ok(Record::new("a", 1)));
    /// assert_eq!(heap.remove_at(1), Err(HeapError::OutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<Record, HeapError> {
        let len = self.records.len();
        if index >= len {
            debug!(index, len, "no such slot");
            return Err(HeapError::OutOfRange { index, len });
        }

        let removed = self.records.swap_remove(index);
        heapify(&mut self.records);
        debug!(index, name = %removed.name, rank = removed.rank, "removed record");
        Ok(removed)
    }

    /// The records ordered by rank, highest first. The heap itself is untouched.
    pub fn sorted(&self) -> Vec<Record> {
        sort_descending(&self.records)
    }
}

/// Restores the max-heap property for the subtree rooted at `index`, treating `records` as the
/// whole heap. Pass a shorter slice to limit the heap to a prefix of some larger buffer.
///
/// The record at `index` is swapped with its larger child for as long as that child outranks it.
pub fn sift_down(records: &mut [Record], mut index: usize) {
    let size = records.len();
    if index >= size {
        return;
    }
    loop {
        let mut largest = index;
        for child in [2 * index + 1, 2 * index + 2] {
            if child < size && records[child].rank > records[largest].rank {
                largest = child;
            }
        }

        if largest == index {
            return;
        }
        records.swap(index, largest);
        index = largest;
    }
}

/// Puts `records` into heap order in place by sifting down every parent slot, last one first.
pub fn heapify(records: &mut [Record]) {
    for index in (0..records.len() / 2).rev() {
        sift_down(records, index);
    }
}

/// Builds a [`Heap`] out of records in any order, in linear time.
///
/// # Examples
///
/// ```
/// use treeheap::heap::{build_heap, Record};
///
/// let heap = build_heap(vec![Record::new("a", 3), Record::new("b", 7), Record::new("c", 5)]);
/// assert_eq!(heap.peek().map(|record| record.rank), Some(7));
/// ```
pub fn build_heap(mut records: Vec<Record>) -> Heap {
    heapify(&mut records);
    debug!(len = records.len(), "built heap");
    Heap { records }
}

/// Copies `records` into a new `Vec` sorted by rank, highest first. Records with the same rank
/// keep their relative order.
pub fn sort_descending(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
    sorted
}
