// Library-heap priority queue – std BinaryHeap turned into a min-heap

use crate::error::{EmptyContainer, Operation};
use crate::node::Entry;
use crate::{PriorityQueue, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// Priority queue delegating to `std::collections::BinaryHeap`.
///
/// `BinaryHeap` is a max-heap; wrapping entries in `Reverse` makes the top the
/// smallest priority. `insert` and `pop_min` are O(log n).
#[derive(Clone)]
pub struct StdHeapPq<P: Ord, T> {
   data: BinaryHeap<Reverse<Entry<P, T>>>,
}

impl<P: Ord, T> StdHeapPq<P, T> {
   pub fn new() -> Self {
      Self { data: BinaryHeap::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { data: BinaryHeap::with_capacity(cap) }
   }

   #[inline]
   fn top(&self) -> Result<&Entry<P, T>> {
      self.data
         .peek()
         .map(|Reverse(e)| e)
         .ok_or(EmptyContainer::new(Operation::PeekMin))
   }
}

impl<P: Ord, T> Default for StdHeapPq<P, T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<P: Ord, T> PriorityQueue<P, T> for StdHeapPq<P, T> {
   #[inline]
   fn insert(&mut self, item: T, priority: P) {
      self.data.push(Reverse(Entry::new(priority, item)));
   }

   #[inline]
   fn pop_min(&mut self) -> Result<T> {
      self.data
         .pop()
         .map(|Reverse(e)| e.into_item())
         .ok_or(EmptyContainer::new(Operation::PopMin))
   }

   #[inline]
   fn peek_min(&self) -> Result<&T> {
      self.top().map(|e| &e.item)
   }

   #[inline]
   fn peek_min_priority(&self) -> Result<&P> {
      self.top().map(|e| &e.priority)
   }

   #[inline]
   fn size(&self) -> usize {
      self.data.len()
   }
}

impl<P: Ord + fmt::Debug, T: fmt::Debug> fmt::Debug for StdHeapPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let entries: Vec<&Entry<P, T>> = self.data.iter().map(|Reverse(e)| e).collect();
      f.debug_struct("StdHeapPq").field("data", &entries).finish()
   }
}

/// Storage order, which is heap order rather than sorted order.
impl<P: Ord + fmt::Debug, T: fmt::Debug> fmt::Display for StdHeapPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("PriorityQueueBinaryHeap(")?;
      f.debug_list().entries(self.data.iter().map(|Reverse(e)| e)).finish()?;
      f.write_str(")")
   }
}
