// Sorted-list priority queue – Vec kept in ascending priority order

use crate::error::{EmptyContainer, Operation};
use crate::node::Entry;
use crate::{PriorityQueue, Result};
use std::fmt;

/// Priority queue on a `Vec` sorted by priority.
///
/// `insert` binary-searches the rank and shifts the tail to make room, O(n).
/// `pop_min` removes index 0 and shifts everything left, O(n). New entries go
/// after existing ones of equal priority.
#[derive(Clone)]
pub struct SortedListPq<P, T> {
   data: Vec<Entry<P, T>>,
}

impl<P: Ord, T> SortedListPq<P, T> {
   pub fn new() -> Self {
      Self { data: Vec::new() }
   }
}

impl<P: Ord, T> Default for SortedListPq<P, T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<P: Ord, T> PriorityQueue<P, T> for SortedListPq<P, T> {
   fn insert(&mut self, item: T, priority: P) {
      let rank = self.data.partition_point(|e| e.priority <= priority);
      self.data.insert(rank, Entry::new(priority, item));
   }

   fn pop_min(&mut self) -> Result<T> {
      if self.data.is_empty() {
         return Err(EmptyContainer::new(Operation::PopMin));
      }
      Ok(self.data.remove(0).into_item())
   }

   #[inline]
   fn peek_min(&self) -> Result<&T> {
      self.data
         .first()
         .map(|e| &e.item)
         .ok_or(EmptyContainer::new(Operation::PeekMin))
   }

   #[inline]
   fn peek_min_priority(&self) -> Result<&P> {
      self.data
         .first()
         .map(|e| &e.priority)
         .ok_or(EmptyContainer::new(Operation::PeekMin))
   }

   #[inline]
   fn size(&self) -> usize {
      self.data.len()
   }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for SortedListPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("SortedListPq").field("data", &self.data).finish()
   }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Display for SortedListPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "PriorityQueueNaiveSortedList({:?})", self.data)
   }
}
