// Binary min-heap priority queue built by hand on a Vec
//
// The Vec is read as a complete binary tree: the children of slot i live at
// 2i+1 and 2i+2, its parent at (i-1)/2. Every slot's priority is >= its
// parent's, so the minimum always sits in slot 0.

use crate::error::{EmptyContainer, Operation};
use crate::node::Entry;
use crate::{PriorityQueue, Result};
use std::fmt;

/*──────────────────────────── index arithmetic ────────────────────────────*/

#[inline]
const fn parent(i: usize) -> usize {
   (i - 1) / 2
}

#[inline]
const fn left(i: usize) -> usize {
   2 * i + 1
}

#[inline]
const fn right(i: usize) -> usize {
   2 * i + 2
}

/*──────────────────────────────── the heap ────────────────────────────────*/

/// Priority queue on a from-scratch binary min-heap.
///
/// `insert` and `pop_min` are O(log n), `peek_min` is O(1).
#[derive(Clone)]
pub struct HeapPq<P, T> {
   data: Vec<Entry<P, T>>,
}

impl<P: Ord, T> HeapPq<P, T> {
   pub fn new() -> Self {
      Self { data: Vec::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { data: Vec::with_capacity(cap) }
   }

   #[inline]
   fn less(&self, a: usize, b: usize) -> bool {
      self.data[a].priority < self.data[b].priority
   }

   /// Move the entry at `i` up while it is strictly smaller than its parent.
   fn sift_up(&mut self, mut i: usize) {
      while i > 0 {
         let p = parent(i);
         if !self.less(i, p) {
            break;
         }
         self.data.swap(i, p);
         i = p;
      }
   }

   /// Move the entry at `i` down, each step swapping with the smaller child
   /// if that child is strictly smaller.
   fn sift_down(&mut self, mut i: usize) {
      let len = self.data.len();
      loop {
         let mut min = i;
         let l = left(i);
         if l < len && self.less(l, min) {
            min = l;
         }
         let r = right(i);
         if r < len && self.less(r, min) {
            min = r;
         }
         if min == i {
            break;
         }
         self.data.swap(i, min);
         i = min;
      }
   }

   #[cfg(test)]
   fn holds_heap_property(&self) -> bool {
      (1..self.data.len()).all(|i| self.data[i].priority >= self.data[parent(i)].priority)
   }
}

impl<P: Ord, T> Default for HeapPq<P, T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<P: Ord, T> PriorityQueue<P, T> for HeapPq<P, T> {
   fn insert(&mut self, item: T, priority: P) {
      self.data.push(Entry::new(priority, item));
      self.sift_up(self.data.len() - 1);
   }

   fn pop_min(&mut self) -> Result<T> {
      if self.data.is_empty() {
         return Err(EmptyContainer::new(Operation::PopMin));
      }
      // the last leaf takes the root's slot
      let min = self.data.swap_remove(0);
      if !self.data.is_empty() {
         self.sift_down(0);
      }
      Ok(min.into_item())
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

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for HeapPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("HeapPq").field("data", &self.data).finish()
   }
}

/// Storage order, which is heap order rather than sorted order.
impl<P: fmt::Debug, T: fmt::Debug> fmt::Display for HeapPq<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "PriorityQueueHeap({:?})", self.data)
   }
}
