// Naive queue – contiguous Vec, front removal shifts every remaining item

use crate::error::{EmptyContainer, Operation};
use crate::{Queue, Result};
use std::fmt;

/// FIFO queue on a plain `Vec`.
///
/// `enqueue` is amortized O(1). `dequeue` is O(n): removing index 0 moves
/// every remaining element one slot to the left.
#[derive(Debug, Clone)]
pub struct NaiveQueue<T> {
   data: Vec<T>,
}

impl<T> NaiveQueue<T> {
   pub fn new() -> Self {
      Self { data: Vec::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { data: Vec::with_capacity(cap) }
   }
}

impl<T> Default for NaiveQueue<T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T> Queue<T> for NaiveQueue<T> {
   #[inline]
   fn enqueue(&mut self, item: T) {
      self.data.push(item);
   }

   fn dequeue(&mut self) -> Result<T> {
      if self.data.is_empty() {
         return Err(EmptyContainer::new(Operation::Dequeue));
      }
      Ok(self.data.remove(0))
   }

   #[inline]
   fn peek(&self) -> Result<&T> {
      self.data.first().ok_or(EmptyContainer::new(Operation::Peek))
   }

   #[inline]
   fn size(&self) -> usize {
      self.data.len()
   }
}

impl<T: fmt::Debug> fmt::Display for NaiveQueue<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "QueueNaive({:?})", self.data)
   }
}
