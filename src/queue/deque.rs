// Deque queue – std ring buffer, O(1) at both ends without pointer juggling

use crate::error::{EmptyContainer, Operation};
use crate::{Queue, Result};
use std::collections::VecDeque;
use std::fmt;

/// FIFO queue on `VecDeque`. Both `enqueue` and `dequeue` are O(1).
#[derive(Debug, Clone)]
pub struct DequeQueue<T> {
   data: VecDeque<T>,
}

impl<T> DequeQueue<T> {
   pub fn new() -> Self {
      Self { data: VecDeque::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { data: VecDeque::with_capacity(cap) }
   }
}

impl<T> Default for DequeQueue<T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T> Queue<T> for DequeQueue<T> {
   #[inline]
   fn enqueue(&mut self, item: T) {
      self.data.push_back(item);
   }

   #[inline]
   fn dequeue(&mut self) -> Result<T> {
      self.data.pop_front().ok_or(EmptyContainer::new(Operation::Dequeue))
   }

   #[inline]
   fn peek(&self) -> Result<&T> {
      self.data.front().ok_or(EmptyContainer::new(Operation::Peek))
   }

   #[inline]
   fn size(&self) -> usize {
      self.data.len()
   }
}

impl<T: fmt::Debug> fmt::Display for DequeQueue<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("QueueDeque(")?;
      f.debug_list().entries(self.data.iter()).finish()?;
      f.write_str(")")
   }
}
