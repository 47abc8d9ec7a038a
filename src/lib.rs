pub mod bench;
pub mod error;
pub mod node;
pub mod pq;
pub mod queue;

pub use error::{ConfigError, EmptyContainer, Operation};
pub use node::Entry;

pub use queue::DequeQueue;
pub use queue::LinkedQueue;
pub use queue::NaiveQueue;

pub use pq::HeapPq;
pub use pq::SortedListPq;
pub use pq::StdHeapPq;

/// Result of a fallible container operation.
pub type Result<T, E = EmptyContainer> = std::result::Result<T, E>;

/// Common interface for all FIFO queues.
pub trait Queue<T> {
   /// Append `item` at the back. Never fails.
   fn enqueue(&mut self, item: T);
   /// Remove and return the oldest item.
   fn dequeue(&mut self) -> Result<T>;
   /// Oldest item, left in place.
   fn peek(&self) -> Result<&T>;

   fn size(&self) -> usize;

   #[inline]
   fn len(&self) -> usize {
      self.size()
   }

   #[inline]
   fn is_empty(&self) -> bool {
      self.size() == 0
   }
}

/// Common interface for all min-priority queues.
///
/// Among items sharing the minimum priority, which one `pop_min` returns is
/// unspecified and differs between implementations.
pub trait PriorityQueue<P: Ord, T> {
   fn insert(&mut self, item: T, priority: P);
   /// Remove and return an item with the smallest priority.
   fn pop_min(&mut self) -> Result<T>;
   /// Item with the smallest priority, left in place.
   fn peek_min(&self) -> Result<&T>;
   /// The smallest priority currently held.
   fn peek_min_priority(&self) -> Result<&P>;

   fn size(&self) -> usize;

   #[inline]
   fn len(&self) -> usize {
      self.size()
   }

   #[inline]
   fn is_empty(&self) -> bool {
      self.size() == 0
   }
}
