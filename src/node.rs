// Shared building blocks: the singly linked node and the (priority, item) record.

use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

/*──────────────────────────────────────────────────────────────────────────*/
/*  Linked-list node                                                        */
/*──────────────────────────────────────────────────────────────────────────*/

/// One link of a singly linked chain.
///
/// Nodes live on the heap behind raw pointers: `alloc` leaks a box and the
/// owner of the chain reclaims it with `Box::from_raw` exactly once.
pub(crate) struct Node<T> {
   pub(crate) item: T,
   pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
   #[inline]
   pub(crate) fn alloc(item: T) -> NonNull<Self> {
      let raw = Box::into_raw(Box::new(Node { item, next: None }));
      // Box::into_raw never returns null
      unsafe { NonNull::new_unchecked(raw) }
   }
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Priority record                                                         */
/*──────────────────────────────────────────────────────────────────────────*/

/// A `(priority, item)` pair stored by every priority queue.
///
/// Equality and ordering look at the priority only, so `T` needs no ordering
/// of its own and entries with equal priority compare equal regardless of the
/// item they carry.
#[derive(Clone)]
pub struct Entry<P, T> {
   pub priority: P,
   pub item: T,
}

impl<P, T> Entry<P, T> {
   #[inline]
   pub fn new(priority: P, item: T) -> Self {
      Self { priority, item }
   }

   #[inline]
   pub fn into_item(self) -> T {
      self.item
   }
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
   fn eq(&self, other: &Self) -> bool {
      self.priority == other.priority
   }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
   fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
      Some(self.cmp(other))
   }
}

impl<P: Ord, T> Ord for Entry<P, T> {
   fn cmp(&self, other: &Self) -> Ordering {
      self.priority.cmp(&other.priority)
   }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for Entry<P, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "({:?}, {:?})", self.priority, self.item)
   }
}
