// Linked queue – hand-built singly linked list with a tail back-reference
use crate::error::{EmptyContainer, Operation};
use crate::node::Node;
use crate::{Queue, Result};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// FIFO queue on a hand-linked chain of heap nodes.
///
/// The queue owns every node reachable from `head`; each was leaked with
/// `Box::into_raw` and is reclaimed with `Box::from_raw` when unlinked.
/// `tail` is a non-owning alias of the last node so appends never walk the
/// list. Only [`LinkedQueue::link_back`] and [`LinkedQueue::unlink_front`]
/// touch the chain, and each leaves `tail` pointing at the last node (or
/// `None` when the chain is empty).
pub struct LinkedQueue<T> {
   head: Option<NonNull<Node<T>>>,
   tail: Option<NonNull<Node<T>>>,
   size: usize,
   _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedQueue<T> {
   pub fn new() -> Self {
      Self { head: None, tail: None, size: 0, _owns: PhantomData }
   }

   /// Items from front to back.
   pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
      // every pointer in the chain stays valid while `self` is borrowed
      std::iter::successors(self.head, |n| unsafe { (*n.as_ptr()).next })
         .map(|n| unsafe { &(*n.as_ptr()).item })
   }

   fn link_back(&mut self, node: NonNull<Node<T>>) {
      match self.tail {
         None => self.head = Some(node),
         // tail always points at a live node owned by this queue
         Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
      }
      self.tail = Some(node);
      self.size += 1;
   }

   fn unlink_front(&mut self) -> Option<T> {
      let head = self.head?;
      // head came from Box::into_raw and is unlinked exactly once here
      let Node { item, next } = *unsafe { Box::from_raw(head.as_ptr()) };
      self.head = next;
      if self.head.is_none() {
         self.tail = None;
      }
      self.size -= 1;
      Some(item)
   }
}

impl<T> Default for LinkedQueue<T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T> Queue<T> for LinkedQueue<T> {
   #[inline]
   fn enqueue(&mut self, item: T) {
      self.link_back(Node::alloc(item));
   }

   #[inline]
   fn dequeue(&mut self) -> Result<T> {
      self.unlink_front().ok_or(EmptyContainer::new(Operation::Dequeue))
   }

   #[inline]
   fn peek(&self) -> Result<&T> {
      self.head
         .map(|n| unsafe { &(*n.as_ptr()).item })
         .ok_or(EmptyContainer::new(Operation::Peek))
   }

   #[inline]
   fn size(&self) -> usize {
      self.size
   }
}

impl<T> Drop for LinkedQueue<T> {
   fn drop(&mut self) {
      while self.unlink_front().is_some() {}
   }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("LinkedQueue")
       .field("items", &DebugItems(self))
       .field("size", &self.size)
       .finish()
   }
}

impl<T: fmt::Debug> fmt::Display for LinkedQueue<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "QueueLinkedList({:?})", DebugItems(self))
   }
}

struct DebugItems<'a, T>(&'a LinkedQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_list().entries(self.0.iter()).finish()
   }
}
