// Error types shared by every container and by the benchmark configuration.

use std::fmt;

/// The container operation that was attempted on an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
   Dequeue,
   Peek,
   PopMin,
   PeekMin,
}

impl Operation {
   /// Kind of container the operation belongs to.
   pub const fn container(self) -> &'static str {
      match self {
         Operation::Dequeue | Operation::Peek => "queue",
         Operation::PopMin | Operation::PeekMin => "priority queue",
      }
   }
}

impl fmt::Display for Operation {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let verb = match self {
         Operation::Dequeue => "dequeue",
         Operation::PopMin => "pop",
         Operation::Peek | Operation::PeekMin => "peek",
      };
      f.write_str(verb)
   }
}

/// Removal or inspection was requested on a container holding no items.
///
/// This is a precondition violation: the container is left untouched and the
/// caller is expected to check `is_empty()` first or handle the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{} from empty {}", .operation, .operation.container())]
pub struct EmptyContainer {
   pub operation: Operation,
}

impl EmptyContainer {
   #[inline]
   pub const fn new(operation: Operation) -> Self {
      Self { operation }
   }
}

/// Invalid benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
   /// An override could not be parsed as an unsigned integer.
   #[error("invalid value {value:?} for {key}: expected an unsigned integer")]
   InvalidValue { key: &'static str, value: String },
   /// Workload sizes must be non-zero.
   #[error("{key} must be greater than zero")]
   ZeroItems { key: &'static str },
}
