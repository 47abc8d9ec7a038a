mod heap;
mod sorted;
mod std_heap;

pub use heap::HeapPq;
pub use sorted::SortedListPq;
pub use std_heap::StdHeapPq;
