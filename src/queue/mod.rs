mod deque;
mod linked;
mod naive;

pub use deque::DequeQueue;
pub use linked::LinkedQueue;
pub use naive::NaiveQueue;
