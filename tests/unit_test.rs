// adt_queues/tests/unit_test.rs

use adt_queues::bench::{self, growth_ratio, time_queue, PriorityWorkload};
use adt_queues::{DequeQueue, HeapPq, LinkedQueue, NaiveQueue, SortedListPq, StdHeapPq};
use adt_queues::{EmptyContainer, Operation, PriorityQueue, Queue};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/*──────────────────────────────── queues ──────────────────────────────────*/

fn check_fifo_order<Q: Queue<i32> + Default>() {
   let mut q = Q::default();
   let items: Vec<i32> = (0..1_000).map(|i| i * 7 - 300).collect();
   for &i in &items {
      q.enqueue(i);
   }
   let out: Vec<i32> = (0..items.len()).map(|_| q.dequeue().unwrap()).collect();
   assert_eq!(out, items);
}

fn check_queue_sizes<Q: Queue<u32> + Default>() {
   let mut q = Q::default();
   assert!(q.is_empty());
   assert_eq!(q.size(), 0);

   for k in 1..=50u32 {
      q.enqueue(k);
      assert_eq!(q.size(), k as usize);
   }
   for j in 1..=20usize {
      q.dequeue().unwrap();
      assert_eq!(q.size(), 50 - j);
      assert_eq!(q.len(), q.size());
   }
   assert!(!q.is_empty());
}

fn check_queue_exhaustion<Q: Queue<&'static str> + Default>() {
   let mut q = Q::default();
   q.enqueue("a");
   q.enqueue("b");
   assert_eq!(q.dequeue(), Ok("a"));
   assert_eq!(q.dequeue(), Ok("b"));

   assert!(q.is_empty());
   assert_eq!(q.dequeue(), Err(EmptyContainer::new(Operation::Dequeue)));
   assert_eq!(q.peek(), Err(EmptyContainer::new(Operation::Peek)));
   assert_eq!(q.size(), 0);

   // a failed removal must not corrupt the container
   q.enqueue("c");
   assert_eq!(q.peek(), Ok(&"c"));
   assert_eq!(q.dequeue(), Ok("c"));
}

fn check_peek_does_not_remove<Q: Queue<i32> + Default>() {
   let mut q = Q::default();
   q.enqueue(10);
   q.enqueue(20);
   assert_eq!(q.peek(), Ok(&10));
   assert_eq!(q.peek(), Ok(&10));
   assert_eq!(q.size(), 2);
}

fn check_interleaved_against_model<Q: Queue<u64> + Default>(seed: u64) {
   let mut rng = StdRng::seed_from_u64(seed);
   let mut q = Q::default();
   let mut model = std::collections::VecDeque::new();
   for step in 0..10_000u64 {
      if rng.random_bool(0.55) {
         q.enqueue(step);
         model.push_back(step);
      } else {
         assert_eq!(q.dequeue().ok(), model.pop_front());
      }
      assert_eq!(q.size(), model.len());
      assert_eq!(q.peek().ok(), model.front());
   }
}

#[test]
fn fifo_order_all_queues() {
   check_fifo_order::<NaiveQueue<i32>>();
   check_fifo_order::<LinkedQueue<i32>>();
   check_fifo_order::<DequeQueue<i32>>();
}

#[test]
fn queue_size_invariant() {
   check_queue_sizes::<NaiveQueue<u32>>();
   check_queue_sizes::<LinkedQueue<u32>>();
   check_queue_sizes::<DequeQueue<u32>>();
}

#[test]
fn queue_empty_on_exhaustion() {
   check_queue_exhaustion::<NaiveQueue<&'static str>>();
   check_queue_exhaustion::<LinkedQueue<&'static str>>();
   check_queue_exhaustion::<DequeQueue<&'static str>>();
}

#[test]
fn queue_peek_is_pure() {
   check_peek_does_not_remove::<NaiveQueue<i32>>();
   check_peek_does_not_remove::<LinkedQueue<i32>>();
   check_peek_does_not_remove::<DequeQueue<i32>>();
}

#[test]
fn queues_match_model_under_interleaving() {
   check_interleaved_against_model::<NaiveQueue<u64>>(1);
   check_interleaved_against_model::<LinkedQueue<u64>>(2);
   check_interleaved_against_model::<DequeQueue<u64>>(3);
}

#[test]
fn linked_queue_tail_reset() {
   let mut q = LinkedQueue::new();
   q.enqueue(1);
   assert_eq!(q.dequeue(), Ok(1));
   q.enqueue(2);
   assert_eq!(q.dequeue(), Ok(2));
   assert!(q.is_empty());

   // refill after draining several times
   for round in 0..3 {
      q.enqueue(round * 10);
      q.enqueue(round * 10 + 1);
      assert_eq!(q.dequeue(), Ok(round * 10));
      assert_eq!(q.dequeue(), Ok(round * 10 + 1));
      assert!(q.dequeue().is_err());
   }
}

#[test]
fn queue_display_matches_contents() {
   let mut naive = NaiveQueue::new();
   let mut deque = DequeQueue::new();
   for i in [10, 20, 30] {
      naive.enqueue(i);
      deque.enqueue(i);
   }
   naive.dequeue().unwrap();
   deque.dequeue().unwrap();
   assert_eq!(naive.to_string(), "QueueNaive([20, 30])");
   assert_eq!(deque.to_string(), "QueueDeque([20, 30])");
}

#[test]
fn empty_container_messages() {
   assert_eq!(
      EmptyContainer::new(Operation::Dequeue).to_string(),
      "dequeue from empty queue"
   );
   assert_eq!(EmptyContainer::new(Operation::Peek).to_string(), "peek from empty queue");
   assert_eq!(
      EmptyContainer::new(Operation::PopMin).to_string(),
      "pop from empty priority queue"
   );
   assert_eq!(
      EmptyContainer::new(Operation::PeekMin).to_string(),
      "peek from empty priority queue"
   );
}

/*──────────────────────────── priority queues ─────────────────────────────*/

fn drain<P: Ord, T, Q: PriorityQueue<P, T>>(pq: &mut Q) -> Vec<T> {
   let mut out = Vec::with_capacity(pq.size());
   while !pq.is_empty() {
      out.push(pq.pop_min().unwrap());
   }
   out
}

fn check_cross_variant_order<Q: PriorityQueue<u32, u32> + Default>() {
   let mut pq = Q::default();
   for p in [5, 1, 3, 0, 2] {
      // item equals its priority so the popped items are the priorities
      pq.insert(p, p);
   }
   assert_eq!(drain(&mut pq), vec![0, 1, 2, 3, 5]);
}

fn check_minimality<Q: PriorityQueue<u32, usize> + Default>(seed: u64) {
   let mut rng = StdRng::seed_from_u64(seed);
   let mut pq = Q::default();
   let mut held: Vec<u32> = Vec::new();

   for i in 0..2_000usize {
      if held.is_empty() || rng.random_bool(0.65) {
         let p = rng.random_range(0..500u32);
         pq.insert(i, p);
         held.push(p);
      } else {
         let min = *held.iter().min().unwrap();
         assert_eq!(pq.peek_min_priority(), Ok(&min));
         pq.pop_min().unwrap();
         let pos = held.iter().position(|&p| p == min).unwrap();
         held.swap_remove(pos);
      }
      match held.iter().min() {
         Some(min) => assert_eq!(pq.peek_min_priority(), Ok(min)),
         None => assert!(pq.is_empty()),
      }
      assert_eq!(pq.size(), held.len());
   }
}

fn check_pq_exhaustion<Q: PriorityQueue<i64, char> + Default>() {
   let mut pq = Q::default();
   pq.insert('a', 4);
   pq.insert('b', -2);
   assert_eq!(pq.peek_min(), Ok(&'b'));
   assert_eq!(pq.size(), 2);
   assert_eq!(pq.pop_min(), Ok('b'));
   assert_eq!(pq.pop_min(), Ok('a'));

   assert!(pq.is_empty());
   assert_eq!(pq.pop_min(), Err(EmptyContainer::new(Operation::PopMin)));
   assert_eq!(pq.peek_min(), Err(EmptyContainer::new(Operation::PeekMin)));
   assert_eq!(pq.peek_min_priority(), Err(EmptyContainer::new(Operation::PeekMin)));
   assert_eq!(pq.size(), 0);

   pq.insert('c', 9);
   assert_eq!(pq.peek_min(), Ok(&'c'));
}

fn check_ties_keep_priority_order<Q: PriorityQueue<u8, usize> + Default>() {
   let mut pq = Q::default();
   let prios = [3u8, 1, 3, 1, 2, 1, 3, 2];
   for (i, &p) in prios.iter().enumerate() {
      pq.insert(i, p);
   }
   let popped: Vec<u8> = drain(&mut pq).into_iter().map(|i| prios[i]).collect();
   assert_eq!(popped, vec![1, 1, 1, 2, 2, 3, 3, 3]);
}

fn check_sorted_drain<Q: PriorityQueue<u64, usize> + Default>(workload: &PriorityWorkload) {
   let mut pq = Q::default();
   for (i, &p) in workload.priorities.iter().enumerate() {
      pq.insert(i, p);
   }
   let popped: Vec<u64> =
      drain(&mut pq).into_iter().map(|i| workload.priorities[i]).collect();
   let mut expected = workload.priorities.clone();
   expected.sort_unstable();
   assert_eq!(popped, expected);
}

#[test]
fn cross_variant_equivalence() {
   check_cross_variant_order::<SortedListPq<u32, u32>>();
   check_cross_variant_order::<HeapPq<u32, u32>>();
   check_cross_variant_order::<StdHeapPq<u32, u32>>();
}

#[test]
fn heap_minimality_all_priority_queues() {
   check_minimality::<SortedListPq<u32, usize>>(11);
   check_minimality::<HeapPq<u32, usize>>(12);
   check_minimality::<StdHeapPq<u32, usize>>(13);
}

#[test]
fn priority_queue_empty_on_exhaustion() {
   check_pq_exhaustion::<SortedListPq<i64, char>>();
   check_pq_exhaustion::<HeapPq<i64, char>>();
   check_pq_exhaustion::<StdHeapPq<i64, char>>();
}

#[test]
fn ties_never_break_minimality() {
   check_ties_keep_priority_order::<SortedListPq<u8, usize>>();
   check_ties_keep_priority_order::<HeapPq<u8, usize>>();
   check_ties_keep_priority_order::<StdHeapPq<u8, usize>>();
}

#[test]
fn shared_workload_drains_sorted() {
   let workload = PriorityWorkload::generate(3_000, Some(2024));
   check_sorted_drain::<SortedListPq<u64, usize>>(&workload);
   check_sorted_drain::<HeapPq<u64, usize>>(&workload);
   check_sorted_drain::<StdHeapPq<u64, usize>>(&workload);
}

#[test]
fn lecture_walkthrough() {
   let mut pq = HeapPq::new();
   pq.insert("task1", 5);
   pq.insert("task2", 1);
   pq.insert("task3", 3);
   assert_eq!(pq.peek_min(), Ok(&"task2"));
   assert_eq!(pq.pop_min(), Ok("task2"));
   pq.insert("task4", 0);
   assert_eq!(drain(&mut pq), vec!["task4", "task3", "task1"]);
}

/*─────────────────────────────── harness ──────────────────────────────────*/

#[test]
fn suites_report_every_variant() {
   let q = bench::run_queue_suite(2_000);
   assert_eq!(q.items, 2_000);
   assert_eq!(
      q.results.iter().map(|r| r.name).collect::<Vec<_>>(),
      vec![bench::QUEUE_NAIVE, bench::QUEUE_LINKED, bench::QUEUE_DEQUE]
   );
   assert_eq!(q.speedups.len(), 1);
   assert_eq!(q.speedups[0].baseline, bench::QUEUE_NAIVE);
   assert_eq!(q.speedups[0].candidate, bench::QUEUE_DEQUE);

   let pq = bench::run_priority_queue_suite(1_000, Some(5));
   assert_eq!(pq.seed, Some(5));
   assert!(pq.get(bench::PQ_SORTED).is_some());
   assert!(pq.get(bench::PQ_HEAP).is_some());
   assert!(pq.get(bench::PQ_STD_HEAP).is_some());
   assert!(pq.get("missing").is_none());

   let text = pq.to_string();
   assert!(text.contains("Number of items: 1,000"));
   assert!(text.contains(bench::PQ_HEAP));
   assert!(text.contains("seconds"));
}

/// Fastest drain phase out of `runs` fresh runs of `time_queue::<Q>(n)`.
fn best_drain<Q: Queue<usize> + Default>(n: usize, runs: usize) -> Duration {
   (0..runs)
      .map(|_| time_queue::<Q>(n).drain)
      .min()
      .unwrap_or_default()
}

#[test]
fn naive_queue_drain_grows_superlinearly() {
   let n = 20_000;
   let small = best_drain::<NaiveQueue<usize>>(n, 3);
   let large = best_drain::<NaiveQueue<usize>>(2 * n, 3);
   let ratio = growth_ratio(small, large).expect("naive drain took no measurable time");
   assert!(ratio > 1.5, "naive drain grew only {ratio:.2}x from N to 2N");
}

#[test]
fn constant_time_queues_drain_near_linearly() {
   let n = 100_000;
   for (name, small, large) in [
      (
         "linked",
         best_drain::<LinkedQueue<usize>>(n, 7),
         best_drain::<LinkedQueue<usize>>(2 * n, 7),
      ),
      (
         "deque",
         best_drain::<DequeQueue<usize>>(n, 7),
         best_drain::<DequeQueue<usize>>(2 * n, 7),
      ),
   ] {
      let ratio = growth_ratio(small, large)
         .unwrap_or_else(|| panic!("{name} drain took no measurable time"));
      assert!(ratio < 3.0, "{name} drain grew {ratio:.2}x from N to 2N");
   }
}
