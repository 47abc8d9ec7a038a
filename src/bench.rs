// Benchmark harness – drives every variant through the same workload
//
// Each run fills a fresh container with N items and then drains it, timing
// the two phases separately. Priority-queue runs share one random priority
// sequence, generated before any clock starts, so only the data structure
// differs between variants.

use crate::error::ConfigError;
use crate::{DequeQueue, HeapPq, LinkedQueue, NaiveQueue, SortedListPq, StdHeapPq};
use crate::{PriorityQueue, Queue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span};

pub const DEFAULT_QUEUE_ITEMS: usize = 50_000;
pub const DEFAULT_PQ_ITEMS: usize = 10_000;

pub const QUEUE_NAIVE: &str = "QueueNaive (Vec)";
pub const QUEUE_LINKED: &str = "QueueLinkedList (from-scratch)";
pub const QUEUE_DEQUE: &str = "QueueDeque (VecDeque)";

pub const PQ_SORTED: &str = "PQNaiveSortedList (Vec)";
pub const PQ_HEAP: &str = "PQHeap (from-scratch)";
pub const PQ_STD_HEAP: &str = "PQBinaryHeap (std)";

const ENV_QUEUE_ITEMS: &str = "ADT_QUEUE_ITEMS";
const ENV_PQ_ITEMS: &str = "ADT_PQ_ITEMS";
const ENV_SEED: &str = "ADT_SEED";

/*──────────────────────────────────────────────────────────────────────────*/
/*  Configuration                                                           */
/*──────────────────────────────────────────────────────────────────────────*/

/// Workload sizes and seed for one harness invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
   pub queue_items: usize,
   pub pq_items: usize,
   /// Seed for the priority workload; `None` draws a fresh one.
   pub seed: Option<u64>,
}

impl Default for BenchConfig {
   fn default() -> Self {
      Self {
         queue_items: DEFAULT_QUEUE_ITEMS,
         pq_items: DEFAULT_PQ_ITEMS,
         seed: None,
      }
   }
}

impl BenchConfig {
   /// Defaults, overridden by `ADT_QUEUE_ITEMS`, `ADT_PQ_ITEMS` and `ADT_SEED`
   /// when set.
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| std::env::var(key).ok())
   }

   /// Like [`BenchConfig::from_env`] with a caller-supplied variable source.
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&str) -> Option<String>,
   {
      let mut cfg = Self::default();
      if let Some(n) = parse_var(&lookup, ENV_QUEUE_ITEMS)? {
         cfg.queue_items = nonzero(n, ENV_QUEUE_ITEMS)?;
      }
      if let Some(n) = parse_var(&lookup, ENV_PQ_ITEMS)? {
         cfg.pq_items = nonzero(n, ENV_PQ_ITEMS)?;
      }
      if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
         cfg.seed = Some(seed);
      }
      Ok(cfg)
   }

   /// Fails with [`ConfigError::ZeroItems`] when `n` is zero.
   pub fn with_queue_items(mut self, n: usize) -> Result<Self, ConfigError> {
      self.queue_items = nonzero_items(n, ENV_QUEUE_ITEMS)?;
      Ok(self)
   }

   /// Fails with [`ConfigError::ZeroItems`] when `n` is zero.
   pub fn with_pq_items(mut self, n: usize) -> Result<Self, ConfigError> {
      self.pq_items = nonzero_items(n, ENV_PQ_ITEMS)?;
      Ok(self)
   }

   pub fn with_seed(mut self, seed: u64) -> Self {
      self.seed = Some(seed);
      self
   }
}

fn parse_var<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
   F: Fn(&str) -> Option<String>,
{
   match lookup(key) {
      None => Ok(None),
      Some(raw) => raw
         .trim()
         .parse::<u64>()
         .map(Some)
         .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
   }
}

fn nonzero(n: u64, key: &'static str) -> Result<usize, ConfigError> {
   let n = usize::try_from(n)
      .map_err(|_| ConfigError::InvalidValue { key, value: n.to_string() })?;
   nonzero_items(n, key)
}

fn nonzero_items(n: usize, key: &'static str) -> Result<usize, ConfigError> {
   if n == 0 {
      return Err(ConfigError::ZeroItems { key });
   }
   Ok(n)
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Timing a single variant                                                 */
/*──────────────────────────────────────────────────────────────────────────*/

/// Wall-clock time of the fill (insert/enqueue) and drain (remove) phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
   pub fill: Duration,
   pub drain: Duration,
}

impl PhaseTimings {
   #[inline]
   pub fn total(&self) -> Duration {
      self.fill + self.drain
   }
}

/// Enqueue `0..n` into a fresh `Q`, then dequeue all of it.
pub fn time_queue<Q>(n: usize) -> PhaseTimings
where
   Q: Queue<usize> + Default,
{
   let mut q = Q::default();

   let start = Instant::now();
   for i in 0..n {
      q.enqueue(i);
   }
   let filled = Instant::now();
   for _ in 0..n {
      let _ = black_box(q.dequeue());
   }
   let drained = Instant::now();

   PhaseTimings {
      fill: filled - start,
      drain: drained - filled,
   }
}

/// The random priorities shared by every priority-queue variant of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityWorkload {
   pub seed: u64,
   pub priorities: Vec<u64>,
}

impl PriorityWorkload {
   /// `n` uniform priorities from a `StdRng` seeded with `seed`, or with a
   /// freshly drawn seed when `None`.
   pub fn generate(n: usize, seed: Option<u64>) -> Self {
      let seed = seed.unwrap_or_else(rand::random);
      let mut rng = StdRng::seed_from_u64(seed);
      let priorities = (0..n).map(|_| rng.random::<u64>()).collect();
      debug!(n, seed, "generated priority workload");
      Self { seed, priorities }
   }

   #[inline]
   pub fn len(&self) -> usize {
      self.priorities.len()
   }

   #[inline]
   pub fn is_empty(&self) -> bool {
      self.priorities.is_empty()
   }
}

/// Insert item `i` with `priorities[i]` into a fresh `Q`, then pop all.
pub fn time_priority_queue<Q>(workload: &PriorityWorkload) -> PhaseTimings
where
   Q: PriorityQueue<u64, usize> + Default,
{
   let mut pq = Q::default();
   let n = workload.len();

   let start = Instant::now();
   for (i, &p) in workload.priorities.iter().enumerate() {
      pq.insert(i, p);
   }
   let filled = Instant::now();
   for _ in 0..n {
      let _ = black_box(pq.pop_min());
   }
   let drained = Instant::now();

   PhaseTimings {
      fill: filled - start,
      drain: drained - filled,
   }
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Variant tables                                                          */
/*──────────────────────────────────────────────────────────────────────────*/

pub type QueueBench = fn(usize) -> PhaseTimings;
pub type PriorityQueueBench = fn(&PriorityWorkload) -> PhaseTimings;

pub const QUEUE_VARIANTS: [(&str, QueueBench); 3] = [
   (QUEUE_NAIVE, time_queue::<NaiveQueue<usize>>),
   (QUEUE_LINKED, time_queue::<LinkedQueue<usize>>),
   (QUEUE_DEQUE, time_queue::<DequeQueue<usize>>),
];

pub const PQ_VARIANTS: [(&str, PriorityQueueBench); 3] = [
   (PQ_SORTED, time_priority_queue::<SortedListPq<u64, usize>>),
   (PQ_HEAP, time_priority_queue::<HeapPq<u64, usize>>),
   (PQ_STD_HEAP, time_priority_queue::<StdHeapPq<u64, usize>>),
];

/*──────────────────────────────────────────────────────────────────────────*/
/*  Reports                                                                 */
/*──────────────────────────────────────────────────────────────────────────*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantResult {
   pub name: &'static str,
   pub timings: PhaseTimings,
}

/// `baseline` total time divided by `candidate` total time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speedup {
   pub label: &'static str,
   pub baseline: &'static str,
   pub candidate: &'static str,
   /// `None` when either variant is missing or took zero time.
   pub ratio: Option<f64>,
}

impl fmt::Display for Speedup {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self.ratio {
         Some(r) => write!(f, "Speedup ({}): {:.2}x", self.label, r),
         None => write!(f, "Speedup ({}): n/a", self.label),
      }
   }
}

/// Timings of every variant of one contract, in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
   pub title: &'static str,
   pub items: usize,
   /// Seed of the shared workload, for randomized suites.
   pub seed: Option<u64>,
   pub results: Vec<VariantResult>,
   pub speedups: Vec<Speedup>,
}

impl BenchReport {
   fn new(title: &'static str, items: usize, seed: Option<u64>) -> Self {
      Self {
         title,
         items,
         seed,
         results: Vec::new(),
         speedups: Vec::new(),
      }
   }

   pub fn get(&self, name: &str) -> Option<PhaseTimings> {
      self.results.iter().find(|r| r.name == name).map(|r| r.timings)
   }

   fn record(&mut self, name: &'static str, timings: PhaseTimings) {
      info!(
         variant = name,
         fill_secs = timings.fill.as_secs_f64(),
         drain_secs = timings.drain.as_secs_f64(),
         total_secs = timings.total().as_secs_f64(),
         "variant finished"
      );
      self.results.push(VariantResult { name, timings });
   }

   fn add_speedup(&mut self, label: &'static str, baseline: &'static str, candidate: &'static str) {
      let ratio = match (self.get(baseline), self.get(candidate)) {
         (Some(b), Some(c)) => growth_ratio(c.total(), b.total()),
         _ => None,
      };
      let speedup = Speedup { label, baseline, candidate, ratio };
      info!(%speedup, "speedup");
      self.speedups.push(speedup);
   }
}

impl fmt::Display for BenchReport {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      writeln!(f, "--- {} ---", self.title)?;
      writeln!(f, "Number of items: {}", group_thousands(self.items))?;
      if let Some(seed) = self.seed {
         writeln!(f, "Workload seed: {seed}")?;
      }
      for r in &self.results {
         writeln!(f, "{:<32} {:.6} seconds", r.name, r.timings.total().as_secs_f64())?;
      }
      for s in &self.speedups {
         writeln!(f)?;
         writeln!(f, "{s}")?;
      }
      Ok(())
   }
}

/// Reports of both suites of one harness invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteReports {
   pub queues: BenchReport,
   pub priority_queues: BenchReport,
}

impl fmt::Display for SuiteReports {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.queues)?;
      writeln!(f)?;
      writeln!(f, "{}", "-".repeat(50))?;
      writeln!(f)?;
      write!(f, "{}", self.priority_queues)
   }
}

/// `large / small`, or `None` when `small` is zero.
pub fn growth_ratio(small: Duration, large: Duration) -> Option<f64> {
   if small.is_zero() {
      return None;
   }
   Some(large.as_secs_f64() / small.as_secs_f64())
}

fn group_thousands(n: usize) -> String {
   let digits = n.to_string();
   let mut out = String::with_capacity(digits.len() + digits.len() / 3);
   for (i, ch) in digits.chars().enumerate() {
      if i > 0 && (digits.len() - i) % 3 == 0 {
         out.push(',');
      }
      out.push(ch);
   }
   out
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Suites                                                                  */
/*──────────────────────────────────────────────────────────────────────────*/

/// Every queue variant, `n` items each.
pub fn run_queue_suite(n: usize) -> BenchReport {
   let _span = info_span!("queue_suite", n).entered();
   let mut report = BenchReport::new("Benchmarking Queue ADT Implementations", n, None);
   for (name, bench) in QUEUE_VARIANTS {
      debug!(variant = name, "running");
      report.record(name, bench(n));
   }
   report.add_speedup("deque vs naive", QUEUE_NAIVE, QUEUE_DEQUE);
   report
}

/// Every priority-queue variant over one shared workload of `n` priorities.
pub fn run_priority_queue_suite(n: usize, seed: Option<u64>) -> BenchReport {
   let _span = info_span!("priority_queue_suite", n).entered();
   let workload = PriorityWorkload::generate(n, seed);
   let mut report = BenchReport::new(
      "Benchmarking Priority Queue ADT Implementations",
      n,
      Some(workload.seed),
   );
   for (name, bench) in PQ_VARIANTS {
      debug!(variant = name, "running");
      report.record(name, bench(&workload));
   }
   report.add_speedup("binary heap vs naive", PQ_SORTED, PQ_STD_HEAP);
   report
}

pub fn run(config: &BenchConfig) -> SuiteReports {
   SuiteReports {
      queues: run_queue_suite(config.queue_items),
      priority_queues: run_priority_queue_suite(config.pq_items, config.seed),
   }
}
