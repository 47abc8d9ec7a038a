// Benchmark driver: runs both suites and prints the comparison tables.
//
// Workload sizes default to 50,000 queue items and 10,000 priority-queue
// items; override with ADT_QUEUE_ITEMS, ADT_PQ_ITEMS and ADT_SEED. Log
// verbosity follows RUST_LOG (default `info`), written to stderr.

use adt_queues::bench::{self, BenchConfig};
use adt_queues::ConfigError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
   let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
   let _ = tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_writer(std::io::stderr)
      .try_init();

   let config = BenchConfig::from_env()?;
   tracing::info!(?config, "starting benchmarks");

   let reports = bench::run(&config);
   print!("{reports}");
   Ok(())
}
