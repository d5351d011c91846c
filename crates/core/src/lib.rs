//! Discrete-time CPU scheduling simulator library.
//!
//! This crate implements a combined External Priority + Round Robin scheduler
//! simulation over fixed memory partitions, with the following:
//! 1. **Process records:** Mutable PCBs with a six-state lifecycle, parsed from workload lines.
//! 2. **Memory:** A best-fit fixed-partition allocator owning the partition table.
//! 3. **Queues:** Ready queue with an explicit dispatch comparator, waiting queue keyed by wake time.
//! 4. **Engine:** The tick loop (admission, wake, dispatch, execution) producing a deterministic trace.
//! 5. **Reporting:** Transition/memory-snapshot trace records, a text renderer, and run statistics.

/// Common types (process identifiers, error definitions).
pub mod common;
/// Simulator configuration (defaults, quantum, partition table, output path).
pub mod config;
/// Fixed-partition memory allocator and status snapshots.
pub mod memory;
/// Process control block definition and workload-line parsing.
pub mod process;
/// Ready and waiting queues plus the dispatch comparator.
pub mod queue;
/// Simulation engine and workload loader.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Execution trace records and text rendering.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Boundary error type for loading and parsing.
pub use crate::common::error::SimError;
/// Process record (PCB) and its state enum.
pub use crate::process::{ProcState, Process};
/// Main engine type; drives the tick loop and owns all simulation state.
pub use crate::sim::simulator::Simulator;
