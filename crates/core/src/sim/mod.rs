//! Simulation engine and workload loading.

/// Workload file loading.
pub mod loader;
/// The tick-driven simulation engine.
pub mod simulator;

pub use loader::load_workload;
pub use simulator::Simulator;
