//! Configuration system for the scheduling simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (time quantum, partition table, trace path).
//! 2. **Structures:** Hierarchical config for the scheduler, memory, and output.
//!
//! Configuration is supplied as JSON (`Config::from_json_file`) or use
//! `Config::default()` for the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Round-robin time quantum in ticks.
    ///
    /// A running process that neither terminates nor blocks is preempted
    /// after this many consecutive ticks on the CPU.
    pub const QUANTUM: u64 = 100;

    /// Fixed memory partition sizes in megabytes, in partition order.
    ///
    /// The partition set is static for the whole run; partitions are only
    /// ever occupied or freed, never created or destroyed.
    pub const PARTITION_SIZES: [u64; 6] = [40, 25, 15, 10, 8, 2];

    /// Relative path the CLI writes the execution trace to.
    pub const TRACE_PATH: &str = "output_files/execution.txt";
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use schedsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.scheduler.quantum, 100);
/// assert_eq!(config.memory.partition_sizes.len(), 6);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use schedsim_core::config::Config;
///
/// let json = r#"{
///     "scheduler": { "quantum": 10 },
///     "memory": { "partition_sizes": [8, 4] }
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.scheduler.quantum, 10);
/// assert_eq!(config.memory.partition_sizes, vec![8, 4]);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheduler settings (time quantum).
    pub scheduler: SchedulerConfig,
    /// Memory settings (partition table).
    pub memory: MemoryConfig,
    /// Output settings (trace path).
    pub output: OutputConfig,
}

/// Scheduler configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Round-robin time quantum in ticks.
    pub quantum: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: defaults::QUANTUM,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Fixed partition sizes in megabytes, in partition order.
    pub partition_sizes: Vec<u64>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            partition_sizes: defaults::PARTITION_SIZES.to_vec(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the rendered execution trace is written to.
    pub trace_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trace_path: defaults::TRACE_PATH.to_string(),
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Absent fields fall back to their defaults, so a partial config
    /// overriding only the quantum is valid.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it is not valid JSON for [`Config`].
    pub fn from_json_file(path: &Path) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
