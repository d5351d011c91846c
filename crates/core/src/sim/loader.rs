//! Workload loading.
//!
//! Reads the line-oriented process-description file into process records.
//! Each non-empty line is six comma-delimited fields:
//! `pid, memory_size, arrival_time, total_cpu_time, io_freq, io_duration`.
//!
//! Malformed input is a configuration error: the whole load fails and no
//! partial simulation runs.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;
use crate::process::Process;

/// Loads a workload file into process records, all in the not-assigned state.
///
/// Blank lines are skipped. Fields are split on commas and trimmed, so both
/// `1, 30, 0, 50, 0, 0` and `1,30,0,50,0,0` parse.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, and
/// [`SimError::Workload`] (wrapping the per-line cause) for the first
/// malformed line.
pub fn load_workload(path: &Path) -> Result<Vec<Process>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut procs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        let proc = Process::from_tokens(&tokens).map_err(|source| SimError::Workload {
            path: path.to_path_buf(),
            line: idx + 1,
            source: Box::new(source),
        })?;
        procs.push(proc);
    }
    Ok(procs)
}
