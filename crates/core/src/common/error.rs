//! Boundary error definitions.
//!
//! All failures happen at the simulation boundary: a workload file that cannot
//! be read, a malformed workload line, or an invalid JSON config. The engine
//! itself has no error path; once a workload loads, the tick loop only ever
//! exits by every process reaching the terminated state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a workload or configuration.
#[derive(Debug, Error)]
pub enum SimError {
    /// A workload line did not have exactly six fields.
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),

    /// A workload field could not be parsed as an unsigned integer.
    #[error("field '{field}' is not an unsigned integer: {value:?}")]
    BadField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw token as it appeared in the input.
        value: String,
    },

    /// A workload line was rejected; wraps the per-line error with context.
    #[error("{}: line {line}: {source}", path.display())]
    Workload {
        /// Workload file path.
        path: PathBuf,
        /// 1-based line number of the rejected line.
        line: usize,
        /// The underlying parse error.
        #[source]
        source: Box<SimError>,
    },

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The path that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A config file was readable but not a valid JSON `Config`.
    #[error("{} is not a valid config: {source}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
