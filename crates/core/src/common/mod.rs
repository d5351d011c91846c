//! Common leaf types shared across the simulator.

/// Boundary error definitions.
pub mod error;
/// Process identifier newtype.
pub mod id;

pub use error::SimError;
pub use id::Pid;
