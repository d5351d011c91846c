//! Process identifier type.
//!
//! A process's identifier doubles as its static external priority: the lower
//! the numeric value, the higher the priority. The newtype keeps pid/priority
//! comparisons from being mixed up with other integer fields (sizes, times).

use std::fmt;

/// A process identifier, also the process's external priority.
///
/// Ordering is numeric: `Pid(1) < Pid(2)`, and a *lower* pid means a *higher*
/// scheduling priority. The priority is assigned at creation and never
/// recalculated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(pub u32);

impl Pid {
    /// Creates a new pid from a raw value.
    #[inline]
    pub fn new(pid: u32) -> Self {
        Self(pid)
    }

    /// Returns the raw pid value.
    #[inline]
    pub fn val(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
