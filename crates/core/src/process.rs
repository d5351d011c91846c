//! Process control block definition and workload-line parsing.
//!
//! This module defines the mutable entity representing one simulated process.
//! It provides:
//! 1. **State machine:** The six-state lifecycle a process moves through.
//! 2. **PCB fields:** Identity, timing, memory footprint, and I/O behavior.
//! 3. **Parsing:** `Process::from_tokens`, the only entry point from input data.

use std::fmt;

use crate::common::error::SimError;
use crate::common::id::Pid;

/// Number of fields in one workload line.
const FIELD_COUNT: usize = 6;

/// Scheduling state of a process record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcState {
    /// Created from the workload, not yet admitted to memory.
    NotAssigned,
    /// Arrived but still un-admitted; reported as the old state of the
    /// first admission transition.
    New,
    /// Admitted and waiting in the ready queue for the CPU.
    Ready,
    /// Currently holding the CPU. At most one process is running per tick.
    Running,
    /// Blocked on a simulated I/O burst until its recorded wake time.
    Waiting,
    /// Finished; its partition has been released and it is never scheduled
    /// again, though the record is retained for reporting.
    Terminated,
}

impl fmt::Display for ProcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotAssigned => "NOT ASSIGNED",
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Waiting => "WAITING",
            Self::Terminated => "TERMINATED",
        };
        write!(f, "{name}")
    }
}

/// A process control block.
///
/// Created once from a workload line in [`ProcState::NotAssigned`], then
/// mutated in place by the engine as it moves through states. The record
/// survives termination for memory-status reporting.
#[derive(Clone, Debug)]
pub struct Process {
    /// Unique identifier, doubling as static external priority
    /// (lower value = higher priority).
    pub pid: Pid,
    /// Memory footprint in megabytes; must fit a partition before the
    /// process may run.
    pub size: u64,
    /// Tick at which the process becomes eligible for admission.
    pub arrival_time: u64,
    /// Total CPU time required, in ticks.
    pub total_time: u64,
    /// CPU time left; decreases only while running, reaches 0 exactly
    /// at termination.
    pub remaining_time: u64,
    /// CPU ticks of execution between forced I/O bursts (0 = never blocks).
    pub io_freq: u64,
    /// Ticks spent waiting once an I/O burst triggers.
    pub io_duration: u64,
    /// Current scheduling state.
    pub state: ProcState,
    /// Partition currently held (0-based index), or `None`.
    pub partition: Option<usize>,
    /// CPU ticks executed since the last I/O burst (or since admission).
    pub cpu_since_io: u64,
}

impl Process {
    /// Builds a process record from the six tokens of one workload line:
    /// `pid, memory_size, arrival_time, total_cpu_time, io_freq, io_duration`.
    ///
    /// The record starts in [`ProcState::NotAssigned`] with
    /// `remaining_time == total_time`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FieldCount`] for a wrong token count and
    /// [`SimError::BadField`] for a non-numeric field.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, SimError> {
        if tokens.len() != FIELD_COUNT {
            return Err(SimError::FieldCount(tokens.len()));
        }

        let pid = parse_field("pid", tokens[0])?;
        let size = parse_field("memory_size", tokens[1])?;
        let arrival_time = parse_field("arrival_time", tokens[2])?;
        let total_time = parse_field("total_cpu_time", tokens[3])?;
        let io_freq = parse_field("io_freq", tokens[4])?;
        let io_duration = parse_field("io_duration", tokens[5])?;

        Ok(Self {
            pid: Pid::new(u32::try_from(pid).map_err(|_| SimError::BadField {
                field: "pid",
                value: tokens[0].to_string(),
            })?),
            size,
            arrival_time,
            total_time,
            remaining_time: total_time,
            io_freq,
            io_duration,
            state: ProcState::NotAssigned,
            partition: None,
            cpu_since_io: 0,
        })
    }

    /// True once the process has reached [`ProcState::Terminated`].
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state == ProcState::Terminated
    }

    /// True while the process has never been admitted to memory.
    #[inline]
    pub fn awaiting_admission(&self) -> bool {
        matches!(self.state, ProcState::NotAssigned | ProcState::New)
    }
}

fn parse_field(field: &'static str, token: &str) -> Result<u64, SimError> {
    token.trim().parse().map_err(|_| SimError::BadField {
        field,
        value: token.to_string(),
    })
}
