//! Execution trace records and text rendering.
//!
//! The engine's boundary contract with reporting is a sequence of discrete
//! records: state transitions `(time, pid, old, new)` and memory snapshots.
//! The engine only appends records; all string formatting lives here, in
//! [`Trace::render`].

use std::fmt::Write as _;

use crate::common::id::Pid;
use crate::memory::MemorySnapshot;
use crate::process::ProcState;

/// One recorded state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Tick the transition occurred at.
    pub time: u64,
    /// Process that transitioned.
    pub pid: Pid,
    /// State before the transition.
    pub from: ProcState,
    /// State after the transition.
    pub to: ProcState,
}

/// A trace record, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// A process state transition.
    Transition(Transition),
    /// A memory-status snapshot, emitted on every successful admission.
    Memory(MemorySnapshot),
}

/// The execution trace: every record the engine emitted, in order.
///
/// Records at the same timestamp appear in the engine's fixed pass order,
/// never out of chronological order.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    records: Vec<Record>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transition record.
    pub(crate) fn transition(&mut self, time: u64, pid: Pid, from: ProcState, to: ProcState) {
        self.records
            .push(Record::Transition(Transition { time, pid, from, to }));
    }

    /// Appends a memory snapshot record.
    pub(crate) fn memory(&mut self, snapshot: MemorySnapshot) {
        self.records.push(Record::Memory(snapshot));
    }

    /// All records, in emission order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Just the state transitions, in emission order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.records.iter().filter_map(|record| match record {
            Record::Transition(t) => Some(t),
            Record::Memory(_) => None,
        })
    }

    /// Renders the trace as the human-readable execution report:
    /// header, one `time, pid, OLD -> NEW` line per transition, a
    /// memory-status block per snapshot, and a footer.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "time, pid, old state -> new state");
        let _ = writeln!(out, "{RULE}");

        for record in &self.records {
            match record {
                Record::Transition(t) => {
                    let _ = writeln!(out, "{}, {}, {} -> {}", t.time, t.pid, t.from, t.to);
                }
                Record::Memory(snap) => render_memory(&mut out, snap),
            }
        }

        let _ = writeln!(out, "{RULE}");
        out
    }
}

const RULE: &str = "!-----------------------------------------------------------!";

fn render_memory(out: &mut String, snap: &MemorySnapshot) {
    let _ = writeln!(out, "\n memory status at time {}", snap.time);
    for part in &snap.partitions {
        match part.occupant {
            Some((pid, size)) => {
                let _ = writeln!(
                    out,
                    "Partition {} ({}Mb): PID {} using {}Mb",
                    part.number, part.size, pid, size
                );
            }
            None => {
                let _ = writeln!(out, "Partition {} ({}Mb): FREE", part.number, part.size);
            }
        }
    }
    let _ = writeln!(out, "memory used: {}Mb", snap.used);
    let _ = writeln!(out, "free memory: {}Mb", snap.free);
    let _ = writeln!(out, "free partitions: {}Mb", snap.free_in_partitions);
    let _ = writeln!(out, "-------------------\n");
}
