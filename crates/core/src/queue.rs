//! Scheduling queues and the dispatch comparator.
//!
//! Queues hold arena indices (handles) into the simulator's process table,
//! never copies of process records; only the engine mutates process state.
//! This module provides:
//! 1. **Dispatch order:** The explicit tie-break comparator applied per decision.
//! 2. **Ready queue:** FIFO append, min-select dispatch, priority probing.
//! 3. **Waiting queue:** Wake-time entries drained when the clock catches up.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::common::id::Pid;
use crate::process::Process;

/// Dispatch order between two ready processes.
///
/// Lower pid (higher external priority) dispatches first. Among equal pids
/// the *later* arrival wins; duplicate pids cannot occur with well-formed
/// input, but the rule is kept explicit because it governs scheduling
/// fairness when they do.
pub fn dispatch_order(a: &Process, b: &Process) -> Ordering {
    a.pid
        .cmp(&b.pid)
        .then_with(|| b.arrival_time.cmp(&a.arrival_time))
}

/// The ready queue: handles of processes in the ready state.
///
/// Appends are FIFO; dispatch re-applies [`dispatch_order`] over the whole
/// queue each decision rather than keeping the queue sorted, so the
/// tie-break rule stays a single testable contract.
#[derive(Clone, Debug, Default)]
pub struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    /// Creates an empty ready queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handle at the tail.
    pub fn push(&mut self, slot: usize) {
        self.slots.push_back(slot);
    }

    /// True when no process is ready.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of ready processes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if some ready process outranks `pid` (has a strictly lower pid).
    pub fn outranks(&self, procs: &[Process], pid: Pid) -> bool {
        self.slots.iter().any(|&slot| procs[slot].pid < pid)
    }

    /// Removes and returns the next handle to dispatch, the minimum of the
    /// queue under [`dispatch_order`], or `None` when empty.
    pub fn take_next(&mut self, procs: &[Process]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (pos, &slot) in self.slots.iter().enumerate() {
            let better = match best {
                None => true,
                Some(b) => {
                    dispatch_order(&procs[slot], &procs[self.slots[b]]) == Ordering::Less
                }
            };
            if better {
                best = Some(pos);
            }
        }
        self.slots.remove(best?)
    }
}

/// One waiting-queue entry: a blocked process and its wake time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WaitEntry {
    slot: usize,
    wake_time: u64,
}

/// The waiting queue: processes blocked on simulated I/O.
///
/// A member leaves exactly when the clock reaches or passes its wake time;
/// entries due at the same tick drain in insertion order.
#[derive(Clone, Debug, Default)]
pub struct WaitQueue {
    entries: Vec<WaitEntry>,
}

impl WaitQueue {
    /// Creates an empty waiting queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `slot` as blocked until `wake_time`.
    pub fn push(&mut self, slot: usize, wake_time: u64) {
        self.entries.push(WaitEntry { slot, wake_time });
    }

    /// True when no process is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns all handles whose wake time has arrived
    /// (`wake_time <= now`), in insertion order.
    pub fn drain_due(&mut self, now: u64) -> Vec<usize> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.wake_time <= now {
                due.push(entry.slot);
                false
            } else {
                true
            }
        });
        due
    }
}
