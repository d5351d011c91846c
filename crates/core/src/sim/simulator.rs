//! The tick-driven simulation engine.
//!
//! The simulator owns all run state side-by-side: the process arena, the
//! memory map, both queues, the clock, and the trace. Queues hold arena
//! indices, so there is exactly one record per logical process and only the
//! engine ever mutates it.
//!
//! Each [`Simulator::tick`] is one simulated time unit and performs, in
//! fixed order: admission, wake, dispatch, execution, clock advance.
//! Admission and wake run strictly before dispatch so a just-woken
//! higher-priority process is visible to the same tick's decisions; the
//! fixed order is what makes traces reproducible.

use tracing::debug;

use crate::config::Config;
use crate::memory::MemoryMap;
use crate::process::{ProcState, Process};
use crate::queue::{ReadyQueue, WaitQueue};
use crate::stats::SimStats;
use crate::trace::Trace;

/// Top-level simulation engine: process arena + memory + queues + clock.
#[derive(Debug)]
pub struct Simulator {
    procs: Vec<Process>,
    memory: MemoryMap,
    ready: ReadyQueue,
    waiting: WaitQueue,
    /// Arena index of the running process, if any. At most one per tick.
    running: Option<usize>,
    clock: u64,
    quantum: u64,
    /// Ticks the running process has held the CPU since its last dispatch.
    quantum_used: u64,
    trace: Trace,
    stats: SimStats,
}

impl Simulator {
    /// Creates an engine over a workload, with the clock at 0 and every
    /// process still un-admitted.
    pub fn new(workload: Vec<Process>, config: &Config) -> Self {
        Self {
            procs: workload,
            memory: MemoryMap::new(&config.memory.partition_sizes),
            ready: ReadyQueue::new(),
            waiting: WaitQueue::new(),
            running: None,
            clock: 0,
            quantum: config.scheduler.quantum,
            quantum_used: 0,
            trace: Trace::new(),
            stats: SimStats::default(),
        }
    }

    /// Current simulated time.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// The process arena, in workload order.
    pub fn processes(&self) -> &[Process] {
        &self.procs
    }

    /// The trace accumulated so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The run counters accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// True when every process has terminated (vacuously true for an empty
    /// workload).
    pub fn is_done(&self) -> bool {
        self.procs.iter().all(Process::is_terminated)
    }

    /// Runs the simulation to completion.
    ///
    /// A process whose memory requirement exceeds every partition is retried
    /// forever, so `run` never returns on such a workload; callers that need
    /// a bound should drive [`Simulator::tick`] themselves.
    pub fn run(&mut self) {
        while !self.is_done() {
            self.tick();
        }
    }

    /// Advances the simulation by exactly one tick.
    pub fn tick(&mut self) {
        self.admission_pass();
        self.wake_pass();
        self.dispatch_pass();
        self.execution_pass();
        self.clock += 1;
        self.stats.ticks += 1;
    }

    /// Admission: every arrived, un-admitted process attempts memory
    /// admission; successes become ready and a memory snapshot is emitted.
    fn admission_pass(&mut self) {
        for slot in 0..self.procs.len() {
            let proc = &self.procs[slot];
            if !proc.awaiting_admission() || proc.arrival_time > self.clock {
                continue;
            }
            let Some(partition) = self.memory.admit(proc.pid, proc.size) else {
                continue;
            };

            // A record admitted straight out of NOT ASSIGNED reports NEW as
            // its old state.
            let old = match proc.state {
                ProcState::NotAssigned => ProcState::New,
                other => other,
            };
            let pid = proc.pid;

            let proc = &mut self.procs[slot];
            proc.state = ProcState::Ready;
            proc.partition = Some(partition);
            self.ready.push(slot);
            self.stats.admissions += 1;
            debug!(%pid, partition, time = self.clock, "admitted");

            self.trace.transition(self.clock, pid, old, ProcState::Ready);
            let snapshot = self.memory.snapshot(self.clock, &self.procs);
            self.trace.memory(snapshot);
        }
    }

    /// Wake: every waiting process whose wake time has arrived becomes ready.
    fn wake_pass(&mut self) {
        for slot in self.waiting.drain_due(self.clock) {
            let proc = &mut self.procs[slot];
            let old = proc.state;
            let pid = proc.pid;
            proc.state = ProcState::Ready;
            self.ready.push(slot);
            self.stats.wakeups += 1;
            self.trace.transition(self.clock, pid, old, ProcState::Ready);
        }
    }

    /// Dispatch: with an idle CPU and a non-empty ready queue, the minimum
    /// of the queue under the dispatch order starts running with a fresh
    /// quantum.
    fn dispatch_pass(&mut self) {
        if self.running.is_some() {
            return;
        }
        let Some(slot) = self.ready.take_next(&self.procs) else {
            return;
        };

        let proc = &mut self.procs[slot];
        let pid = proc.pid;
        proc.state = ProcState::Running;
        self.running = Some(slot);
        self.quantum_used = 0;
        self.stats.dispatches += 1;
        debug!(%pid, time = self.clock, "dispatched");

        self.trace
            .transition(self.clock, pid, ProcState::Ready, ProcState::Running);
    }

    /// Execution: the running process consumes one tick of CPU, then exactly
    /// one outcome applies, in precedence order: termination, I/O trigger,
    /// preemption (priority or quantum), or it keeps running.
    ///
    /// The decrement consumes the tick, so outcome events carry
    /// `clock + 1`.
    fn execution_pass(&mut self) {
        let Some(slot) = self.running else {
            self.stats.idle_ticks += 1;
            return;
        };

        let event_time = self.clock + 1;
        self.quantum_used += 1;

        let (pid, remaining, io_due) = {
            let proc = &mut self.procs[slot];
            proc.remaining_time = proc.remaining_time.saturating_sub(1);
            proc.cpu_since_io += 1;
            let io_due = proc.io_freq > 0 && proc.cpu_since_io >= proc.io_freq;
            (proc.pid, proc.remaining_time, io_due)
        };

        if remaining == 0 {
            let freed = self.memory.release(pid);
            let proc = &mut self.procs[slot];
            debug_assert_eq!(freed, proc.partition);
            proc.state = ProcState::Terminated;
            proc.partition = None;
            proc.cpu_since_io = 0;
            self.running = None;
            self.stats.completions += 1;
            debug!(%pid, time = event_time, "terminated");

            self.trace
                .transition(event_time, pid, ProcState::Running, ProcState::Terminated);
        } else if io_due {
            let proc = &mut self.procs[slot];
            let wake_time = event_time + proc.io_duration;
            proc.state = ProcState::Waiting;
            proc.cpu_since_io = 0;
            self.waiting.push(slot, wake_time);
            self.running = None;
            self.stats.io_blocks += 1;
            debug!(%pid, wake_time, "blocked on io");

            self.trace
                .transition(event_time, pid, ProcState::Running, ProcState::Waiting);
        } else {
            // Priority is scanned before the quantum check; either condition
            // alone preempts.
            let outranked = self.ready.outranks(&self.procs, pid);
            if outranked || self.quantum_used >= self.quantum {
                let proc = &mut self.procs[slot];
                proc.state = ProcState::Ready;
                self.ready.push(slot);
                self.running = None;
                if outranked {
                    self.stats.priority_preemptions += 1;
                } else {
                    self.stats.quantum_preemptions += 1;
                }
                debug!(%pid, time = event_time, outranked, "preempted");

                self.trace
                    .transition(event_time, pid, ProcState::Running, ProcState::Ready);
            }
        }
    }
}
