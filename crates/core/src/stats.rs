//! Run statistics collection and reporting.
//!
//! This module tracks counters for one simulation run. It provides:
//! 1. **Clock:** Total ticks and CPU-idle ticks.
//! 2. **Scheduling:** Dispatches, priority preemptions, quantum preemptions.
//! 3. **Lifecycle:** Admissions, I/O blocks, wake-ups, and completions.

use std::time::Instant;

/// Counters for one simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated ticks elapsed.
    pub ticks: u64,
    /// Ticks during which no process held the CPU.
    pub idle_ticks: u64,
    /// Successful memory admissions.
    pub admissions: u64,
    /// Ready-to-running dispatch decisions.
    pub dispatches: u64,
    /// Preemptions caused by a higher-priority ready process.
    pub priority_preemptions: u64,
    /// Preemptions caused by quantum expiry.
    pub quantum_preemptions: u64,
    /// Running-to-waiting transitions (I/O bursts).
    pub io_blocks: u64,
    /// Waiting-to-ready transitions (I/O completions).
    pub wakeups: u64,
    /// Processes that reached the terminated state.
    pub completions: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            idle_ticks: 0,
            admissions: 0,
            dispatches: 0,
            priority_preemptions: 0,
            quantum_preemptions: 0,
            io_blocks: 0,
            wakeups: 0,
            completions: 0,
        }
    }
}

impl SimStats {
    /// Prints the run statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ticks = if self.ticks == 0 { 1 } else { self.ticks };
        let busy = self.ticks - self.idle_ticks;
        let utilization = (busy as f64 / ticks as f64) * 100.0;

        println!("\n==========================================================");
        println!("EP + RR SCHEDULING SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_ticks                {}", self.ticks);
        println!("cpu_busy_ticks           {busy} ({utilization:.2}%)");
        println!("cpu_idle_ticks           {}", self.idle_ticks);
        println!("----------------------------------------------------------");
        println!("sched.admissions         {}", self.admissions);
        println!("sched.dispatches         {}", self.dispatches);
        println!(
            "sched.preempt.priority   {}",
            self.priority_preemptions
        );
        println!(
            "sched.preempt.quantum    {}",
            self.quantum_preemptions
        );
        println!("sched.io_blocks          {}", self.io_blocks);
        println!("sched.wakeups            {}", self.wakeups);
        println!("sched.completions        {}", self.completions);
        println!("==========================================================");
    }
}
