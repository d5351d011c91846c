//! End-to-end scenario traces.
//!
//! Each scenario pins the exact transition timeline of a small workload
//! under the default policy (quantum 100, partitions 40/25/15/10/8/2 Mb).

use schedsim_core::config::Config;
use schedsim_core::process::ProcState::{New, NotAssigned, Ready, Running, Terminated, Waiting};
use schedsim_core::sim::simulator::Simulator;

use crate::common::{proc, run_bounded, time_of, transitions_of};

/// Two equal-length processes arriving together: the lower pid runs to
/// completion before the higher pid ever starts.
#[test]
fn lower_pid_runs_to_completion_first() {
    let workload = vec![proc(1, 30, 0, 50, 0, 0), proc(2, 25, 0, 50, 0, 0)];
    let mut sim = Simulator::new(workload, &Config::default());
    assert!(run_bounded(&mut sim, 200));

    assert_eq!(
        transitions_of(&sim, 1),
        vec![(0, New, Ready), (0, Ready, Running), (50, Running, Terminated)]
    );
    assert_eq!(
        transitions_of(&sim, 2),
        vec![(0, New, Ready), (50, Ready, Running), (100, Running, Terminated)]
    );
}

/// A single long process is quantum-preempted at ticks 100 and 200 and
/// terminates at 250.
#[test]
fn quantum_expiry_preempts_every_hundred_ticks() {
    let mut sim = Simulator::new(vec![proc(1, 30, 0, 250, 0, 0)], &Config::default());
    assert!(run_bounded(&mut sim, 400));

    assert_eq!(
        transitions_of(&sim, 1),
        vec![
            (0, New, Ready),
            (0, Ready, Running),
            (100, Running, Ready),
            (100, Ready, Running),
            (200, Running, Ready),
            (200, Ready, Running),
            (250, Running, Terminated),
        ]
    );
    assert_eq!(sim.stats().quantum_preemptions, 2);
    assert_eq!(sim.stats().dispatches, 3);
    assert_eq!(sim.stats().completions, 1);
    assert_eq!(sim.clock(), 250);
}

/// An I/O-bound process alternates 10 ticks of CPU with 5 ticks of waiting
/// until its CPU time is exhausted.
#[test]
fn io_bursts_alternate_running_and_waiting() {
    let mut sim = Simulator::new(vec![proc(1, 10, 0, 30, 10, 5)], &Config::default());
    assert!(run_bounded(&mut sim, 100));

    assert_eq!(
        transitions_of(&sim, 1),
        vec![
            (0, New, Ready),
            (0, Ready, Running),
            (10, Running, Waiting),
            (15, Waiting, Ready),
            (15, Ready, Running),
            (25, Running, Waiting),
            (30, Waiting, Ready),
            (30, Ready, Running),
            (40, Running, Terminated),
        ]
    );
    assert_eq!(sim.stats().io_blocks, 2);
    assert_eq!(sim.stats().wakeups, 2);
}

/// A process larger than every partition is retried forever and never
/// leaves the not-assigned state; the run cannot finish.
#[test]
fn oversized_process_is_never_admitted() {
    let mut sim = Simulator::new(vec![proc(1, 99, 0, 10, 0, 0)], &Config::default());
    assert!(!run_bounded(&mut sim, 500));

    assert_eq!(sim.processes()[0].state, NotAssigned);
    assert_eq!(sim.trace().transitions().count(), 0);
    assert_eq!(sim.stats().idle_ticks, 500);
}

/// Other processes still terminate around an infeasible one, but the run
/// as a whole never completes.
#[test]
fn infeasible_process_does_not_block_the_rest() {
    let workload = vec![proc(1, 99, 0, 10, 0, 0), proc(2, 10, 0, 20, 0, 0)];
    let mut sim = Simulator::new(workload, &Config::default());
    assert!(!run_bounded(&mut sim, 500));

    assert_eq!(sim.processes()[0].state, NotAssigned);
    assert_eq!(sim.processes()[1].state, Terminated);
    assert_eq!(time_of(&sim, 2, Running, Terminated), Some(20));
}

/// A late-arriving process waits for a partition to free up, then is
/// admitted on the tick of the release.
#[test]
fn admission_is_retried_until_memory_frees() {
    // Single-partition map: pid 2 must wait for pid 1 to terminate.
    let config = crate::common::config(100, &[40]);
    let workload = vec![proc(1, 30, 0, 20, 0, 0), proc(2, 30, 0, 10, 0, 0)];
    let mut sim = Simulator::new(workload, &config);
    assert!(run_bounded(&mut sim, 100));

    // Pid 1 frees the partition at tick 20; pid 2 is admitted on the next
    // tick's admission pass.
    assert_eq!(time_of(&sim, 1, Running, Terminated), Some(20));
    assert_eq!(time_of(&sim, 2, New, Ready), Some(20));
    assert_eq!(time_of(&sim, 2, Running, Terminated), Some(30));
}

/// An empty workload is vacuously done before the first tick.
#[test]
fn empty_workload_finishes_immediately() {
    let mut sim = Simulator::new(vec![], &Config::default());
    assert!(sim.is_done());
    sim.run();
    assert_eq!(sim.clock(), 0);
    assert_eq!(sim.trace().records().len(), 0);
}
