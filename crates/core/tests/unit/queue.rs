//! Dispatch comparator and queue behavior tests.

use std::cmp::Ordering;

use schedsim_core::common::id::Pid;
use schedsim_core::queue::{dispatch_order, ReadyQueue, WaitQueue};

use crate::common::proc;

#[test]
fn lower_pid_dispatches_first() {
    let a = proc(1, 10, 5, 50, 0, 0);
    let b = proc(2, 10, 0, 50, 0, 0);
    assert_eq!(dispatch_order(&a, &b), Ordering::Less);
    assert_eq!(dispatch_order(&b, &a), Ordering::Greater);
}

/// Among equal pids the *later* arrival wins; this is the documented rule,
/// not the usual earliest-arrival convention.
#[test]
fn equal_pids_break_ties_by_latest_arrival() {
    let early = proc(1, 10, 0, 50, 0, 0);
    let late = proc(1, 10, 30, 50, 0, 0);
    assert_eq!(dispatch_order(&late, &early), Ordering::Less);
    assert_eq!(dispatch_order(&early, &late), Ordering::Greater);
}

#[test]
fn identical_pid_and_arrival_compare_equal() {
    let a = proc(1, 10, 0, 50, 0, 0);
    let b = proc(1, 20, 0, 99, 0, 0);
    assert_eq!(dispatch_order(&a, &b), Ordering::Equal);
}

#[test]
fn take_next_selects_the_minimum_not_the_head() {
    let procs = vec![
        proc(5, 10, 0, 50, 0, 0),
        proc(2, 10, 0, 50, 0, 0),
        proc(9, 10, 0, 50, 0, 0),
    ];
    let mut ready = ReadyQueue::new();
    ready.push(0);
    ready.push(1);
    ready.push(2);

    assert_eq!(ready.take_next(&procs), Some(1)); // pid 2
    assert_eq!(ready.take_next(&procs), Some(0)); // pid 5
    assert_eq!(ready.take_next(&procs), Some(2)); // pid 9
    assert_eq!(ready.take_next(&procs), None);
    assert!(ready.is_empty());
}

/// On a full tie (same pid, same arrival) the earliest-queued handle wins,
/// keeping dispatch deterministic even for degenerate input.
#[test]
fn take_next_is_stable_on_full_ties() {
    let procs = vec![proc(1, 10, 0, 50, 0, 0), proc(1, 10, 0, 50, 0, 0)];
    let mut ready = ReadyQueue::new();
    ready.push(0);
    ready.push(1);
    assert_eq!(ready.take_next(&procs), Some(0));
    assert_eq!(ready.take_next(&procs), Some(1));
}

#[test]
fn outranks_detects_a_strictly_higher_priority_entry() {
    let procs = vec![proc(3, 10, 0, 50, 0, 0), proc(7, 10, 0, 50, 0, 0)];
    let mut ready = ReadyQueue::new();
    ready.push(0);
    ready.push(1);

    assert!(ready.outranks(&procs, Pid::new(5))); // pid 3 beats 5
    assert!(!ready.outranks(&procs, Pid::new(3))); // equal pid is not strict
    assert!(!ready.outranks(&procs, Pid::new(1)));
}

#[test]
fn ready_queue_len_tracks_pushes() {
    let mut ready = ReadyQueue::new();
    assert!(ready.is_empty());
    ready.push(0);
    ready.push(1);
    assert_eq!(ready.len(), 2);
}

#[test]
fn wait_queue_releases_at_or_after_wake_time() {
    let mut waiting = WaitQueue::new();
    waiting.push(0, 10);

    assert_eq!(waiting.drain_due(9), Vec::<usize>::new());
    assert_eq!(waiting.drain_due(10), vec![0]);
    assert!(waiting.is_empty());
}

#[test]
fn wait_queue_drains_due_entries_in_insertion_order() {
    let mut waiting = WaitQueue::new();
    waiting.push(2, 5);
    waiting.push(0, 3);
    waiting.push(1, 5);
    waiting.push(3, 8);

    assert_eq!(waiting.drain_due(5), vec![2, 0, 1]);
    assert!(!waiting.is_empty());
    assert_eq!(waiting.drain_due(8), vec![3]);
}

/// A clock that jumped past the wake time still releases the entry.
#[test]
fn wait_queue_handles_overdue_entries() {
    let mut waiting = WaitQueue::new();
    waiting.push(0, 4);
    assert_eq!(waiting.drain_due(100), vec![0]);
}
