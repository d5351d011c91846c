//! Fixed-partition memory allocator.
//!
//! This module owns the partition table exclusively; no other component
//! touches partition records directly. It provides:
//! 1. **Admission:** Best-fit placement into the smallest sufficient free partition.
//! 2. **Release:** Freeing a process's partition exactly once, at termination.
//! 3. **Status:** A pure snapshot query used by the engine as a reporting side-channel.

use crate::common::id::Pid;
use crate::process::Process;

/// One fixed-size memory partition.
///
/// Partitions are a static set configured for the whole run; they are only
/// ever occupied or freed.
#[derive(Clone, Debug)]
struct Partition {
    /// Partition size in megabytes.
    size: u64,
    /// Owning process, or `None` when free.
    occupied: Option<Pid>,
}

/// The fixed-partition memory map.
///
/// Single-writer by construction: only the engine's admission and
/// termination steps call [`MemoryMap::admit`] and [`MemoryMap::release`].
#[derive(Clone, Debug)]
pub struct MemoryMap {
    partitions: Vec<Partition>,
}

impl MemoryMap {
    /// Creates a memory map with one free partition per configured size,
    /// numbered in table order.
    pub fn new(sizes: &[u64]) -> Self {
        let partitions = sizes
            .iter()
            .map(|&size| Partition {
                size,
                occupied: None,
            })
            .collect();
        Self { partitions }
    }

    /// Attempts to admit a process of `size` megabytes, best-fit.
    ///
    /// Scans for the smallest free partition with `partition.size >= size`;
    /// equal-size candidates resolve to the lowest partition index for
    /// determinism. On success the partition is marked occupied by `pid` and
    /// its index returned. On failure the table is untouched and the caller
    /// retries on a later tick.
    pub fn admit(&mut self, pid: Pid, size: u64) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, part) in self.partitions.iter().enumerate() {
            if part.occupied.is_some() || part.size < size {
                continue;
            }
            // Strict < keeps the lowest index among equal-size partitions.
            if best.is_none_or(|b| part.size < self.partitions[b].size) {
                best = Some(idx);
            }
        }
        let idx = best?;
        self.partitions[idx].occupied = Some(pid);
        Some(idx)
    }

    /// Frees the partition occupied by `pid`, returning its index.
    ///
    /// Called exactly once per process, at termination. Returns `None` if no
    /// partition is held by `pid`.
    pub fn release(&mut self, pid: Pid) -> Option<usize> {
        let idx = self
            .partitions
            .iter()
            .position(|part| part.occupied == Some(pid))?;
        self.partitions[idx].occupied = None;
        Some(idx)
    }

    /// Total memory across all partitions, in megabytes.
    pub fn total(&self) -> u64 {
        self.partitions.iter().map(|p| p.size).sum()
    }

    /// Takes a point-in-time status snapshot of the partition table.
    ///
    /// Pure query, no mutation. `procs` supplies the memory footprint of
    /// occupying processes so the snapshot can report actual usage rather
    /// than partition capacity.
    pub fn snapshot(&self, time: u64, procs: &[Process]) -> MemorySnapshot {
        let mut partitions = Vec::with_capacity(self.partitions.len());
        let mut used = 0;
        let mut free_in_partitions = 0;

        for (idx, part) in self.partitions.iter().enumerate() {
            let occupant = part.occupied.map(|pid| {
                let size = procs
                    .iter()
                    .find(|p| p.pid == pid)
                    .map_or(0, |p| p.size);
                used += size;
                (pid, size)
            });
            if occupant.is_none() {
                free_in_partitions += part.size;
            }
            partitions.push(PartitionStatus {
                number: idx + 1,
                size: part.size,
                occupant,
            });
        }

        MemorySnapshot {
            time,
            partitions,
            used,
            free: self.total().saturating_sub(used),
            free_in_partitions,
        }
    }
}

/// Status of one partition within a [`MemorySnapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionStatus {
    /// 1-based partition number, in table order.
    pub number: usize,
    /// Partition size in megabytes.
    pub size: u64,
    /// Occupying pid and its memory usage, or `None` when free.
    pub occupant: Option<(Pid, u64)>,
}

/// A point-in-time report of partition occupancy and aggregate usage.
///
/// Emitted by the engine on every successful admission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Tick the snapshot was taken at.
    pub time: u64,
    /// Per-partition occupancy, in table order.
    pub partitions: Vec<PartitionStatus>,
    /// Total megabytes used by occupying processes.
    pub used: u64,
    /// Total partition memory minus used memory.
    pub free: u64,
    /// Sum of the sizes of entirely free partitions.
    pub free_in_partitions: u64,
}
