//! Scheduling simulator CLI.
//!
//! Loads a workload file, runs the External Priority + Round Robin
//! simulation to completion, and writes the execution trace to disk.
//! Exits non-zero on bad arguments, unreadable files, or a malformed
//! workload; a simulation that starts always runs to completion.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;

use schedsim_core::config::Config;
use schedsim_core::sim::loader;
use schedsim_core::sim::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "schedsim",
    author,
    version,
    about = "External Priority + Round Robin scheduling simulator",
    long_about = "Simulates a closed set of processes under priority preemption and \
round-robin time slicing (quantum 100), over a fixed-partition memory map.\n\n\
Workload lines: pid, memory_size, arrival_time, total_cpu_time, io_freq, io_duration\n\n\
Examples:\n  schedsim workloads/basic.txt\n  schedsim workloads/basic.txt -o trace.txt --stats"
)]
struct Cli {
    /// Workload file: one process description per line.
    input: PathBuf,

    /// JSON config overriding quantum, partition table, or trace path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace output path (overrides the config's trace path).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print run statistics after the simulation.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("[!] {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };

    let workload = loader::load_workload(&cli.input).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(1);
    });

    println!(
        "[*] Simulating {} process(es), quantum {} ticks, {} partition(s)",
        workload.len(),
        config.scheduler.quantum,
        config.memory.partition_sizes.len()
    );

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.trace_path));

    let mut sim = Simulator::new(workload, &config);
    sim.run();

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("[!] cannot create {}: {e}", dir.display());
                process::exit(1);
            }
        }
    }
    if let Err(e) = fs::write(&output, sim.trace().render()) {
        eprintln!("[!] cannot write {}: {e}", output.display());
        process::exit(1);
    }

    println!(
        "[*] Done in {} ticks; trace written to {}",
        sim.clock(),
        output.display()
    );
    if cli.stats {
        sim.stats().print();
    }
}
