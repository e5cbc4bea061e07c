//! Single-CPU scheduling discipline simulator.
//!
//! Models four classical CPU-scheduling disciplines over a fixed set of
//! processes and computes per-process timing metrics (response, waiting,
//! turnaround, completion) plus an execution trace for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `Discipline`,
//!   `ProcessMetrics`, `SimulationReport`, `Trace`
//! - **`dispatching`**: Ordering keys and key chains (FCFS, LCFS, Priority)
//! - **`scheduler`**: Non-preemptive and round-robin schedulers, batch
//!   runner, run KPIs
//! - **`validation`**: Input integrity checks (empty set, pids, negative times)
//! - **`workload`**: Reproducible random process sets
//!
//! # Architecture
//!
//! The engine is offline, deterministic and single-threaded over integer
//! ticks. It returns data only; printing tables or drawing Gantt charts is
//! left to consumers of `SimulationReport`.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
