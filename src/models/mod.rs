//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every discipline: the process record,
//! the discipline selector, per-process metrics and the execution trace.
//!
//! # Lifecycle
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Static input (pid, arrival, burst, priority) |
//! | `Process` | Runtime record, reset before every run |
//! | `ProcessMetrics` | Finished-run snapshot per pid |
//! | `Trace` | Ordered `(pid, start, end)` intervals |

mod discipline;
mod metrics;
mod process;
mod trace;

pub use discipline::{Discipline, Quantum};
pub use metrics::{ProcessMetrics, SimulationReport};
pub use process::{Pid, Process, ProcessSpec, Tick};
pub use trace::{ExecutionInterval, IdleGap, Trace};
