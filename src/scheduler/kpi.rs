//! Run quality metrics (KPIs).
//!
//! Summarizes a simulation report so disciplines can be compared side by
//! side over the same process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Response | Mean delay from arrival to first dispatch |
//! | Avg Waiting | Mean time ready but not running |
//! | Avg Turnaround | Mean time from arrival to completion |
//! | Makespan | Latest completion |
//! | Utilization | Busy ticks / (makespan - earliest arrival) |
//! | Throughput | Processes finished per tick over the same horizon |

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, ProcessMetrics, SimulationReport, Tick};

/// Summary indicators of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Discipline the summary describes.
    pub discipline: Discipline,
    /// Number of finished processes.
    pub process_count: usize,
    pub avg_response: f64,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    /// Longest single wait.
    pub max_waiting: Tick,
    /// Latest completion.
    pub makespan: Tick,
    /// Ticks the CPU was busy.
    pub busy_time: Tick,
    /// Ticks the CPU was idle between the earliest arrival and the makespan.
    pub idle_time: Tick,
    /// Busy fraction of the horizon (0.0..=1.0).
    pub utilization: f64,
    /// Processes finished per tick of horizon.
    pub throughput: f64,
    /// Number of times the CPU changed hands.
    pub context_switches: usize,
}

impl RunSummary {
    /// Computes the summary of a report.
    pub fn calculate(report: &SimulationReport) -> Self {
        let n = report.metrics.len();
        let mean = |f: fn(&ProcessMetrics) -> Tick| -> f64 {
            if n == 0 {
                0.0
            } else {
                report.metrics.iter().map(|m| f(m) as f64).sum::<f64>() / n as f64
            }
        };

        let makespan = report.makespan();
        let earliest_arrival = report.metrics.iter().map(|m| m.arrival).min().unwrap_or(0);
        let horizon = makespan.saturating_sub(earliest_arrival);
        let busy_time = report.trace.busy_time();

        let (utilization, throughput) = if horizon > 0 {
            (busy_time as f64 / horizon as f64, n as f64 / horizon as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            discipline: report.discipline,
            process_count: n,
            avg_response: mean(|m| m.response),
            avg_waiting: mean(|m| m.waiting),
            avg_turnaround: mean(|m| m.turnaround),
            max_waiting: report.metrics.iter().map(|m| m.waiting).max().unwrap_or(0),
            makespan,
            busy_time,
            idle_time: horizon.saturating_sub(busy_time).max(0),
            utilization,
            throughput,
            context_switches: report.trace.context_switches(),
        }
    }

    /// Summarizes several reports and ranks them by average waiting time
    /// (ties keep input order).
    pub fn compare(reports: &[SimulationReport]) -> Vec<Self> {
        let mut summaries: Vec<Self> = reports.iter().map(Self::calculate).collect();
        summaries.sort_by(|a, b| a.avg_waiting.total_cmp(&b.avg_waiting));
        summaries
    }
}
