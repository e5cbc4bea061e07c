//! Per-process metrics and run reports.

use serde::{Deserialize, Serialize};

use super::{Discipline, Pid, Process, Tick, Trace};

/// Timing metrics of one process after a run.
///
/// `turnaround = completion - arrival` and `waiting = turnaround - burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: i32,
    /// Delay between arrival and first dispatch.
    pub response: Tick,
    /// Tick at which the process finished.
    pub completion: Tick,
    /// Time from arrival to completion.
    pub turnaround: Tick,
    /// Time spent ready but not running.
    pub waiting: Tick,
}

/// Outcome of simulating one discipline over a process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Discipline that produced this report.
    pub discipline: Discipline,
    /// Metrics keyed by pid, sorted by pid (not execution order).
    pub metrics: Vec<ProcessMetrics>,
    /// Execution trace in time order.
    pub trace: Trace,
    /// Pids in order of first dispatch.
    pub dispatch_order: Vec<Pid>,
}

impl SimulationReport {
    /// Builds a report from finished runtime records.
    ///
    /// Processes that did not finish are left out of `metrics`.
    pub fn from_processes(
        discipline: Discipline,
        processes: &[Process],
        trace: Trace,
        dispatch_order: Vec<Pid>,
    ) -> Self {
        let mut metrics: Vec<ProcessMetrics> =
            processes.iter().filter_map(Process::metrics).collect();
        metrics.sort_by_key(|m| m.pid);
        Self {
            discipline,
            metrics,
            trace,
            dispatch_order,
        }
    }

    /// Metrics for a given pid.
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.metrics
            .binary_search_by_key(&pid, |m| m.pid)
            .ok()
            .map(|i| &self.metrics[i])
    }

    /// Number of processes with metrics.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }

    /// Latest completion (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.metrics.iter().map(|m| m.completion).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn finished(pid: Pid, arrival: Tick, burst: Tick, start: Tick) -> Process {
        let mut p = Process::new(ProcessSpec::new(pid, arrival, burst));
        p.mark_dispatched(start);
        p.consume(burst);
        p.finish(start + burst);
        p
    }

    #[test]
    fn test_report_sorted_by_pid() {
        let processes = vec![finished(3, 0, 1, 0), finished(1, 0, 2, 1), finished(2, 0, 1, 3)];
        let report =
            SimulationReport::from_processes(Discipline::Lcfs, &processes, Trace::new(), vec![3, 1, 2]);

        let pids: Vec<Pid> = report.metrics.iter().map(|m| m.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(report.dispatch_order, vec![3, 1, 2]);
        assert_eq!(report.makespan(), 4);
    }

    #[test]
    fn test_metrics_for() {
        let processes = vec![finished(1, 0, 2, 0), finished(2, 1, 3, 2)];
        let report =
            SimulationReport::from_processes(Discipline::Fcfs, &processes, Trace::new(), vec![1, 2]);

        let m = report.metrics_for(2).unwrap();
        assert_eq!(m.response, 1);
        assert_eq!(m.completion, 5);
        assert_eq!(m.turnaround, 4);
        assert_eq!(m.waiting, 1);
        assert!(report.metrics_for(7).is_none());
    }

    #[test]
    fn test_unfinished_processes_excluded() {
        let processes = vec![finished(1, 0, 2, 0), Process::new(ProcessSpec::new(2, 0, 4))];
        let report =
            SimulationReport::from_processes(Discipline::Fcfs, &processes, Trace::new(), vec![1]);
        assert_eq!(report.process_count(), 1);
    }
}
