//! Single-CPU schedulers and run metrics.
//!
//! Provides the non-preemptive run-to-completion scheduler (FCFS, LCFS,
//! Priority), the preemptive round-robin scheduler, a reusable process set,
//! a batch runner and run KPIs.
//!
//! # Entry Points
//!
//! - [`simulate`]: pure function, never mutates its input.
//! - [`ProcessSet::run`]: resets and re-runs one set of records.
//! - [`Simulator::run_request`]: validates input and runs several selections.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod non_preemptive;
mod process_set;
mod round_robin;
mod runner;
mod selection;

pub use kpi::RunSummary;
pub use non_preemptive::NonPreemptiveScheduler;
pub use process_set::ProcessSet;
pub use round_robin::RoundRobinScheduler;
pub use runner::{BatchReport, SimulationRequest, Simulator};
pub use selection::{
    parse_selection, resolve_selections, split_selections, DisciplineId, SelectionError,
    SelectionErrorKind,
};

use crate::models::{Discipline, Pid, ProcessSpec, SimulationReport, Trace};

/// Raw output of one scheduler run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
    /// Execution trace in time order.
    pub trace: Trace,
    /// Pids in order of first dispatch.
    pub dispatch_order: Vec<Pid>,
}

/// Simulates `discipline` over `specs` without touching them.
///
/// # Example
/// ```
/// use u_cpusched::models::{Discipline, ProcessSpec};
/// use u_cpusched::scheduler::simulate;
///
/// let specs = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, 0), (2, 1, 0)]);
/// let report = simulate(&specs, Discipline::round_robin(2).unwrap());
///
/// let p1 = report.metrics_for(1).unwrap();
/// assert_eq!((p1.response, p1.completion, p1.waiting), (0, 8, 3));
/// ```
pub fn simulate(specs: &[ProcessSpec], discipline: Discipline) -> SimulationReport {
    ProcessSet::new(specs.iter().copied()).run(discipline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tick;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_disciplines(quantum: Tick) -> Vec<Discipline> {
        vec![
            Discipline::Fcfs,
            Discipline::Lcfs,
            Discipline::Priority,
            Discipline::round_robin(quantum).unwrap(),
        ]
    }

    fn workloads() -> Vec<Vec<ProcessSpec>> {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = WorkloadGenerator::new(12)
            .with_arrival_range(0, 30)
            .with_burst_range(1, 9)
            .with_priority_range(0, 4);
        (0..25).map(|_| generator.generate(&mut rng)).collect()
    }

    #[test]
    fn test_simulate_does_not_mutate_input() {
        let specs = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, 0)]);
        let before = specs.clone();
        simulate(&specs, Discipline::round_robin(1).unwrap());
        assert_eq!(specs, before);
    }

    #[test]
    fn test_derived_metrics_hold_for_every_discipline() {
        for specs in workloads() {
            for discipline in all_disciplines(3) {
                let report = simulate(&specs, discipline);
                assert_eq!(report.process_count(), specs.len());
                for m in &report.metrics {
                    assert_eq!(m.turnaround, m.completion - m.arrival);
                    assert_eq!(m.waiting, m.turnaround - m.burst);
                    assert!(m.response >= 0);
                }
            }
        }
    }

    #[test]
    fn test_non_preemptive_response_equals_waiting() {
        for specs in workloads() {
            for discipline in [Discipline::Fcfs, Discipline::Lcfs, Discipline::Priority] {
                let report = simulate(&specs, discipline);
                for m in &report.metrics {
                    assert_eq!(m.response, m.waiting, "{discipline} P{}", m.pid);
                }
            }
        }
    }

    #[test]
    fn test_round_robin_waiting_vs_response() {
        let quantum = 3;
        for specs in workloads() {
            let report = simulate(&specs, Discipline::round_robin(quantum).unwrap());
            for m in &report.metrics {
                if m.burst > quantum {
                    assert!(m.waiting >= m.response, "P{}", m.pid);
                } else {
                    assert_eq!(m.waiting, m.response, "P{}", m.pid);
                }
            }
        }
    }

    #[test]
    fn test_traces_well_formed_and_cover_bursts() {
        for specs in workloads() {
            let total: Tick = specs.iter().map(|s| s.burst).sum();
            for discipline in all_disciplines(2) {
                let report = simulate(&specs, discipline);
                assert!(report.trace.is_well_formed(), "{discipline}");
                assert_eq!(report.trace.busy_time(), total, "{discipline}");
                assert_eq!(report.trace.makespan(), report.makespan());
            }
        }
    }

    #[test]
    fn test_round_robin_trace_has_no_idle_while_work_is_ready() {
        // Round-robin never idles while an arrived process is unfinished, so
        // every idle gap ends exactly at some process's arrival.
        for specs in workloads() {
            let report = simulate(&specs, Discipline::round_robin(2).unwrap());
            for gap in report.trace.idle_gaps() {
                assert!(specs.iter().any(|s| s.arrival == gap.end));
            }
        }
    }

    #[test]
    fn test_non_preemptive_trace_matches_replay() {
        for specs in workloads() {
            for discipline in [Discipline::Fcfs, Discipline::Lcfs, Discipline::Priority] {
                let report = simulate(&specs, discipline);
                let order: Vec<ProcessSpec> = report
                    .dispatch_order
                    .iter()
                    .filter_map(|&pid| specs.iter().find(|s| s.pid == pid).copied())
                    .collect();
                assert_eq!(Trace::replay_non_preemptive(&order), report.trace);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for specs in workloads().into_iter().take(5) {
            for discipline in all_disciplines(4) {
                assert_eq!(simulate(&specs, discipline), simulate(&specs, discipline));
            }
        }
    }

    #[test]
    fn test_fcfs_ties_keep_pid_order() {
        let specs = ProcessSpec::sequence(&[(2, 1, 0), (2, 1, 0), (2, 1, 0), (0, 1, 0)]);
        let report = simulate(&specs, Discipline::Fcfs);
        assert_eq!(report.dispatch_order, vec![4, 1, 2, 3]);
    }
}
