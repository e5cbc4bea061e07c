//! Reusable process set.
//!
//! Holds the runtime records of one workload so several disciplines can be
//! run over the same processes and compared side by side. Every run starts
//! by resetting all records.

use log::debug;

use super::{NonPreemptiveScheduler, RoundRobinScheduler, RunLog};
use crate::dispatching::KeyChain;
use crate::models::{Discipline, Pid, Process, ProcessSpec, SimulationReport, Tick};

/// A set of processes that outlives individual simulation runs.
#[derive(Debug, Clone, Default)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates a set from process specs, in input order.
    pub fn new(specs: impl IntoIterator<Item = ProcessSpec>) -> Self {
        Self {
            processes: specs.into_iter().map(Process::new).collect(),
        }
    }

    /// Creates a set from `(arrival, burst, priority)` triples with
    /// sequential pids.
    pub fn from_entries(entries: &[(Tick, Tick, i32)]) -> Self {
        Self::new(ProcessSpec::sequence(entries))
    }

    /// Runtime records, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Static specs, in input order.
    pub fn specs(&self) -> Vec<ProcessSpec> {
        self.processes.iter().map(|p| p.spec).collect()
    }

    /// Runtime record for a pid.
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid() == pid)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Restores every record to its pristine state.
    pub fn reset_all(&mut self) {
        self.processes.iter_mut().for_each(Process::reset);
    }

    /// Resets the set and simulates `discipline` over it.
    ///
    /// Records keep the run's results until the next call.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::Discipline;
    /// use u_cpusched::scheduler::ProcessSet;
    ///
    /// let mut set = ProcessSet::from_entries(&[(0, 5, 0), (1, 3, 0), (2, 1, 0)]);
    /// let fcfs = set.run(Discipline::Fcfs);
    /// let rr = set.run(Discipline::round_robin(2).unwrap());
    ///
    /// assert_eq!(fcfs.metrics_for(3).unwrap().waiting, 6);
    /// assert_eq!(rr.metrics_for(3).unwrap().waiting, 4);
    /// ```
    pub fn run(&mut self, discipline: Discipline) -> SimulationReport {
        self.reset_all();
        debug!(
            "simulating {} over {} processes",
            discipline,
            self.processes.len()
        );

        let RunLog {
            trace,
            dispatch_order,
        } = match discipline {
            Discipline::Fcfs | Discipline::Lcfs | Discipline::Priority => {
                NonPreemptiveScheduler::new(KeyChain::for_discipline(&discipline))
                    .schedule(&mut self.processes)
            }
            Discipline::RoundRobin { quantum } => {
                RoundRobinScheduler::new(quantum).schedule(&mut self.processes)
            }
        };

        SimulationReport::from_processes(discipline, &self.processes, trace, dispatch_order)
    }
}

impl FromIterator<ProcessSpec> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = ProcessSpec>>(iter: I) -> Self {
        Self::new(iter)
    }
}
