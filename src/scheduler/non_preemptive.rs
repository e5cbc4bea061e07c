//! Non-preemptive run-to-completion scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by the discipline's key chain (FCFS, LCFS, Priority).
//! 2. Walk them in that order with a clock starting at 0.
//! 3. If the clock is behind a process's arrival, the CPU idles until it.
//! 4. The process runs its whole burst; `response = start - arrival`.
//!
//! Because a process never yields once started, `completion = start + burst`
//! and therefore `waiting == response` for every process.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::{debug, trace};

use super::RunLog;
use crate::dispatching::KeyChain;
use crate::models::{Discipline, Process, Tick};

/// Run-to-completion scheduler driven by a dispatch ordering.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::KeyChain;
/// use u_cpusched::models::{Discipline, Process, ProcessSpec};
/// use u_cpusched::scheduler::NonPreemptiveScheduler;
///
/// let mut processes: Vec<Process> = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, 0)])
///     .into_iter()
///     .map(Process::new)
///     .collect();
///
/// let scheduler = NonPreemptiveScheduler::new(KeyChain::for_discipline(&Discipline::Fcfs));
/// let log = scheduler.schedule(&mut processes);
/// assert_eq!(processes[1].completion, Some(8));
/// assert_eq!(log.trace.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    ordering: KeyChain,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler dispatching in `ordering`.
    pub fn new(ordering: KeyChain) -> Self {
        Self { ordering }
    }

    /// Scheduler for a non-preemptive discipline.
    ///
    /// Returns `None` for preemptive disciplines.
    pub fn for_discipline(discipline: &Discipline) -> Option<Self> {
        match discipline {
            Discipline::Fcfs | Discipline::Lcfs | Discipline::Priority => {
                Some(Self::new(KeyChain::for_discipline(discipline)))
            }
            Discipline::RoundRobin { .. } => None,
        }
    }

    /// Runs every process to completion in dispatch order.
    ///
    /// Runtime fields are not reset here; callers reusing records must
    /// reset them first.
    pub fn schedule(&self, processes: &mut [Process]) -> RunLog {
        let order = self.ordering.sort_indices(&*processes);
        self.schedule_in_order(processes, &order)
    }

    /// Runs processes in an explicit order of indices into `processes`.
    pub fn schedule_in_order(&self, processes: &mut [Process], order: &[usize]) -> RunLog {
        let mut log = RunLog::default();
        let mut current_time: Tick = 0;

        for &idx in order {
            let process = &mut processes[idx];

            if current_time < process.arrival() {
                trace!(
                    "cpu idle {}..{} until P{} arrives",
                    current_time,
                    process.arrival(),
                    process.pid()
                );
                current_time = process.arrival();
            }

            let start = current_time;
            process.mark_dispatched(start);
            let run = process.consume(process.remaining_burst);
            current_time = start.saturating_add(run);
            process.finish(current_time);

            trace!("P{} runs {}..{}", process.pid(), start, current_time);
            log.dispatch_order.push(process.pid());
            log.trace.record(process.pid(), start, current_time);
        }

        debug!(
            "non-preemptive run finished: {} processes, makespan {}",
            order.len(),
            current_time
        );
        log
    }
}
