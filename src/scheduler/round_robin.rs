//! Preemptive round-robin scheduler.
//!
//! # Algorithm
//!
//! Processes wait in `pending` (sorted by arrival, stable) until the clock
//! reaches their arrival, then join the back of the FIFO `ready` queue.
//! Each iteration:
//!
//! 1. Admit every pending process with `arrival <= clock`.
//! 2. If nothing is ready, the CPU idles until the next arrival.
//! 3. Dispatch the front of `ready` for `min(remaining, quantum)` ticks.
//! 4. Finished processes record their completion; others go straight to
//!    the back of `ready`.
//!
//! A preempted process is requeued before the admission pass of the next
//! iteration, so a process arriving while the slice runs (or exactly when
//! it ends) lines up behind it.
//!
//! # Termination
//! Every dispatch of an unfinished process strictly reduces the total
//! remaining burst, and idling only happens while `pending` is non-empty.

use std::collections::VecDeque;

use log::{debug, trace};

use super::RunLog;
use crate::dispatching::KeyChain;
use crate::models::{Discipline, Process, Quantum, Tick};

/// Round-robin scheduler with a fixed quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, ProcessSpec, Quantum};
/// use u_cpusched::scheduler::RoundRobinScheduler;
///
/// let mut processes: Vec<Process> = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, 0), (2, 1, 0)])
///     .into_iter()
///     .map(Process::new)
///     .collect();
///
/// let scheduler = RoundRobinScheduler::new(Quantum::new(2).unwrap());
/// let log = scheduler.schedule(&mut processes);
/// assert_eq!(log.trace.len(), 6);
/// assert_eq!(processes[2].completion, Some(7));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Quantum,
}

impl RoundRobinScheduler {
    /// Creates a scheduler that preempts after `quantum` ticks.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    /// The configured time slice.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    /// Runs the round-robin loop until every process has finished.
    ///
    /// Runtime fields are not reset here; callers reusing records must
    /// reset them first.
    pub fn schedule(&self, processes: &mut [Process]) -> RunLog {
        let admission = KeyChain::for_discipline(&Discipline::RoundRobin {
            quantum: self.quantum,
        });
        let mut pending: VecDeque<usize> = admission.sort_indices(&*processes).into();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut log = RunLog::default();
        let mut current_time: Tick = 0;
        let slice = self.quantum.ticks();

        while !pending.is_empty() || !ready.is_empty() {
            while let Some(&idx) = pending.front() {
                if processes[idx].arrival() > current_time {
                    break;
                }
                pending.pop_front();
                trace!("t={} admit P{}", current_time, processes[idx].pid());
                ready.push_back(idx);
            }

            let Some(idx) = ready.pop_front() else {
                // Nothing admitted yet; the next pending arrival is in the future.
                if let Some(&next) = pending.front() {
                    trace!(
                        "cpu idle {}..{} until P{} arrives",
                        current_time,
                        processes[next].arrival(),
                        processes[next].pid()
                    );
                    current_time = processes[next].arrival();
                }
                continue;
            };

            let process = &mut processes[idx];
            if process.response.is_none() {
                log.dispatch_order.push(process.pid());
            }
            process.mark_dispatched(current_time);

            let start = current_time;
            let run = process.consume(slice);
            current_time = current_time.saturating_add(run);
            log.trace.record(process.pid(), start, current_time);
            trace!("P{} runs {}..{}", process.pid(), start, current_time);

            if process.remaining_burst == 0 {
                process.finish(current_time);
            } else {
                trace!(
                    "t={} requeue P{} ({} left)",
                    current_time,
                    process.pid(),
                    process.remaining_burst
                );
                ready.push_back(idx);
            }
        }

        debug!(
            "round-robin run finished: q={}, {} slices, makespan {}",
            self.quantum,
            log.trace.len(),
            current_time
        );
        log
    }
}
