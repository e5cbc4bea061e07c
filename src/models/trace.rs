//! Execution trace model.
//!
//! A trace is the ordered record of which process held the CPU over which
//! half-open interval `[start, end)`. Gaps between intervals are idle time.
//! It is the data a Gantt-style renderer consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Pid, ProcessSpec, Tick};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub pid: Pid,
    /// First tick of the interval.
    pub start: Tick,
    /// Tick after the last one (exclusive).
    pub end: Tick,
}

impl ExecutionInterval {
    /// Creates an interval `[start, end)` for `pid`.
    pub fn new(pid: Pid, start: Tick, end: Tick) -> Self {
        Self { pid, start, end }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

impl fmt::Display for ExecutionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}[{}..{})", self.pid, self.start, self.end)
    }
}

/// An idle stretch of CPU time between two intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// End of the previous interval.
    pub start: Tick,
    /// Start of the next interval.
    pub end: Tick,
}

/// Ordered execution trace of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Intervals in dispatch order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Empty intervals (`start >= end`) are dropped.
    pub fn record(&mut self, pid: Pid, start: Tick, end: Tick) {
        if start < end {
            self.intervals.push(ExecutionInterval::new(pid, start, end));
        }
    }

    /// Rebuilds the trace of a non-preemptive run from its dispatch order.
    ///
    /// Each process starts at `max(clock, arrival)` and runs its whole burst.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::{ProcessSpec, Trace};
    ///
    /// let order = ProcessSpec::sequence(&[(0, 2, 0), (5, 1, 0)]);
    /// let trace = Trace::replay_non_preemptive(&order);
    /// assert_eq!(trace.intervals[1].start, 5);
    /// assert_eq!(trace.idle_time(), 3);
    /// ```
    pub fn replay_non_preemptive(order: &[ProcessSpec]) -> Self {
        let mut trace = Self::new();
        let mut clock: Tick = 0;
        for spec in order {
            let start = clock.max(spec.arrival);
            let end = start.saturating_add(spec.burst.max(0));
            trace.record(spec.pid, start, end);
            clock = end;
        }
        trace
    }

    /// Whether the trace has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Tick of the first dispatch, if any.
    pub fn first_start(&self) -> Option<Tick> {
        self.intervals.first().map(|i| i.start)
    }

    /// Latest end across all intervals (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Tick {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// Idle stretches between consecutive intervals.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        self.intervals
            .windows(2)
            .filter(|w| w[0].end < w[1].start)
            .map(|w| IdleGap {
                start: w[0].end,
                end: w[1].start,
            })
            .collect()
    }

    /// Total idle ticks between the first dispatch and the makespan.
    pub fn idle_time(&self) -> Tick {
        self.idle_gaps().iter().map(|g| g.end - g.start).sum()
    }

    /// Intervals belonging to one process, in order.
    pub fn intervals_for(&self, pid: Pid) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Number of dispatches that hand the CPU to a different process than
    /// the previous interval.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Checks that every interval is non-empty and that intervals are
    /// time-ordered and non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.start < i.end)
            && self.intervals.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}
