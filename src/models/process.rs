//! Process model.
//!
//! A process is the unit of work competing for the single CPU. Its static
//! description (`ProcessSpec`) never changes; the runtime record (`Process`)
//! carries the bookkeeping a simulation run drives to completion.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use super::ProcessMetrics;

/// Simulation time in ticks.
pub type Tick = i64;

/// Process identifier (1-based).
pub type Pid = u32;

/// Static description of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier, assigned sequentially from 1.
    pub pid: Pid,
    /// Tick at which the process becomes eligible for dispatch.
    pub arrival: Tick,
    /// Total service time required.
    pub burst: Tick,
    /// Static priority (lower value = higher priority).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process spec with priority 0.
    pub fn new(pid: Pid, arrival: Tick, burst: Tick) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds specs from `(arrival, burst, priority)` triples, assigning
    /// pids 1, 2, 3, ... in input order.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::ProcessSpec;
    ///
    /// let specs = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, 2)]);
    /// assert_eq!(specs[1].pid, 2);
    /// assert_eq!(specs[1].priority, 2);
    /// ```
    pub fn sequence(entries: &[(Tick, Tick, i32)]) -> Vec<Self> {
        entries
            .iter()
            .zip(1..)
            .map(|(&(arrival, burst, priority), pid)| {
                Self::new(pid, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

/// Runtime record of a process during a simulation run.
///
/// `turnaround` and `waiting` are never stored; they are derived from
/// `completion` so they cannot drift out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Static description.
    pub spec: ProcessSpec,
    /// Service time still owed. Reaches 0 exactly once, at completion.
    pub remaining_burst: Tick,
    /// Delay between arrival and first dispatch. `None` until dispatched.
    pub response: Option<Tick>,
    /// Tick at which `remaining_burst` reached 0. `None` until finished.
    pub completion: Option<Tick>,
}

impl Process {
    /// Creates a pristine runtime record for `spec`.
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining_burst: spec.burst.max(0),
            response: None,
            completion: None,
        }
    }

    /// Restores all runtime fields to their pristine state.
    pub fn reset(&mut self) {
        self.remaining_burst = self.spec.burst.max(0);
        self.response = None;
        self.completion = None;
    }

    /// Process identifier.
    #[inline]
    pub fn pid(&self) -> Pid {
        self.spec.pid
    }

    /// Tick at which the process becomes ready.
    #[inline]
    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    /// Total service time requested.
    #[inline]
    pub fn burst(&self) -> Tick {
        self.spec.burst
    }

    /// Static priority (lower is more important).
    #[inline]
    pub fn priority(&self) -> i32 {
        self.spec.priority
    }

    /// Records the first dispatch at `now`. Later calls are ignored.
    pub fn mark_dispatched(&mut self, now: Tick) {
        if self.response.is_none() {
            self.response = Some(now.saturating_sub(self.spec.arrival));
        }
    }

    /// Consumes up to `slice` ticks of service and returns the amount used.
    pub fn consume(&mut self, slice: Tick) -> Tick {
        let run = self.remaining_burst.min(slice).max(0);
        self.remaining_burst -= run;
        run
    }

    /// Marks the process finished at `now`.
    pub fn finish(&mut self, now: Tick) {
        debug_assert_eq!(self.remaining_burst, 0);
        self.completion = Some(now);
    }

    /// Whether the process has been driven to completion.
    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    /// `completion - arrival`.
    pub fn turnaround(&self) -> Option<Tick> {
        self.completion.map(|c| c.saturating_sub(self.spec.arrival))
    }

    /// `turnaround - burst`.
    pub fn waiting(&self) -> Option<Tick> {
        self.turnaround().map(|t| t.saturating_sub(self.spec.burst))
    }

    /// Snapshot of the computed metrics. `None` if the process never finished.
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        let completion = self.completion?;
        let turnaround = completion.saturating_sub(self.spec.arrival);
        Some(ProcessMetrics {
            pid: self.spec.pid,
            arrival: self.spec.arrival,
            burst: self.spec.burst,
            priority: self.spec.priority,
            response: self.response.unwrap_or(0),
            completion,
            turnaround,
            waiting: turnaround.saturating_sub(self.spec.burst),
        })
    }
}

impl AsRef<ProcessSpec> for ProcessSpec {
    fn as_ref(&self) -> &ProcessSpec {
        self
    }
}

impl AsRef<ProcessSpec> for Process {
    fn as_ref(&self) -> &ProcessSpec {
        &self.spec
    }
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Self::new(spec)
    }
}
