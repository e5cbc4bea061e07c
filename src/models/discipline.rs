//! Scheduling disciplines.
//!
//! The set of disciplines is closed: every consumer matches on
//! [`Discipline`] exhaustively, so adding one is a compile-checked change.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::Tick;

/// Round-robin time slice. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantum(NonZeroU32);

impl Quantum {
    /// Creates a quantum, or `None` if `ticks` is not positive.
    pub fn new(ticks: Tick) -> Option<Self> {
        u32::try_from(ticks).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Quantum length in ticks.
    #[inline]
    pub fn ticks(self) -> Tick {
        Tick::from(self.0.get())
    }
}

impl TryFrom<i64> for Quantum {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("quantum must be a positive integer, got {value}"))
    }
}

impl From<Quantum> for i64 {
    fn from(q: Quantum) -> Self {
        q.ticks()
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A CPU-scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "discipline")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Last-Come-First-Served.
    Lcfs,
    /// Static priority, non-preemptive.
    Priority,
    /// Preemptive round-robin with a fixed quantum.
    RoundRobin { quantum: Quantum },
}

impl Discipline {
    /// Round-robin with the given quantum, or `None` if it is not positive.
    pub fn round_robin(quantum: Tick) -> Option<Self> {
        Quantum::new(quantum).map(|quantum| Self::RoundRobin { quantum })
    }

    /// Short identifier (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Lcfs => "LCFS",
            Self::Priority => "PRIORITY",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Human-readable title.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Lcfs => "Last-Come-First-Served",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
