//! Key chain for multi-criteria dispatch ordering.
//!
//! Composes ordering keys lexicographically: the next key is consulted only
//! when all previous keys tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, OrderingKey};
use crate::models::{Discipline, ProcessSpec};

/// How ties are broken after all keys are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    Stable,
    /// Lowest pid first.
    ByPid,
}

/// A lexicographic chain of ordering keys.
///
/// Sorting is always stable, so processes equal under every key (and the
/// final tie-breaker) keep their relative input order.
#[derive(Clone, Default)]
pub struct KeyChain {
    keys: Vec<Arc<dyn OrderingKey>>,
    tie_breaker: TieBreaker,
}

impl KeyChain {
    /// Creates an empty chain (input order).
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// Appends a key.
    pub fn with_key<K: OrderingKey + 'static>(mut self, key: K) -> Self {
        self.keys.push(Arc::new(key));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The ordering a discipline sorts its input by.
    ///
    /// | Discipline | Keys | Final tie-break |
    /// |------------|------|-----------------|
    /// | FCFS | arrival asc | stable |
    /// | LCFS | arrival desc | pid asc |
    /// | Priority | arrival asc, priority asc | stable |
    /// | RR | arrival asc (admission order) | stable |
    pub fn for_discipline(discipline: &Discipline) -> Self {
        match discipline {
            Discipline::Fcfs | Discipline::RoundRobin { .. } => {
                Self::new().with_key(rules::EarliestArrival)
            }
            Discipline::Lcfs => Self::new()
                .with_key(rules::LatestArrival)
                .with_final_tie_breaker(TieBreaker::ByPid),
            Discipline::Priority => Self::new()
                .with_key(rules::EarliestArrival)
                .with_key(rules::PriorityValue),
        }
    }

    /// Returns indices into `items`, sorted by the chain.
    pub fn sort_indices<P: AsRef<ProcessSpec>>(&self, items: &[P]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| self.compare(items[a].as_ref(), items[b].as_ref()));
        indices
    }

    /// Compares two processes under the chain.
    pub fn compare(&self, a: &ProcessSpec, b: &ProcessSpec) -> Ordering {
        for key in &self.keys {
            match key.key(a).cmp(&key.key(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ByPid => a.pid.cmp(&b.pid),
        }
    }
}

impl std::fmt::Debug for KeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyChain")
            .field("keys", &self.keys.iter().map(|k| k.name()).collect::<Vec<_>>())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
