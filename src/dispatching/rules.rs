//! Built-in ordering keys.
//!
//! All keys return lower values for processes that should run first.

use super::{KeyValue, OrderingKey};
use crate::models::ProcessSpec;

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl OrderingKey for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn key(&self, spec: &ProcessSpec) -> KeyValue {
        spec.arrival
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Latest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct LatestArrival;

impl OrderingKey for LatestArrival {
    fn name(&self) -> &'static str {
        "LATEST_ARRIVAL"
    }

    fn key(&self, spec: &ProcessSpec) -> KeyValue {
        spec.arrival.saturating_neg()
    }

    fn description(&self) -> &'static str {
        "Latest Arrival"
    }
}

/// Lowest priority value first (lower value = more important).
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl OrderingKey for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, spec: &ProcessSpec) -> KeyValue {
        KeyValue::from(spec.priority)
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }
}
