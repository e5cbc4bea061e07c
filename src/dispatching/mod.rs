//! Ordering keys and key chains for dispatch order.
//!
//! Non-preemptive disciplines are fully described by the order in which
//! they hand processes to the CPU. Each order is a chain of integer sort
//! keys evaluated lexicographically, with a final tie-breaking strategy.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{KeyChain, TieBreaker};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::ProcessSpec;
//!
//! let lcfs = KeyChain::new()
//!     .with_key(rules::LatestArrival)
//!     .with_final_tie_breaker(TieBreaker::ByPid);
//!
//! let specs = ProcessSpec::sequence(&[(0, 5, 0), (3, 1, 0), (3, 2, 0)]);
//! assert_eq!(lcfs.sort_indices(&specs), vec![1, 2, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::{KeyChain, TieBreaker};

use crate::models::ProcessSpec;
use std::fmt::Debug;

/// Sort key value. Lower keys are dispatched first.
pub type KeyValue = i64;

/// A single ordering criterion over static process attributes.
///
/// # Key Convention
/// **Lower key = dispatched earlier.** Descending criteria negate.
pub trait OrderingKey: Send + Sync + Debug {
    /// Key name (e.g., "ARRIVAL").
    fn name(&self) -> &'static str;

    /// Evaluates the key for one process.
    fn key(&self, spec: &ProcessSpec) -> KeyValue;

    /// Key description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
