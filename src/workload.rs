//! Random workload generation.
//!
//! Produces reproducible process sets for experiments and invariant checks.
//! The caller owns the random source, so a seeded RNG gives the same
//! workload every time.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let specs = WorkloadGenerator::new(5).with_burst_range(1, 4).generate(&mut rng);
//! assert_eq!(specs.len(), 5);
//! assert!(specs.iter().all(|s| (1..=4).contains(&s.burst)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ProcessSpec, Tick};

/// Generator of random process sets. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes per workload.
    pub count: usize,
    /// Arrival range `(min, max)`.
    pub arrival: (Tick, Tick),
    /// Burst range `(min, max)`.
    pub burst: (Tick, Tick),
    /// Priority range `(min, max)`.
    pub priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in 0..=10,
    /// bursts in 1..=10 and priority 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 10),
            burst: (1, 10),
            priority: (0, 0),
        }
    }

    /// Sets the arrival range. Bounds are swapped if reversed.
    pub fn with_arrival_range(mut self, min: Tick, max: Tick) -> Self {
        self.arrival = (min.min(max), min.max(max));
        self
    }

    /// Sets the burst range. Bounds are swapped if reversed.
    pub fn with_burst_range(mut self, min: Tick, max: Tick) -> Self {
        self.burst = (min.min(max), min.max(max));
        self
    }

    /// Sets the priority range. Bounds are swapped if reversed.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min.min(max), min.max(max));
        self
    }

    /// Generates one workload with pids `1..=count` in generation order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.count)
            .map(|i| {
                let pid = u32::try_from(i).unwrap_or(u32::MAX);
                ProcessSpec::new(
                    pid,
                    rng.random_range(self.arrival.0..=self.arrival.1),
                    rng.random_range(self.burst.0..=self.burst.1),
                )
                .with_priority(rng.random_range(self.priority.0..=self.priority.1))
            })
            .collect()
    }

    /// Generates one workload sorted by arrival, pids renumbered in that
    /// order (the shape an interactive session usually produces).
    pub fn generate_sorted<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let mut specs = self.generate(rng);
        specs.sort_by_key(|s| s.arrival);
        for (spec, pid) in specs.iter_mut().zip(1..) {
            spec.pid = pid;
        }
        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ranges_respected() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = WorkloadGenerator::new(50)
            .with_arrival_range(5, 20)
            .with_burst_range(2, 3)
            .with_priority_range(-1, 1);
        for spec in generator.generate(&mut rng) {
            assert!((5..=20).contains(&spec.arrival));
            assert!((2..=3).contains(&spec.burst));
            assert!((-1..=1).contains(&spec.priority));
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_workloads_validate() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = WorkloadGenerator::new(8);
        for _ in 0..10 {
            assert!(validate_processes(&generator.generate(&mut rng)).is_ok());
        }
    }

    #[test]
    fn test_reversed_bounds_swapped() {
        let generator = WorkloadGenerator::new(1).with_burst_range(9, 4);
        assert_eq!(generator.burst, (4, 9));
    }

    #[test]
    fn test_generate_sorted() {
        let mut rng = StdRng::seed_from_u64(5);
        let specs = WorkloadGenerator::new(20).generate_sorted(&mut rng);
        assert!(specs.windows(2).all(|w| w[0].arrival <= w[1].arrival));
        let pids: Vec<u32> = specs.iter().map(|s| s.pid).collect();
        assert_eq!(pids, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(WorkloadGenerator::new(0).generate(&mut rng).is_empty());
    }
}
