//! Input validation for process sets.
//!
//! Checks the structural integrity of a process set before simulation.
//! Detects:
//! - Empty process sets
//! - Duplicate or non-sequential pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose completion time would not fit in a tick
//!
//! The simulators themselves accept anything; negative values would only
//! produce nonsensical metrics, so they are rejected here at the boundary.

use std::collections::HashSet;
use std::fmt;

use crate::models::{ProcessSpec, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same pid.
    DuplicatePid,
    /// Pids are not exactly 1..=n.
    NonSequentialPid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no (or negative) service time.
    NonPositiveBurst,
    /// The latest arrival plus the total burst exceeds the tick range.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate pids
/// 3. Pids are exactly `1..=n` (any order)
/// 4. Every arrival is `>= 0`
/// 5. Every burst is `> 0`
/// 6. `max(arrival) + sum(burst)` fits in a [`Tick`]
///
/// Priority is not checked; any integer is accepted.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
        return Err(errors);
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.pid, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.pid, p.burst),
            ));
        }
    }

    let n = processes.len() as u64;
    for p in processes
        .iter()
        .filter(|p| p.pid == 0 || u64::from(p.pid) > n)
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonSequentialPid,
            format!("Pid {} is outside 1..={}", p.pid, n),
        ));
    }

    // The clock never passes the latest arrival plus all service time.
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc: Tick, p| acc.checked_add(p.burst.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival {} plus total burst exceeds the maximum tick {}",
                latest_arrival,
                Tick::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let specs = ProcessSpec::sequence(&[(0, 5, 0), (1, 3, -2), (2, 1, 7)]);
        assert!(validate_processes(&specs).is_ok());
    }

    #[test]
    fn test_pids_in_any_order() {
        let specs = vec![ProcessSpec::new(2, 0, 1), ProcessSpec::new(1, 0, 1)];
        assert!(validate_processes(&specs).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_pid() {
        let specs = vec![ProcessSpec::new(1, 0, 1), ProcessSpec::new(1, 2, 1)];
        let errors = validate_processes(&specs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_non_sequential_pid() {
        let specs = vec![ProcessSpec::new(1, 0, 1), ProcessSpec::new(5, 0, 1)];
        let errors = validate_processes(&specs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonSequentialPid));

        let zero = vec![ProcessSpec::new(0, 0, 1)];
        assert!(validate_processes(&zero).is_err());
    }

    #[test]
    fn test_every_out_of_range_pid_reported() {
        let specs = vec![ProcessSpec::new(7, 0, 1), ProcessSpec::new(9, 0, 1)];
        let errors = validate_processes(&specs).unwrap_err();
        let messages: Vec<String> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonSequentialPid)
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            messages,
            vec!["Pid 7 is outside 1..=2", "Pid 9 is outside 1..=2"]
        );
    }

    #[test]
    fn test_time_overflow() {
        let specs = ProcessSpec::sequence(&[(i64::MAX - 1, 5, 0)]);
        let errors = validate_processes(&specs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let summed = ProcessSpec::sequence(&[(0, i64::MAX / 2 + 1, 0), (3, i64::MAX / 2, 0)]);
        let errors = validate_processes(&summed).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let edge = ProcessSpec::sequence(&[(i64::MAX - 5, 5, 0)]);
        assert!(validate_processes(&edge).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let specs = vec![ProcessSpec::new(1, -1, 3)];
        let errors = validate_processes(&specs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].to_string().contains("-1"));
    }

    #[test]
    fn test_non_positive_burst() {
        let specs = ProcessSpec::sequence(&[(0, 0, 0), (0, -4, 0)]);
        let errors = validate_processes(&specs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        let specs = vec![ProcessSpec::new(1, -3, 0), ProcessSpec::new(1, 0, 2)];
        let errors = validate_processes(&specs).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
