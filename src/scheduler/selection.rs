//! Discipline selection parsing.
//!
//! Callers select disciplines by identifier, either the numeric menu code
//! (`1`..`4`) or a name (`fcfs`, `lcfs`, `priority`, `rr`). Identifiers are
//! parsed once here; everything downstream works on [`Discipline`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, Quantum, Tick};

/// Categories of selection errors. Both are non-fatal: the offending
/// selection is skipped and the others still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionErrorKind {
    /// The identifier names no known discipline.
    InvalidSelection,
    /// Round-robin was selected without a positive quantum.
    MissingQuantum,
}

/// A selection that could not be turned into a runnable discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionError {
    /// Error category.
    pub kind: SelectionErrorKind,
    /// The selection as given by the caller.
    pub selection: String,
    /// Human-readable description.
    pub message: String,
}

impl SelectionError {
    fn invalid(selection: &str) -> Self {
        Self {
            kind: SelectionErrorKind::InvalidSelection,
            selection: selection.to_string(),
            message: format!("Algorithm '{selection}' is not valid"),
        }
    }

    fn missing_quantum(selection: &str, quantum: Option<Tick>) -> Self {
        let message = match quantum {
            None => format!("'{selection}' requires a quantum"),
            Some(q) => format!("'{selection}' requires a positive quantum, got {q}"),
        };
        Self {
            kind: SelectionErrorKind::MissingQuantum,
            selection: selection.to_string(),
            message,
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SelectionError {}

/// A discipline identifier before the quantum is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisciplineId {
    Fcfs,
    Lcfs,
    Priority,
    RoundRobin,
}

impl DisciplineId {
    /// All identifiers, in menu order.
    pub const ALL: [DisciplineId; 4] = [
        DisciplineId::Fcfs,
        DisciplineId::Lcfs,
        DisciplineId::Priority,
        DisciplineId::RoundRobin,
    ];

    /// Numeric menu code (1-based).
    pub fn code(self) -> u8 {
        match self {
            Self::Fcfs => 1,
            Self::Lcfs => 2,
            Self::Priority => 3,
            Self::RoundRobin => 4,
        }
    }

    /// Whether this discipline needs a quantum.
    pub fn needs_quantum(self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Attaches the quantum, producing a runnable discipline.
    ///
    /// The quantum is ignored by every discipline except round-robin.
    pub fn resolve(self, quantum: Option<Tick>) -> Result<Discipline, SelectionError> {
        match self {
            Self::Fcfs => Ok(Discipline::Fcfs),
            Self::Lcfs => Ok(Discipline::Lcfs),
            Self::Priority => Ok(Discipline::Priority),
            Self::RoundRobin => quantum
                .and_then(Quantum::new)
                .map(|quantum| Discipline::RoundRobin { quantum })
                .ok_or_else(|| SelectionError::missing_quantum("RR", quantum)),
        }
    }
}

impl FromStr for DisciplineId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "1" | "fcfs" | "fifo" => Ok(Self::Fcfs),
            "2" | "lcfs" | "lifo" => Ok(Self::Lcfs),
            "3" | "priority" | "prio" => Ok(Self::Priority),
            "4" | "rr" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(SelectionError::invalid(s.trim())),
        }
    }
}

impl From<Discipline> for DisciplineId {
    fn from(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fcfs => Self::Fcfs,
            Discipline::Lcfs => Self::Lcfs,
            Discipline::Priority => Self::Priority,
            Discipline::RoundRobin { .. } => Self::RoundRobin,
        }
    }
}

/// Parses one selection and attaches the quantum.
pub fn parse_selection(selection: &str, quantum: Option<Tick>) -> Result<Discipline, SelectionError> {
    let id: DisciplineId = selection.parse()?;
    id.resolve(quantum)
        .map_err(|_| SelectionError::missing_quantum(selection.trim(), quantum))
}

/// Parses every selection, preserving order. Failed selections are
/// returned in place so callers can report and skip them.
///
/// # Example
/// ```
/// use u_cpusched::models::Discipline;
/// use u_cpusched::scheduler::{resolve_selections, SelectionErrorKind};
///
/// let resolved = resolve_selections(&["1", "9", "rr"], None);
/// assert_eq!(resolved[0], Ok(Discipline::Fcfs));
/// assert_eq!(resolved[1].as_ref().unwrap_err().kind, SelectionErrorKind::InvalidSelection);
/// assert_eq!(resolved[2].as_ref().unwrap_err().kind, SelectionErrorKind::MissingQuantum);
/// ```
pub fn resolve_selections<S: AsRef<str>>(
    selections: &[S],
    quantum: Option<Tick>,
) -> Vec<Result<Discipline, SelectionError>> {
    selections
        .iter()
        .map(|s| parse_selection(s.as_ref(), quantum))
        .collect()
}

/// Splits a comma-separated selection list (e.g., `"1, 4,2"`).
pub fn split_selections(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        for id in DisciplineId::ALL {
            let parsed: DisciplineId = id.code().to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("FCFS".parse::<DisciplineId>(), Ok(DisciplineId::Fcfs));
        assert_eq!(" lcfs ".parse::<DisciplineId>(), Ok(DisciplineId::Lcfs));
        assert_eq!("Priority".parse::<DisciplineId>(), Ok(DisciplineId::Priority));
        assert_eq!("round-robin".parse::<DisciplineId>(), Ok(DisciplineId::RoundRobin));
        assert_eq!("Round_Robin".parse::<DisciplineId>(), Ok(DisciplineId::RoundRobin));
    }

    #[test]
    fn test_parse_invalid() {
        let err = "5".parse::<DisciplineId>().unwrap_err();
        assert_eq!(err.kind, SelectionErrorKind::InvalidSelection);
        assert_eq!(err.selection, "5");
        assert_eq!(err.to_string(), "Algorithm '5' is not valid");
    }

    #[test]
    fn test_resolve_round_robin_quantum() {
        assert_eq!(
            DisciplineId::RoundRobin.resolve(Some(3)),
            Ok(Discipline::round_robin(3).unwrap())
        );

        let missing = DisciplineId::RoundRobin.resolve(None).unwrap_err();
        assert_eq!(missing.kind, SelectionErrorKind::MissingQuantum);

        let zero = DisciplineId::RoundRobin.resolve(Some(0)).unwrap_err();
        assert_eq!(zero.kind, SelectionErrorKind::MissingQuantum);
        assert!(zero.message.contains("positive"));
    }

    #[test]
    fn test_quantum_ignored_for_non_preemptive() {
        assert_eq!(DisciplineId::Fcfs.resolve(Some(-1)), Ok(Discipline::Fcfs));
        assert!(!DisciplineId::Priority.needs_quantum());
    }

    #[test]
    fn test_parse_selection_keeps_original_text() {
        let err = parse_selection(" 4 ", None).unwrap_err();
        assert_eq!(err.selection, "4");
        assert_eq!(err.message, "'4' requires a quantum");

        let err = parse_selection("round-robin", Some(-2)).unwrap_err();
        assert_eq!(err.selection, "round-robin");
        assert_eq!(err.to_string(), "'round-robin' requires a positive quantum, got -2");
    }

    #[test]
    fn test_resolve_selections_preserves_order() {
        let resolved = resolve_selections(&["3", "x", "4", "1"], Some(2));
        assert_eq!(resolved[0], Ok(Discipline::Priority));
        assert!(resolved[1].is_err());
        assert_eq!(resolved[2], Ok(Discipline::round_robin(2).unwrap()));
        assert_eq!(resolved[3], Ok(Discipline::Fcfs));
    }

    #[test]
    fn test_split_selections() {
        assert_eq!(split_selections("1, 4,2,,"), vec!["1", "4", "2"]);
        assert!(split_selections("  ").is_empty());
    }

    #[test]
    fn test_discipline_id_from_discipline() {
        let id = DisciplineId::from(Discipline::round_robin(5).unwrap());
        assert_eq!(id, DisciplineId::RoundRobin);
        assert_eq!(id.code(), 4);
    }
}
