//! Batch runner: validate once, run every selected discipline.
//!
//! Mirrors the interactive flow of a scheduling workbench without any I/O:
//! a request names the processes, the selections (in the order the caller
//! wants them run) and an optional quantum. Invalid selections are skipped
//! and reported; the rest still run.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{parse_selection, ProcessSet, RunSummary, SelectionError};
use crate::models::{ProcessSpec, SimulationReport, Tick};
use crate::validation::{validate_processes, ValidationError};

/// Input container for a batch of simulation runs.
///
/// Deserializable, so a run description can be loaded from JSON:
///
/// ```
/// use u_cpusched::scheduler::SimulationRequest;
///
/// let request: SimulationRequest = serde_json::from_str(r#"{
///     "processes": [
///         {"pid": 1, "arrival": 0, "burst": 5},
///         {"pid": 2, "arrival": 1, "burst": 3, "priority": 1}
///     ],
///     "selections": ["fcfs", "4"],
///     "quantum": 2
/// }"#).unwrap();
/// assert_eq!(request.selections.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Discipline identifiers, in run order.
    #[serde(default)]
    pub selections: Vec<String>,
    /// Round-robin quantum.
    #[serde(default)]
    pub quantum: Option<Tick>,
}

impl SimulationRequest {
    /// Creates a request with no selections.
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self {
            processes,
            selections: Vec::new(),
            quantum: None,
        }
    }

    /// Creates a request from `(arrival, burst, priority)` triples with
    /// sequential pids.
    pub fn from_entries(entries: &[(Tick, Tick, i32)]) -> Self {
        Self::new(ProcessSpec::sequence(entries))
    }

    /// Adds a selection.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selections.push(selection.into());
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Outcome of a batch of runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One report per runnable selection, in selection order.
    pub reports: Vec<SimulationReport>,
    /// Selections that were skipped.
    pub skipped: Vec<SelectionError>,
}

impl BatchReport {
    /// Summaries of every report, in selection order.
    pub fn summaries(&self) -> Vec<RunSummary> {
        self.reports.iter().map(RunSummary::calculate).collect()
    }

    /// Whether every selection ran.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Batch simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::from_entries(&[(0, 5, 0), (1, 3, 0), (2, 1, 0)])
///     .with_selection("1")
///     .with_selection("7")
///     .with_selection("4")
///     .with_quantum(2);
///
/// let batch = Simulator::new().run_request(&request).unwrap();
/// assert_eq!(batch.reports.len(), 2);
/// assert_eq!(batch.skipped.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    validate: bool,
}

impl Simulator {
    /// Creates a simulator that validates input before running.
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Enables or disables input validation.
    ///
    /// Without validation, degenerate input (negative arrival or burst)
    /// runs as-is and may produce meaningless metrics.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Runs every selection over `processes`.
    ///
    /// # Errors
    /// Returns every validation issue if validation is enabled and the
    /// process set is invalid. Selection problems never fail the batch.
    pub fn run_selections<S: AsRef<str>>(
        &self,
        processes: &[ProcessSpec],
        selections: &[S],
        quantum: Option<Tick>,
    ) -> Result<BatchReport, Vec<ValidationError>> {
        if self.validate {
            validate_processes(processes)?;
        }

        let mut set = ProcessSet::new(processes.iter().copied());
        let mut batch = BatchReport::default();

        for selection in selections {
            match parse_selection(selection.as_ref(), quantum) {
                Ok(discipline) => batch.reports.push(set.run(discipline)),
                Err(e) => {
                    warn!("skipping selection '{}': {}", e.selection, e);
                    batch.skipped.push(e);
                }
            }
        }

        debug!(
            "batch finished: {} runs, {} skipped",
            batch.reports.len(),
            batch.skipped.len()
        );
        Ok(batch)
    }

    /// Runs a request.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<BatchReport, Vec<ValidationError>> {
        self.run_selections(&request.processes, &request.selections, request.quantum)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
