//! Error taxonomy for the simulation core.
//!
//! Every failure is reported synchronously to the caller before any task
//! or clock state is touched. Nothing is retried or recovered internally.

use thiserror::Error;

use crate::models::TaskId;

/// Broad category of a [`ScheduleError`].
///
/// Lets callers (e.g. the CLI) map failures onto distinct outcomes
/// without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad policy name or policy parameter.
    Configuration,
    /// Task list violates an input precondition.
    Precondition,
    /// More tasks than the fixed capacity allows.
    Capacity,
}

/// Errors surfaced by the registry, validation, engine and metrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Unknown scheduling policy: '{0}' (expected fcfs, sjf, srtf or rr)")]
    UnknownPolicy(String),

    #[error("Round-robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    #[error("Task list is empty")]
    EmptyTaskList,

    #[error("Task '{name}' (tid: {id}) has negative burst {burst}")]
    NegativeBurst { id: TaskId, name: String, burst: i64 },

    #[error("Total burst of {count} tasks exceeds the clock range")]
    BurstOverflow { count: usize },

    #[error("Duplicate task ID: {0}")]
    DuplicateId(TaskId),

    #[error("Task '{name}' (tid: {id}) has already been dispatched")]
    AlreadyDispatched { id: TaskId, name: String },

    #[error("Task '{name}' (tid: {id}) has not completed")]
    Incomplete { id: TaskId, name: String },

    #[error("Task capacity exceeded: {count} tasks, capacity {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },
}

impl ScheduleError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownPolicy(_) | Self::InvalidQuantum(_) => ErrorKind::Configuration,
            Self::CapacityExceeded { .. } => ErrorKind::Capacity,
            Self::EmptyTaskList
            | Self::NegativeBurst { .. }
            | Self::BurstOverflow { .. }
            | Self::DuplicateId(_)
            | Self::AlreadyDispatched { .. }
            | Self::Incomplete { .. } => ErrorKind::Precondition,
        }
    }
}
