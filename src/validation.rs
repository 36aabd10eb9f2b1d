//! Input validation for simulation runs.
//!
//! Checks configuration and task-list preconditions before the engine
//! touches any state. Detects:
//! - Unknown or malformed policy parameters (non-positive RR quantum)
//! - Task lists over capacity
//! - Empty task lists
//! - Negative bursts, duplicate IDs, tasks already dispatched
//! - Total burst beyond the `i64` clock range

use std::collections::HashSet;

use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::models::{Policy, Task};

/// Validation result.
pub type ValidationResult = Result<(), ScheduleError>;

/// Validates policy parameters.
///
/// Only Round-Robin consumes the quantum, so a non-positive quantum is
/// rejected only when RR is selected.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    if config.policy == Policy::RoundRobin && config.quantum <= 0 {
        return Err(ScheduleError::InvalidQuantum(config.quantum));
    }
    Ok(())
}

/// Validates a task list against the engine's preconditions.
///
/// Checks, in order:
/// 1. At most `capacity` tasks
/// 2. At least one task
/// 3. Every burst is non-negative
/// 4. No duplicate task IDs
/// 5. Every task is fresh (`remaining == burst`, no derived times)
/// 6. The sum of all bursts fits in the clock
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first violation found.
pub fn validate_tasks(tasks: &[Task], capacity: usize) -> ValidationResult {
    if tasks.len() > capacity {
        return Err(ScheduleError::CapacityExceeded {
            count: tasks.len(),
            capacity,
        });
    }

    if tasks.is_empty() {
        return Err(ScheduleError::EmptyTaskList);
    }

    let mut ids = HashSet::new();
    let mut total: i64 = 0;
    for task in tasks {
        if task.burst < 0 {
            return Err(ScheduleError::NegativeBurst {
                id: task.id,
                name: task.name.clone(),
                burst: task.burst,
            });
        }

        if !ids.insert(task.id) {
            return Err(ScheduleError::DuplicateId(task.id));
        }

        if !task.is_fresh() {
            return Err(ScheduleError::AlreadyDispatched {
                id: task.id,
                name: task.name.clone(),
            });
        }

        total = total
            .checked_add(task.burst)
            .ok_or(ScheduleError::BurstOverflow { count: tasks.len() })?;
    }

    Ok(())
}

/// Validates configuration first, then the task list.
pub fn validate_input(tasks: &[Task], config: &SimulationConfig) -> ValidationResult {
    validate_config(config)?;
    validate_tasks(tasks, config.capacity)
}
