//! Task model.
//!
//! A task is a single CPU burst to be scheduled. All tasks are available
//! at time 0, so completion time and turnaround time coincide.

use serde::{Deserialize, Serialize};

/// Sequential task identifier, assigned by [`TaskRegistry`](super::TaskRegistry).
pub type TaskId = u32;

/// A task (job) to be scheduled.
///
/// `remaining` is the only field mutated while a policy runs. The derived
/// times stay `None` until the task completes, except `response`, which is
/// fixed on the first slice the task receives.
///
/// # Time Representation
/// All times are abstract simulation units on the dispatch clock (t=0 is
/// the start of the run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, in ingestion order.
    pub id: TaskId,
    /// Display label. Not used for ordering.
    pub name: String,
    /// Carried for compatibility with task files. No policy reads it.
    pub priority: i32,
    /// Total required execution time.
    pub burst: i64,
    /// Execution time still owed to the task.
    pub remaining: i64,
    /// Clock value of the first dispatch.
    pub response: Option<i64>,
    /// Completion clock value.
    pub turnaround: Option<i64>,
    /// `turnaround - burst`.
    pub waiting: Option<i64>,
}

impl Task {
    /// Creates a fresh task with `remaining = burst`.
    pub fn new(id: TaskId, name: impl Into<String>, burst: i64) -> Self {
        Self {
            id,
            name: name.into(),
            priority: 0,
            burst,
            remaining: burst,
            response: None,
            turnaround: None,
            waiting: None,
        }
    }

    /// Sets the (informational) priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the task has received any execution slice yet.
    #[inline]
    pub fn first_dispatched(&self) -> bool {
        self.response.is_some()
    }

    /// Whether the task has run to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.turnaround.is_some()
    }

    /// Whether the task is untouched by any policy.
    pub fn is_fresh(&self) -> bool {
        self.remaining == self.burst
            && self.response.is_none()
            && self.turnaround.is_none()
            && self.waiting.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(3, "T4", 12).with_priority(5);

        assert_eq!(task.id, 3);
        assert_eq!(task.name, "T4");
        assert_eq!(task.priority, 5);
        assert_eq!(task.burst, 12);
        assert_eq!(task.remaining, 12);
        assert!(task.is_fresh());
        assert!(!task.first_dispatched());
        assert!(!task.is_complete());
    }

    #[test]
    fn test_task_not_fresh_after_dispatch() {
        let mut task = Task::new(0, "A", 5);
        task.response = Some(0);
        task.remaining = 4;
        assert!(task.first_dispatched());
        assert!(!task.is_fresh());
    }

    #[test]
    fn test_task_serde() {
        let task = Task::new(1, "B", 3).with_priority(2);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
