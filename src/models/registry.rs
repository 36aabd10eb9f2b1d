//! Task registry.
//!
//! Holds the ordered task list and hands out sequential identifiers at
//! ingestion time. The registry is bounded by a capacity fixed at
//! construction; overflowing it is an explicit error.

use serde::Serialize;

use super::{Task, TaskId};
use crate::error::ScheduleError;

/// Default capacity, matching the classic task-file limit.
pub const DEFAULT_CAPACITY: usize = 10;

/// Ordered, capacity-bounded collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    capacity: usize,
    next_id: TaskId,
}

impl TaskRegistry {
    /// Creates an empty registry with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty registry holding at most `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Registers a new task and returns its assigned ID.
    ///
    /// IDs are strictly increasing in ingestion order and are never reused.
    /// Fails with `CapacityExceeded` (registry unchanged) when full.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        priority: i32,
        burst: i64,
    ) -> Result<TaskId, ScheduleError> {
        if self.tasks.len() >= self.capacity {
            return Err(ScheduleError::CapacityExceeded {
                count: self.tasks.len() + 1,
                capacity: self.capacity,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks
            .push(Task::new(id, name, burst).with_priority(priority));
        Ok(id)
    }

    /// Builds a registry from `(name, burst)` pairs with priority 0.
    pub fn from_bursts<S: Into<String>>(
        capacity: usize,
        bursts: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, ScheduleError> {
        let mut registry = Self::with_capacity(capacity);
        for (name, burst) in bursts {
            registry.register(name, 0, burst)?;
        }
        Ok(registry)
    }

    /// Registered tasks in ingestion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task has been registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Maximum number of tasks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the registry, yielding the task list.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}
