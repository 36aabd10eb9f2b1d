//! Simulation clock and per-run dispatch state.

use tracing::debug;

use super::DispatchObserver;
use crate::models::{SliceEvent, Task};

/// Discrete simulation clock.
///
/// Starts at 0 and only moves forward, driven by the dispatch loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    now: i64,
}

impl Clock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Moves the clock forward by `units` (must be non-negative).
    pub fn advance(&mut self, units: i64) {
        debug_assert!(units >= 0, "clock cannot move backwards ({units})");
        self.now += units.max(0);
    }
}

/// Explicit state threaded through one simulation run.
///
/// Owns the task list and the clock; every policy mutates them only
/// through [`grant`](Self::grant), which keeps the time accounting
/// identical across policies.
pub struct SimulationContext<'o> {
    tasks: Vec<Task>,
    clock: Clock,
    observer: &'o mut dyn DispatchObserver,
}

impl<'o> SimulationContext<'o> {
    /// Creates a context at t=0 over the given tasks.
    pub fn new(tasks: Vec<Task>, observer: &'o mut dyn DispatchObserver) -> Self {
        Self {
            tasks,
            clock: Clock::new(),
            observer,
        }
    }

    /// Current clock value.
    #[inline]
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Tasks in current dispatch order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at `index` in current dispatch order.
    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the context holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Stable reorder of the task list. Equal keys keep their relative order.
    pub fn sort_tasks_by_key<K: Ord>(&mut self, key: impl FnMut(&Task) -> K) {
        self.tasks.sort_by_key(key);
    }

    /// Runs task `index` for `slice` units at the current clock.
    ///
    /// Fixes `response` on the first grant, emits the slice event, advances
    /// the clock and decrements `remaining`. When `remaining` reaches 0 the
    /// task completes with `turnaround = clock` and
    /// `waiting = turnaround - burst`.
    ///
    /// Returns `true` if the task completed with this slice.
    pub fn grant(&mut self, index: usize, slice: i64) -> bool {
        let start = self.clock.now();
        let task = &mut self.tasks[index];
        debug_assert!(!task.is_complete(), "task {} already completed", task.id);
        debug_assert!(
            (0..=task.remaining).contains(&slice),
            "slice {slice} out of range for task {} (remaining {})",
            task.id,
            task.remaining
        );

        if task.response.is_none() {
            task.response = Some(start);
        }

        let event = SliceEvent {
            task_id: task.id,
            task_name: task.name.clone(),
            start,
            length: slice,
        };
        debug!(
            task_id = task.id,
            task = %task.name,
            start,
            length = slice,
            "slice granted"
        );
        self.observer.on_slice(&event);

        self.clock.advance(slice);
        task.remaining -= slice;

        if task.remaining > 0 {
            return false;
        }

        let completion = self.clock.now();
        task.turnaround = Some(completion);
        task.waiting = Some(completion - task.burst);
        debug!(task_id = task.id, completion, "task completed");
        self.observer.on_complete(task);
        true
    }

    /// Consumes the context, returning the tasks and final clock value.
    pub fn into_parts(self) -> (Vec<Task>, i64) {
        (self.tasks, self.clock.now())
    }
}

impl std::fmt::Debug for SimulationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationContext")
            .field("clock", &self.clock)
            .field("tasks", &self.tasks)
            .finish()
    }
}
