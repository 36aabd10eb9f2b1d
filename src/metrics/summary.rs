//! Per-task timing metrics and their means.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | Completion clock value (all tasks arrive at t=0) |
//! | Waiting | Turnaround - burst |
//! | Response | Clock value of first dispatch |
//! | Makespan | Latest completion time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Task, TaskId};

/// Timing metrics of one completed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetrics {
    pub id: TaskId,
    pub name: String,
    pub burst: i64,
    pub waiting: i64,
    pub turnaround: i64,
    pub response: i64,
}

impl TaskMetrics {
    /// Reads the derived times of a completed task.
    pub fn from_task(task: &Task) -> Result<Self, ScheduleError> {
        match (task.waiting, task.turnaround, task.response) {
            (Some(waiting), Some(turnaround), Some(response)) => Ok(Self {
                id: task.id,
                name: task.name.clone(),
                burst: task.burst,
                waiting,
                turnaround,
                response,
            }),
            _ => Err(ScheduleError::Incomplete {
                id: task.id,
                name: task.name.clone(),
            }),
        }
    }
}

/// Summary statistics of a completed run.
///
/// All averages are unweighted arithmetic means over every task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Per-task metrics, in the order given.
    pub tasks: Vec<TaskMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of all bursts.
    pub total_burst: i64,
}

impl ScheduleSummary {
    /// Computes metrics from completed tasks.
    ///
    /// Fails with `EmptyTaskList` for an empty slice and `Incomplete` if
    /// any task has not finished. Never modifies the tasks.
    pub fn calculate(tasks: &[Task]) -> Result<Self, ScheduleError> {
        if tasks.is_empty() {
            return Err(ScheduleError::EmptyTaskList);
        }

        let metrics = tasks
            .iter()
            .map(TaskMetrics::from_task)
            .collect::<Result<Vec<_>, _>>()?;

        // Per-task times fit in i64, but their sums over many tasks may not.
        let n = metrics.len() as f64;
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i128 = 0;
        let mut makespan: i64 = 0;

        for m in &metrics {
            total_waiting += i128::from(m.waiting);
            total_turnaround += i128::from(m.turnaround);
            total_response += i128::from(m.response);
            total_burst += i128::from(m.burst);
            makespan = makespan.max(m.turnaround);
        }

        let total_burst = i64::try_from(total_burst).map_err(|_| ScheduleError::BurstOverflow {
            count: metrics.len(),
        })?;

        Ok(Self {
            tasks: metrics,
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            avg_response: total_response as f64 / n,
            makespan,
            total_burst,
        })
    }

    /// Number of tasks summarized.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
