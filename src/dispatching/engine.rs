//! Dispatch engine.
//!
//! Validates a run, builds the configured policy and drives it over a
//! fresh [`SimulationContext`]. The decision loop is synchronous and
//! deterministic; observers are notified but never consulted.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::policies::{Fcfs, RoundRobin, Sjf, Srtf};
use super::{DispatchObserver, DispatchPolicy, NoopObserver, SimulationContext};
use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::metrics::ScheduleSummary;
use crate::models::{Policy, Task, TaskId, TaskRegistry};
use crate::validation::validate_input;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Completed tasks, in the order the policy arranged them
    /// (input order, except SJF which reports execution order).
    pub tasks: Vec<Task>,
    /// Final clock value.
    pub makespan: i64,
}

impl ScheduleOutcome {
    /// Looks up a completed task by ID.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Computes per-task metrics and averages.
    pub fn summary(&self) -> Result<ScheduleSummary, ScheduleError> {
        ScheduleSummary::calculate(&self.tasks)
    }
}

/// Runs one policy over a task list.
///
/// # Example
/// ```
/// use cpu_sched_sim::config::SimulationConfig;
/// use cpu_sched_sim::dispatching::DispatchEngine;
/// use cpu_sched_sim::models::{Policy, TaskRegistry};
///
/// let registry = TaskRegistry::from_bursts(10, [("A", 5), ("B", 3), ("C", 8)]).unwrap();
/// let engine = DispatchEngine::new(SimulationConfig::new(Policy::Fcfs));
/// let outcome = engine.run(registry).unwrap();
/// assert_eq!(outcome.makespan, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchEngine {
    config: SimulationConfig,
}

impl DispatchEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the strategy for the configured policy.
    pub fn build_policy(&self) -> Result<Box<dyn DispatchPolicy>, ScheduleError> {
        Ok(match self.config.policy {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf),
            Policy::Srtf => Box::new(Srtf),
            Policy::RoundRobin => Box::new(RoundRobin::new(self.config.quantum)?),
        })
    }

    /// Runs the configured policy without observing slices.
    pub fn run(&self, registry: TaskRegistry) -> Result<ScheduleOutcome, ScheduleError> {
        self.run_observed(registry, &mut NoopObserver)
    }

    /// Runs the configured policy, notifying `observer` of every slice.
    pub fn run_observed(
        &self,
        registry: TaskRegistry,
        observer: &mut dyn DispatchObserver,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        self.run_tasks(registry.into_tasks(), observer)
    }

    /// Runs the configured policy over an explicit task list.
    ///
    /// On any validation failure nothing runs: no event is emitted and the
    /// tasks are dropped unmodified.
    pub fn run_tasks(
        &self,
        tasks: Vec<Task>,
        observer: &mut dyn DispatchObserver,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        validate_input(&tasks, &self.config)?;
        let policy = self.build_policy()?;

        info!(
            policy = %self.config.policy,
            tasks = tasks.len(),
            quantum = self.config.quantum,
            "simulation started"
        );

        let mut ctx = SimulationContext::new(tasks, observer);
        policy.dispatch(&mut ctx);
        let (tasks, makespan) = ctx.into_parts();

        debug_assert!(tasks.iter().all(|t| t.remaining == 0 && t.is_complete()));
        info!(policy = %self.config.policy, makespan, "simulation finished");

        Ok(ScheduleOutcome {
            policy: self.config.policy,
            tasks,
            makespan,
        })
    }
}

/// Runs `policy_name` (`"fcfs"`, `"sjf"`, `"srtf"` or `"rr"`) over a registry.
///
/// The registry's own capacity bounds the run; `quantum` is used by RR only.
pub fn simulate(
    registry: TaskRegistry,
    policy_name: &str,
    quantum: i64,
) -> Result<ScheduleOutcome, ScheduleError> {
    let policy: Policy = policy_name.parse()?;
    let config = SimulationConfig::new(policy)
        .with_quantum(quantum)
        .with_capacity(registry.capacity());
    DispatchEngine::new(config).run(registry)
}
