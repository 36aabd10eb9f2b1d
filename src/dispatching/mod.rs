//! Dispatch engine and scheduling policies.
//!
//! Provides the four classic single-CPU policies (FCFS, SJF, SRTF, RR) as
//! interchangeable strategies over one shared time-accounting core.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{DispatchEngine, EventLog};
//! use cpu_sched_sim::config::SimulationConfig;
//! use cpu_sched_sim::models::{Policy, TaskRegistry};
//!
//! let registry = TaskRegistry::from_bursts(10, [("X", 5), ("Y", 2)]).unwrap();
//! let engine = DispatchEngine::new(SimulationConfig::new(Policy::RoundRobin).with_quantum(4));
//!
//! let mut log = EventLog::new();
//! let outcome = engine.run_observed(registry, &mut log).unwrap();
//! assert_eq!(outcome.makespan, 7);
//! assert_eq!(log.len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

mod context;
mod engine;
mod observer;
pub mod policies;

pub use context::{Clock, SimulationContext};
pub use engine::{simulate, DispatchEngine, ScheduleOutcome};
pub use observer::{ChannelObserver, DispatchObserver, EventLog, NoopObserver};

use std::fmt::Debug;

/// A dispatch policy.
///
/// Implementations decide which task runs next and for how long, and
/// commit each decision through [`SimulationContext::grant`]. A policy
/// must leave every task completed when `dispatch` returns.
pub trait DispatchPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs all tasks in `ctx` to completion.
    fn dispatch(&self, ctx: &mut SimulationContext<'_>);

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether a running task can be interrupted before completion.
    fn is_preemptive(&self) -> bool {
        false
    }
}
