//! Discrete-time CPU scheduling simulator.
//!
//! Runs classic single-CPU policies over a static task list and derives
//! per-task waiting, turnaround and response times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskRegistry`, `Policy`, `SliceEvent`
//! - **`dispatching`**: Clock, dispatch engine, and the FCFS/SJF/SRTF/RR policies
//! - **`metrics`**: Per-task metrics and their means
//! - **`validation`**: Configuration and task-list preconditions
//! - **`loader`**: `name priority burst` task file parsing
//! - **`workload`**: Seeded random task sets
//!
//! # Time Model
//!
//! All tasks arrive at t=0 and the clock only advances when a task runs,
//! so turnaround equals completion time and response equals the clock
//! value of the first dispatch. `priority` is carried on each task but no
//! policy reads it.
//!
//! # Logging
//!
//! The library emits `tracing` events (run boundaries at `info`, each
//! slice at `debug`) and installs no subscriber; callers that want them
//! must set one up. The `cpu-sched-sim` binary logs to stderr, filtered by
//! `RUST_LOG` (default `warn`).
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::dispatching::simulate;
//! use cpu_sched_sim::models::TaskRegistry;
//!
//! let registry = TaskRegistry::from_bursts(10, [("A", 5), ("B", 3), ("C", 8)]).unwrap();
//! let summary = simulate(registry, "sjf", 10).unwrap().summary().unwrap();
//! assert_eq!(summary.tasks[0].name, "B");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{ErrorKind, ScheduleError};
