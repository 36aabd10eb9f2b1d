//! Metrics aggregation.
//!
//! Reads the derived times the dispatch engine fixed on each task and
//! reports them together with their means. Read-only with respect to
//! task state.

mod summary;

pub use summary::{ScheduleSummary, TaskMetrics};
