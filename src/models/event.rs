use serde::{Deserialize, Serialize};

use super::TaskId;

/// "Task X ran for D units starting at clock C."
///
/// Emitted once per slice (or SRTF tick) granted by the dispatch engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceEvent {
    pub task_id: TaskId,
    pub task_name: String,
    /// Clock value when the slice started.
    pub start: i64,
    /// Units executed. Zero only for zero-burst tasks.
    pub length: i64,
}

impl SliceEvent {
    /// Clock value when the slice ended.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.length
    }
}
