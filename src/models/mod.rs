//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Task` | One CPU burst plus its run-state and derived times |
//! | `TaskRegistry` | Ordered, capacity-bounded task list with ID assignment |
//! | `Policy` | Which dispatch policy to run |
//! | `SliceEvent` | Observable record of one granted slice |

mod event;
mod policy;
mod registry;
mod task;

pub use event::SliceEvent;
pub use policy::Policy;
pub use registry::{TaskRegistry, DEFAULT_CAPACITY};
pub use task::{Task, TaskId};
