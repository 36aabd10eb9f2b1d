//! Dispatch notifications.
//!
//! Observers see every granted slice but never feed back into a dispatch
//! decision. The engine makes one decision at a time and commits its
//! effects before notifying, so observers receive events in the exact
//! order of the synchronous run.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::warn;

use crate::models::{SliceEvent, Task, TaskId};

/// Receiver of dispatch notifications.
pub trait DispatchObserver {
    /// Called once per granted slice (or SRTF tick).
    fn on_slice(&mut self, event: &SliceEvent);

    /// Called when a task completes, after its derived times are fixed.
    fn on_complete(&mut self, _task: &Task) {}
}

impl<F: FnMut(&SliceEvent)> DispatchObserver for F {
    fn on_slice(&mut self, event: &SliceEvent) {
        self(event)
    }
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {
    fn on_slice(&mut self, _event: &SliceEvent) {}
}

/// Records slice events and completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<SliceEvent>,
    completed: Vec<TaskId>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded slice events, in dispatch order.
    pub fn events(&self) -> &[SliceEvent] {
        &self.events
    }

    /// IDs of completed tasks, in completion order.
    pub fn completion_order(&self) -> &[TaskId] {
        &self.completed
    }

    /// Number of recorded slice events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the log, yielding the slice events.
    pub fn into_events(self) -> Vec<SliceEvent> {
        self.events
    }
}

impl DispatchObserver for EventLog {
    fn on_slice(&mut self, event: &SliceEvent) {
        self.events.push(event.clone());
    }

    fn on_complete(&mut self, task: &Task) {
        self.completed.push(task.id);
    }
}

/// Forwards slice events over a channel to an independent consumer.
///
/// If the receiving side goes away, further events are dropped with a
/// single warning; the run itself is unaffected.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<SliceEvent>,
    disconnected: bool,
}

impl ChannelObserver {
    /// Wraps an existing sender.
    pub fn new(sender: Sender<SliceEvent>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }

    /// Creates an observer and the receiver for its events.
    pub fn channel() -> (Self, Receiver<SliceEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }
}

impl DispatchObserver for ChannelObserver {
    fn on_slice(&mut self, event: &SliceEvent) {
        if self.disconnected {
            return;
        }
        if self.sender.send(event.clone()).is_err() {
            warn!(task_id = event.task_id, "event receiver dropped; notifications disabled");
            self.disconnected = true;
        }
    }
}
