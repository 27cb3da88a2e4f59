use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::mpsc::UnboundedSender;

use crate::{DebugEvent, ObserverId, sink::SinkCommand};

/// Flags shared by a sink and every handle it gives out.
#[derive(Debug, Default)]
pub(crate) struct SinkState {
    pub is_active: AtomicBool,
    pub is_started: AtomicBool,
    warned_unstarted: AtomicBool,
}

impl SinkState {
    pub fn new(is_active: bool) -> Self {
        Self {
            is_active: AtomicBool::new(is_active),
            ..Self::default()
        }
    }

    /// True exactly once, for the first submission made before the worker runs.
    fn should_warn_unstarted(&self) -> bool {
        !self.is_started.load(Ordering::Relaxed)
            && !self.warned_unstarted.swap(true, Ordering::Relaxed)
    }
}

/// Submission side of the sink, captured by every witnessed observer.
#[derive(Clone, Debug)]
pub(crate) struct SinkHandle {
    sender: UnboundedSender<SinkCommand>,
    state: Arc<SinkState>,
}

impl SinkHandle {
    pub fn new(sender: UnboundedSender<SinkCommand>, state: Arc<SinkState>) -> Self {
        Self { sender, state }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active.load(Ordering::Relaxed)
    }

    /// Queue an event for rendering. Never blocks.
    ///
    /// The event is only built when the sink is active. Once the worker is
    /// gone the event is dropped silently.
    pub fn submit(&self, id: ObserverId, event: impl FnOnce() -> DebugEvent) {
        if !self.is_active() {
            return;
        }
        if self.state.should_warn_unstarted() {
            tracing::warn!(
                observer = %id,
                "debug sink not started, events are buffered until DebugSink::start"
            );
        }
        if self
            .sender
            .send(SinkCommand::Render(id, event()))
            .is_err()
        {
            tracing::trace!(observer = %id, "debug sink closed, event dropped");
        }
    }
}
