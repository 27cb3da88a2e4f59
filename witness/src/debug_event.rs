use std::fmt;

use crate::{Event, EventKind, Payload};

/// The event tag handed to the sink worker.
///
/// Built from a host [`Event`] by copying its value or error into a
/// type-erased [`Payload`].
#[derive(Debug)]
pub enum DebugEvent {
    Next(Payload),
    Failed(Payload),
    Completed,
    Interrupted,
}

impl DebugEvent {
    /// Capture an event whose value and error types have debug text.
    pub fn debuggable<V, E>(event: &Event<V, E>) -> Self
    where
        V: fmt::Debug + Clone + Send + 'static,
        E: fmt::Debug + Clone + Send + 'static,
    {
        match event {
            Event::Next(value) => DebugEvent::Next(Payload::debuggable(value.clone())),
            Event::Failed(error) => DebugEvent::Failed(Payload::debuggable(error.clone())),
            Event::Completed => DebugEvent::Completed,
            Event::Interrupted => DebugEvent::Interrupted,
        }
    }

    /// Capture only the kind of an event; values render as unprintable.
    pub fn opaque<V, E>(event: &Event<V, E>) -> Self {
        match event {
            Event::Next(_) => DebugEvent::Next(Payload::opaque()),
            Event::Failed(_) => DebugEvent::Failed(Payload::opaque()),
            Event::Completed => DebugEvent::Completed,
            Event::Interrupted => DebugEvent::Interrupted,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            DebugEvent::Next(_) => EventKind::Next,
            DebugEvent::Failed(_) => EventKind::Failed,
            DebugEvent::Completed => EventKind::Completed,
            DebugEvent::Interrupted => EventKind::Interrupted,
        }
    }
}
