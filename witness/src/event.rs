use std::fmt;

/// A single notification delivered to an [`Observer`](crate::Observer).
///
/// This mirrors the event type of the host reactive pipeline: any number of
/// `Next` values, followed by at most one terminating event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<V, E> {
    Next(V),
    Failed(E),
    Completed,
    Interrupted,
}

impl<V, E> Event<V, E> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Next(_) => EventKind::Next,
            Event::Failed(_) => EventKind::Failed,
            Event::Completed => EventKind::Completed,
            Event::Interrupted => EventKind::Interrupted,
        }
    }
}

/// Payload-free tag of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    Next,
    Failed,
    Completed,
    Interrupted,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Next => "next",
            EventKind::Failed => "failed",
            EventKind::Completed => "completed",
            EventKind::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
