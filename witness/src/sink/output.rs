use std::fmt;

use crate::{EventKind, ObserverId};

/// A rendered log line together with the event it describes.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    observer: ObserverId,
    kind: EventKind,
    text: &'a str,
}

impl<'a> Line<'a> {
    pub(crate) fn new(observer: ObserverId, kind: EventKind, text: &'a str) -> Self {
        Self {
            observer,
            kind,
            text,
        }
    }

    /// The witnessed observer this line belongs to.
    pub fn observer(&self) -> ObserverId {
        self.observer
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Destination for rendered lines.
///
/// The sink worker owns its output and calls it from a single task, one line
/// at a time, in submission order. Implementations must not block for long:
/// every witnessed observer shares the same worker.
///
/// # Example
///
/// ```rust
/// use witness::{Line, Output};
///
/// struct Prefixed;
///
/// impl Output for Prefixed {
///     fn write_line(&mut self, line: Line<'_>) {
///         eprintln!("[debug] {line}");
///     }
/// }
/// ```
///
/// See [`outputs`](crate::outputs) for ready-made implementations.
pub trait Output: Send + 'static {
    /// Called once per rendered event.
    fn write_line(&mut self, line: Line<'_>);

    /// Called when the sink is flushed and before it shuts down.
    fn flush(&mut self) {}
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn write_line(&mut self, line: Line<'_>) {
        (**self).write_line(line)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}
