use crate::{Line, Output};

/// An output that forwards lines to the `tracing` crate.
///
/// Each line becomes a `debug` event under the `witness` target, with the
/// observer id and event kind as structured fields:
///
/// ```text
/// DEBUG witness: observer 3 received 'next' event with value 42 observer=3 event=next
/// ```
///
/// # Example
///
/// ```ignore
/// use witness::{Config, DebugSink, outputs::Tracer};
///
/// let mut sink = DebugSink::new(Config::default(), Tracer);
/// sink.start()?;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tracer;

impl Output for Tracer {
    fn write_line(&mut self, line: Line<'_>) {
        tracing::debug!(
            target: "witness",
            observer = %line.observer(),
            event = %line.kind(),
            "{}",
            line.text()
        );
    }
}
