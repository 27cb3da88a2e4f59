use crate::{Config, DebugEvent, ObserverId};

/// Render a witnessed event as a log line.
///
/// Returns `None` for events that produce no output under `config`.
pub(crate) fn render(id: ObserverId, event: &DebugEvent, config: &Config) -> Option<String> {
    let kind = event.kind();
    match event {
        DebugEvent::Next(payload) => Some(match payload.debug_text() {
            Some(text) => format!("observer {id} received '{kind}' event with value {text}"),
            None => format!("observer {id} received '{kind}' event but can't show value"),
        }),
        _ if !config.render_terminal_events() => None,
        DebugEvent::Failed(payload) => Some(match payload.debug_text() {
            Some(text) => format!("observer {id} received '{kind}' event with error {text}"),
            None => format!("observer {id} received '{kind}' event but can't show error"),
        }),
        DebugEvent::Completed | DebugEvent::Interrupted => {
            Some(format!("observer {id} received '{kind}' event"))
        }
    }
}
