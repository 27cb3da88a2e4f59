use tokio::sync::oneshot;

use crate::{DebugEvent, ObserverId};

#[derive(Debug)]
pub(crate) enum SinkCommand {
    Render(ObserverId, DebugEvent),
    /// Responds once every command queued before it has been processed.
    Flush(oneshot::Sender<()>),
    Shutdown,
}
