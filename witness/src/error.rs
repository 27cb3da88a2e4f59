use std::sync::Arc;

/// The single error type for sink control operations.
///
/// The event path itself never fails: wrapping, submitting and forwarding are
/// infallible. Only the lifecycle calls on [`DebugSink`](crate::DebugSink)
/// (`start`, `flush`, `stop`) return `witness::Result<T>`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Debug sink has already started.")]
    AlreadyStarted,

    #[error("Debug sink has not been started.")]
    NotStarted,

    #[error("No Tokio runtime available to run the debug sink worker.")]
    NoRuntime,

    #[error("Debug sink worker is no longer running.")]
    SinkClosed,

    #[error("Internal witness error {0}")]
    Internal(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn internal(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Internal(Arc::new(e))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyStarted, Self::AlreadyStarted) => true,
            (Self::NotStarted, Self::NotStarted) => true,
            (Self::NoRuntime, Self::NoRuntime) => true,
            (Self::SinkClosed, Self::SinkClosed) => true,
            (Self::Internal(a), Self::Internal(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<tokio::sync::oneshot::error::RecvError> for Error {
    fn from(_e: tokio::sync::oneshot::error::RecvError) -> Self {
        Error::SinkClosed
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::internal(e)
    }
}
