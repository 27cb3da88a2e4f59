use std::fmt;

use crate::{Event, Observer, ObserverId, Registration};

/// An observer wrapped by a [`DebugSink`](crate::DebugSink).
///
/// Sending an event queues a copy for rendering, then delivers the original
/// to the wrapped observer on the calling thread. Apart from the log output,
/// a `Witnessed` behaves exactly like the observer it wraps; use
/// [`into_observer`](Self::into_observer) to hand it to code expecting a
/// plain [`Observer`].
pub struct Witnessed<V, E> {
    registration: Registration,
    observer: Observer<V, E>,
}

impl<V, E> Witnessed<V, E> {
    pub(crate) fn new(registration: Registration, observer: Observer<V, E>) -> Self {
        Self {
            registration,
            observer,
        }
    }

    /// The id that appears in this observer's log lines.
    pub fn id(&self) -> ObserverId {
        self.registration.id()
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    #[inline]
    pub fn send(&self, event: Event<V, E>) {
        self.observer.send(event)
    }

    pub fn send_next(&self, value: V) {
        self.observer.send_next(value)
    }

    pub fn send_failed(&self, error: E) {
        self.observer.send_failed(error)
    }

    pub fn send_completed(&self) {
        self.observer.send_completed()
    }

    pub fn send_interrupted(&self) {
        self.observer.send_interrupted()
    }

    /// Borrow the intercepting observer.
    pub fn observer(&self) -> &Observer<V, E> {
        &self.observer
    }

    /// Unwrap into the intercepting observer. Events sent to it are still logged.
    pub fn into_observer(self) -> Observer<V, E> {
        self.observer
    }
}

impl<V, E> Clone for Witnessed<V, E> {
    fn clone(&self) -> Self {
        Self {
            registration: self.registration.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<V, E> From<Witnessed<V, E>> for Observer<V, E> {
    fn from(witnessed: Witnessed<V, E>) -> Self {
        witnessed.into_observer()
    }
}

impl<V, E> fmt::Debug for Witnessed<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Witnessed")
            .field("registration", &self.registration)
            .finish_non_exhaustive()
    }
}
