use std::{any, fmt, sync::Arc};

use crate::Event;

type Action<V, E> = Arc<dyn Fn(Event<V, E>) + Send + Sync>;

/// A callback endpoint receiving [`Event`]s from an upstream producer.
///
/// `Observer` is cheap to clone; clones share the same action. It can be
/// invoked from any thread.
///
/// ```rust
/// use witness::{Event, Observer};
///
/// let observer = Observer::<i32, String>::new(|event| {
///     if let Event::Next(value) = event {
///         println!("got {value}");
///     }
/// });
/// observer.send_next(1);
/// observer.send_completed();
/// ```
pub struct Observer<V, E> {
    action: Action<V, E>,
}

impl<V, E> Observer<V, E> {
    pub fn new(action: impl Fn(Event<V, E>) + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
        }
    }

    /// Deliver an event to this observer's action.
    #[inline]
    pub fn send(&self, event: Event<V, E>) {
        (self.action)(event)
    }

    pub fn send_next(&self, value: V) {
        self.send(Event::Next(value))
    }

    pub fn send_failed(&self, error: E) {
        self.send(Event::Failed(error))
    }

    pub fn send_completed(&self) {
        self.send(Event::Completed)
    }

    pub fn send_interrupted(&self) {
        self.send(Event::Interrupted)
    }

    /// Name of the declared value type, for diagnostics.
    pub fn value_type(&self) -> &'static str {
        any::type_name::<V>()
    }

    /// Name of the declared error type, for diagnostics.
    pub fn error_type(&self) -> &'static str {
        any::type_name::<E>()
    }
}

impl<V, E> Clone for Observer<V, E> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
        }
    }
}

impl<V, E> fmt::Debug for Observer<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("value_type", &self.value_type())
            .field("error_type", &self.error_type())
            .finish_non_exhaustive()
    }
}
