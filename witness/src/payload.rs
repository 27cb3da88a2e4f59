use std::{
    any::Any,
    fmt::{self, Write},
    panic::{AssertUnwindSafe, catch_unwind},
};

type DebugFn = fn(&dyn Any, &mut fmt::Formatter<'_>) -> fmt::Result;

/// A type-erased copy of an event value, carried to the sink worker.
///
/// A payload built with [`debuggable`](Self::debuggable) owns the value and
/// remembers how to format it. One built with [`opaque`](Self::opaque) is a
/// marker that carries nothing. The worker asks for
/// [`debug_text`](Self::debug_text) and falls back to a "can't show" line
/// when none is available.
pub struct Payload {
    shown: Option<(Box<dyn Any + Send>, DebugFn)>,
}

fn debug_any<T: fmt::Debug + 'static>(value: &dyn Any, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.downcast_ref::<T>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => Err(fmt::Error),
    }
}

struct Shown<'a>(&'a dyn Any, DebugFn);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.1)(self.0, f)
    }
}

impl Payload {
    pub fn debuggable<T: fmt::Debug + Send + 'static>(value: T) -> Self {
        Self {
            shown: Some((Box::new(value), debug_any::<T>)),
        }
    }

    /// A payload for a value that cannot be shown.
    pub fn opaque() -> Self {
        Self { shown: None }
    }

    /// Returns true if the value was captured with a debug representation.
    pub fn is_debuggable(&self) -> bool {
        self.shown.is_some()
    }

    /// Render the value's `Debug` text.
    ///
    /// Returns `None` for opaque payloads, and also when the value's `Debug`
    /// impl reports an error or panics.
    pub fn debug_text(&self) -> Option<String> {
        let (value, debug) = self.shown.as_ref()?;
        let value: &dyn Any = &**value;
        catch_unwind(AssertUnwindSafe(|| {
            let mut text = String::new();
            write!(text, "{}", Shown(value, *debug)).ok().map(|_| text)
        }))
        .ok()
        .flatten()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("debuggable", &self.is_debuggable())
            .finish_non_exhaustive()
    }
}
