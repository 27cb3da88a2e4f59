use std::fmt;

use crate::{Observer, ObserverId};

/// Metadata recorded when an observer is witnessed.
///
/// - `id`: the identifier used in every log line for this observer.
/// - `value_type` / `error_type`: the observer's declared types, as reported by
///   [`std::any::type_name`]. Diagnostic only; the exact text is not stable
///   across compiler versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Registration {
    id: ObserverId,
    value_type: &'static str,
    error_type: &'static str,
}

impl Registration {
    pub(crate) fn new<V, E>(id: ObserverId, observer: &Observer<V, E>) -> Self {
        Self {
            id,
            value_type: observer.value_type(),
            error_type: observer.error_type(),
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    pub fn error_type(&self) -> &'static str {
        self.error_type
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observer {} <{}, {}>",
            self.id, self.value_type, self.error_type
        )
    }
}
