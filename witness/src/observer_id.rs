use std::{
    fmt, hash,
    sync::atomic::{AtomicU64, Ordering},
};

/// Identifier assigned to every witnessed observer.
///
/// Ids are handed out by an [`IdAllocator`] in strictly increasing order, so
/// comparing two ids tells which observer was witnessed first. `Display`
/// prints the bare sequence number, which is what appears in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ObserverId {
    fn from(value: u64) -> Self {
        ObserverId(value)
    }
}

impl From<ObserverId> for u64 {
    fn from(value: ObserverId) -> Self {
        value.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues process-unique [`ObserverId`]s.
///
/// The counter is atomic, so observers may be witnessed concurrently from any
/// number of threads without duplicate ids. Share one allocator between sinks
/// with an `Arc` when ids must be unique across them.
///
/// ```rust
/// use witness::IdAllocator;
///
/// let ids = IdAllocator::starting_at(10);
/// assert_eq!(ids.next().value(), 10);
/// assert_eq!(ids.next().value(), 11);
/// ```
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first issued id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Issue the next id.
    #[must_use]
    pub fn next(&self) -> ObserverId {
        ObserverId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the id the next call to [`next`](Self::next) would issue.
    pub fn peek(&self) -> ObserverId {
        ObserverId(self.next.load(Ordering::Relaxed))
    }
}
