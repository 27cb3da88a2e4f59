/// Runtime configuration for a [`DebugSink`](crate::DebugSink).
///
/// Use the builder methods to customize, or use [`Default`] for the
/// reference behavior (ids from 0, only `next` events rendered, active).
///
/// # Examples
///
/// ```rust
/// use witness::Config;
///
/// let config = Config::default()
///     .with_first_observer_id(1)           // human-friendly numbering
///     .with_render_terminal_events(true)   // also log failed/completed/interrupted
///     .with_start_paused(true);            // enable later via DebugSink::resume
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// First id issued by the sink's own allocator.
    /// Ignored when an allocator is injected with `DebugSink::with_ids`.
    /// Default: 0
    first_observer_id: u64,

    /// Whether `failed`, `completed` and `interrupted` events produce lines.
    /// Default: false
    render_terminal_events: bool,

    /// Whether wrappers start without submitting anything.
    /// Default: false
    start_paused: bool,
}

impl Config {
    /// Set the first id the sink's allocator will issue.
    pub fn with_first_observer_id(mut self, first: u64) -> Self {
        self.first_observer_id = first;
        self
    }

    /// Returns the first id the sink's allocator will issue.
    pub fn first_observer_id(&self) -> u64 {
        self.first_observer_id
    }

    /// Render terminating events in addition to `next` events.
    pub fn with_render_terminal_events(mut self, render: bool) -> Self {
        self.render_terminal_events = render;
        self
    }

    pub fn render_terminal_events(&self) -> bool {
        self.render_terminal_events
    }

    /// Start the sink paused. Events flow through wrappers untouched and
    /// nothing is logged until [`DebugSink::resume`](crate::DebugSink::resume).
    pub fn with_start_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    pub fn start_paused(&self) -> bool {
        self.start_paused
    }
}
