//! Ready-to-use [`Output`](crate::Output) implementations.
//!
//! # Available Outputs
//!
//! - [`Stderr`] - Writes plain lines to standard error (the default)
//! - [`Tracer`] - Emits lines as `tracing` events with structured fields
//! - [`Capture`] - Keeps lines in memory, for tests and embedding
//!
//! # Example
//!
//! ```ignore
//! use witness::{Config, DebugSink, outputs::Tracer};
//!
//! let sink = DebugSink::new(Config::default(), Tracer);
//! ```

mod capture;
pub use capture::Capture;

mod stderr;
pub use stderr::Stderr;

mod tracer;
pub use tracer::Tracer;
