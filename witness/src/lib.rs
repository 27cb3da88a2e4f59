#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Witness
//!
//! Debug interception for reactive observers.
//!
//! Witness wraps an [`Observer`] so that every event it receives is also
//! described in a log line, without changing what the observer sees. Each
//! wrapped observer gets a unique [`ObserverId`]; all lines are rendered by a
//! single background worker, in submission order, off the thread that
//! delivered the event.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use witness::*;
//!
//! #[tokio::main]
//! async fn main() -> Result {
//!     let mut sink = DebugSink::default(); // writes to stderr
//!     sink.start()?;
//!
//!     let printer = Observer::<i32, String>::new(|event| println!("{event:?}"));
//!     let observer = sink.witness(printer);
//!
//!     observer.send_next(42);
//!     // stderr: observer 0 received 'next' event with value 42
//!     observer.send_completed();
//!
//!     sink.stop().await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observer`] | Callback endpoint receiving [`Event`]s |
//! | [`DebugSink`] | Owns the logging worker and witnesses observers |
//! | [`Witnessed`] | An observer wrapped by a sink |
//! | [`ObserverId`] | Unique, increasing identifier of a witnessed observer |
//! | [`IdAllocator`] | Thread-safe source of [`ObserverId`]s, shareable across sinks |
//! | [`Output`] | Destination for rendered lines (see [`outputs`]) |
//! | [`Config`] | Sink configuration |
//!
//! ## Log Format
//!
//! ```text
//! observer 3 received 'next' event with value 42
//! observer 5 received 'next' event but can't show value
//! ```
//!
//! Values are shown with their `Debug` text. Observers witnessed with
//! [`DebugSink::witness_opaque`] (types without `Debug`), or whose `Debug`
//! impl fails, get the "can't show value" form. Terminating events
//! (`failed`, `completed`, `interrupted`) are silent unless
//! [`Config::with_render_terminal_events`] is set.
//!
//! ## Features
//!
//! - **`serde`** - `Serialize`/`Deserialize` for [`Config`], [`ObserverId`] and [`EventKind`]

mod config;
mod debug_event;
mod error;
mod event;
mod observer;
mod observer_id;
mod payload;
mod registration;
mod render;
mod witnessed;

pub mod outputs;
mod sink;

pub use config::Config;
pub use debug_event::DebugEvent;
pub use error::Error;
pub use event::{Event, EventKind};
pub use observer::Observer;
pub use observer_id::{IdAllocator, ObserverId};
pub use payload::Payload;
pub use registration::Registration;
pub use sink::{DebugSink, Line, Output};
pub use witnessed::Witnessed;

/// Convenience alias for `Result<T, witness::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
