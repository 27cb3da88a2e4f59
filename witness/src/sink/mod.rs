//! The serialized logging sink.
//!
//! Every witnessed observer submits its events to one shared, unbounded FIFO
//! queue. A single worker task drains the queue, renders each event and hands
//! the line to an [`Output`]. Submission never blocks the thread delivering
//! the event.
//!
//! ```text
//!  observer A ─┐
//!  observer B ─┼─> SinkHandle ──(mpsc, FIFO)──> SinkWorker ──> Output
//!  observer C ─┘
//! ```

mod command;
mod handle;
mod output;
#[allow(clippy::module_inception)]
mod sink;
mod worker;

pub(crate) use command::SinkCommand;
pub(crate) use handle::{SinkHandle, SinkState};
pub use output::{Line, Output};
pub use sink::DebugSink;
pub(crate) use worker::SinkWorker;
