use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Line, Output};

/// Collects rendered lines in memory.
///
/// Clones share the same buffer, so keep one clone and hand the other to the
/// sink. Pair with [`DebugSink::flush`](crate::DebugSink::flush) to wait for
/// pending lines before reading.
///
/// ```ignore
/// let capture = Capture::default();
/// let mut sink = DebugSink::new(Config::default(), capture.clone());
/// sink.start()?;
///
/// let observer = sink.witness(Observer::<i32, String>::new(|_| {}));
/// observer.send_next(42);
/// sink.flush().await?;
///
/// assert_eq!(capture.lines(), ["observer 0 received 'next' event with value 42"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Capture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every line captured so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }
}

impl Output for Capture {
    fn write_line(&mut self, line: Line<'_>) {
        self.buffer().push(line.text().to_owned());
    }
}
