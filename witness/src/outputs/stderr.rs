use std::io::{self, Write};

use crate::{Line, Output};

/// Writes each line to the process's standard error stream.
///
/// This is the default output. Write failures are reported through
/// `tracing` and otherwise ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Output for Stderr {
    fn write_line(&mut self, line: Line<'_>) {
        if let Err(e) = writeln!(io::stderr().lock(), "{line}") {
            tracing::warn!(error = %e, observer = %line.observer(), "failed to write debug line");
        }
    }

    fn flush(&mut self) {
        let _ = io::stderr().flush();
    }
}
