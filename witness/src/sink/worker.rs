use std::{
    fmt,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::Arc,
};

use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    Config, DebugEvent, ObserverId,
    render::render,
    sink::{Line, Output, SinkCommand},
};

/// The single consumer of the sink queue.
pub(crate) struct SinkWorker {
    receiver: UnboundedReceiver<SinkCommand>,
    output: Box<dyn Output>,
    config: Arc<Config>,
    rendered: u64,
    suppressed: u64,
    output_panics: u64,
    is_alive: bool,
}

impl SinkWorker {
    pub fn new(
        receiver: UnboundedReceiver<SinkCommand>,
        output: Box<dyn Output>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            receiver,
            output,
            config,
            rendered: 0,
            suppressed: 0,
            output_panics: 0,
            is_alive: true,
        }
    }

    pub async fn run(&mut self) {
        while self.is_alive {
            match self.receiver.recv().await {
                Some(cmd) => self.handle_command(cmd),
                None => break,
            }
        }
        tracing::debug!(
            rendered = self.rendered,
            suppressed = self.suppressed,
            output_panics = self.output_panics,
            "debug sink worker stopped"
        );
    }

    fn handle_command(&mut self, cmd: SinkCommand) {
        use SinkCommand::*;
        match cmd {
            Render(id, event) => {
                self.handle_event(id, &event);
            }
            Flush(response) => {
                self.flush_output();
                let _ = response.send(());
            }
            Shutdown => {
                self.flush_output();
                self.is_alive = false;
            }
        }
    }

    fn handle_event(&mut self, id: ObserverId, event: &DebugEvent) {
        let Some(text) = render(id, event, &self.config) else {
            self.suppressed += 1;
            return;
        };

        let line = Line::new(id, event.kind(), &text);
        let output = &mut self.output;
        if catch_unwind(AssertUnwindSafe(|| output.write_line(line))).is_err() {
            tracing::error!(observer = %id, "debug output panicked, line lost");
            self.output_panics += 1;
            return;
        }
        self.rendered += 1;
    }

    fn flush_output(&mut self) {
        let output = &mut self.output;
        if catch_unwind(AssertUnwindSafe(|| output.flush())).is_err() {
            tracing::error!("debug output panicked while flushing");
            self.output_panics += 1;
        }
    }
}

impl fmt::Debug for SinkWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkWorker")
            .field("receiver", &self.receiver)
            .field("config", &self.config)
            .field("rendered", &self.rendered)
            .field("suppressed", &self.suppressed)
            .field("output_panics", &self.output_panics)
            .field("is_alive", &self.is_alive)
            .finish_non_exhaustive()
    }
}
