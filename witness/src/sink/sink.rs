use std::{
    fmt,
    sync::{Arc, atomic::Ordering},
};

use tokio::{
    runtime::Handle,
    sync::{
        mpsc::{UnboundedSender, unbounded_channel},
        oneshot,
    },
    task::JoinHandle,
};

use crate::{
    Config, DebugEvent, Error, Event, IdAllocator, Observer, Registration, Result, Witnessed,
    outputs::Stderr,
    sink::{Output, SinkCommand, SinkHandle, SinkState, SinkWorker},
};

/// Owns the serialized logging worker and witnesses observers.
///
/// Create one sink, [`start`](Self::start) it on a Tokio runtime, and pass it
/// (or a reference to it) wherever observers should be witnessed. Every
/// observer witnessed by the same sink shares one FIFO queue, so lines appear
/// in the order events were submitted across all of them.
///
/// # Example
///
/// ```rust
/// use witness::{Config, DebugSink, Observer, outputs::Capture};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> witness::Result {
/// let capture = Capture::default();
/// let mut sink = DebugSink::new(Config::default(), capture.clone());
/// sink.start()?;
///
/// let observer = sink.witness(Observer::<i32, String>::new(|_| {}));
/// observer.send_next(42);
///
/// sink.flush().await?;
/// assert_eq!(capture.lines(), ["observer 0 received 'next' event with value 42"]);
/// sink.stop().await
/// # }
/// ```
///
/// # Lifecycle
///
/// - [`new`](Self::new) prepares the queue. Events witnessed before `start` are buffered.
/// - [`start`](Self::start) spawns the worker on the current runtime.
/// - [`flush`](Self::flush) waits until everything queued so far has been written.
/// - [`stop`](Self::stop) writes pending lines, then ends the worker.
///
/// Dropping a started sink queues a shutdown and detaches the worker: lines
/// already submitted are still written, but nothing waits for them. A sink
/// that is never started buffers every event in memory and writes nothing; the
/// first such event is reported with a `tracing` warning.
pub struct DebugSink {
    worker: Option<SinkWorker>,
    worker_handle: Option<JoinHandle<()>>,
    sender: UnboundedSender<SinkCommand>,
    state: Arc<SinkState>,
    ids: Arc<IdAllocator>,
}

impl DebugSink {
    /// Create a sink writing to `output`, with its own id allocator.
    pub fn new(config: Config, output: impl Output) -> Self {
        let ids = Arc::new(IdAllocator::starting_at(config.first_observer_id()));
        Self::with_ids(config, output, ids)
    }

    /// Create a sink that draws observer ids from a shared allocator.
    pub fn with_ids(config: Config, output: impl Output, ids: Arc<IdAllocator>) -> Self {
        let (tx, rx) = unbounded_channel();
        let state = Arc::new(SinkState::new(!config.start_paused()));
        let worker = SinkWorker::new(rx, Box::new(output), Arc::new(config));
        Self {
            worker: Some(worker),
            worker_handle: None,
            sender: tx,
            state,
            ids,
        }
    }

    /// Spawn the worker on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyStarted`] if called more than once.
    /// - [`Error::NoRuntime`] if called outside a Tokio runtime.
    pub fn start(&mut self) -> Result {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let mut worker = self.worker.take().ok_or(Error::AlreadyStarted)?;
        let handle = runtime.spawn(async move {
            worker.run().await;
        });
        self.worker_handle = Some(handle);
        self.state.is_started.store(true, Ordering::Relaxed);
        Ok(())
    }

    /// Returns true once [`start`](Self::start) has succeeded.
    pub fn is_started(&self) -> bool {
        self.worker.is_none()
    }

    /// Wait until every event submitted before this call has been written.
    ///
    /// # Errors
    ///
    /// - [`Error::NotStarted`] if the worker was never started.
    /// - [`Error::SinkClosed`] if the worker has already stopped.
    pub async fn flush(&self) -> Result {
        if !self.is_started() {
            return Err(Error::NotStarted);
        }
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(SinkCommand::Flush(tx))
            .map_err(|_| Error::SinkClosed)?;
        rx.await?;
        Ok(())
    }

    /// Write all pending lines, then stop the worker.
    ///
    /// Observers witnessed by this sink keep forwarding events afterwards;
    /// their events are simply no longer logged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if the worker task panicked.
    pub async fn stop(mut self) -> Result {
        let handle = self.worker_handle.take();
        match (self.sender.send(SinkCommand::Shutdown), handle) {
            (Ok(_), Some(handle)) => handle.await?,
            (Err(_), Some(handle)) => handle.abort(),
            _ => {}
        }
        Ok(())
    }

    /// Stop submitting events. Witnessed observers keep forwarding.
    pub fn pause(&self) {
        self.state.is_active.store(false, Ordering::Relaxed);
    }

    /// Resume submitting events.
    pub fn resume(&self) {
        self.state.is_active.store(true, Ordering::Relaxed);
    }

    /// Returns false while the sink is paused.
    pub fn is_active(&self) -> bool {
        self.state.is_active.load(Ordering::Relaxed)
    }

    /// The allocator this sink draws observer ids from.
    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    pub(crate) fn handle(&self) -> SinkHandle {
        SinkHandle::new(self.sender.clone(), self.state.clone())
    }

    /// Witness an observer whose value and error types have debug text.
    ///
    /// The returned wrapper forwards every event to `observer` unchanged,
    /// after queueing a copy for rendering. The copy is a `Clone` made on the
    /// delivering thread; for large values use a cheaply cloned type such as
    /// `Arc<T>` so that submission stays constant-time.
    pub fn witness<V, E>(&self, observer: Observer<V, E>) -> Witnessed<V, E>
    where
        V: fmt::Debug + Clone + Send + 'static,
        E: fmt::Debug + Clone + Send + 'static,
    {
        self.witness_with(observer, DebugEvent::debuggable)
    }

    /// Witness any observer, whatever its value and error types.
    ///
    /// Values are never copied; `next` values are logged as "can't show value".
    pub fn witness_opaque<V, E>(&self, observer: Observer<V, E>) -> Witnessed<V, E>
    where
        V: 'static,
        E: 'static,
    {
        self.witness_with(observer, DebugEvent::opaque)
    }

    fn witness_with<V, E>(
        &self,
        observer: Observer<V, E>,
        capture: fn(&Event<V, E>) -> DebugEvent,
    ) -> Witnessed<V, E>
    where
        V: 'static,
        E: 'static,
    {
        let registration = Registration::new(self.ids.next(), &observer);
        tracing::debug!(
            observer = %registration.id(),
            value_type = registration.value_type(),
            error_type = registration.error_type(),
            "witnessing observer"
        );

        let id = registration.id();
        let sink = self.handle();
        let wrapped = Observer::new(move |event: Event<V, E>| {
            sink.submit(id, || capture(&event));
            observer.send(event);
        });
        Witnessed::new(registration, wrapped)
    }
}

impl Default for DebugSink {
    fn default() -> Self {
        DebugSink::new(Config::default(), Stderr)
    }
}

impl fmt::Debug for DebugSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugSink")
            .field("is_started", &self.is_started())
            .field("is_active", &self.is_active())
            .field("next_id", &self.ids.peek())
            .finish_non_exhaustive()
    }
}

impl Drop for DebugSink {
    fn drop(&mut self) {
        // Detach rather than abort: the worker drains the queue up to Shutdown.
        if self.worker_handle.take().is_some() {
            let _ = self.sender.send(SinkCommand::Shutdown);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Mutex,
        time::{Duration, Instant},
    };

    use super::*;
    use crate::outputs::Capture;

    type Received = Arc<Mutex<Vec<Event<i32, String>>>>;

    fn recording() -> (Observer<i32, String>, Received) {
        let received = Received::default();
        let sink = received.clone();
        let observer = Observer::new(move |e| sink.lock().unwrap().push(e));
        (observer, received)
    }

    fn started(config: Config) -> (DebugSink, Capture) {
        let capture = Capture::default();
        let mut sink = DebugSink::new(config, capture.clone());
        sink.start().unwrap();
        (sink, capture)
    }

    #[tokio::test]
    async fn forwards_events_unchanged_and_in_order() {
        let (sink, _capture) = started(Config::default());
        let (observer, received) = recording();
        let witnessed = sink.witness(observer);

        let events = vec![
            Event::Next(1),
            Event::Next(2),
            Event::Failed("bad".to_string()),
            Event::Completed,
            Event::Interrupted,
        ];
        for event in events.clone() {
            witnessed.send(event);
        }

        assert_eq!(*received.lock().unwrap(), events);
        sink.stop().await.unwrap();
    }

    #[tokio::test]
    async fn renders_next_events() {
        let (sink, capture) = started(Config::default().with_first_observer_id(3));
        let (observer, _) = recording();
        let witnessed = sink.witness(observer);

        witnessed.send_next(42);
        witnessed.send_completed();
        sink.flush().await.unwrap();

        assert_eq!(witnessed.id().value(), 3);
        assert_eq!(
            capture.lines(),
            ["observer 3 received 'next' event with value 42"]
        );
    }

    #[tokio::test]
    async fn shared_values_are_not_deep_copied() {
        let (sink, capture) = started(Config::default());
        let witnessed = sink.witness(Observer::<Arc<Vec<u8>>, String>::new(|_| {}));
        let frame = Arc::new(vec![1, 2, 3]);

        witnessed.send_next(Arc::clone(&frame));
        sink.flush().await.unwrap();

        assert_eq!(
            capture.lines(),
            ["observer 0 received 'next' event with value [1, 2, 3]"]
        );
        assert_eq!(Arc::strong_count(&frame), 1);
    }

    #[tokio::test]
    async fn opaque_values_fall_back() {
        let (sink, capture) = started(Config::default().with_first_observer_id(5));
        let witnessed = sink.witness_opaque(Observer::<i32, String>::new(|_| {}));

        witnessed.send_next(42);
        sink.flush().await.unwrap();

        assert_eq!(
            capture.lines(),
            ["observer 5 received 'next' event but can't show value"]
        );
    }

    #[tokio::test]
    async fn opaque_accepts_types_without_clone_or_debug() {
        struct Frame(Vec<u8>);

        let (sink, capture) = started(Config::default().with_render_terminal_events(true));
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let seen = lengths.clone();
        let witnessed = sink.witness_opaque(Observer::<Frame, std::rc::Rc<u8>>::new(move |e| {
            if let Event::Next(frame) = e {
                seen.lock().unwrap().push(frame.0.len());
            }
        }));

        witnessed.send_next(Frame(vec![1, 2, 3]));
        witnessed.send_failed(std::rc::Rc::new(0));
        sink.flush().await.unwrap();

        assert_eq!(*lengths.lock().unwrap(), vec![3]);
        assert_eq!(
            capture.lines(),
            [
                "observer 0 received 'next' event but can't show value",
                "observer 0 received 'failed' event but can't show error",
            ]
        );
    }

    #[tokio::test]
    async fn terminal_events_render_when_configured() {
        let (sink, capture) = started(Config::default().with_render_terminal_events(true));
        let witnessed = sink.witness(Observer::<i32, String>::new(|_| {}));

        witnessed.send_failed("nope".into());
        witnessed.send_interrupted();
        sink.flush().await.unwrap();

        assert_eq!(
            capture.lines(),
            [
                "observer 0 received 'failed' event with error \"nope\"",
                "observer 0 received 'interrupted' event",
            ]
        );
    }

    #[tokio::test]
    async fn wrappers_get_distinct_increasing_ids() {
        let (sink, _) = started(Config::default());
        let (observer, _) = recording();

        let first = sink.witness(observer.clone());
        let second = sink.witness(observer);

        assert_ne!(first.id(), second.id());
        assert!(first.id() < second.id());
        assert_eq!(sink.ids().peek().value(), second.id().value() + 1);
    }

    #[tokio::test]
    async fn shared_allocator_spans_sinks() {
        let ids = Arc::new(IdAllocator::new());
        let a = DebugSink::with_ids(Config::default(), Capture::default(), ids.clone());
        let b = DebugSink::with_ids(Config::default(), Capture::default(), ids);

        let first = a.witness(Observer::<i32, String>::new(|_| {}));
        let second = b.witness(Observer::<i32, String>::new(|_| {}));

        assert_eq!(first.id().value(), 0);
        assert_eq!(second.id().value(), 1);
    }

    #[tokio::test]
    async fn lines_follow_global_submission_order() {
        let (sink, capture) = started(Config::default());
        let a = sink.witness(Observer::<i32, String>::new(|_| {}));
        let b = sink.witness(Observer::<i32, String>::new(|_| {}));

        a.send_next(1);
        b.send_next(2);
        a.send_next(3);
        sink.flush().await.unwrap();

        assert_eq!(
            capture.lines(),
            [
                "observer 0 received 'next' event with value 1",
                "observer 1 received 'next' event with value 2",
                "observer 0 received 'next' event with value 3",
            ]
        );
    }

    #[tokio::test]
    async fn events_before_start_are_buffered() {
        let capture = Capture::default();
        let mut sink = DebugSink::new(Config::default(), capture.clone());
        let witnessed = sink.witness(Observer::<i32, String>::new(|_| {}));

        witnessed.send_next(1);
        assert_eq!(sink.flush().await, Err(Error::NotStarted));

        sink.start().unwrap();
        sink.flush().await.unwrap();
        assert_eq!(capture.lines(), ["observer 0 received 'next' event with value 1"]);
    }

    #[tokio::test]
    async fn start_twice_fails() {
        let (mut sink, _) = started(Config::default());
        assert_eq!(sink.start(), Err(Error::AlreadyStarted));
        assert!(sink.is_started());
    }

    #[test]
    fn start_without_runtime_fails() {
        let mut sink = DebugSink::new(Config::default(), Capture::default());
        assert_eq!(sink.start(), Err(Error::NoRuntime));
        assert!(!sink.is_started());
    }

    #[tokio::test]
    async fn paused_sink_logs_nothing_but_forwards() {
        let (sink, capture) = started(Config::default().with_start_paused(true));
        let (observer, received) = recording();
        let witnessed = sink.witness(observer);
        assert!(!sink.is_active());

        witnessed.send_next(1);
        sink.resume();
        witnessed.send_next(2);
        sink.pause();
        witnessed.send_next(3);
        sink.flush().await.unwrap();

        assert_eq!(
            *received.lock().unwrap(),
            vec![Event::Next(1), Event::Next(2), Event::Next(3)]
        );
        assert_eq!(capture.lines(), ["observer 0 received 'next' event with value 2"]);
    }

    #[tokio::test]
    async fn stop_drains_pending_lines() {
        let (sink, capture) = started(Config::default());
        let witnessed = sink.witness(Observer::<i32, String>::new(|_| {}));

        for i in 0..100 {
            witnessed.send_next(i);
        }
        sink.stop().await.unwrap();

        assert_eq!(capture.len(), 100);
        assert_eq!(
            capture.lines().last().map(String::as_str),
            Some("observer 0 received 'next' event with value 99")
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn dropping_sink_still_writes_submitted_lines() {
        const EVENTS: usize = 20_000;
        let (sink, capture) = started(Config::default());
        let witnessed = sink.witness(Observer::<usize, String>::new(|_| {}));

        for i in 0..EVENTS {
            witnessed.send_next(i);
        }
        drop(sink);

        let deadline = Instant::now() + Duration::from_secs(10);
        while capture.len() < EVENTS && Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(capture.len(), EVENTS);
        assert_eq!(
            capture.lines().last().map(String::as_str),
            Some("observer 0 received 'next' event with value 19999")
        );
    }

    #[tokio::test]
    async fn forwarding_continues_after_stop() {
        let (sink, capture) = started(Config::default());
        let (observer, received) = recording();
        let witnessed = sink.witness(observer);

        sink.stop().await.unwrap();
        witnessed.send_next(7);

        assert_eq!(*received.lock().unwrap(), vec![Event::Next(7)]);
        assert!(capture.is_empty());
    }

    #[derive(Clone)]
    struct Slow;

    impl fmt::Debug for Slow {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            std::thread::sleep(Duration::from_millis(300));
            f.write_str("Slow")
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn submission_does_not_wait_for_rendering() {
        let (sink, capture) = started(Config::default());
        let witnessed = sink.witness(Observer::<Slow, String>::new(|_| {}));

        let begin = Instant::now();
        for _ in 0..5 {
            witnessed.send_next(Slow);
        }
        assert!(begin.elapsed() < Duration::from_millis(300));

        sink.stop().await.unwrap();
        assert_eq!(capture.len(), 5);
    }
}
