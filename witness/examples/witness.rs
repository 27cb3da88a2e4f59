use witness::{Config, DebugSink, Event, Observer, outputs::Tracer};

#[derive(Clone, Debug)]
enum Reading {
    Temperature(f64),
    Humidity(f64),
}

// Not Debug: logged as "can't show value"
#[derive(Clone)]
struct Frame(#[allow(dead_code)] Vec<u8>);

// A minimal operator: feeds `Reading`s derived from raw numbers into `downstream`.
fn map_readings(downstream: Observer<Reading, String>) -> Observer<f64, String> {
    Observer::new(move |event| match event {
        Event::Next(v) if v < 0.0 => downstream.send_failed(format!("negative reading {v}")),
        Event::Next(v) if v <= 1.0 => downstream.send_next(Reading::Humidity(v)),
        Event::Next(v) => downstream.send_next(Reading::Temperature(v)),
        Event::Failed(e) => downstream.send_failed(e),
        Event::Completed => downstream.send_completed(),
        Event::Interrupted => downstream.send_interrupted(),
    })
}

async fn run() -> witness::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "witness=debug".into()),
        )
        .init();

    let config = Config::default()
        .with_first_observer_id(1)
        .with_render_terminal_events(true);
    let mut sink = DebugSink::new(config, Tracer);
    sink.start()?;

    let printer = Observer::<Reading, String>::new(|event| println!("printer got {event:?}"));
    let readings = sink.witness(printer);
    let raw = sink.witness(map_readings(readings.into_observer()));

    for value in [21.5, 0.4, 23.0] {
        raw.send_next(value);
    }
    raw.send_next(-1.0);

    let frames = sink.witness_opaque(Observer::<Frame, ()>::new(|_| {}));
    frames.send_next(Frame(vec![0xde, 0xad]));
    frames.send_completed();

    // Graceful shutdown (renders every line queued so far)
    sink.stop().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error while executing example: {e}");
    }
}
