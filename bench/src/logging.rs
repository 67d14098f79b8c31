use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    layer::{Layer, SubscriberExt},
};

pub struct Logging {
    file_guard: Option<WorkerGuard>,
    stderr_guard: Option<WorkerGuard>,
}

impl Logging {
    pub fn new() -> Self {
        Logging {
            file_guard: None,
            stderr_guard: None,
        }
    }

    pub fn init(&mut self, debug: &Option<PathBuf>) -> &mut Self {
        let mut layers = vec![];

        let stderr_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());

        let stderr_layer = fmt::Layer::default()
            .with_target(false)
            .with_writer(stderr_writer)
            .with_filter(stderr_filter)
            .boxed();

        self.stderr_guard = Some(stderr_guard);

        layers.push(stderr_layer);

        if let Some(file_path) = debug {
            let _ = std::fs::remove_file(file_path); // Remove file if it exists
            let file_appender = tracing_appender::rolling::never("", file_path);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::TRACE)
                .boxed();
            self.file_guard = Some(file_guard);

            layers.push(file_layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        self
    }
}
