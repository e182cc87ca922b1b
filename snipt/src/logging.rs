use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::log_buffer::{LogBuffer, LogEntry};

/// Initialize tracing with a log file plus the in-memory buffer shown on the logs screen.
///
/// Logs are written to `<config dir>/snipt/logs/snipt-YYYY-MM-DD-HH-MM-SS.log`.
/// `RUST_LOG` overrides `default_level`. Keep the returned guard alive until
/// shutdown or buffered file output is lost.
pub fn init_logging(buffer: LogBuffer, default_level: &str) -> Result<(PathBuf, WorkerGuard)> {
    let logs_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("snipt")
        .join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("snipt-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(LogBufferLayer::new(buffer))
        .try_init()?;

    Ok((log_path, guard))
}

/// A tracing layer that captures log entries to an in-memory buffer
pub struct LogBufferLayer {
    buffer: LogBuffer,
}

impl LogBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogBufferLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the message of an event, followed by its other fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
