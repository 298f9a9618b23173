//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with an interactive session on
//! stdout. The filter comes from `RUST_LOG` when set.

use core::str::FromStr;

use ::tracing::Subscriber;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "warn";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// JSON objects with timestamps, one per line.
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected pretty or json)")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat, default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = ::tracing::subscriber::set_global_default(subscriber(format, filter, std::io::stderr));
}

/// Build the subscriber used by [`init`], writing through `writer`.
pub fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Pretty => Box::new(builder.finish()),
        LogFormat::Json => Box::new(
            builder
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .finish(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(format: LogFormat, filter: &str) -> Captured {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = subscriber(format, EnvFilter::new(filter), move || writer.clone());
        ::tracing::subscriber::with_default(subscriber, || {
            ::tracing::info!(account_id = "ACC1001", "account opened");
            ::tracing::debug!("filtered out");
        });
        sink
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log format 'xml' (expected pretty or json)");
    }

    #[test]
    fn json_format_emits_one_object_per_event() {
        let text = capture(LogFormat::Json, "info").text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);

        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "account opened");
        assert_eq!(event["fields"]["account_id"], "ACC1001");
        assert!(event["timestamp"].is_string());
    }

    #[test]
    fn pretty_format_is_plain_text() {
        let text = capture(LogFormat::Pretty, "info").text();
        assert!(text.contains("account opened"));
        assert!(text.contains("account_id=\"ACC1001\""));
        assert!(!text.contains("filtered out"));
        assert!(serde_json::from_str::<serde_json::Value>(text.trim()).is_err());
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init(LogFormat::Pretty, DEFAULT_FILTER);
        init(LogFormat::Json, DEFAULT_FILTER);
    }
}
