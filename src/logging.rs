//! Outcome logging for client calls.
//!
//! Every [`CeculaClient`](crate::CeculaClient) call ends with exactly one entry: a
//! [`SuccessEntry`] through [`Logger::info`] or a [`FailureEntry`] through [`Logger::error`].
//! The client owns its logger, so tests and host applications can swap the sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;
use tracing::Dispatch;

/// Target of every event emitted by the bundled loggers.
pub const LOG_TARGET: &str = "cecula";

/// A completed call that produced an HTTP 2xx response.
#[derive(Debug, Clone, Copy)]
pub struct SuccessEntry<'a> {
    pub endpoint: &'a str,
    pub response_status: u16,
    pub response_data: &'a Value,
}

/// A call that failed at the transport level or with a non-2xx status.
#[derive(Debug, Clone, Copy)]
pub struct FailureEntry<'a> {
    pub endpoint: &'a str,
    pub error_code: u16,
    pub error_message: &'a str,
}

/// Sink for call outcomes.
pub trait Logger: Send + Sync {
    /// Record a call that returned a 2xx response.
    fn info(&self, entry: &SuccessEntry<'_>);

    /// Record a call that failed in transport or returned a non-2xx status.
    fn error(&self, entry: &FailureEntry<'_>);
}

fn emit_success(entry: &SuccessEntry<'_>) {
    tracing::info!(
        target: LOG_TARGET,
        endpoint = entry.endpoint,
        response_status = entry.response_status,
        response_data = %entry.response_data,
        "cecula request succeeded"
    );
}

fn emit_failure(entry: &FailureEntry<'_>) {
    tracing::error!(
        target: LOG_TARGET,
        endpoint = entry.endpoint,
        error_code = entry.error_code,
        error_message = entry.error_message,
        "cecula request failed"
    );
}

/// Default logger: emits `tracing` events on the `cecula` target through whatever subscriber
/// the host application installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, entry: &SuccessEntry<'_>) {
        emit_success(entry);
    }

    fn error(&self, entry: &FailureEntry<'_>) {
        emit_failure(entry);
    }
}

/// Writes the same events as [`TracingLogger`] as JSON lines to its own writer.
///
/// The logger owns a private `tracing` dispatcher, so its output does not depend on (or leak
/// into) the global subscriber.
///
/// ```text
/// {"timestamp":"...","level":"INFO","message":"cecula request succeeded","endpoint":"sms/check-balance","response_status":200,"response_data":"{\"balance\":42}","target":"cecula"}
/// ```
#[derive(Clone)]
pub struct JsonLinesLogger {
    dispatch: Dispatch,
}

impl JsonLinesLogger {
    /// Log to any writer, e.g. `std::io::stderr()`.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(Mutex::new(writer))
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl std::fmt::Debug for JsonLinesLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesLogger").finish_non_exhaustive()
    }
}

impl Logger for JsonLinesLogger {
    fn info(&self, entry: &SuccessEntry<'_>) {
        tracing::dispatcher::with_default(&self.dispatch, || emit_success(entry));
    }

    fn error(&self, entry: &FailureEntry<'_>) {
        tracing::dispatcher::with_default(&self.dispatch, || emit_failure(entry));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    /// In-memory writer shared between a subscriber and the test body.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        pub(crate) fn lines(&self) -> Vec<Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }

        /// JSON subscriber writing into this buffer, for `tracing::subscriber::set_default`.
        pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
            let buffer = self.clone();
            tracing_subscriber::fmt()
                .json()
                .flatten_event(true)
                .with_target(true)
                .with_ansi(false)
                .with_max_level(tracing::Level::TRACE)
                .with_writer(move || buffer.clone())
                .finish()
        }
    }

    fn balance_entry(data: &Value) -> SuccessEntry<'_> {
        SuccessEntry {
            endpoint: "sms/check-balance",
            response_status: 200,
            response_data: data,
        }
    }

    fn send_failure() -> FailureEntry<'static> {
        FailureEntry {
            endpoint: "sms/a2p/send",
            error_code: 500,
            error_message: "Server Error",
        }
    }

    fn assert_success_line(line: &Value) {
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["target"], "cecula");
        assert_eq!(line["message"], "cecula request succeeded");
        assert_eq!(line["endpoint"], "sms/check-balance");
        assert_eq!(line["response_status"], 200);
        let data: Value = serde_json::from_str(line["response_data"].as_str().unwrap()).unwrap();
        assert_eq!(data, json!({ "balance": 42 }));
    }

    fn assert_failure_line(line: &Value) {
        assert_eq!(line["level"], "ERROR");
        assert_eq!(line["target"], "cecula");
        assert_eq!(line["message"], "cecula request failed");
        assert_eq!(line["endpoint"], "sms/a2p/send");
        assert_eq!(line["error_code"], 500);
        assert_eq!(line["error_message"], "Server Error");
    }

    #[test]
    fn tracing_logger_emits_structured_events() {
        let buffer = SharedBuffer::default();
        let data = json!({ "balance": 42 });

        tracing::subscriber::with_default(buffer.subscriber(), || {
            TracingLogger.info(&balance_entry(&data));
            TracingLogger.error(&send_failure());
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_success_line(&lines[0]);
        assert_failure_line(&lines[1]);
    }

    #[test]
    fn json_lines_logger_writes_one_line_per_entry() {
        let buffer = SharedBuffer::default();
        let logger = JsonLinesLogger::new(buffer.clone());

        let data = json!({ "balance": 42 });
        logger.info(&balance_entry(&data));
        logger.error(&send_failure());

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_success_line(&lines[0]);
        assert_failure_line(&lines[1]);
    }

    #[test]
    fn json_lines_logger_does_not_write_to_the_ambient_subscriber() {
        let ambient = SharedBuffer::default();
        let own = SharedBuffer::default();
        let logger = JsonLinesLogger::new(own.clone());

        tracing::subscriber::with_default(ambient.subscriber(), || {
            logger.error(&send_failure());
        });

        assert_eq!(own.lines().len(), 1);
        assert!(ambient.lines().is_empty());
    }

    #[test]
    fn json_lines_logger_appends_to_file() {
        let path = std::env::temp_dir().join(format!(
            "cecula-log-{}-{:?}.jsonl",
            std::process::id(),
            std::thread::current().id()
        ));
        let _ = std::fs::remove_file(&path);

        for _ in 0..2 {
            let logger = JsonLinesLogger::open(&path).unwrap();
            logger.error(&FailureEntry {
                endpoint: "sms/identities",
                error_code: 0,
                error_message: "connection refused",
            });
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains(r#""endpoint":"sms/identities""#));
    }
}
