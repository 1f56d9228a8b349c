//! The logger itself: record construction and the three-step dispatch
//! pipeline (build record, format, transport).

use crate::domain::{LogRecord, LoggerError, Severity};
use crate::{format, transport};
use serde_json::{Map, Value};

/// Formatting slot: turns a record into its textual form.
pub type FormatFn = Box<dyn Fn(&LogRecord) -> Result<String, LoggerError> + Send + Sync>;

/// Transport slot: delivers a formatted message for a severity.
pub type TransportFn = Box<dyn Fn(Severity, &str) + Send + Sync>;

/// Construction knobs for [`Logger`]. Every field is optional.
///
/// Absent fields fall back to the built-ins: `root` defaults to `"root"` (an
/// empty string counts as absent), `format` to compact JSON
/// ([`format::to_json`]), `transport` to the colorized console router
/// ([`transport::console`]). Supplied slots are well-typed closures, so the
/// original "ignore non-callable overrides" rule is enforced by the type
/// system at the boundary rather than checked at runtime.
#[derive(Default)]
pub struct LoggerConfig {
    pub root: Option<String>,
    pub format: Option<FormatFn>,
    pub transport: Option<TransportFn>,
}

/// A minimal structured logger.
///
/// Each call builds a [`LogRecord`] stamped with the logger's `root` label
/// and the severity, formats it, and hands the text to a severity-routed
/// transport. Configuration is fixed at construction and construction never
/// fails; instances are fully independent.
pub struct Logger {
    root: String,
    format: FormatFn,
    transport: TransportFn,
}

impl Logger {
    /// Logger with all defaults (`root = "root"`, JSON format, console
    /// transport).
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Logger with explicit overrides.
    pub fn with_config(config: LoggerConfig) -> Self {
        let root = match config.root {
            Some(root) if !root.is_empty() => root,
            _ => "root".to_owned(),
        };
        Self {
            root,
            format: config.format.unwrap_or_else(|| Box::new(format::to_json)),
            transport: config
                .transport
                .unwrap_or_else(|| Box::new(transport::console)),
        }
    }

    /// The namespace label stamped into every record.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Runs the full pipeline: build the record, format it, transport it,
    /// strictly in that order, each step's output feeding the next.
    ///
    /// A missing `level` resolves to [`Severity::Info`] for both the record
    /// and the transport. Errors from record construction or from the format
    /// slot reach the caller unchanged; there is no containment or retry.
    pub fn log(&self, data: impl Into<Value>, level: Option<Severity>) -> Result<(), LoggerError> {
        let record = self.create_log_object(data, level)?;
        let message = (self.format)(&record)?;
        (self.transport)(level.unwrap_or_default(), &message);
        Ok(())
    }

    /// Builds the record for one logging call.
    ///
    /// A `Null` payload becomes an empty `message`; a string is wrapped under
    /// the `message` key; an object is merged on top of the `{root, level}`
    /// base with caller keys winning on collision. Numbers, booleans and
    /// arrays are rejected with [`LoggerError::InvalidDataType`]. Pure, no
    /// side effects.
    pub fn create_log_object(
        &self,
        data: impl Into<Value>,
        level: Option<Severity>,
    ) -> Result<LogRecord, LoggerError> {
        let mut record = LogRecord::base(&self.root, level.unwrap_or_default());
        match data.into() {
            Value::Null => record.merge(message_fields(String::new())),
            Value::String(message) => record.merge(message_fields(message)),
            Value::Object(fields) => record.merge(fields),
            Value::Number(_) | Value::Bool(_) | Value::Array(_) => {
                return Err(LoggerError::InvalidDataType);
            }
        }
        Ok(record)
    }

    /// Formats a record with this logger's `format` slot.
    pub fn format(&self, record: &LogRecord) -> Result<String, LoggerError> {
        (self.format)(record)
    }

    /// Delivers a formatted message with this logger's `transport` slot.
    pub fn transport(&self, level: Severity, message: &str) {
        (self.transport)(level, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn message_fields(message: String) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("message".to_owned(), Value::String(message));
    fields
}
