//! Default record formatter: compact JSON in insertion-key order.

use crate::domain::{LogRecord, LoggerError};

/// Serializes a record to its canonical compact JSON form.
///
/// No pretty-printing; key order is the record's insertion order, so the
/// `root` and `level` fields always lead unless the caller overwrote them.
pub fn to_json(record: &LogRecord) -> Result<String, LoggerError> {
    serde_json::to_string(record).map_err(LoggerError::Format)
}
