use thiserror::Error;

/// Top-level error type for the logging pipeline.
///
/// `InvalidDataType` is the only error originated by this crate; formatting
/// failures carry the underlying `serde_json` error as their source. Nothing
/// is caught internally, every error reaches the caller of `log` or
/// `create_log_object` unchanged.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Logger.data: invalid data type (must be either string or object)")]
    InvalidDataType,

    #[error("failed to serialize log record: {0}")]
    Format(#[from] serde_json::Error),
}
