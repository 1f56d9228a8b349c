//! Domain layer for structo.
//!
//! Contains the canonical types shared across all modules:
//! - `LogRecord`: The structured record built for every logging call
//! - `Severity`: Routing tag selecting the output sink and emphasis
//! - `LoggerError`: Top-level error type

pub mod error;
pub mod record;
pub mod severity;

pub use error::LoggerError;
pub use record::LogRecord;
pub use severity::Severity;
