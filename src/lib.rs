#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. LoggerError in logger module
    clippy::must_use_candidate       // Annotated selectively on critical APIs
)]

pub mod domain;
pub mod format;
pub mod logger;
pub mod transport;

// Re-export main types for easy access
pub use domain::{LogRecord, LoggerError, Severity};
pub use logger::{FormatFn, Logger, LoggerConfig, TransportFn};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
