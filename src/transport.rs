//! Default transport: routes a formatted message to a console sink with a
//! severity-specific color emphasis.
//!
//! The emphasis itself is delegated to the `console` crate; this module only
//! decides which sink and which color a severity maps to.

use crate::domain::Severity;
use console::{Color, style};

/// The conceptual output sink a severity routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
}

/// Sink selection: errors and warnings go to stderr, debug and info (the
/// fallback for unrecognized tags, see `Severity::from_tag`) to stdout.
pub fn sink_for(level: Severity) -> Sink {
    match level {
        Severity::Error | Severity::Warn => Sink::Stderr,
        Severity::Debug | Severity::Info => Sink::Stdout,
    }
}

/// Emphasis color applied per severity.
pub fn color_for(level: Severity) -> Color {
    match level {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Debug => Color::Blue,
        Severity::Info => Color::Green,
    }
}

/// Writes `message` to the sink selected by `level`, emphasized with the
/// severity's color. The `console` crate downgrades to plain text when the
/// stream is not a terminal. Sink writes are assumed infallible.
pub fn console(level: Severity, message: &str) {
    let styled = style(message).fg(color_for(level));
    match sink_for(level) {
        Sink::Stderr => eprintln!("{styled}"),
        Sink::Stdout => println!("{styled}"),
    }
}
