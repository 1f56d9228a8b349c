use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log record, used to select the output sink and emphasis.
///
/// Serialized to the stable wire tags `info`, `warning`, `error`, `debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    #[serde(rename = "warning")]
    Warn,
    Error,
    Debug,
}

impl Severity {
    /// The wire tag written into records and matched by the transport.
    pub fn as_tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warning",
            Severity::Error => "error",
            Severity::Debug => "debug",
        }
    }

    /// Lossy tag parsing: any unrecognized tag maps to `Info`, mirroring the
    /// transport's fallback branch.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "warning" => Severity::Warn,
            "error" => Severity::Error,
            "debug" => Severity::Debug,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for severity in [
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Debug,
        ] {
            assert_eq!(Severity::from_tag(severity.as_tag()), severity);
        }
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_info() {
        assert_eq!(Severity::from_tag("bogus"), Severity::Info);
        assert_eq!(Severity::from_tag(""), Severity::Info);
        assert_eq!(Severity::from_tag("WARN"), Severity::Info);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Severity::Warn).unwrap(),
            "\"warning\""
        );
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
        let parsed: Severity = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(parsed, Severity::Debug);
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
