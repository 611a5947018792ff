//! Common enumerations used throughout Management Tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{ToolsError, Result};

/// Ordered logging severity.
///
/// The ordering drives level gating: a message is echoed only if its
/// severity is at or above the logger's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "SeverityRepr")]
pub enum Severity {
    /// Diagnostic detail
    Debug,
    /// General information
    Info,
    /// Notable, but not enough to halt execution
    Warning,
    /// An operation failed
    Error,
    /// A failure that should usually halt execution
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Upper-case level name as it appears in persisted lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Conventional numeric value (10 through 50).
    pub fn value(&self) -> i64 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    /// Map an arbitrary numeric level onto the highest severity whose value
    /// does not exceed it. Anything below 10 is `Debug`.
    pub fn from_value(value: i64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|level| level.value() <= value)
            .unwrap_or(Severity::Debug)
    }
}

impl FromStr for Severity {
    type Err = ToolsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self::from_value(value));
        }

        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "FATAL" => Ok(Severity::Critical),
            _ => crate::bail!(Validation, "Invalid log level: {}", s),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted on-disk spellings of a severity: a name or a number.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum SeverityRepr {
    /// Numeric level such as `20`
    Value(i64),
    /// Level name such as `"warning"`
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = ToolsError;

    fn try_from(repr: SeverityRepr) -> Result<Self> {
        match repr {
            SeverityRepr::Value(value) => Ok(Severity::from_value(value)),
            SeverityRepr::Name(name) => name.parse(),
        }
    }
}

/// Kinds of sink a logger can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// Standard output echo
    Console,
    /// Size-bounded file with numbered backups
    RotatingFile,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::RotatingFile => write!(f, "rotating-file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("40".parse::<Severity>().unwrap(), Severity::Error);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_from_value_floors() {
        assert_eq!(Severity::from_value(-5), Severity::Debug);
        assert_eq!(Severity::from_value(20), Severity::Info);
        assert_eq!(Severity::from_value(35), Severity::Warning);
        assert_eq!(Severity::from_value(99), Severity::Critical);
    }

    #[test]
    fn test_severity_serde() {
        let level: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Severity::Warning);

        let level: Severity = serde_json::from_str("50").unwrap();
        assert_eq!(level, Severity::Critical);

        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"INFO\"");
    }

    proptest! {
        #[test]
        fn prop_value_round_trips_through_from_value(idx in 0usize..5) {
            let level = Severity::ALL[idx];
            prop_assert_eq!(Severity::from_value(level.value()), level);
        }

        #[test]
        fn prop_from_value_never_exceeds_input(value in 10i64..1000) {
            prop_assert!(Severity::from_value(value).value() <= value);
        }
    }
}
