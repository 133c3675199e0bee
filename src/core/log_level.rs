//! Log level definitions

use super::error::LoggerError;
use super::level_string::level_for_abbr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity levels, ordered from least to most verbose.
///
/// A level used as a threshold enables every record whose severity is at or
/// below it: `Off` enables nothing, `All` enables everything. Records are only
/// ever emitted at `Error`, `Info` or `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    #[default]
    Info = 2,
    Debug = 3,
    All = 4,
}

impl LogLevel {
    /// WARN survives only as an alias of INFO
    #[deprecated(since = "0.1.0", note = "use LogLevel::Info")]
    pub const WARN: LogLevel = LogLevel::Info;

    /// TRACE survives only as an alias of ALL
    pub const TRACE: LogLevel = LogLevel::All;

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERR",
            LogLevel::Info => "INF",
            LogLevel::Debug => "DBG",
            LogLevel::All => "ALL",
        }
    }

    /// Whether a record of `severity` passes when `self` is the threshold
    #[inline]
    pub fn enables(self, severity: LogLevel) -> bool {
        severity != LogLevel::Off && severity <= self
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::All,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Off => White,
            LogLevel::Error => Red,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::All => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Parses abbreviations and full names case-insensitively.
///
/// Deprecated aliases map silently here; use
/// [`level_for_abbr`](crate::core::level_for_abbr) to see the notes.
impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (level, note) = level_for_abbr(s);
        match note {
            Some(_) if !is_known_abbr(s) => Err(LoggerError::InvalidLevel(s.to_string())),
            _ => Ok(level),
        }
    }
}

fn is_known_abbr(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "" | "off"
            | "all"
            | "trc"
            | "trace"
            | "dbg"
            | "debug"
            | "inf"
            | "info"
            | "wrn"
            | "warn"
            | "err"
            | "error"
            | "pan"
            | "panic"
            | "ftl"
            | "fatal"
    )
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Off < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::All);
    }

    #[test]
    fn test_enables() {
        assert!(!LogLevel::Off.enables(LogLevel::Error));
        assert!(LogLevel::Error.enables(LogLevel::Error));
        assert!(!LogLevel::Error.enables(LogLevel::Info));
        assert!(LogLevel::Info.enables(LogLevel::Error));
        assert!(!LogLevel::Info.enables(LogLevel::Debug));
        assert!(LogLevel::All.enables(LogLevel::Debug));
        assert!(!LogLevel::All.enables(LogLevel::Off));
    }

    #[test]
    fn test_aliases() {
        #[allow(deprecated)]
        let warn = LogLevel::WARN;
        assert_eq!(warn, LogLevel::Info);
        assert_eq!(LogLevel::TRACE, LogLevel::All);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("INF".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WRN".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("all".parse::<LogLevel>().unwrap(), LogLevel::All);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_u8_roundtrip() {
        for level in [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::All,
        ] {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(json, "\"DBG\"");
        let parsed: LogLevel = serde_json::from_str("\"err\"").unwrap();
        assert_eq!(parsed, LogLevel::Error);
        assert!(serde_json::from_str::<LogLevel>("\"nope\"").is_err());
    }
}
