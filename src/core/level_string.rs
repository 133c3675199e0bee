//! Compact level-string syntax for bulk level changes
//!
//! A level string is a comma separated list of items:
//!
//! ```text
//! *              set the default to ALL
//! *=INF          set the default to INF
//! *,sql=ERR      default ALL, sql ERR
//! *=INF,http     default INF, http ALL (a bare name enables everything)
//! *=INF,-http    default INF, http OFF
//! http=INF       default unchanged, http INF
//! ```
//!
//! When a level string is applied to a [`Factory`](crate::Factory), every
//! existing logger that the string does not mention goes back to tracking the
//! default level.

use super::log_level::LogLevel;
use std::collections::BTreeMap;

/// Name reserved for the process-wide default
pub const DEFAULT_KEY: &str = "*";

/// What a level string asks for one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSetting {
    /// `name` (true) or `-name` (false)
    Enabled(bool),
    /// `name=ABBR`
    Abbr(String),
}

impl LevelSetting {
    /// Resolve to a level, with a note when the abbreviation is deprecated or unknown
    pub fn resolve(&self) -> (LogLevel, Option<String>) {
        match self {
            LevelSetting::Enabled(true) => (LogLevel::All, None),
            LevelSetting::Enabled(false) => (LogLevel::Off, None),
            LevelSetting::Abbr(abbr) => level_for_abbr(abbr),
        }
    }
}

/// Parsed form of a level string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSpec {
    /// The `*` item, if present
    pub default: Option<LevelSetting>,
    /// Every other item; a later item for the same name wins
    pub loggers: BTreeMap<String, LevelSetting>,
}

impl LevelSpec {
    /// Parse a level string. Parsing never fails; bad abbreviations surface
    /// when the result is resolved.
    pub fn parse(s: &str) -> Self {
        let mut spec = LevelSpec::default();

        for item in s.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            let parts: Vec<&str> = item.split('=').collect();
            let (name, setting) = match parts.as_slice() {
                [name] => match name.strip_prefix('-') {
                    Some(stripped) => (stripped.trim(), LevelSetting::Enabled(false)),
                    None => (name.trim(), LevelSetting::Enabled(true)),
                },
                [name, abbr] => (name.trim(), LevelSetting::Abbr(abbr.trim().to_string())),
                // more than one '=' is not a valid item
                _ => continue,
            };

            if name.is_empty() {
                continue;
            }

            if name == DEFAULT_KEY {
                spec.default = Some(setting);
            } else {
                spec.loggers.insert(name.to_string(), setting);
            }
        }

        spec
    }

    /// Resolve every item to a level, collecting the notes in item order
    /// (default first, then names in sorted order).
    pub fn resolve(&self) -> ResolvedLevels {
        let mut notes = Vec::new();

        let default = self.default.as_ref().map(|setting| {
            let (level, note) = setting.resolve();
            notes.extend(note);
            level
        });

        let loggers = self
            .loggers
            .iter()
            .map(|(name, setting)| {
                let (level, note) = setting.resolve();
                notes.extend(note);
                (name.clone(), level)
            })
            .collect();

        ResolvedLevels {
            default,
            loggers,
            notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.loggers.is_empty()
    }
}

/// A level string with every abbreviation turned into a level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLevels {
    pub default: Option<LogLevel>,
    pub loggers: BTreeMap<String, LogLevel>,
    /// Deprecation and "not recognized" notes
    pub notes: Vec<String>,
}

/// Map a level abbreviation (case-insensitive) to a level.
///
/// Several abbreviations are kept for compatibility and map onto a different
/// level than their name suggests; those come back with a deprecation note.
/// Anything unknown falls back to INF with a "not recognized" note.
pub fn level_for_abbr(abbr: &str) -> (LogLevel, Option<String>) {
    match abbr.to_lowercase().as_str() {
        "" | "all" => (LogLevel::All, None),
        "off" => (LogLevel::Off, None),
        "trc" | "trace" => (
            LogLevel::Debug,
            Some("TRC is deprecated, mapped to DEBUG".to_string()),
        ),
        "dbg" | "debug" => (LogLevel::Debug, None),
        "inf" | "info" => (LogLevel::Info, None),
        "wrn" | "warn" => (
            LogLevel::Info,
            Some("WRN is deprecated, use INF".to_string()),
        ),
        "err" | "error" => (LogLevel::Error, None),
        "pan" | "panic" => (
            LogLevel::Error,
            Some("PAN is deprecated, use ERR".to_string()),
        ),
        "ftl" | "fatal" => (
            LogLevel::Error,
            Some("FTL is deprecated, use ERR".to_string()),
        ),
        _ => (
            LogLevel::Info,
            Some(format!("{} not recognized level, defaulting to INF", abbr)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_and_bare_names() {
        let spec = LevelSpec::parse("*=INF,http,-sql");
        assert_eq!(spec.default, Some(LevelSetting::Abbr("INF".into())));
        assert_eq!(spec.loggers.get("http"), Some(&LevelSetting::Enabled(true)));
        assert_eq!(spec.loggers.get("sql"), Some(&LevelSetting::Enabled(false)));
    }

    #[test]
    fn test_parse_bare_star() {
        let spec = LevelSpec::parse("*");
        assert_eq!(spec.default, Some(LevelSetting::Enabled(true)));
        assert!(spec.loggers.is_empty());
        assert_eq!(spec.resolve().default, Some(LogLevel::All));
    }

    #[test]
    fn test_parse_skips_empty_and_malformed_items() {
        let spec = LevelSpec::parse(" http=DBG , ,a=b=c,=INF,");
        assert_eq!(spec.loggers.len(), 1);
        assert_eq!(spec.loggers.get("http"), Some(&LevelSetting::Abbr("DBG".into())));
        assert!(LevelSpec::parse("").is_empty());
    }

    #[test]
    fn test_parse_later_item_wins() {
        let spec = LevelSpec::parse("http=ERR,http=DBG");
        assert_eq!(spec.resolve().loggers.get("http"), Some(&LogLevel::Debug));
    }

    #[test]
    fn test_empty_abbr_means_all() {
        let resolved = LevelSpec::parse("http=").resolve();
        assert_eq!(resolved.loggers.get("http"), Some(&LogLevel::All));
        assert!(resolved.notes.is_empty());
    }

    #[test]
    fn test_resolve_collects_notes() {
        let resolved = LevelSpec::parse("*=WRN,db=bogus,http=INF").resolve();
        assert_eq!(resolved.default, Some(LogLevel::Info));
        assert_eq!(resolved.loggers.get("db"), Some(&LogLevel::Info));
        assert_eq!(
            resolved.notes,
            vec![
                "WRN is deprecated, use INF".to_string(),
                "bogus not recognized level, defaulting to INF".to_string(),
            ]
        );
    }

    #[test]
    fn test_level_for_abbr() {
        assert_eq!(level_for_abbr("off"), (LogLevel::Off, None));
        assert_eq!(level_for_abbr("DBG"), (LogLevel::Debug, None));
        assert_eq!(level_for_abbr("Info"), (LogLevel::Info, None));
        assert_eq!(level_for_abbr("err"), (LogLevel::Error, None));
        assert_eq!(level_for_abbr("ALL"), (LogLevel::All, None));

        let (level, note) = level_for_abbr("WRN");
        assert_eq!(level, LogLevel::Info);
        assert!(note.is_some());

        let (level, note) = level_for_abbr("trace");
        assert_eq!(level, LogLevel::Debug);
        assert!(note.unwrap().contains("deprecated"));

        for abbr in ["PAN", "panic", "FTL", "fatal"] {
            let (level, note) = level_for_abbr(abbr);
            assert_eq!(level, LogLevel::Error);
            assert!(note.is_some());
        }

        let (level, note) = level_for_abbr("bogus");
        assert_eq!(level, LogLevel::Info);
        assert!(note.unwrap().contains("not recognized"));
    }
}
