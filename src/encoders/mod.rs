//! Bundled encoders and the named encoding choices

pub mod console;
pub mod json;
pub mod ltsv;
pub mod term;

pub use console::ConsoleEncoder;
pub use json::JsonEncoder;
pub use ltsv::LtsvEncoder;
pub use term::TermEncoder;

pub use crate::core::{Encoder, EncoderConfig};

use crate::core::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The encodings a [`Config`](crate::Config) can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Json,
    Ltsv,
    Term,
    TermColor,
    Console,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Json,
        Encoding::Ltsv,
        Encoding::Term,
        Encoding::TermColor,
        Encoding::Console,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Ltsv => "ltsv",
            Encoding::Term => "term",
            Encoding::TermColor => "term-color",
            Encoding::Console => "console",
        }
    }

    /// Resolve a configured choice; an empty choice picks colorized terminal
    /// output in development and LTSV otherwise.
    pub fn resolve(choice: &str, development: bool) -> Result<Self> {
        match choice {
            "" if development => Ok(Encoding::TermColor),
            "" => Ok(Encoding::Ltsv),
            other => other.parse(),
        }
    }

    pub fn build(self, config: EncoderConfig) -> Arc<dyn Encoder> {
        match self {
            Encoding::Json => Arc::new(JsonEncoder::new(config)),
            Encoding::Ltsv => Arc::new(LtsvEncoder::new(config)),
            Encoding::Term => Arc::new(TermEncoder::new(config)),
            Encoding::TermColor => Arc::new(TermEncoder::colored(config)),
            Encoding::Console => Arc::new(ConsoleEncoder::new(config)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::ALL
            .into_iter()
            .find(|encoding| encoding.as_str() == s)
            .ok_or_else(|| {
                LoggerError::config(
                    "encoding",
                    format!(
                        "{} is not a valid encoding, must be one of: json, ltsv, term, term-color, or console",
                        s
                    ),
                )
            })
    }
}

/// Label used for a field with an empty key in text encodings
pub(crate) const EMPTY_KEY_LABEL: &str = "_";

pub(crate) fn text_key(key: &str) -> &str {
    if key.is_empty() {
        EMPTY_KEY_LABEL
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encodings() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.as_str().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_invalid_encoding() {
        let err = "xml".parse::<Encoding>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("xml is not a valid encoding"));
    }

    #[test]
    fn test_resolve_unspecified() {
        assert_eq!(Encoding::resolve("", true).unwrap(), Encoding::TermColor);
        assert_eq!(Encoding::resolve("", false).unwrap(), Encoding::Ltsv);
        assert_eq!(Encoding::resolve("json", true).unwrap(), Encoding::Json);
    }

    #[test]
    fn test_build_names() {
        for encoding in Encoding::ALL {
            let encoder = encoding.build(EncoderConfig::production());
            assert_eq!(encoder.name(), encoding.as_str());
        }
    }
}
