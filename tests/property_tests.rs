//! Property-based tests for rust_log_factory using proptest

use proptest::prelude::*;
use rust_log_factory::core::{normalize_args, LevelSetting};
use rust_log_factory::prelude::*;
use rust_log_factory::{level_for_abbr, LevelSpec};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Off),
        Just(LogLevel::Error),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::All),
    ]
}

fn logger_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,12}"
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// A level enables exactly the severities at or below it, and never OFF
    #[test]
    fn test_enables_matches_ordering(level in any_level(), severity in any_level()) {
        let expected = severity != LogLevel::Off && severity <= level;
        prop_assert_eq!(level.enables(severity), expected);
    }

    /// Ordering follows the numeric representation
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
    }

    /// The canonical abbreviation parses back without a note
    #[test]
    fn test_abbreviation_roundtrip(level in any_level()) {
        let (parsed, note) = level_for_abbr(level.to_str());
        prop_assert_eq!(parsed, level);
        prop_assert!(note.is_none());
    }

    /// Abbreviations are case-insensitive
    #[test]
    fn test_abbreviation_case_insensitive(level in any_level()) {
        let lower = level.to_str().to_lowercase();
        prop_assert_eq!(level_for_abbr(&lower).0, level);
    }

    /// Unknown abbreviations fall back to INF with a note
    #[test]
    fn test_unknown_abbreviation(abbr in "[qxz]{4,8}") {
        let (level, note) = level_for_abbr(&abbr);
        prop_assert_eq!(level, LogLevel::Info);
        prop_assert!(note.is_some());
    }
}

// ============================================================================
// Level String Tests
// ============================================================================

proptest! {
    /// Bare names enable everything, dashed names disable
    #[test]
    fn test_bare_and_dashed_names(names in prop::collection::btree_set(logger_name(), 1..8)) {
        let spec: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, n)| if i % 2 == 0 { n.clone() } else { format!("-{}", n) })
            .collect();
        let parsed = LevelSpec::parse(&spec.join(","));

        prop_assert!(parsed.default.is_none());
        prop_assert_eq!(parsed.loggers.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(&parsed.loggers[name], &LevelSetting::Enabled(i % 2 == 0));
        }
    }

    /// Applying `*=X,name=Y` gives name Y and everyone else X
    #[test]
    fn test_apply_default_and_override(
        default in any_level(),
        level in any_level(),
        name in logger_name(),
    ) {
        let factory = Factory::new();
        factory
            .apply_level_string(&format!("*={},{}={}", default.to_str(), name, level.to_str()))
            .unwrap();

        prop_assert_eq!(factory.default_level(), default);
        prop_assert_eq!(factory.effective_level(&name), level);
        prop_assert_eq!(factory.effective_level("someone-else"), default);
    }

    /// Whatever was configured before, an empty level string clears overrides
    #[test]
    fn test_empty_string_clears_overrides(
        overrides in prop::collection::vec((logger_name(), any_level()), 0..6)
    ) {
        let factory = Factory::new();
        for (name, level) in &overrides {
            factory.set_level(name, *level);
        }
        factory.apply_level_string("").unwrap();
        for (name, _) in &overrides {
            prop_assert_eq!(factory.level_override(name), None);
        }
    }
}

// ============================================================================
// Argument Normalization Tests
// ============================================================================

proptest! {
    /// An even run of bare values becomes one field per pair
    #[test]
    fn test_pairs_normalize(pairs in prop::collection::vec(("[a-z]{1,6}", any::<i64>()), 0..10)) {
        let args: Vec<Arg> = pairs
            .iter()
            .flat_map(|(k, v)| [Arg::from(k.as_str()), Arg::from(*v)])
            .collect();
        let fields = normalize_args(&args);

        prop_assert_eq!(fields.len(), pairs.len());
        for (field, (k, v)) in fields.iter().zip(&pairs) {
            prop_assert_eq!(&field.key, k);
            prop_assert_eq!(&field.value, &FieldValue::Int(*v));
        }
    }

    /// A single bare value is always kept under the empty key
    #[test]
    fn test_single_value_normalizes(value in ".*") {
        let fields = normalize_args(&[Arg::from(value.as_str())]);
        prop_assert_eq!(fields.len(), 1);
        prop_assert_eq!(fields[0].key.as_str(), "");
        prop_assert_eq!(fields[0].value.as_str(), Some(value.as_str()));
    }

    /// Deriving a logger never changes the parent's context
    #[test]
    fn test_with_is_copy_on_write(keys in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let factory = Factory::new();
        let parent = factory.new_logger("parent").with(&[Arg::from("base"), Arg::from(1)]);

        let mut child = parent.clone();
        for key in &keys {
            child = child.with(&[Arg::from(key.as_str()), Arg::from(true)]);
        }

        prop_assert_eq!(parent.context().len(), 1);
        prop_assert_eq!(child.context().len(), 1 + keys.len());
    }
}
