//! Property-based tests for AppSettings serialization round-trip.
//!
//! Any settings value written to JSON must read back unchanged.

use passgen::types::settings::{AppSettings, DatabaseSettings, GeneratorSettings, LogLevel, LoggingSettings};
use proptest::prelude::*;

fn arb_log_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Off),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        proptest::option::of("[a-zA-Z0-9_/.\\- ]{1,40}"),
        any::<i64>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        arb_log_level(),
    )
        .prop_map(|(path, default_length, u, n, s, level)| AppSettings {
            database: DatabaseSettings { path },
            generator: GeneratorSettings {
                default_length,
                include_uppercase: u,
                include_numbers: n,
                include_symbols: s,
            },
            logging: LoggingSettings { level },
        })
}

proptest! {
    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(settings, back);
    }

    #[test]
    fn log_level_serializes_lowercase(level in arb_log_level()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(json.clone(), json.to_lowercase());
    }
}
