//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, MAX_COLUMN_WIDTH};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0u64..600),
        prop::option::of(any::<bool>()),
        prop::option::of(0usize..200),
    )
        .prop_map(|(wait, autoinit, width)| Config {
            maximum_lock_wait_seconds: wait,
            disable_autoinit: autoinit,
            column_width: width,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
        prop_assert_eq!(merged.column_width, high.column_width.or(low.column_width));
    }

    // Merging a layer into itself changes nothing.
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn column_width_validation_matches_range(width in 0usize..200) {
        let config = Config { column_width: Some(width), ..Default::default() };
        let expected = (1..=MAX_COLUMN_WIDTH).contains(&width);
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), expected);
    }
}
