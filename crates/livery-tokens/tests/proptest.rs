//! Property-based tests for validation and flattening.

use proptest::prelude::*;
use livery_tokens::{
    default_flattened, FlattenedTokens, TokenCategory, TokenEngine, TokenSchema, TokenValidator,
};

// ============================================================================
// Strategies
// ============================================================================

fn valid_color() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-f]{6}",
        "#[0-9A-F]{3}",
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("rgb({}, {}, {})", r, g, b)),
        "[a-z]{3,12}",
    ]
}

fn valid_length() -> impl Strategy<Value = String> {
    (0u32..200, prop::sample::select(vec!["rem", "em", "px", "%"]))
        .prop_map(|(n, unit)| format!("{}{}", n, unit))
}

fn valid_tokens() -> impl Strategy<Value = FlattenedTokens> {
    (
        prop::collection::btree_map("[a-z]{1,8}", valid_color(), 0..8),
        prop::collection::btree_map("[a-z0-9]{1,4}", valid_length(), 0..8),
        prop::collection::btree_map("[a-z]{1,6}", valid_length(), 0..8),
    )
        .prop_map(|(colors, spacing, radii)| {
            let mut tokens = FlattenedTokens::new();
            for (k, v) in colors {
                tokens.insert(format!("color-{}", k), v);
            }
            for (k, v) in spacing {
                tokens.insert(format!("spacing-{}", k), v);
            }
            for (k, v) in radii {
                tokens.insert(format!("radius-{}", k), v);
            }
            tokens
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Well-formed sets always validate without errors.
    #[test]
    fn valid_sets_have_no_errors(tokens in valid_tokens()) {
        let report = TokenValidator::new().validate(&tokens);
        prop_assert!(report.is_valid());
        prop_assert!(report.errors().is_empty());
    }

    /// A single malformed color makes the set invalid and is reported verbatim.
    #[test]
    fn malformed_entry_is_reported(tokens in valid_tokens(), digits in "[0-9]{1,4}") {
        let bad_value = format!("bad{}", digits);
        let tokens = tokens.with("color-zz-broken", bad_value.clone());

        let report = TokenValidator::new().validate(&tokens);
        prop_assert!(!report.is_valid());
        let expected = format!("color-zz-broken: {}", bad_value);
        prop_assert!(report.errors().contains(&expected));
    }

    /// Names outside the known prefixes never fail, whatever their value.
    #[test]
    fn unknown_prefixes_never_fail(name in "[a-z]{1,8}", value in ".*") {
        prop_assume!(TokenCategory::of(&format!("x{}", name)).is_none());
        let tokens = FlattenedTokens::new().with(format!("x{}", name), value);
        prop_assert!(TokenValidator::new().validate(&tokens).is_valid());
    }

    /// Flattening an already-flat set changes nothing.
    #[test]
    fn flatten_is_idempotent(colors in prop::collection::btree_map("color-[a-z]{1,6}", valid_color(), 0..10)) {
        let schema = TokenSchema { colors: colors.into_iter().collect(), ..TokenSchema::default() };
        let once = schema.flatten();
        let twice: FlattenedTokens = once.iter().collect();
        prop_assert_eq!(once, twice);
    }

    /// Apply then read returns the new set on success.
    #[test]
    fn apply_then_read(tokens in valid_tokens()) {
        let mut engine = TokenEngine::new();
        prop_assert!(engine.apply_flattened(tokens.clone(), "brand").is_applied());
        prop_assert_eq!(engine.current_tokens(), &tokens);
    }

    /// Reset always lands on the defaults, whatever was applied before.
    #[test]
    fn reset_always_restores_defaults(tokens in valid_tokens(), brand in "[a-z]{1,10}") {
        let mut engine = TokenEngine::new();
        engine.apply_flattened(tokens, &brand);
        engine.reset_tokens();
        prop_assert_eq!(engine.current_brand(), "");
        prop_assert_eq!(engine.current_tokens(), default_flattened());
    }
}
