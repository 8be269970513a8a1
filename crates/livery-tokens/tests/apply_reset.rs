//! End-to-end apply/reset scenarios against an in-memory document root.

use livery_tokens::{
    css, default_flattened, ApplyOutcome, BrandTheme, Layout, RootStyle, StyleSurface,
    TokenCategory, TokenEngine,
};

const PMC_THEME: &str = r##"
layout: modern
assets:
  logo: /brands/pmc/assets/logo.svg
  favicon: /brands/pmc/assets/favicon.ico
tokens:
  colors:
    color-primary: "#7c3aed"
    color-accent: "#ec4899"
  typography:
    font-family-sans: "Poppins, system-ui, sans-serif"
    font-size-base: 1rem
    font-weight-bold: "700"
    letter-spacing-tight: -0.015em
  spacing:
    spacing-0: "0"
    spacing-4: 1rem
  borderRadius:
    radius-full: 9999px
  shadows:
    shadow-none: none
    shadow-xs: 0 1px 2px 0 rgba(124, 58, 237, 0.05)
"##;

const BROKEN_THEME: &str = r##"
layout: bold
tokens:
  colors:
    color-primary: "#ff"
  spacing:
    spacing-4: lots
"##;

const MISORDERED_THEME: &str = r##"
layout: minimal
tokens:
  borderRadius:
    radius-sm: round
  spacing:
    spacing-4: lots
"##;

fn theme(yaml: &str) -> BrandTheme {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_pmc_apply_then_reset() {
    let mut engine = TokenEngine::with_surface(RootStyle::new());
    let pmc = theme(PMC_THEME);
    assert_eq!(pmc.layout, Layout::Modern);

    assert!(engine.apply_tokens(&pmc, "pmc").is_applied());
    assert_eq!(engine.token("color-primary"), Some("#7c3aed"));
    assert_eq!(engine.surface().property("--font-weight-bold"), Some("700"));

    engine.reset_tokens();
    assert_eq!(engine.token("color-primary"), Some("#3b82f6"));
    assert_eq!(engine.current_brand(), "");
    assert!(engine.surface().is_empty());
}

#[test]
fn test_broken_brand_is_rejected_with_every_error() {
    let mut engine = TokenEngine::with_surface(RootStyle::new());
    engine.apply_tokens(&theme(PMC_THEME), "pmc");

    match engine.apply_tokens(&theme(BROKEN_THEME), "broken") {
        ApplyOutcome::Rejected(report) => {
            assert_eq!(report.errors(), ["color-primary: #ff", "spacing-4: lots"]);
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    assert_eq!(engine.current_brand(), "pmc");
    assert_eq!(engine.surface().property("--color-primary"), Some("#7c3aed"));
}

#[test]
fn test_rejection_lists_errors_in_category_order() {
    let mut engine = TokenEngine::new();
    match engine.apply_tokens(&theme(MISORDERED_THEME), "misordered") {
        ApplyOutcome::Rejected(report) => {
            assert_eq!(report.errors(), ["spacing-4: lots", "radius-sm: round"]);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_switching_brands_overwrites_shared_properties() {
    let mut engine = TokenEngine::with_surface(RootStyle::new());
    engine.apply_tokens(&theme(PMC_THEME), "pmc");

    let mut chitti = theme(PMC_THEME);
    if let Some(tokens) = chitti.tokens.as_mut() {
        tokens.colors.insert("color-primary".into(), "#0a1a4f".into());
    }
    engine.apply_tokens(&chitti, "chitti");

    assert!(engine.is_applied("chitti"));
    assert_eq!(engine.css_variable("--color-primary"), Some("#0a1a4f"));
}

#[test]
fn test_stylesheet_text_for_defaults() {
    let engine = TokenEngine::new();
    let sheet = css::root_block(engine.current_tokens());

    assert!(sheet.starts_with(":root {\n"));
    assert!(sheet.ends_with("\n}\n"));
    assert!(sheet.contains("  --color-primary: #3b82f6;\n"));
    assert_eq!(sheet.lines().count(), default_flattened().len() + 2);
}

#[test]
fn test_category_css_for_typography_includes_weights() {
    let mut engine = TokenEngine::new();
    engine.apply_tokens(&theme(PMC_THEME), "pmc");
    let typography = engine.category_css(TokenCategory::Typography);

    assert_eq!(typography.lines().count(), 4);
    assert!(typography.contains("--letter-spacing-tight: -0.015em;"));
    assert!(!typography.contains("--color-"));
}
