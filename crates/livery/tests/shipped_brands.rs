//! The brands and sections checked into the repository stay valid.

use std::path::PathBuf;

use livery::{AppConfig, Livery};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn livery() -> Livery {
    let root = repo_root();
    let config = AppConfig::default().with_paths(
        Some(root.join("brands")),
        Some(root.join("shared/sections.yaml")),
    );
    Livery::new(&config)
}

#[test]
fn every_shipped_brand_is_discovered() {
    let response = livery().brands(false);
    assert_eq!(response.brands, ["chitti", "pmc", "test-brand"]);
    assert_eq!(response.error, None);
}

#[test]
fn every_shipped_brand_validates() {
    let mut livery = livery();
    let brands = livery.brands(false).brands;
    for brand in brands {
        let report = livery.validate(&brand).unwrap();
        assert!(report.is_valid(), "{}: {:?}", brand, report.errors());
    }
}

#[test]
fn shipped_sections_resolve() {
    let livery = livery();

    let pmc: Vec<_> = livery
        .sections("pmc")
        .into_sections()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(pmc, ["hero", "features", "cta", "footer"]);

    let chitti: Vec<_> = livery
        .sections("chitti")
        .into_sections()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(chitti, ["hero", "faq", "footer"]);

    assert!(livery.sections("test-brand").is_resolved());
    assert!(livery.sections("test-brand").sections().is_empty());
}
