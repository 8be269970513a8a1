//! Property tests for section merging.

use livery_brands::BrandId;
use livery_sections::{is_visible, resolve, SectionConfig, SectionKind, StaticSectionSource};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    /// Only explicit agreement between baseline and override shows a section.
    #[test]
    fn visible_only_when_both_agree(
        base in any::<bool>(),
        overridden in any::<Option<bool>>(),
    ) {
        let pmc = BrandId::parse("pmc").unwrap();
        let mut section = SectionConfig::new("hero", SectionKind::Hero, 1);
        section.visible = base;

        let mut source = StaticSectionSource::new(vec![section]);
        if let Some(visible) = overridden {
            source = source.with_override(pmc, "hero", json!({ "visible": visible }));
        }

        let listed = !resolve(&source, "pmc").sections().is_empty();
        prop_assert_eq!(listed, base && overridden == Some(true));
        prop_assert_eq!(listed, is_visible(overridden.is_some(), base, overridden));
    }

    /// Output is sorted by order regardless of baseline order.
    #[test]
    fn output_sorted_by_order(orders in proptest::collection::vec(-50i64..50, 0..12)) {
        let pmc = BrandId::parse("pmc").unwrap();
        let sections: Vec<_> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| SectionConfig::new(format!("s{}", i), SectionKind::About, *order))
            .collect();
        let mut source = StaticSectionSource::new(sections);
        for i in 0..orders.len() {
            source = source.with_override(pmc.clone(), &format!("s{}", i), json!({"visible": true}));
        }

        let resolved = resolve(&source, "pmc").into_sections();
        prop_assert_eq!(resolved.len(), orders.len());
        prop_assert!(resolved.windows(2).all(|w| w[0].order <= w[1].order));
    }
}
