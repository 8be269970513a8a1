//! Operations on section lists.
//!
//! Every function returns a new list and leaves its input untouched.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::section::{SectionConfig, SectionKind};

/// Visible sections sorted by `order`.
pub fn sort_visible(sections: &[SectionConfig]) -> Vec<SectionConfig> {
    let mut visible: Vec<_> = sections.iter().filter(|s| s.visible).cloned().collect();
    visible.sort_by_key(|s| s.order);
    visible
}

/// Visible sections of one kind, in list order.
pub fn by_kind(sections: &[SectionConfig], kind: SectionKind) -> Vec<SectionConfig> {
    sections
        .iter()
        .filter(|s| s.kind == kind && s.visible)
        .cloned()
        .collect()
}

pub fn by_id<'a>(sections: &'a [SectionConfig], id: &str) -> Option<&'a SectionConfig> {
    sections.iter().find(|s| s.id == id)
}

pub fn toggle_visibility(sections: &[SectionConfig], id: &str) -> Vec<SectionConfig> {
    sections
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if s.id == id {
                s.visible = !s.visible;
            }
            s
        })
        .collect()
}

/// Puts sections in the order of `ids`, numbering `order` by position in
/// `ids` starting at 1.
///
/// Ids that match no section are skipped but still take up a position, so
/// `["cta", "ghost", "hero"]` numbers `hero` as 3. Sections whose id is not
/// listed are dropped.
pub fn reorder(sections: &[SectionConfig], ids: &[&str]) -> Vec<SectionConfig> {
    let lookup: HashMap<&str, &SectionConfig> =
        sections.iter().map(|s| (s.id.as_str(), s)).collect();

    ids.iter()
        .enumerate()
        .filter_map(|(index, id)| {
            lookup.get(id).map(|section| SectionConfig {
                order: index as i64 + 1,
                ..(*section).clone()
            })
        })
        .collect()
}

pub fn add(sections: &[SectionConfig], section: SectionConfig) -> Vec<SectionConfig> {
    let mut next = sections.to_vec();
    next.push(section);
    next
}

pub fn remove(sections: &[SectionConfig], id: &str) -> Vec<SectionConfig> {
    sections.iter().filter(|s| s.id != id).cloned().collect()
}

/// Shallow-merges `content` into the matching section's content.
pub fn update_content(
    sections: &[SectionConfig],
    id: &str,
    content: &Map<String, Value>,
) -> Vec<SectionConfig> {
    sections
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if s.id == id {
                s.content
                    .extend(content.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            s
        })
        .collect()
}

/// One past the highest `order`, or 1 for an empty list. Saturates at
/// `i64::MAX`.
pub fn next_order(sections: &[SectionConfig]) -> i64 {
    sections
        .iter()
        .map(|s| s.order)
        .max()
        .unwrap_or(0)
        .max(0)
        .saturating_add(1)
}
