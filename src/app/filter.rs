use std::collections::{BTreeMap, BTreeSet};

use crate::app::config::{TagCategories, TagPolicy};
use crate::app::search::FuzzySearch;
use crate::app::types::Entry;

/// Checked tag values, grouped by category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    checked: BTreeMap<String, BTreeSet<String>>,
}

impl Selection {
    /// Flips one tag. Returns false, leaving the selection alone, when the
    /// category table does not declare that tag.
    pub fn toggle(&mut self, categories: &TagCategories, category: &str, tag: &str) -> bool {
        if !categories.declares(category, tag) {
            return false;
        }
        let tags = self.checked.entry(category.to_string()).or_default();
        if !tags.remove(tag) {
            tags.insert(tag.to_string());
        }
        if tags.is_empty() {
            self.checked.remove(category);
        }
        true
    }

    pub fn is_checked(&self, category: &str, tag: &str) -> bool {
        self.checked.get(category).is_some_and(|tags| tags.contains(tag))
    }

    pub fn count_in(&self, category: &str) -> usize {
        self.checked.get(category).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Every checked value, across all categories.
    pub fn union(&self) -> BTreeSet<&str> {
        self.checked.values().flatten().map(String::as_str).collect()
    }

    fn groups(&self) -> impl Iterator<Item = &BTreeSet<String>> {
        self.checked.values().filter(|tags| !tags.is_empty())
    }
}

fn match_count(entry: &Entry, checked: &BTreeSet<&str>) -> usize {
    entry.tags.iter().filter(|tag| checked.contains(tag.as_str())).count()
}

fn passes(entry: &Entry, selection: &Selection, checked: &BTreeSet<&str>, policy: TagPolicy) -> bool {
    match policy {
        TagPolicy::AnyTag => match_count(entry, checked) > 0,
        TagPolicy::EveryCategory => selection
            .groups()
            .all(|group| entry.tags.iter().any(|tag| group.contains(tag))),
    }
}

/// Tag stage: keep what the policy accepts, most matched tags first.
/// Equal counts keep their order from `base`.
pub fn apply_tags(base: Vec<Entry>, selection: &Selection, policy: TagPolicy) -> Vec<Entry> {
    let checked = selection.union();
    if checked.is_empty() {
        return base;
    }
    let mut kept: Vec<(usize, Entry)> = base
        .into_iter()
        .filter(|entry| passes(entry, selection, &checked, policy))
        .map(|entry| (match_count(&entry, &checked), entry))
        .collect();
    kept.sort_by(|a, b| b.0.cmp(&a.0));
    kept.into_iter().map(|(_, entry)| entry).collect()
}

/// Full pipeline: text stage, then tag stage.
pub fn filter_entries(
    catalog: &[Entry],
    query: &str,
    selection: &Selection,
    policy: TagPolicy,
    search: &dyn FuzzySearch,
) -> Vec<Entry> {
    let base = if query.trim().is_empty() {
        catalog.to_vec()
    } else {
        search.search(catalog, query)
    };
    apply_tags(base, selection, policy)
}
