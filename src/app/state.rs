use std::sync::Arc;

use leptos_dropdown::{activation_target, step, NavKey};

use crate::app::config::{FinderConfig, TagCategories, TagPolicy};
use crate::app::filter::{filter_entries, Selection};
use crate::app::search::{FuzzySearch, NucleoSearch};
use crate::app::types::Entry;

/// Everything one finder widget renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinderState {
    pub catalog: Arc<Vec<Entry>>,
    pub query: String,
    pub selection: Selection,
    pub results: Vec<Entry>,
    /// Highlighted row in `results`; `None` when nothing is highlighted.
    pub highlight: Option<usize>,
}

impl FinderState {
    /// Whether the highlighted row is the entry with this slug.
    pub fn is_highlighted(&self, slug: &str) -> bool {
        self.highlight
            .and_then(|i| self.results.get(i))
            .is_some_and(|entry| entry.slug == slug)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FinderEvent {
    CatalogLoaded(Vec<Entry>),
    QueryChanged(String),
    TagToggled { category: String, tag: String },
    TagsCleared,
    Key(NavKey),
    /// Pointer went down outside the input and the list.
    Dismissed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: FinderState,
    /// Route to open with a full page load.
    pub navigate: Option<String>,
}

impl Transition {
    fn stay(state: FinderState) -> Self {
        Self { state, navigate: None }
    }
}

/// Pipeline settings plus the text matcher, shared by both widgets.
pub struct Finder<S = NucleoSearch> {
    search: S,
    categories: TagCategories,
    policy: TagPolicy,
    route_prefix: String,
}

impl Finder<NucleoSearch> {
    pub fn from_config(config: &FinderConfig) -> Self {
        Finder::new(NucleoSearch::new(config.threshold), config)
    }
}

impl<S: FuzzySearch> Finder<S> {
    pub fn new(search: S, config: &FinderConfig) -> Self {
        Finder {
            search,
            categories: config.categories.clone(),
            policy: config.tag_policy,
            route_prefix: config.route_prefix.clone(),
        }
    }

    pub fn categories(&self) -> &TagCategories {
        &self.categories
    }

    fn refilter(&self, mut state: FinderState) -> FinderState {
        state.results = filter_entries(&state.catalog, &state.query, &state.selection, self.policy, &self.search);
        state.highlight = None;
        state
    }

    pub fn reduce(&self, prev: &FinderState, event: FinderEvent) -> Transition {
        let mut state = prev.clone();
        match event {
            FinderEvent::CatalogLoaded(entries) => {
                state.catalog = Arc::new(entries);
                Transition::stay(self.refilter(state))
            }
            FinderEvent::QueryChanged(query) => {
                state.query = query;
                Transition::stay(self.refilter(state))
            }
            FinderEvent::TagToggled { category, tag } => {
                if !state.selection.toggle(&self.categories, &category, &tag) {
                    return Transition::stay(state);
                }
                Transition::stay(self.refilter(state))
            }
            FinderEvent::TagsCleared => {
                state.selection = Selection::default();
                Transition::stay(self.refilter(state))
            }
            FinderEvent::Key(NavKey::Enter) => {
                let navigate = activation_target(state.highlight, state.results.len())
                    .map(|i| format!("{}/{}", self.route_prefix, state.results[i].slug));
                Transition { state, navigate }
            }
            FinderEvent::Key(NavKey::Escape) | FinderEvent::Dismissed => {
                state.results.clear();
                state.highlight = None;
                Transition::stay(state)
            }
            FinderEvent::Key(key) => {
                state.highlight = step(state.highlight, state.results.len(), key);
                Transition::stay(state)
            }
        }
    }
}
