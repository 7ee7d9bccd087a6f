use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::navigate;
use crate::app::catalog::load_catalog;
use crate::app::config::{FinderConfig, TagCategories};
use crate::app::state::{Finder, FinderEvent, FinderState};

/// Reactive handle one widget renders from. Every change goes through
/// `dispatch`, which runs the reducer and applies its transition.
#[derive(Clone, Copy)]
pub struct FinderStore {
    pub state: RwSignal<FinderState>,
    pub loading: RwSignal<bool>,
    finder: StoredValue<Finder>,
}

impl FinderStore {
    pub fn new(config: &FinderConfig) -> Self {
        Self {
            state: RwSignal::new(FinderState::default()),
            loading: RwSignal::new(false),
            finder: StoredValue::new(Finder::from_config(config)),
        }
    }

    pub fn dispatch(&self, event: FinderEvent) {
        let prev = self.state.get_untracked();
        let transition = self.finder.with_value(|f| f.reduce(&prev, event));
        self.state.set(transition.state);
        if let Some(route) = transition.navigate {
            navigate(&route);
        }
    }

    pub fn categories(&self) -> TagCategories {
        self.finder.with_value(|f| f.categories().clone())
    }

    /// Fetches the catalog once; a failed load leaves the list empty.
    pub fn load(&self, url: String) {
        let store = *self;
        store.loading.set(true);
        spawn_local(async move {
            match load_catalog(&url).await {
                Ok(entries) => store.dispatch(FinderEvent::CatalogLoaded(entries)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Catalog] Error loading {}: {}", url, e).into());
                }
            }
            store.loading.set(false);
        });
    }
}
