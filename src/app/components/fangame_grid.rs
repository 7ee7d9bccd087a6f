use leptos::prelude::*;

use crate::app::components::fangame_card::FangameCard;
use crate::app::components::tag_picker::TagPicker;
use crate::app::config::FinderConfig;
use crate::app::state::FinderEvent;
use crate::app::store::FinderStore;
use crate::app::utils::result_count_label;

/// Full-page variant: search box, tag picker and every result as a tile.
#[component]
pub fn FangameGrid(config: FinderConfig) -> impl IntoView {
    let store = FinderStore::new(&config);
    store.load(config.catalog_url.clone());
    let routes = StoredValue::new(config.clone());

    let results = move || store.state.with(|s| s.results.clone());
    let count = move || store.state.with(|s| s.results.len());

    view! {
        <div class="fangame-finder">
            <div class="finder-header">
                <h1 class="finder-title">"Fangame Finder"</h1>
                <input
                    type="text"
                    class="finder-input"
                    placeholder=config.placeholder.clone()
                    autocomplete="off"
                    prop:value=move || store.state.with(|s| s.query.clone())
                    on:input=move |ev| store.dispatch(FinderEvent::QueryChanged(event_target_value(&ev)))
                />
                <TagPicker store=store />
                <div class="finder-count">{move || result_count_label(count())}</div>
            </div>
            <Show
                when=move || { count() > 0 }
                fallback=move || {
                    view! {
                        <p class="finder-empty">
                            {move || if store.loading.get() { "Loading fangames..." } else { "No fangames found" }}
                        </p>
                    }
                }
            >
                <div class="fangame-grid">
                    <For
                        each=results
                        key=|entry| entry.slug.clone()
                        children=move |entry| {
                            let href = routes.with_value(|c| c.detail_route(&entry.slug));
                            view! { <FangameCard entry=entry href=href /> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
