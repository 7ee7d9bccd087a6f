use leptos::prelude::*;
use leptos_dropdown::{make_on_keydown, use_outside_dismiss};

use crate::app::components::fangame_card::FangameRow;
use crate::app::components::tag_picker::TagPicker;
use crate::app::config::FinderConfig;
use crate::app::state::FinderEvent;
use crate::app::store::FinderStore;

/// Header variant: results drop down under the input and are keyboard
/// navigable. Enter opens the highlighted (or first) result.
#[component]
pub fn SearchBar(config: FinderConfig) -> impl IntoView {
    let store = FinderStore::new(&config);
    store.load(config.catalog_url.clone());
    let routes = StoredValue::new(config.clone());

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let list_ref = NodeRef::<leptos::html::Ul>::new();
    use_outside_dismiss(input_ref, list_ref, move || {
        if store.state.with_untracked(|s| !s.results.is_empty()) {
            store.dispatch(FinderEvent::Dismissed);
        }
    });
    let on_keydown = make_on_keydown(move |key| store.dispatch(FinderEvent::Key(key)));

    let rows = move || store.state.with(|s| s.results.clone());

    view! {
        <div class="finder-search">
            <input
                node_ref=input_ref
                type="text"
                class="finder-input"
                placeholder=config.placeholder.clone()
                autocomplete="off"
                prop:value=move || store.state.with(|s| s.query.clone())
                on:input=move |ev| store.dispatch(FinderEvent::QueryChanged(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <TagPicker store=store />
            <Show when=move || store.state.with(|s| !s.results.is_empty())>
                <ul node_ref=list_ref class="finder-dropdown">
                    <For
                        each=rows
                        key=|entry| entry.slug.clone()
                        children=move |entry| {
                            let href = routes.with_value(|c| c.detail_route(&entry.slug));
                            let slug = entry.slug.clone();
                            let highlighted = Signal::derive(move || store.state.with(|s| s.is_highlighted(&slug)));
                            view! { <FangameRow entry=entry href=href highlighted=highlighted /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
