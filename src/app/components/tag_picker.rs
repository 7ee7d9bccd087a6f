use leptos::prelude::*;

use crate::app::state::FinderEvent;
use crate::app::store::FinderStore;
use crate::app::utils::category_label;

#[component]
pub fn TagPicker(store: FinderStore) -> impl IntoView {
    let categories = store.categories();
    let has_selection = move || store.state.with(|s| !s.selection.is_empty());

    view! {
        <div class="tag-picker">
            {categories
                .iter()
                .cloned()
                .map(|category| {
                    let name = category.name.clone();
                    let label = move || category_label(&name, store.state.with(|s| s.selection.count_in(&name)));
                    view! {
                        <details class="tag-category">
                            <summary class="tag-category-summary">{label}</summary>
                            <div class="tag-options">
                                {category
                                    .tags
                                    .into_iter()
                                    .map(|tag| {
                                        view! {
                                            <TagOption store=store category=category.name.clone() tag=tag />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </details>
                    }
                })
                .collect_view()}
            <button
                class="tag-clear"
                prop:disabled=move || !has_selection()
                on:click=move |_| store.dispatch(FinderEvent::TagsCleared)
            >
                "Clear"
            </button>
        </div>
    }
}

#[component]
fn TagOption(store: FinderStore, category: String, tag: String) -> impl IntoView {
    let checked = {
        let (category, tag) = (category.clone(), tag.clone());
        move || store.state.with(|s| s.selection.is_checked(&category, &tag))
    };
    let label = tag.clone();
    view! {
        <label class="tag-option">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| {
                    store.dispatch(FinderEvent::TagToggled {
                        category: category.clone(),
                        tag: tag.clone(),
                    })
                }
            />
            " "
            {label}
        </label>
    }
}
