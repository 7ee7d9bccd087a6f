use leptos::prelude::*;

use crate::app::types::Entry;

#[component]
pub fn TagBadges(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="fangame-tags">
            {tags.into_iter().map(|tag| view! { <span class="tag-badge">{tag}</span> }).collect_view()}
        </div>
    }
}

/// Grid tile linking to the detail page.
#[component]
pub fn FangameCard(entry: Entry, href: String) -> impl IntoView {
    let Entry { title, description, tags, banner, .. } = entry;
    let alt = title.clone();
    view! {
        <a class="fangame-card" href=href>
            {banner.map(|src| view! { <img class="fangame-banner" src=src alt=alt loading="lazy" /> })}
            <div class="fangame-title">{title}</div>
            <p class="fangame-description">{description}</p>
            <TagBadges tags=tags />
        </a>
    }
}

/// Compact dropdown row.
#[component]
pub fn FangameRow(entry: Entry, href: String, highlighted: Signal<bool>) -> impl IntoView {
    let Entry { title, description, tags, banner, .. } = entry;
    let alt = title.clone();
    view! {
        <li>
            <a class="fangame-row" class:highlighted=move || highlighted.get() href=href tabindex="-1">
                {banner.map(|src| view! { <img class="fangame-thumb" src=src alt=alt loading="lazy" /> })}
                <div>
                    <div class="fangame-title">{title}</div>
                    <p class="fangame-description">{description}</p>
                    <TagBadges tags=tags />
                </div>
            </a>
        </li>
    }
}
