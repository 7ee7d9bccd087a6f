use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub mod api;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod search;
pub mod state;
pub mod store;
pub mod types;
pub mod utils;

pub mod components {
    pub mod fangame_card;
    pub mod fangame_grid;
    pub mod search_bar;
    pub mod tag_picker;
}

use components::fangame_grid::FangameGrid;
use components::search_bar::SearchBar;
use config::FinderConfig;

pub const GRID_HOST_ID: &str = "fangame-grid";
pub const SEARCH_HOST_ID: &str = "fangame-search";

fn host_element(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Mounts each widget whose host element is on the page. A page may carry
/// either variant, or both.
pub fn mount_widgets(config: FinderConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let mut mounted = 0;
    if let Some(host) = host_element(&document, GRID_HOST_ID) {
        let config = config.clone();
        leptos::mount::mount_to(host, move || view! { <FangameGrid config=config /> }).forget();
        mounted += 1;
    }
    if let Some(host) = host_element(&document, SEARCH_HOST_ID) {
        leptos::mount::mount_to(host, move || view! { <SearchBar config=config /> }).forget();
        mounted += 1;
    }
    if mounted == 0 {
        web_sys::console::log_1(&format!("[Finder] No #{} or #{} on this page", GRID_HOST_ID, SEARCH_HOST_ID).into());
    }
}
