use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

/// Keys a dropdown reacts to while its input has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            "Enter" => Some(NavKey::Enter),
            "Escape" | "Esc" => Some(NavKey::Escape),
            _ => None,
        }
    }

    fn suppresses_default(self) -> bool {
        !matches!(self, NavKey::Escape)
    }
}

/// Moves the highlight one row. `None` means nothing is highlighted.
///
/// Down stops at the last row and Up from the first row clears the highlight;
/// neither wraps. A highlight left over from a longer list is clamped first.
pub fn step(highlight: Option<usize>, len: usize, key: NavKey) -> Option<usize> {
    let current = highlight.map(|i| i.min(len.saturating_sub(1))).filter(|_| len > 0);
    match key {
        NavKey::Down => match current {
            None if len > 0 => Some(0),
            None => None,
            Some(i) if i + 1 < len => Some(i + 1),
            Some(i) => Some(i),
        },
        NavKey::Up => match current {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        },
        NavKey::Enter | NavKey::Escape => current,
    }
}

/// Row that Enter should open: the highlighted one, else the first, else none.
pub fn activation_target(highlight: Option<usize>, len: usize) -> Option<usize> {
    match highlight {
        Some(i) if i < len => Some(i),
        _ if len > 0 => Some(0),
        _ => None,
    }
}

/// True when `target` lies outside every region. A region that is not
/// mounted disables dismissal, so a closed list never reports an outside hit.
pub fn is_outside(target: &web_sys::Node, regions: &[Option<&web_sys::Node>]) -> bool {
    regions
        .iter()
        .all(|region| matches!(region, Some(node) if !node.contains(Some(target))))
}

pub fn make_on_keydown(on_key: impl Fn(NavKey) + Copy + 'static) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            if key.suppresses_default() {
                ev.prevent_default();
            }
            on_key(key);
        }
    }
}

/// Calls `on_dismiss` on every pointer-down that lands outside both the
/// input and the list. The listener lives as long as the calling component.
pub fn use_outside_dismiss(
    input: NodeRef<leptos::html::Input>,
    list: NodeRef<leptos::html::Ul>,
    on_dismiss: impl Fn() + 'static,
) {
    let _ = use_event_listener(use_document(), ev::mousedown, move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let input_el = input.get_untracked();
        let list_el = list.get_untracked();
        let regions: [Option<&web_sys::Node>; 2] = [
            input_el.as_ref().map(AsRef::<web_sys::Node>::as_ref),
            list_el.as_ref().map(AsRef::<web_sys::Node>::as_ref),
        ];
        if is_outside(&target, &regions) {
            on_dismiss();
        }
    });
}
