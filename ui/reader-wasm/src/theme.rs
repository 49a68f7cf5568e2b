//! Dark/light theme handling.
//!
//! The choice persists under `mangaverse-theme` and is applied as a class on
//! `<body>`. Dark is the default, matching the reader's night-first design.

use crate::dom::{self, Elements};
use crate::storage::BrowserStore;
use mv_storage::KeyValueStore;

const THEME_KEY: &str = "mangaverse-theme";
const DARK_CLASS: &str = "theme-dark";

fn body() -> Option<web_sys::HtmlElement> {
    dom::document().body()
}

pub fn is_dark() -> bool {
    body().map(|b| b.class_list().contains(DARK_CLASS)).unwrap_or(true)
}

fn apply(els: &Elements, dark: bool) {
    if let Some(body) = body() {
        dom::toggle_class(&body, DARK_CLASS, dark);
    }
    els.theme_toggle_btn
        .set_text_content(Some(if dark { "☀" } else { "☾" }));
}

/// Restore the persisted choice. Anything except an explicit "light" means
/// dark.
pub fn init(els: &Elements) {
    let stored = BrowserStore.get(THEME_KEY);
    apply(els, stored.as_deref() != Some("light"));
}

pub fn toggle(els: &Elements) {
    let dark = !is_dark();
    apply(els, dark);
    if let Err(err) = BrowserStore.set(THEME_KEY, if dark { "dark" } else { "light" }) {
        gloo_console::warn!(format!("failed to persist theme: {err:#}"));
    }
}
