//! Event binding.
//!
//! Wires all UI event listeners. Static elements are bound once here;
//! rendered cards bind their own handlers through [`on_element_click`].

use crate::dom::{self, Elements};
use crate::reader;
use crate::search;
use crate::theme;
use crate::web3;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Attach a click handler to a rendered element.
pub fn on_element_click<F>(el: &web_sys::Element, handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Helper: attach a click handler to a static element.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach an input handler.
macro_rules! on_input {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::Event)>);
        $el.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Tabs ──
    for tab in &els.tabs {
        let tab_name = tab.get_attribute("data-tab").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            set_active_tab(&els2, &tab_name);
        }) as Box<dyn FnMut(_)>);
        tab.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Header ──
    {
        let els2 = els.clone();
        on_click!(els.theme_toggle_btn, move |_: web_sys::MouseEvent| {
            theme::toggle(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.connect_wallet_btn, move |_: web_sys::MouseEvent| {
            web3::on_connect_toggle(&els2);
        });
    }

    // ── Search ──
    {
        let els2 = els.clone();
        on_input!(els.search_input, move |_: web_sys::Event| {
            search::on_query_input(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.search_clear_btn, move |_: web_sys::MouseEvent| {
            search::set_query(&els2, "");
        });
    }

    // ── Reader ──
    {
        let els2 = els.clone();
        on_click!(els.prev_page_btn, move |_: web_sys::MouseEvent| {
            reader::prev_page(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.next_page_btn, move |_: web_sys::MouseEvent| {
            reader::next_page(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.bookmark_toggle_btn, move |_: web_sys::MouseEvent| {
            reader::on_toggle_bookmark(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.save_bookmark_btn, move |_: web_sys::MouseEvent| {
            reader::on_save_bookmark(&els2);
        });
    }

    bind_keyboard_nav(els);
}

/// Arrow-key paging while the reader panel is active. Ignored when a text
/// field has focus.
fn bind_keyboard_nav(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if !panel_is_active(&els2, "reader") || text_field_focused() {
            return;
        }
        match event.key().as_str() {
            "ArrowLeft" => reader::prev_page(&els2),
            "ArrowRight" => reader::next_page(&els2),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    dom::document()
        .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn panel_is_active(els: &Elements, name: &str) -> bool {
    els.panels
        .iter()
        .any(|panel| panel.id() == name && panel.class_list().contains("active"))
}

fn text_field_focused() -> bool {
    let Some(active) = dom::document().active_element() else {
        return false;
    };
    matches!(active.tag_name().as_str(), "INPUT" | "TEXTAREA")
}

/// Switch active tab and panel.
pub fn set_active_tab(els: &Elements, tab_name: &str) {
    for tab in &els.tabs {
        dom::toggle_class(
            tab,
            "active",
            tab.get_attribute("data-tab").as_deref() == Some(tab_name),
        );
    }
    for panel in &els.panels {
        let id = panel.id();
        dom::toggle_class(panel, "active", id == tab_name);
    }
}
