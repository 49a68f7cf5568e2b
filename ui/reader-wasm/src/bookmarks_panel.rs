//! Bookmark panel rendering.
//!
//! Renders bookmark cards most-recent-first with open / edit-note / remove
//! actions. Re-rendered after every bookmark mutation.

use crate::dom::{self, Elements};
use crate::events::on_element_click;
use crate::reader;
use crate::state;
use mv_api_types::Bookmark;
use wasm_bindgen::JsValue;

fn format_date(epoch_ms: u64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms as f64));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

fn bookmark_card(els: &Elements, bookmark: &Bookmark) -> web_sys::Element {
    let card = dom::create_element("div");
    card.set_attribute("class", "bookmark-card").unwrap();

    let cover_html = match &bookmark.cover_url {
        Some(cover) if !cover.is_empty() => {
            format!(r#"<img class="bk-cover" src="{cover}" alt="{}">"#, bookmark.manga_title)
        }
        _ => String::new(),
    };
    let note_html = if bookmark.note.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="bk-note">{}</div>"#, bookmark.note)
    };

    let html = format!(
        r#"
        {}
        <div class="bk-body">
          <div class="bk-title">{}</div>
          <div class="bk-meta">Ch. {} · Page {} · {}</div>
          {}
        </div>
        <div class="bk-actions">
          <button class="bk-open-btn secondary">Open</button>
          <button class="bk-note-btn icon-btn" title="Edit note">✎</button>
          <button class="bk-remove-btn icon-btn" title="Remove">&minus;</button>
        </div>
        "#,
        cover_html,
        bookmark.manga_title,
        bookmark.chapter_number,
        bookmark.page,
        format_date(bookmark.created_at),
        note_html,
    );
    dom::set_inner_html(&card, &html);

    bind_card_actions(els, &card, bookmark);
    card
}

fn bind_card_actions(els: &Elements, card: &web_sys::Element, bookmark: &Bookmark) {
    if let Some(open_btn) = dom::query_all_within(card, ".bk-open-btn").into_iter().next() {
        let els2 = els.clone();
        let manga_id = bookmark.manga_id.clone();
        let chapter_id = bookmark.chapter_id.clone();
        let page = bookmark.page;
        on_element_click(&open_btn, move |_| {
            reader::open_at(&els2, &manga_id, &chapter_id, page);
        });
    }

    if let Some(note_btn) = dom::query_all_within(card, ".bk-note-btn").into_iter().next() {
        let els2 = els.clone();
        let id = bookmark.id.clone();
        on_element_click(&note_btn, move |_| {
            on_edit_note(&els2, &id);
        });
    }

    if let Some(remove_btn) = dom::query_all_within(card, ".bk-remove-btn").into_iter().next() {
        let els2 = els.clone();
        let id = bookmark.id.clone();
        on_element_click(&remove_btn, move |_| {
            if let Err(err) = state::with_bookmarks(|b| b.remove(&id)) {
                gloo_console::error!(format!("failed to remove bookmark: {err:#}"));
            }
            render(&els2);
            reader::refresh_bookmark_controls(&els2);
        });
    }
}

/// Prompt for a replacement note.
fn on_edit_note(els: &Elements, id: &str) {
    let note = dom::window()
        .prompt_with_message("Edit bookmark note:")
        .ok()
        .flatten();
    let Some(note) = note else {
        return;
    };

    if let Err(err) = state::with_bookmarks(|b| b.update_note(id, note.trim())) {
        gloo_console::error!(format!("failed to update note: {err:#}"));
    }
    render(els);
    reader::refresh_bookmark_controls(els);
}

/// Render all bookmark cards into the panel container.
pub fn render(els: &Elements) {
    let container = &els.bookmarks_container;
    dom::set_inner_html(container, "");

    let bookmarks = state::with_bookmarks(|b| b.all().to_vec());

    if bookmarks.is_empty() {
        dom::set_inner_html(
            container,
            r#"<div class="bookmark-card bookmark-card--empty">No bookmarks yet. Save a page from the reader.</div>"#,
        );
        return;
    }

    for bookmark in &bookmarks {
        let card = bookmark_card(els, bookmark);
        container.append_child(&card).unwrap();
    }
}
