//! Chapter reader: page navigation, progress save/restore, bookmark capture.

use crate::bookmarks_panel;
use crate::dom::{self, Elements};
use crate::events::{on_element_click, set_active_tab};
use crate::state;
use mv_api_types::BookmarkDraft;

/// Open a manga: show its chapter list and jump into the first chapter.
pub fn open_manga(els: &Elements, manga_id: &str) {
    let Some(manga) = state::with_index(|index| index.by_id(manga_id).cloned()) else {
        gloo_console::warn!(format!("unknown manga id: {manga_id}"));
        return;
    };

    dom::set_text(&els.reader_title, &manga.title);
    state::with_mut(|s| s.current_manga = Some(manga.id.clone()));

    render_chapter_list(els, manga_id);
    set_active_tab(els, "reader");

    let chapters = mv_catalog::chapters_for(manga_id);
    if let Some(first) = chapters.first() {
        open_chapter(els, manga_id, &first.id);
    }
}

fn render_chapter_list(els: &Elements, manga_id: &str) {
    dom::set_inner_html(&els.chapter_list, "");
    let current = state::current_chapter().map(|c| c.id);

    for chapter in mv_catalog::chapters_for(manga_id) {
        let item = dom::create_element("button");
        let mut cls = "chapter-item".to_string();
        if current.as_deref() == Some(chapter.id.as_str()) {
            cls.push_str(" chapter-item--active");
        }
        item.set_attribute("class", &cls).unwrap();
        dom::set_text(&item, &format!("Ch. {}: {}", chapter.number, chapter.title));

        let els2 = els.clone();
        let manga_id2 = manga_id.to_owned();
        let chapter_id = chapter.id.clone();
        on_element_click(&item, move |_| {
            open_chapter(&els2, &manga_id2, &chapter_id);
        });
        els.chapter_list.append_child(&item).unwrap();
    }
}

/// Open one chapter, resuming the saved page when there is one.
pub fn open_chapter(els: &Elements, manga_id: &str, chapter_id: &str) {
    let Some(chapter) = mv_catalog::find_chapter(manga_id, chapter_id) else {
        gloo_console::warn!(format!("unknown chapter id: {chapter_id}"));
        return;
    };

    let total = chapter.pages.len() as u32;
    let saved = state::with_progress(|p| p.load(manga_id, chapter_id));
    let page = saved.map(|p| p.page).unwrap_or(1).clamp(1, total.max(1));

    if let Some(manga) = state::with_index(|index| index.by_id(manga_id).cloned()) {
        dom::set_text(&els.reader_title, &manga.title);
    }
    dom::set_text(
        &els.reader_chapter,
        &format!("Chapter {} · {}", chapter.number, chapter.title),
    );

    state::with_mut(|s| {
        s.current_manga = Some(manga_id.to_owned());
        s.current_chapter = Some(chapter);
        s.current_page = page;
    });

    render_chapter_list(els, manga_id);
    save_progress();
    render_page(els);
}

/// Write the current position. Saved on open and on every page turn.
fn save_progress() {
    let (Some(manga_id), Some(chapter)) = (state::current_manga(), state::current_chapter())
    else {
        return;
    };
    let page = state::current_page();
    let outcome = state::with_progress(|p| p.save(&manga_id, &chapter.id, page));
    if let Err(err) = outcome {
        gloo_console::warn!(format!("failed to persist reading progress: {err:#}"));
    }
}

/// Jump straight to a specific page (bookmark panel "open" action).
pub fn open_at(els: &Elements, manga_id: &str, chapter_id: &str, page: u32) {
    open_chapter(els, manga_id, chapter_id);

    let Some(chapter) = state::current_chapter() else {
        return;
    };
    if chapter.id != chapter_id {
        return;
    }

    let total = chapter.pages.len() as u32;
    state::set_current_page(page.clamp(1, total.max(1)));
    save_progress();
    render_page(els);
    set_active_tab(els, "reader");
}

pub fn next_page(els: &Elements) {
    turn_page(els, 1);
}

pub fn prev_page(els: &Elements) {
    turn_page(els, -1);
}

fn turn_page(els: &Elements, delta: i64) {
    let Some(chapter) = state::current_chapter() else {
        return;
    };
    let total = chapter.pages.len() as i64;
    let target = (state::current_page() as i64 + delta).clamp(1, total.max(1));

    if target != state::current_page() as i64 {
        state::set_current_page(target as u32);
        save_progress();
        render_page(els);
    }
}

/// Redraw the page image, indicator, progress bar, and bookmark controls.
pub fn render_page(els: &Elements) {
    let Some(chapter) = state::current_chapter() else {
        return;
    };
    let page = state::current_page();
    let total = chapter.pages.len() as u32;

    if let Some(src) = chapter.pages.get(page.saturating_sub(1) as usize) {
        els.page_image.set_src(src);
    }
    dom::set_text(&els.page_indicator, &format!("{page} / {total}"));

    let percent = if total == 0 {
        0.0
    } else {
        page as f64 / total as f64 * 100.0
    };
    let _ = els
        .progress_bar
        .style()
        .set_property("width", &format!("{percent:.0}%"));

    refresh_bookmark_controls(els);
}

/// Sync the toggle button, note input, and hint with the stored bookmark for
/// the current position.
pub fn refresh_bookmark_controls(els: &Elements) {
    let (Some(manga_id), Some(chapter)) = (state::current_manga(), state::current_chapter())
    else {
        return;
    };
    let page = state::current_page();

    let existing =
        state::with_bookmarks(|b| b.get(&manga_id, &chapter.id, page).cloned());

    match existing {
        Some(bookmark) => {
            dom::toggle_class(&els.bookmark_toggle_btn, "bookmarked", true);
            els.bookmark_toggle_btn.set_text_content(Some("★ Bookmarked"));
            dom::set_textarea_value(&els.bookmark_note_input, &bookmark.note);
            dom::set_text(&els.bookmark_hint, "Bookmarked · save again to update the note");
        }
        None => {
            dom::toggle_class(&els.bookmark_toggle_btn, "bookmarked", false);
            els.bookmark_toggle_btn.set_text_content(Some("☆ Bookmark"));
            dom::set_textarea_value(&els.bookmark_note_input, "");
            dom::set_text(&els.bookmark_hint, "");
        }
    }
}

fn current_draft(note: String) -> Option<BookmarkDraft> {
    let manga_id = state::current_manga()?;
    let chapter = state::current_chapter()?;
    let manga = state::with_index(|index| index.by_id(&manga_id).cloned())?;

    Some(BookmarkDraft {
        manga_id,
        manga_title: manga.title,
        chapter_id: chapter.id,
        chapter_number: chapter.number,
        chapter_title: chapter.title,
        page: state::current_page(),
        note,
        cover_url: Some(manga.cover),
    })
}

/// Save (or refresh) a bookmark at the current position with the entered note.
pub fn on_save_bookmark(els: &Elements) {
    let note = dom::get_textarea_value(&els.bookmark_note_input);
    let Some(draft) = current_draft(note) else {
        return;
    };

    if let Err(err) = state::with_bookmarks(|b| b.add(draft)) {
        gloo_console::error!(format!("failed to save bookmark: {err:#}"));
        return;
    }

    refresh_bookmark_controls(els);
    bookmarks_panel::render(els);
}

/// Toggle the bookmark at the current position.
pub fn on_toggle_bookmark(els: &Elements) {
    let (Some(manga_id), Some(chapter)) = (state::current_manga(), state::current_chapter())
    else {
        return;
    };
    let page = state::current_page();

    let existing = state::with_bookmarks(|b| b.get(&manga_id, &chapter.id, page).cloned());

    let outcome = match existing {
        Some(bookmark) => state::with_bookmarks(|b| b.remove(&bookmark.id)),
        None => {
            let note = dom::get_textarea_value(&els.bookmark_note_input);
            match current_draft(note) {
                Some(draft) => state::with_bookmarks(|b| b.add(draft)).map(|_| ()),
                None => return,
            }
        }
    };

    if let Err(err) = outcome {
        gloo_console::error!(format!("failed to update bookmark: {err:#}"));
        return;
    }

    refresh_bookmark_controls(els);
    bookmarks_panel::render(els);
}
