//! Search panel rendering.
//!
//! Empty query shows the default view (trending, recent searches, popular
//! genres); a non-empty query renders the three result facets with counts.
//! Selecting a result records the query in the recent-search history.

use crate::dom::{self, Elements};
use crate::events::on_element_click;
use crate::reader;
use crate::state;
use mv_api_types::{Manga, MangaStatus};

const MANGA_RESULT_LIMIT: usize = 6;
const AUTHOR_RESULT_LIMIT: usize = 3;
const GENRE_RESULT_LIMIT: usize = 4;
const TRENDING_LIMIT: usize = 4;
const GENRE_CHIP_LIMIT: usize = 8;

fn status_label(status: MangaStatus) -> &'static str {
    match status {
        MangaStatus::Ongoing => "ongoing",
        MangaStatus::Completed => "completed",
        MangaStatus::Hiatus => "hiatus",
    }
}

fn manga_card(manga: &Manga) -> web_sys::Element {
    let card = dom::create_element("div");
    card.set_attribute("class", "manga-card").unwrap();
    card.set_attribute("data-manga", &manga.id).unwrap();

    let html = format!(
        r#"
        <img class="mc-cover" src="{}" alt="{}">
        <div class="mc-body">
          <div class="mc-title">{}</div>
          <div class="mc-meta">{} · <span class="mc-status mc-status--{}">{}</span></div>
          <div class="mc-sub">★ {:.2} · {} ch.</div>
        </div>
        "#,
        manga.cover,
        manga.title,
        manga.title,
        manga.author,
        status_label(manga.status),
        status_label(manga.status),
        manga.rating,
        manga.chapters,
    );
    dom::set_inner_html(&card, &html);
    card
}

/// Set the query programmatically and re-run the search.
pub fn set_query(els: &Elements, query: &str) {
    dom::set_input_value(&els.search_input, query);
    on_query_input(els);
}

/// Trending grid on the home panel.
pub fn render_home(els: &Elements) {
    dom::set_inner_html(&els.home_trending, "");
    let trending = state::with_index(|index| index.trending(8).to_vec());
    for manga in trending {
        let card = manga_card(&manga);
        let els2 = els.clone();
        let id = manga.id.clone();
        on_element_click(&card, move |_| {
            reader::open_manga(&els2, &id);
        });
        els.home_trending.append_child(&card).unwrap();
    }
}

/// The empty-query view: trending now, recent searches, popular genres.
pub fn render_default(els: &Elements) {
    // Trending
    dom::set_inner_html(&els.trending_list, "");
    let trending = state::with_index(|index| index.trending(TRENDING_LIMIT).to_vec());
    for manga in trending {
        let card = manga_card(&manga);
        let els2 = els.clone();
        let id = manga.id.clone();
        on_element_click(&card, move |_| {
            reader::open_manga(&els2, &id);
        });
        els.trending_list.append_child(&card).unwrap();
    }

    // Recent searches
    dom::set_inner_html(&els.recent_list, "");
    let recents = state::with_recents(|r| r.list().to_vec());
    for term in recents {
        let item = dom::create_element("button");
        item.set_attribute("class", "recent-item").unwrap();
        dom::set_text(&item, &term);
        let els2 = els.clone();
        let term2 = term.clone();
        on_element_click(&item, move |_| {
            set_query(&els2, &term2);
        });
        els.recent_list.append_child(&item).unwrap();
    }

    // Popular genres
    dom::set_inner_html(&els.genre_chips, "");
    let genres: Vec<String> = state::with_index(|index| {
        index.genres().iter().take(GENRE_CHIP_LIMIT).cloned().collect()
    });
    for genre in genres {
        let chip = dom::create_element("button");
        chip.set_attribute("class", "genre-chip").unwrap();
        dom::set_text(&chip, &genre);
        let els2 = els.clone();
        let genre2 = genre.clone();
        on_element_click(&chip, move |_| {
            set_query(&els2, &genre2);
        });
        els.genre_chips.append_child(&chip).unwrap();
    }
}

/// Live search handler, re-run on every input event.
pub fn on_query_input(els: &Elements) {
    let query = dom::get_input_value(&els.search_input);
    dom::show(&els.search_clear_btn, !query.is_empty());

    if query.is_empty() {
        dom::show(&els.search_default, true);
        dom::show(&els.search_results, false);
        render_default(els);
        return;
    }

    let results = state::with_index(|index| index.search(&query));

    dom::show(&els.search_default, false);
    dom::show(&els.search_results, true);
    dom::show(&els.search_empty, results.is_empty());

    render_manga_results(els, &results.manga, &query);
    render_author_results(els, &results.authors);
    render_genre_results(els, &results.genres, &query);
}

fn record_search(term: &str) {
    let outcome = state::with_recents(|r| r.record(term));
    if let Err(err) = outcome {
        gloo_console::warn!(format!("failed to persist recent searches: {err:#}"));
    }
}

fn render_manga_results(els: &Elements, manga: &[Manga], query: &str) {
    dom::set_inner_html(&els.manga_results, "");
    dom::show(&els.manga_results, !manga.is_empty());

    for entry in manga.iter().take(MANGA_RESULT_LIMIT) {
        let card = manga_card(entry);
        let els2 = els.clone();
        let id = entry.id.clone();
        let query2 = query.to_owned();
        on_element_click(&card, move |_| {
            record_search(&query2);
            reader::open_manga(&els2, &id);
        });
        els.manga_results.append_child(&card).unwrap();
    }
}

fn render_author_results(els: &Elements, authors: &[String]) {
    dom::set_inner_html(&els.author_results, "");
    dom::show(&els.author_results, !authors.is_empty());

    for author in authors.iter().take(AUTHOR_RESULT_LIMIT) {
        let count = state::with_index(|index| index.by_author(author).len());

        let item = dom::create_element("div");
        item.set_attribute("class", "facet-item facet-item--author").unwrap();
        let html = format!(
            r#"<div class="fi-name">{author}</div><div class="fi-count">{count} manga</div>"#
        );
        dom::set_inner_html(&item, &html);

        let els2 = els.clone();
        let author2 = author.clone();
        on_element_click(&item, move |_| {
            set_query(&els2, &author2);
        });
        els.author_results.append_child(&item).unwrap();
    }
}

fn render_genre_results(els: &Elements, genres: &[String], query: &str) {
    dom::set_inner_html(&els.genre_results, "");
    dom::show(&els.genre_results, !genres.is_empty());

    for genre in genres.iter().take(GENRE_RESULT_LIMIT) {
        let count = state::with_index(|index| index.by_genre(genre).len());

        let item = dom::create_element("div");
        item.set_attribute("class", "facet-item facet-item--genre").unwrap();
        let html = format!(
            r#"<div class="fi-name">{genre}</div><div class="fi-count">{count} manga</div>"#
        );
        dom::set_inner_html(&item, &html);

        let els2 = els.clone();
        let genre2 = genre.clone();
        let query2 = query.to_owned();
        on_element_click(&item, move |_| {
            record_search(&query2);
            set_query(&els2, &genre2);
        });
        els.genre_results.append_child(&item).unwrap();
    }
}
