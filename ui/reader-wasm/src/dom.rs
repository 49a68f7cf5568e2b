//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn get_textarea_value(el: &HtmlTextAreaElement) -> String {
    el.value().trim().to_string()
}

pub fn set_textarea_value(el: &HtmlTextAreaElement, val: &str) {
    el.set_value(val);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn show(el: &Element, visible: bool) {
    toggle_class(el, "hidden", !visible);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// `0xa1c7…93f2`-style shortening for addresses.
pub fn shorten(value: &str, head: usize, tail: usize) -> String {
    if value.len() <= head + tail + 1 {
        return value.to_string();
    }
    format!("{}…{}", &value[..head], &value[value.len() - tail..])
}

// ── Elements struct ──

/// All DOM element references used by the reader UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Header
    pub connect_wallet_btn: HtmlElement,
    pub balance_display: Element,
    pub theme_toggle_btn: HtmlElement,

    // Tabs
    pub tabs: Vec<Element>,
    pub panels: Vec<Element>,

    // Home
    pub home_trending: Element,

    // Search
    pub search_input: HtmlInputElement,
    pub search_clear_btn: HtmlElement,
    pub search_default: Element,
    pub trending_list: Element,
    pub recent_list: Element,
    pub genre_chips: Element,
    pub search_results: Element,
    pub manga_results: Element,
    pub author_results: Element,
    pub genre_results: Element,
    pub search_empty: Element,

    // Reader
    pub reader_title: Element,
    pub reader_chapter: Element,
    pub chapter_list: Element,
    pub page_image: HtmlImageElement,
    pub page_indicator: Element,
    pub progress_bar: HtmlElement,
    pub prev_page_btn: HtmlElement,
    pub next_page_btn: HtmlElement,
    pub bookmark_toggle_btn: HtmlElement,
    pub bookmark_note_input: HtmlTextAreaElement,
    pub save_bookmark_btn: HtmlElement,
    pub bookmark_hint: Element,

    // Bookmarks
    pub bookmarks_container: Element,

    // Profile / Web3
    pub rewards_display: Element,
    pub nft_gallery: Element,
    pub subscription_card: Element,

    // Governance
    pub voting_power_display: Element,
    pub proposal_list: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_img {
    ($id:expr) => {
        by_id_typed::<HtmlImageElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing img #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            connect_wallet_btn: get_html!("connectWalletBtn"),
            balance_display: get_el!("balanceDisplay"),
            theme_toggle_btn: get_html!("themeToggleBtn"),

            tabs: query_all(".tab"),
            panels: query_all(".panel"),

            home_trending: get_el!("homeTrending"),

            search_input: get_input!("searchInput"),
            search_clear_btn: get_html!("searchClearBtn"),
            search_default: get_el!("searchDefault"),
            trending_list: get_el!("trendingList"),
            recent_list: get_el!("recentList"),
            genre_chips: get_el!("genreChips"),
            search_results: get_el!("searchResults"),
            manga_results: get_el!("mangaResults"),
            author_results: get_el!("authorResults"),
            genre_results: get_el!("genreResults"),
            search_empty: get_el!("searchEmpty"),

            reader_title: get_el!("readerTitle"),
            reader_chapter: get_el!("readerChapter"),
            chapter_list: get_el!("chapterList"),
            page_image: get_img!("pageImage"),
            page_indicator: get_el!("pageIndicator"),
            progress_bar: get_html!("progressBar"),
            prev_page_btn: get_html!("prevPageBtn"),
            next_page_btn: get_html!("nextPageBtn"),
            bookmark_toggle_btn: get_html!("bookmarkToggleBtn"),
            bookmark_note_input: get_textarea!("bookmarkNoteInput"),
            save_bookmark_btn: get_html!("saveBookmarkBtn"),
            bookmark_hint: get_el!("bookmarkHint"),

            bookmarks_container: get_el!("bookmarksContainer"),

            rewards_display: get_el!("rewardsDisplay"),
            nft_gallery: get_el!("nftGallery"),
            subscription_card: get_el!("subscriptionCard"),

            voting_power_display: get_el!("votingPowerDisplay"),
            proposal_list: get_el!("proposalList"),
        })
    }
}
