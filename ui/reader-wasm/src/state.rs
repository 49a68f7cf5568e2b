//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The core stores are singletons here, each built over the browser-backed
//! persistence and clock adapters.

use crate::storage::{BrowserClock, BrowserStore};
use mv_api_types::ChapterInfo;
use mv_bookmarks::{BookmarkStore, ProgressTracker};
use mv_catalog::{RecentSearches, SearchIndex};
use mv_web3::MockPlatform;
use std::cell::RefCell;

pub type Bookmarks = BookmarkStore<BrowserStore, BrowserClock>;
pub type Progress = ProgressTracker<BrowserStore, BrowserClock>;
pub type Recents = RecentSearches<BrowserStore>;
pub type Platform = MockPlatform<BrowserClock>;

/// Central UI state: what is currently open in the reader.
#[derive(Default)]
pub struct AppState {
    pub current_manga: Option<String>,
    pub current_chapter: Option<ChapterInfo>,
    pub current_page: u32,
}

// ── Thread-local singletons ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
    static BOOKMARKS: RefCell<Bookmarks> =
        RefCell::new(BookmarkStore::new(BrowserStore, BrowserClock));
    static PROGRESS: Progress = ProgressTracker::new(BrowserStore, BrowserClock);
    static RECENTS: RefCell<Recents> = RefCell::new(RecentSearches::new(BrowserStore));
    static PLATFORM: RefCell<Platform> = RefCell::new(MockPlatform::new(BrowserClock));
    static INDEX: SearchIndex = SearchIndex::shipped();
}

/// Run a closure with shared read access to the UI state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the UI state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn with_bookmarks<F, R>(f: F) -> R
where
    F: FnOnce(&mut Bookmarks) -> R,
{
    BOOKMARKS.with(|b| f(&mut b.borrow_mut()))
}

pub fn with_progress<F, R>(f: F) -> R
where
    F: FnOnce(&Progress) -> R,
{
    PROGRESS.with(f)
}

pub fn with_recents<F, R>(f: F) -> R
where
    F: FnOnce(&mut Recents) -> R,
{
    RECENTS.with(|r| f(&mut r.borrow_mut()))
}

pub fn with_platform<F, R>(f: F) -> R
where
    F: FnOnce(&mut Platform) -> R,
{
    PLATFORM.with(|p| f(&mut p.borrow_mut()))
}

pub fn with_index<F, R>(f: F) -> R
where
    F: FnOnce(&SearchIndex) -> R,
{
    INDEX.with(f)
}

// ── Convenience accessors ──

pub fn current_manga() -> Option<String> {
    with(|s| s.current_manga.clone())
}

pub fn current_chapter() -> Option<ChapterInfo> {
    with(|s| s.current_chapter.clone())
}

pub fn current_page() -> u32 {
    with(|s| s.current_page)
}

pub fn set_current_page(page: u32) {
    with_mut(|s| s.current_page = page);
}
