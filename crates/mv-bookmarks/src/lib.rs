//! Reading bookmarks and per-chapter progress.
//!
//! The store owns the in-memory collection and writes the whole list back to
//! its [`KeyValueStore`] on every mutation. At most one bookmark exists per
//! (manga, chapter, page) triple; saving onto an occupied triple refreshes the
//! existing entry instead of duplicating it.

use anyhow::Result;
use mv_api_types::{Bookmark, BookmarkDraft, ReadingProgress};
use mv_storage::{Clock, KeyValueStore, load_json_or_default, store_json};

pub const BOOKMARKS_KEY: &str = "mangaverse-bookmarks";

/// Free-text notes are capped at this many characters.
pub const NOTE_MAX_CHARS: usize = 200;

pub struct BookmarkStore<S, C> {
    store: S,
    clock: C,
    bookmarks: Vec<Bookmark>,
}

impl<S, C> BookmarkStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Build the store, loading whatever the backing storage holds. Corrupt
    /// data is discarded (and logged by the storage layer) rather than
    /// failing initialization.
    pub fn new(store: S, clock: C) -> Self {
        let bookmarks = load_json_or_default(&store, BOOKMARKS_KEY);
        Self {
            store,
            clock,
            bookmarks,
        }
    }

    /// Save a reading position. If the (manga, chapter, page) triple already
    /// has a bookmark, its note and timestamp are refreshed and the original
    /// id is preserved; otherwise a new entry is prepended so the collection
    /// stays most-recent-first. Returns the stored record.
    pub fn add(&mut self, draft: BookmarkDraft) -> Result<Bookmark> {
        let now = self.clock.now_ms();
        let note = clamp_note(&draft.note);

        let existing = self.bookmarks.iter_mut().find(|b| {
            b.manga_id == draft.manga_id
                && b.chapter_id == draft.chapter_id
                && b.page == draft.page
        });

        let stored = if let Some(bookmark) = existing {
            bookmark.note = note;
            bookmark.created_at = now;
            bookmark.clone()
        } else {
            let bookmark = Bookmark {
                id: format!(
                    "{}-{}-{}-{}",
                    draft.manga_id, draft.chapter_id, draft.page, now
                ),
                manga_id: draft.manga_id,
                manga_title: draft.manga_title,
                chapter_id: draft.chapter_id,
                chapter_number: draft.chapter_number,
                chapter_title: draft.chapter_title,
                page: draft.page,
                note,
                created_at: now,
                cover_url: draft.cover_url,
            };
            self.bookmarks.insert(0, bookmark.clone());
            bookmark
        };

        self.persist()?;
        Ok(stored)
    }

    /// Remove the bookmark with the given id. Unknown ids are a benign no-op.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Replace the note of the bookmark with the given id. Unknown ids are a
    /// benign no-op.
    pub fn update_note(&mut self, id: &str, note: &str) -> Result<()> {
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(());
        };
        bookmark.note = clamp_note(note);
        self.persist()
    }

    pub fn is_bookmarked(&self, manga_id: &str, chapter_id: &str, page: u32) -> bool {
        self.get(manga_id, chapter_id, page).is_some()
    }

    pub fn get(&self, manga_id: &str, chapter_id: &str, page: u32) -> Option<&Bookmark> {
        self.bookmarks
            .iter()
            .find(|b| b.manga_id == manga_id && b.chapter_id == chapter_id && b.page == page)
    }

    /// All bookmarks for one manga, in store order (most-recent-first).
    pub fn for_manga(&self, manga_id: &str) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| b.manga_id == manga_id)
            .collect()
    }

    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn persist(&self) -> Result<()> {
        store_json(&self.store, BOOKMARKS_KEY, &self.bookmarks)
    }
}

fn clamp_note(note: &str) -> String {
    note.chars().take(NOTE_MAX_CHARS).collect()
}

/// Per-chapter reading position, one record per (manga, chapter) pair, saved
/// on every page turn.
pub struct ProgressTracker<S, C> {
    store: S,
    clock: C,
}

impl<S, C> ProgressTracker<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn save(&self, manga_id: &str, chapter_id: &str, page: u32) -> Result<()> {
        let progress = ReadingProgress {
            page,
            timestamp: self.clock.now_ms(),
        };
        store_json(&self.store, &progress_key(manga_id, chapter_id), &progress)
    }

    pub fn load(&self, manga_id: &str, chapter_id: &str) -> Option<ReadingProgress> {
        let key = progress_key(manga_id, chapter_id);
        let loaded: Option<ReadingProgress> = load_json_or_default(&self.store, &key);
        loaded
    }

    pub fn clear(&self, manga_id: &str, chapter_id: &str) {
        self.store.remove(&progress_key(manga_id, chapter_id));
    }
}

fn progress_key(manga_id: &str, chapter_id: &str) -> String {
    format!("reading-progress-{manga_id}-{chapter_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mv_storage::{ManualClock, MemoryStore};
    use pretty_assertions::assert_eq;

    fn draft(manga_id: &str, chapter_id: &str, page: u32, note: &str) -> BookmarkDraft {
        BookmarkDraft {
            manga_id: manga_id.to_owned(),
            manga_title: "Chainsaw Man".to_owned(),
            chapter_id: chapter_id.to_owned(),
            chapter_number: 1,
            chapter_title: "Dog & Chainsaw".to_owned(),
            page,
            note: note.to_owned(),
            cover_url: None,
        }
    }

    fn store_at(now_ms: u64) -> (BookmarkStore<MemoryStore, ManualClock>, MemoryStore, ManualClock)
    {
        let backing = MemoryStore::new();
        let clock = ManualClock::at(now_ms);
        let store = BookmarkStore::new(backing.clone(), clock.clone());
        (store, backing, clock)
    }

    #[test]
    fn add_then_lookup_by_triple() {
        let (mut store, _, _) = store_at(1_700_000_000_000);
        store.add(draft("1", "1-1", 3, "great scene")).unwrap();

        assert!(store.is_bookmarked("1", "1-1", 3));
        assert!(!store.is_bookmarked("1", "1-1", 4));
        assert_eq!(store.get("1", "1-1", 3).unwrap().note, "great scene");
    }

    #[test]
    fn duplicate_triple_overwrites_instead_of_duplicating() {
        let (mut store, _, clock) = store_at(1_700_000_000_000);
        let first = store.add(draft("1", "1-1", 3, "first note")).unwrap();

        clock.advance(5_000);
        let second = store.add(draft("1", "1-1", 3, "second note")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.note, "second note");
        assert_eq!(second.created_at, first.created_at + 5_000);
    }

    #[test]
    fn new_bookmarks_are_prepended() {
        let (mut store, _, clock) = store_at(1_700_000_000_000);
        store.add(draft("1", "1-1", 3, "older")).unwrap();
        clock.advance(1);
        store.add(draft("1", "1-2", 7, "newer")).unwrap();

        let notes: Vec<&str> = store.all().iter().map(|b| b.note.as_str()).collect();
        assert_eq!(notes, vec!["newer", "older"]);
    }

    #[test]
    fn rapid_repeated_adds_get_distinct_ids() {
        let (mut store, _, clock) = store_at(1_700_000_000_000);
        let a = store.add(draft("1", "1-1", 1, "")).unwrap();
        clock.advance(1);
        let b = store.add(draft("1", "1-1", 2, "")).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn collection_roundtrips_through_backing_storage() {
        let (mut store, backing, clock) = store_at(1_700_000_000_000);
        store.add(draft("1", "1-1", 3, "keep me")).unwrap();
        clock.advance(10);
        store.add(draft("2", "2-1", 1, "me too")).unwrap();

        let reloaded = BookmarkStore::new(backing, clock);
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn remove_then_get_returns_none() {
        let (mut store, _, _) = store_at(1_700_000_000_000);
        let saved = store.add(draft("1", "1-1", 3, "")).unwrap();

        store.remove(&saved.id).unwrap();
        assert_eq!(store.get("1", "1-1", 3), None);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let (mut store, _, _) = store_at(1_700_000_000_000);
        store.add(draft("1", "1-1", 3, "")).unwrap();

        store.remove("no-such-id").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_note_replaces_only_the_note() {
        let (mut store, _, _) = store_at(1_700_000_000_000);
        let saved = store.add(draft("1", "1-1", 3, "old")).unwrap();

        store.update_note(&saved.id, "new").unwrap();
        let updated = store.get("1", "1-1", 3).unwrap();
        assert_eq!(updated.note, "new");
        assert_eq!(updated.created_at, saved.created_at);

        store.update_note("no-such-id", "ignored").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn notes_are_capped_at_200_chars() {
        let (mut store, _, _) = store_at(1_700_000_000_000);
        let long_note = "х".repeat(300);
        let saved = store.add(draft("1", "1-1", 3, &long_note)).unwrap();
        assert_eq!(saved.note.chars().count(), NOTE_MAX_CHARS);

        store.update_note(&saved.id, &"y".repeat(250)).unwrap();
        assert_eq!(
            store.get("1", "1-1", 3).unwrap().note.chars().count(),
            NOTE_MAX_CHARS
        );
    }

    #[test]
    fn for_manga_preserves_store_order() {
        let (mut store, _, clock) = store_at(1_700_000_000_000);
        store.add(draft("1", "1-1", 1, "a")).unwrap();
        clock.advance(1);
        store.add(draft("2", "2-1", 1, "other manga")).unwrap();
        clock.advance(1);
        store.add(draft("1", "1-2", 4, "b")).unwrap();

        let notes: Vec<&str> = store
            .for_manga("1")
            .iter()
            .map(|b| b.note.as_str())
            .collect();
        assert_eq!(notes, vec!["b", "a"]);
    }

    #[test]
    fn corrupt_persisted_data_yields_empty_store() {
        let backing = MemoryStore::new();
        backing.set(BOOKMARKS_KEY, "][ definitely not json").unwrap();

        let store = BookmarkStore::new(backing, ManualClock::at(0));
        assert!(store.is_empty());
    }

    #[test]
    fn progress_roundtrips_per_chapter_key() {
        let backing = MemoryStore::new();
        let tracker = ProgressTracker::new(backing.clone(), ManualClock::at(1_700_000_000_000));

        tracker.save("1", "1-1", 7).unwrap();
        tracker.save("1", "1-2", 2).unwrap();

        assert_eq!(
            tracker.load("1", "1-1"),
            Some(ReadingProgress {
                page: 7,
                timestamp: 1_700_000_000_000
            })
        );
        assert_eq!(tracker.load("1", "1-2").unwrap().page, 2);
        assert_eq!(tracker.load("1", "9-9"), None);

        tracker.clear("1", "1-1");
        assert_eq!(tracker.load("1", "1-1"), None);
    }
}
