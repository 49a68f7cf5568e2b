//! Static manga catalog, the search index over it, and recent-search history.

mod chapters;
mod data;

pub use chapters::{chapters_for, find_chapter};

use anyhow::Result;
use mv_api_types::{Manga, SearchResults};
use mv_storage::{KeyValueStore, load_json_or_default, store_json};
use std::sync::OnceLock;

pub const RECENT_SEARCHES_KEY: &str = "mangaverse-recent-searches";

/// Recent-search history keeps at most this many entries.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// The shipped catalog. Built once, immutable afterwards.
pub fn catalog() -> &'static [Manga] {
    static CATALOG: OnceLock<Vec<Manga>> = OnceLock::new();
    CATALOG.get_or_init(data::entries)
}

/// Query-time filtering across three facets: titles, authors, genres.
///
/// The distinct author and genre lists are derived once at construction; the
/// catalog never changes underneath the index.
pub struct SearchIndex {
    entries: Vec<Manga>,
    authors: Vec<String>,
    genres: Vec<String>,
}

impl SearchIndex {
    pub fn new(entries: &[Manga]) -> Self {
        let mut authors: Vec<String> = Vec::new();
        for manga in entries {
            if !authors.contains(&manga.author) {
                authors.push(manga.author.clone());
            }
        }
        authors.sort();

        let mut genres: Vec<String> = Vec::new();
        for manga in entries {
            for genre in &manga.genres {
                if !genres.contains(genre) {
                    genres.push(genre.clone());
                }
            }
        }
        genres.sort();

        Self {
            entries: entries.to_vec(),
            authors,
            genres,
        }
    }

    /// Index over the shipped catalog.
    pub fn shipped() -> Self {
        Self::new(catalog())
    }

    /// Case-insensitive substring search. An empty query returns empty result
    /// sets; the caller shows its default trending/recent view instead.
    /// Manga results preserve catalog order; no ranking is applied.
    pub fn search(&self, query: &str) -> SearchResults {
        if query.is_empty() {
            return SearchResults::default();
        }

        let needle = query.to_lowercase();

        let manga = self
            .entries
            .iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&needle)
                    || m.author.to_lowercase().contains(&needle)
                    || m.genres.iter().any(|g| g.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        let authors = self
            .authors
            .iter()
            .filter(|a| a.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let genres = self
            .genres
            .iter()
            .filter(|g| g.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        SearchResults {
            manga,
            authors,
            genres,
        }
    }

    /// First `n` catalog entries, used for the default "trending now" view.
    pub fn trending(&self, n: usize) -> &[Manga] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn by_author(&self, author: &str) -> Vec<&Manga> {
        self.entries.iter().filter(|m| m.author == author).collect()
    }

    pub fn by_genre(&self, genre: &str) -> Vec<&Manga> {
        self.entries
            .iter()
            .filter(|m| m.genres.iter().any(|g| g == genre))
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Manga> {
        self.entries.iter().find(|m| m.id == id)
    }

    /// Distinct authors, sorted.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Distinct genres, sorted.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }
}

/// Most-recent-first list of past query strings, capped at
/// [`RECENT_SEARCH_LIMIT`]. Recording a duplicate moves it to the front.
pub struct RecentSearches<S> {
    store: S,
    terms: Vec<String>,
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn new(store: S) -> Self {
        let terms = load_json_or_default(&store, RECENT_SEARCHES_KEY);
        Self { store, terms }
    }

    /// Record a search term. Empty or whitespace-only terms are ignored.
    pub fn record(&mut self, term: &str) -> Result<()> {
        if term.trim().is_empty() {
            return Ok(());
        }

        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_owned());
        self.terms.truncate(RECENT_SEARCH_LIMIT);

        store_json(&self.store, RECENT_SEARCHES_KEY, &self.terms)
    }

    pub fn list(&self) -> &[String] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mv_api_types::MangaStatus;
    use mv_storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn sample(id: &str, title: &str, author: &str, genres: &[&str]) -> Manga {
        Manga {
            id: id.to_owned(),
            title: title.to_owned(),
            author: author.to_owned(),
            cover: String::new(),
            rating: 4.5,
            genres: genres.iter().map(|g| (*g).to_owned()).collect(),
            status: MangaStatus::Ongoing,
            chapters: 100,
        }
    }

    fn two_entry_index() -> SearchIndex {
        SearchIndex::new(&[
            sample("1", "Chainsaw Man", "Tatsuki Fujimoto", &["Action", "Horror"]),
            sample("2", "One Piece", "Eiichiro Oda", &["Adventure"]),
        ])
    }

    #[test]
    fn empty_query_returns_empty_facets() {
        let results = two_entry_index().search("");
        assert!(results.is_empty());
    }

    #[test]
    fn genre_query_matches_manga_and_genre_facets() {
        let results = two_entry_index().search("action");
        let titles: Vec<&str> = results.manga.iter().map(|m| m.title.as_str()).collect();

        assert_eq!(titles, vec!["Chainsaw Man"]);
        assert_eq!(results.genres, vec!["Action".to_owned()]);
        assert!(results.authors.is_empty());
    }

    #[test]
    fn author_query_matches_case_insensitively() {
        let results = two_entry_index().search("ODA");
        assert_eq!(results.authors, vec!["Eiichiro Oda".to_owned()]);
        assert_eq!(results.manga.len(), 1);
        assert_eq!(results.manga[0].title, "One Piece");
    }

    #[test]
    fn manga_results_preserve_catalog_order() {
        let index = SearchIndex::new(&[
            sample("1", "Berserk", "Kentaro Miura", &["Dark Fantasy", "Action"]),
            sample("2", "Vinland Saga", "Makoto Yukimura", &["Historical", "Action"]),
            sample("3", "Monster", "Naoki Urasawa", &["Thriller"]),
        ]);

        let results = index.search("action");
        let titles: Vec<&str> = results
            .manga
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Berserk", "Vinland Saga"]);
    }

    #[test]
    fn search_tolerates_empty_catalog_and_empty_fields() {
        let empty = SearchIndex::new(&[]);
        assert!(empty.search("anything").is_empty());

        let index = SearchIndex::new(&[sample("1", "", "", &[])]);
        assert!(index.search("x").manga.is_empty());
    }

    #[test]
    fn distinct_lists_are_deduplicated_and_sorted() {
        let index = SearchIndex::new(&[
            sample("1", "Vagabond", "Takehiko Inoue", &["Historical", "Action"]),
            sample("2", "Slam Dunk", "Takehiko Inoue", &["Sports", "Action"]),
        ]);

        assert_eq!(index.authors(), ["Takehiko Inoue".to_owned()]);
        assert_eq!(
            index.genres(),
            [
                "Action".to_owned(),
                "Historical".to_owned(),
                "Sports".to_owned()
            ]
        );
    }

    #[test]
    fn shipped_catalog_has_sixteen_entries() {
        assert_eq!(catalog().len(), 16);
        let index = SearchIndex::shipped();
        assert_eq!(index.trending(4).len(), 4);
        assert_eq!(index.by_id("1").unwrap().title, "Chainsaw Man");
        assert!(!index.by_genre("Action").is_empty());
        assert_eq!(index.by_author("Eiichiro Oda").len(), 1);
    }

    #[test]
    fn recording_a_duplicate_moves_it_to_the_front() {
        let mut recent = RecentSearches::new(MemoryStore::new());
        recent.record("action").unwrap();
        recent.record("horror").unwrap();
        recent.record("action").unwrap();

        assert_eq!(recent.list(), ["action".to_owned(), "horror".to_owned()]);
    }

    #[test]
    fn history_is_capped_at_five_most_recent() {
        let mut recent = RecentSearches::new(MemoryStore::new());
        for term in ["a", "b", "c", "d", "e", "f"] {
            recent.record(term).unwrap();
        }

        assert_eq!(
            recent.list(),
            ["f", "e", "d", "c", "b"].map(str::to_owned)
        );
    }

    #[test]
    fn blank_terms_are_ignored() {
        let mut recent = RecentSearches::new(MemoryStore::new());
        recent.record("").unwrap();
        recent.record("   ").unwrap();
        assert!(recent.list().is_empty());
    }

    #[test]
    fn history_roundtrips_through_backing_storage() {
        let backing = MemoryStore::new();
        let mut recent = RecentSearches::new(backing.clone());
        recent.record("frieren").unwrap();
        recent.record("oda").unwrap();

        let reloaded = RecentSearches::new(backing);
        assert_eq!(reloaded.list(), ["oda".to_owned(), "frieren".to_owned()]);
    }
}
