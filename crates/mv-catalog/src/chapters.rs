//! Mock chapter listings for the reader.
//!
//! A few seeded titles carry authored chapter lists; every other catalog
//! entry gets a generated list so each manga stays readable. Page images are
//! cover art placeholders.

use mv_api_types::ChapterInfo;

const PAGE_PLACEHOLDERS: [&str; 10] = [
    "assets/manga/chainsaw-man.jpg",
    "assets/manga/one-piece.jpg",
    "assets/manga/jujutsu-kaisen.jpg",
    "assets/manga/spy-x-family.jpg",
    "assets/manga/blue-lock.jpg",
    "assets/manga/dandadan.jpg",
    "assets/manga/frieren.jpg",
    "assets/manga/vinland-saga.jpg",
    "assets/manga/berserk.jpg",
    "assets/manga/kingdom.jpg",
];

const FALLBACK_CHAPTER_COUNT: u32 = 3;

fn mock_pages() -> Vec<String> {
    PAGE_PLACEHOLDERS.iter().map(|p| (*p).to_owned()).collect()
}

fn chapter(manga_id: &str, number: u32, title: &str) -> ChapterInfo {
    ChapterInfo {
        id: format!("{manga_id}-{number}"),
        number,
        title: title.to_owned(),
        pages: mock_pages(),
    }
}

/// Chapter list for one manga, most chapters first-to-last.
pub fn chapters_for(manga_id: &str) -> Vec<ChapterInfo> {
    match manga_id {
        "1" => vec![
            chapter("1", 1, "Dog & Chainsaw"),
            chapter("1", 2, "The Place Where Pochita Is"),
            chapter("1", 3, "Arrival in Tokyo"),
        ],
        "2" => vec![
            chapter("2", 1, "Romance Dawn"),
            chapter("2", 2, "That Man, \"Straw Hat Luffy\""),
        ],
        other => (1..=FALLBACK_CHAPTER_COUNT)
            .map(|number| chapter(other, number, &format!("Chapter {number}")))
            .collect(),
    }
}

/// Point lookup by chapter id within one manga.
pub fn find_chapter(manga_id: &str, chapter_id: &str) -> Option<ChapterInfo> {
    chapters_for(manga_id)
        .into_iter()
        .find(|c| c.id == chapter_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_manga_have_authored_chapters() {
        let chapters = chapters_for("1");
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].title, "Dog & Chainsaw");
        assert_eq!(chapters[0].id, "1-1");
        assert!(!chapters[0].pages.is_empty());
    }

    #[test]
    fn unknown_manga_get_generated_chapters() {
        let chapters = chapters_for("15");
        assert_eq!(chapters.len(), FALLBACK_CHAPTER_COUNT as usize);
        assert_eq!(chapters[1].id, "15-2");
        assert_eq!(chapters[1].title, "Chapter 2");
    }

    #[test]
    fn find_chapter_matches_by_id() {
        assert_eq!(find_chapter("2", "2-2").unwrap().number, 2);
        assert!(find_chapter("2", "2-9").is_none());
    }
}
