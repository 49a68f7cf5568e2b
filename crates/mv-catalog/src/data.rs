//! The shipped catalog. Static reference data, immutable for the session.

use mv_api_types::{Manga, MangaStatus};

fn entry(
    id: &str,
    title: &str,
    author: &str,
    cover: &str,
    rating: f32,
    genres: &[&str],
    status: MangaStatus,
    chapters: u32,
) -> Manga {
    Manga {
        id: id.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        cover: format!("assets/manga/{cover}"),
        rating,
        genres: genres.iter().map(|g| (*g).to_owned()).collect(),
        status,
        chapters,
    }
}

pub(crate) fn entries() -> Vec<Manga> {
    use MangaStatus::{Completed, Ongoing};

    vec![
        entry(
            "1",
            "Chainsaw Man",
            "Tatsuki Fujimoto",
            "chainsaw-man.jpg",
            4.9,
            &["Action", "Horror", "Supernatural"],
            Ongoing,
            145,
        ),
        entry(
            "2",
            "One Piece",
            "Eiichiro Oda",
            "one-piece.jpg",
            4.95,
            &["Adventure", "Comedy", "Fantasy"],
            Ongoing,
            1105,
        ),
        entry(
            "3",
            "Jujutsu Kaisen",
            "Gege Akutami",
            "jujutsu-kaisen.jpg",
            4.8,
            &["Action", "Supernatural", "Horror"],
            Ongoing,
            253,
        ),
        entry(
            "4",
            "Spy x Family",
            "Tatsuya Endo",
            "spy-x-family.jpg",
            4.7,
            &["Comedy", "Action", "Slice of Life"],
            Ongoing,
            98,
        ),
        entry(
            "5",
            "Blue Lock",
            "Muneyuki Kaneshiro",
            "blue-lock.jpg",
            4.6,
            &["Sports", "Drama", "Psychological"],
            Ongoing,
            245,
        ),
        entry(
            "6",
            "Dandadan",
            "Yukinobu Tatsu",
            "dandadan.jpg",
            4.8,
            &["Action", "Comedy", "Supernatural"],
            Ongoing,
            142,
        ),
        entry(
            "7",
            "Attack on Titan",
            "Hajime Isayama",
            "attack-on-titan.jpg",
            4.9,
            &["Action", "Drama", "Dark Fantasy"],
            Completed,
            139,
        ),
        entry(
            "8",
            "Death Note",
            "Tsugumi Ohba",
            "death-note.jpg",
            4.85,
            &["Thriller", "Supernatural", "Psychological"],
            Completed,
            108,
        ),
        entry(
            "9",
            "Berserk",
            "Kentaro Miura",
            "berserk.jpg",
            4.95,
            &["Dark Fantasy", "Action", "Horror"],
            Ongoing,
            374,
        ),
        entry(
            "10",
            "Vinland Saga",
            "Makoto Yukimura",
            "vinland-saga.jpg",
            4.85,
            &["Historical", "Action", "Drama"],
            Ongoing,
            203,
        ),
        entry(
            "11",
            "Vagabond",
            "Takehiko Inoue",
            "vagabond.jpg",
            4.9,
            &["Historical", "Action", "Drama"],
            Ongoing,
            327,
        ),
        entry(
            "12",
            "Monster",
            "Naoki Urasawa",
            "monster.jpg",
            4.9,
            &["Thriller", "Mystery", "Psychological"],
            Completed,
            162,
        ),
        entry(
            "13",
            "Frieren: Beyond Journey's End",
            "Kanehito Yamada",
            "frieren.jpg",
            4.8,
            &["Fantasy", "Adventure", "Drama"],
            Ongoing,
            126,
        ),
        entry(
            "14",
            "Kaiju No. 8",
            "Naoya Matsumoto",
            "kaiju-no-8.jpg",
            4.6,
            &["Action", "Sci-Fi", "Comedy"],
            Ongoing,
            105,
        ),
        entry(
            "15",
            "Kingdom",
            "Yasuhisa Hara",
            "kingdom.jpg",
            4.85,
            &["Historical", "Action", "War"],
            Ongoing,
            780,
        ),
        entry(
            "16",
            "Fullmetal Alchemist",
            "Hiromu Arakawa",
            "fullmetal-alchemist.jpg",
            4.9,
            &["Action", "Adventure", "Fantasy"],
            Completed,
            116,
        ),
    ]
}
