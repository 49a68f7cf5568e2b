use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WalletAddress(pub String);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Hiatus,
}

/// One catalog entry. The catalog is static reference data and never mutates
/// for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manga {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub rating: f32,
    pub genres: Vec<String>,
    pub status: MangaStatus,
    pub chapters: u32,
}

/// A saved reading position. Identity is the (manga, chapter, page) triple;
/// `id` is synthesized from it at creation time.
///
/// Serialized with camelCase keys so collections written by earlier builds of
/// the app deserialize unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub manga_id: String,
    pub manga_title: String,
    pub chapter_id: String,
    pub chapter_number: u32,
    pub chapter_title: String,
    pub page: u32,
    pub note: String,
    pub created_at: u64,
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Input to `BookmarkStore::add`: a `Bookmark` minus the fields the store
/// synthesizes (`id`, `created_at`).
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkDraft {
    pub manga_id: String,
    pub manga_title: String,
    pub chapter_id: String,
    pub chapter_number: u32,
    pub chapter_title: String,
    pub page: u32,
    pub note: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingProgress {
    pub page: u32,
    pub timestamp: u64,
}

/// The three result facets of a catalog search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub manga: Vec<Manga>,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.manga.is_empty() && self.authors.is_empty() && self.genres.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChapterInfo {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub pages: Vec<String>,
}

// ── Simulated Web3 ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
    Pending,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    For,
    Against,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub proposer: String,
    pub status: ProposalStatus,
    pub votes_for: u64,
    pub votes_against: u64,
    pub total_votes: u64,
    pub quorum: u64,
    pub ends_at: u64,
    pub created_at: u64,
    pub has_voted: bool,
    #[serde(default)]
    pub user_vote: Option<VoteChoice>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NftKind {
    Badge,
    Collectible,
    Theme,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NftRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub kind: NftKind,
    pub rarity: NftRarity,
    pub is_soulbound: bool,
    pub acquired_at: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub is_active: bool,
    pub tier: SubscriptionTier,
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub days_remaining: u32,
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self {
            is_active: false,
            tier: SubscriptionTier::Free,
            expires_at: None,
            days_remaining: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenBalance {
    pub symbol: String,
    pub amount: String,
}

impl TokenBalance {
    pub fn formatted(&self) -> String {
        format!("{} {}", self.amount, self.symbol)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// The current (simulated) wallet session. A fresh session is disconnected
/// with no address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(default)]
    pub address: Option<WalletAddress>,
    pub status: AccountStatus,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            address: None,
            status: AccountStatus::Disconnected,
        }
    }
}

impl Account {
    pub fn is_connected(&self) -> bool {
        self.status == AccountStatus::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_serializes_with_camel_case_keys() {
        let bookmark = Bookmark {
            id: "1-1-1-3-1700000000000".to_owned(),
            manga_id: "1".to_owned(),
            manga_title: "Chainsaw Man".to_owned(),
            chapter_id: "1-1".to_owned(),
            chapter_number: 1,
            chapter_title: "Dog & Chainsaw".to_owned(),
            page: 3,
            note: "great scene".to_owned(),
            created_at: 1_700_000_000_000,
            cover_url: None,
        };

        let json = serde_json::to_value(&bookmark).expect("bookmark should serialize");
        assert!(json.get("mangaId").is_some());
        assert!(json.get("chapterNumber").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("manga_id").is_none());
    }

    #[test]
    fn bookmark_deserializes_without_cover_url() {
        let raw = r#"{
            "id": "2-2-1-5-1700000000001",
            "mangaId": "2",
            "mangaTitle": "One Piece",
            "chapterId": "2-1",
            "chapterNumber": 1,
            "chapterTitle": "Romance Dawn",
            "page": 5,
            "note": "",
            "createdAt": 1700000000001
        }"#;

        let bookmark: Bookmark = serde_json::from_str(raw).expect("legacy record should parse");
        assert_eq!(bookmark.cover_url, None);
        assert_eq!(bookmark.page, 5);
    }

    #[test]
    fn status_enums_use_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&MangaStatus::Ongoing).unwrap(),
            r#""ongoing""#
        );
        assert_eq!(
            serde_json::to_string(&ProposalStatus::Active).unwrap(),
            r#""active""#
        );
        assert_eq!(
            serde_json::to_string(&VoteChoice::Against).unwrap(),
            r#""against""#
        );
    }
}
