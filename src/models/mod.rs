use serde::{Deserialize, Serialize};

// Re-export types from artwork.rs
pub use artwork::Artwork;

mod artwork;

/// Query parameters accepted by `GET /recommend`.
///
/// Only `interior_tone` is required. `patient_age`, `patient_gender`,
/// `mood`, `genre`, `medium` and `message` are accepted for compatibility
/// with existing callers but never influence the result.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub interior_tone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub installation_space: String,
    #[serde(default)]
    pub patient_age: String,
    #[serde(default)]
    pub patient_gender: String,
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default = "default_medium")]
    pub medium: String,
    #[serde(default = "default_message")]
    pub message: String,
}

/// One scored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArtwork {
    pub title: String,
    pub similarity: f32,
}

/// Response body for `GET /recommend`: at most three artworks, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RankedArtwork>,
}

fn default_mood() -> String {
    "중립".to_string()
}

fn default_genre() -> String {
    "추상화".to_string()
}

fn default_medium() -> String {
    "미디어아트".to_string()
}

fn default_message() -> String {
    "감정 표현".to_string()
}
