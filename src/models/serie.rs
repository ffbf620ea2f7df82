use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored TV series record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Serie {
    /// Store-assigned identifier.
    #[schema(example = 6)]
    pub id: i32,
    #[schema(example = "Star Trek")]
    pub title: String,
    #[schema(example = "It all started when a supermassive star exploded...")]
    pub synopsis: Option<String>,
    #[schema(example = 4)]
    pub season: i32,
    #[schema(example = 25)]
    pub episode_count: i32,
    /// Comma-separated free text.
    #[schema(example = "Maria Albergue, Shako Takamoto, Suzana Viera")]
    pub cast: Option<String>,
    /// Comma-separated free text.
    #[schema(example = "Action, Romance, War")]
    pub category: Option<String>,
}

/// Validated record content, without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerieDraft {
    pub title: String,
    pub synopsis: Option<String>,
    pub season: i32,
    pub episode_count: i32,
    pub cast: Option<String>,
    pub category: Option<String>,
}

impl Serie {
    #[must_use]
    pub fn from_draft(id: i32, draft: SerieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            synopsis: draft.synopsis,
            season: draft.season,
            episode_count: draft.episode_count,
            cast: draft.cast,
            category: draft.category,
        }
    }
}
