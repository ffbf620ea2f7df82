use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::serie::Serie;

/// Success envelope wrapping every 200 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope returned with every 4xx/5xx status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "The identifier abc is invalid")]
    pub error: String,
}

/// Request body for create and update.
///
/// Every field is optional on the wire so that missing fields are reported
/// with a message instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriePayload {
    /// Ignored on create, required on update.
    #[schema(example = 6)]
    pub id: Option<i32>,
    #[schema(example = "Star Trek")]
    pub title: Option<String>,
    #[schema(example = "It all started when a supermassive star exploded...")]
    pub synopsis: Option<String>,
    #[schema(example = 4)]
    pub season: Option<i32>,
    #[schema(example = 25)]
    pub episode_count: Option<i32>,
    #[schema(example = "Maria Albergue, Shako Takamoto, Suzana Viera")]
    pub cast: Option<String>,
    #[schema(example = "Action, Romance, War")]
    pub category: Option<String>,
}

/// Confirmation returned by create, update and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct SerieMessage {
    #[schema(example = "The series Star Trek, season 4 was saved successfully")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie: Option<Serie>,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: bool,
    pub series_count: Option<u64>,
}
