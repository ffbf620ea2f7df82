use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::debug;

use super::validation::{
    INVALID_DATA, parse_serie_id, update_failure, validate_new_serie, validate_serie_update,
};
use super::{ApiError, ApiResponse, AppState, ErrorResponse, SerieMessage, SeriePayload};
use crate::models::serie::Serie;

/// Lists every registered series.
#[utoipa::path(
    get,
    path = "/api/series",
    tag = "series",
    responses(
        (status = 200, description = "All registered series, in the `data` field", body = ApiResponse<Vec<Serie>>)
    )
)]
pub async fn list_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Serie>>>, ApiError> {
    let series = state.series().list().await?;
    Ok(Json(ApiResponse::success(series)))
}

/// Saves a new series. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/series",
    tag = "series",
    request_body = SeriePayload,
    responses(
        (status = 200, description = "The series was saved", body = ApiResponse<SerieMessage>),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_serie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SeriePayload>, JsonRejection>,
) -> Result<Json<ApiResponse<SerieMessage>>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected create body: {}", rejection.body_text());
        ApiError::validation(INVALID_DATA)
    })?;
    let draft = validate_new_serie(payload)?;

    let serie = state.series().create(draft).await?;

    Ok(Json(ApiResponse::success(SerieMessage {
        message: format!(
            "The series {}, season {} was saved successfully",
            serie.title, serie.season
        ),
        serie: Some(serie),
    })))
}

/// Fetches one series by identifier.
#[utoipa::path(
    get,
    path = "/api/series/{id}",
    tag = "series",
    params(("id" = String, Path, description = "Series identifier")),
    responses(
        (status = 200, description = "The series, in the `data` field", body = ApiResponse<Serie>),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "No series with this identifier", body = ErrorResponse)
    )
)]
pub async fn get_serie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Serie>>, ApiError> {
    fetch_serie(&state, &id).await
}

pub async fn get_serie_without_id(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Serie>>, ApiError> {
    fetch_serie(&state, "").await
}

async fn fetch_serie(state: &AppState, raw_id: &str) -> Result<Json<ApiResponse<Serie>>, ApiError> {
    let id = parse_serie_id(raw_id)?;
    let serie = state.series().get(id).await?;
    Ok(Json(ApiResponse::success(serie)))
}

/// Replaces an existing series in full. The body must carry its `id`.
#[utoipa::path(
    put,
    path = "/api/series",
    tag = "series",
    request_body = SeriePayload,
    responses(
        (status = 200, description = "The series was updated", body = ApiResponse<SerieMessage>),
        (status = 400, description = "The series could not be updated", body = ErrorResponse),
        (status = 404, description = "No series with this identifier", body = ErrorResponse)
    )
)]
pub async fn update_serie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SeriePayload>, JsonRejection>,
) -> Result<Json<ApiResponse<SerieMessage>>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected update body: {}", rejection.body_text());
        update_failure("", INVALID_DATA)
    })?;
    let (id, draft) = validate_serie_update(payload)?;

    let serie = state.series().update(id, draft).await?;

    Ok(Json(ApiResponse::success(SerieMessage {
        message: format!(
            "The series {}, season {} was updated successfully",
            serie.title, serie.season
        ),
        serie: Some(serie),
    })))
}

/// Deletes one series by identifier.
#[utoipa::path(
    delete,
    path = "/api/series/{id}",
    tag = "series",
    params(("id" = String, Path, description = "Series identifier")),
    responses(
        (status = 200, description = "The series was deleted", body = SerieMessage),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "No series with this identifier", body = ErrorResponse)
    )
)]
pub async fn delete_serie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SerieMessage>>, ApiError> {
    remove_serie(&state, &id).await
}

pub async fn delete_serie_without_id(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SerieMessage>>, ApiError> {
    remove_serie(&state, "").await
}

async fn remove_serie(
    state: &AppState,
    raw_id: &str,
) -> Result<Json<ApiResponse<SerieMessage>>, ApiError> {
    let id = parse_serie_id(raw_id)?;
    let serie = state.series().delete(id).await?;

    Ok(Json(ApiResponse::success(SerieMessage {
        message: format!(
            "The series {}, season {} was deleted successfully",
            serie.title, serie.season
        ),
        serie: None,
    })))
}
