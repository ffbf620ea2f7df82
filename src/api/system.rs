//! Service health endpoint.

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::warn;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

/// Returns version, uptime and database reachability.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let database = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database ping failed: {}", e);
            false
        }
    };

    let series_count = if database {
        state.series().count().await.ok()
    } else {
        None
    };

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database,
        series_count,
    })))
}
