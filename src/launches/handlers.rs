use super::service::LaunchService;
use super::types::{ErrorResponse, Launch, LaunchRequest, ScheduleError};

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

pub async fn handle_get_launches(
    Query(params): Query<PaginationParams>,
    Extension(service): Extension<Arc<LaunchService>>,
) -> Json<Vec<Launch>> {
    Json(
        service
            .get_all_launches(params.skip.unwrap_or(0), params.limit)
            .await,
    )
}

pub async fn handle_schedule_launch(
    Extension(service): Extension<Arc<LaunchService>>,
    Json(request): Json<LaunchRequest>,
) -> Result<(StatusCode, Json<Launch>), (StatusCode, Json<ErrorResponse>)> {
    match service.schedule_new_launch(request).await {
        Ok(launch) => Ok((StatusCode::CREATED, Json(launch))),
        Err(err @ ScheduleError::UnknownTarget(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )),
        Err(ScheduleError::Store(err)) => {
            tracing::error!("Failed to schedule launch: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to schedule launch".to_string(),
                }),
            ))
        }
    }
}

pub async fn handle_abort_launch(
    Path(flight_number): Path<u32>,
    Extension(service): Extension<Arc<LaunchService>>,
) -> Result<Json<Launch>, (StatusCode, Json<ErrorResponse>)> {
    match service.abort_launch_by_id(flight_number).await {
        Some(launch) => Ok(Json(launch)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "launch not found".to_string(),
            }),
        )),
    }
}
