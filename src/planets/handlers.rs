use super::service::PlanetService;
use super::types::Planet;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_planets(
    Extension(service): Extension<Arc<PlanetService>>,
) -> Json<Vec<Planet>> {
    Json(service.get_all_planets().await)
}
