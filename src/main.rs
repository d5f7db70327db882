use axum::{
    Extension, Router,
    routing::{delete, get},
};
use mission_control::launches::catalog::DEFAULT_CATALOG_URL;
use mission_control::launches::handlers::{
    handle_abort_launch, handle_get_launches, handle_schedule_launch,
};
use mission_control::launches::service::LaunchService;
use mission_control::launches::types::TargetPolicy;
use mission_control::planets::handlers::handle_get_planets;
use mission_control::planets::service::PlanetService;
use mission_control::store::collection::Collection;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut dataset_path =
        std::env::var("KEPLER_DATA").unwrap_or_else(|_| "data/kepler-data.csv".to_string());
    let mut catalog_url =
        std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
    let mut target_policy = TargetPolicy::Warn;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                dataset_path = args[i + 1].clone();
                i += 2;
            }
            "--catalog-url" => {
                catalog_url = args[i + 1].clone();
                i += 2;
            }
            "--reject-unknown-target" => {
                target_policy = TargetPolicy::Reject;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Storage layer:
    let planets = Arc::new(Collection::new());
    let launches = Arc::new(Collection::new());

    // 2. Services:
    let planet_service = PlanetService::new(planets.clone(), PathBuf::from(&dataset_path));
    let launch_service = LaunchService::new(launches, planets, catalog_url, target_policy);

    // 3. First-load synchronization. Failures abort startup: running with a
    //    known-inconsistent catalog is worse than not running.
    planet_service.load_planets_data().await?;
    launch_service.load_launch_data().await?;

    // 4. HTTP router:
    let app = Router::new()
        .route("/planets", get(handle_get_planets))
        .route(
            "/launches",
            get(handle_get_launches).post(handle_schedule_launch),
        )
        .route("/launches/:flight_number", delete(handle_abort_launch))
        .layer(Extension(planet_service))
        .layer(Extension(launch_service));

    tracing::info!("Mission control listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
