use axum::{
    routing::{get, post},
    Router,
};
use quiz_portal::{config::Config, routes, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = Config::path_from_env();
    let config = Config::load(&config_path)?;
    let app_state = AppState::new(config.clone(), config_path);

    let app = Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::health::health))
        .route("/quiz/*id", get(routes::pages::quiz_detail))
        .route("/task/cpuintensive", post(routes::tasks::cpu_intensive))
        .route("/server/config", get(routes::server_info::server_config))
        .route("/evaluate", post(routes::evaluate::evaluate))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
