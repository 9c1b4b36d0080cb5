//! HTTP facade over the calculator: `/get_players`, `/get_game_dates`, `/get_xpt`.

pub mod handlers;
pub mod state;
pub mod types;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    config::ServerSettings,
    error::{Result, XptError},
};
pub use state::AppState;

pub fn create_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = HeaderValue::from_str(cors_origin).map_err(|_| XptError::Config {
        message: format!("invalid CORS origin {cors_origin:?}"),
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/get_players", get(handlers::get_players))
        .route("/get_game_dates", post(handlers::get_game_dates))
        .route("/get_xpt", post(handlers::get_xpt))
        .with_state(state)
        .layer(cors))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(settings: &ServerSettings, state: AppState) -> Result<()> {
    let app = create_router(state, &settings.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(settings.bind).await?;
    info!(addr = %listener.local_addr()?, cors_origin = %settings.cors_origin, "xPT server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
