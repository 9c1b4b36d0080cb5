//! `serve` command: run the HTTP facade

use std::{net::SocketAddr, sync::Arc};

use super::common::build_client;
use crate::{
    config::ServerSettings,
    server::{self, AppState},
    Result,
};

/// Handle the `serve` command
pub async fn handle_serve(
    bind: Option<SocketAddr>,
    cors_origin: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let settings = ServerSettings::resolve(bind, cors_origin)?;
    let client = build_client(timeout_secs)?;
    tracing::info!(provider = client.base_url(), "using stats provider");

    server::serve(&settings, AppState::new(Arc::new(client))).await
}
