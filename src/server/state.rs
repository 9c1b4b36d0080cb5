use std::sync::Arc;

use crate::nba::StatsProvider;

/// Shared by every handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn StatsProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}
