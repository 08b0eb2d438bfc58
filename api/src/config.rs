use serde::Deserialize;

use crate::consts::{LEADERBOARD_API_URL, LEADERBOARD_SITE_URL, RPC_URL};

/// Endpoints the dashboard talks to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub rpc_url: String,
    pub leaderboard_url: String,
    pub leaderboard_site_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rpc_url: RPC_URL.to_string(),
            leaderboard_url: LEADERBOARD_API_URL.to_string(),
            leaderboard_site_url: LEADERBOARD_SITE_URL.to_string(),
        }
    }
}
