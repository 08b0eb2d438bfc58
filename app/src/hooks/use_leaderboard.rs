use dioxus::prelude::*;
use monad_dash_api::prelude::*;

#[derive(Clone, Default)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    pub loading: bool,
}

/// Ranked leaderboard. A failed load shows an empty board; the error is only logged.
pub fn use_leaderboard() -> Signal<LeaderboardState> {
    let config = use_context::<DashboardConfig>();
    let mut state = use_signal(|| LeaderboardState {
        entries: vec![],
        loading: true,
    });

    let _resource = use_resource(move || {
        let client = LeaderboardClient::http(config.leaderboard_url.clone());
        async move {
            let entries = match client.fetch_ranked().await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::error!("Failed to fetch leaderboard: {}", e);
                    vec![]
                }
            };
            let mut s = state.write();
            s.entries = entries;
            s.loading = false;
        }
    });

    state
}

/// Submits a finished trivia score for the connected wallet.
pub async fn save_score(
    config: &DashboardConfig,
    wallet: WalletStatus,
    score: u64,
) -> Result<Ack, String> {
    let client = LeaderboardClient::http(config.leaderboard_url.clone());
    client
        .submit(&wallet, score, chrono::Utc::now())
        .await
        .map_err(|e| e.to_string())
}
