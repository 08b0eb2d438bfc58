use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::PERCENT_PRECISION;
use crate::error::{DashError, Result};
use crate::session::WalletStatus;

/// Score record as stored by the leaderboard API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub wallet: String,
    pub score: u64,
    /// RFC 3339 or epoch milliseconds on the wire; anything else reads as absent.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Some(_) => None,
    };
    if parsed.is_none() {
        tracing::warn!("ignoring unreadable leaderboard timestamp {:?}", value);
    }
    Ok(parsed)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub wallet: String,
    pub score: u64,
    pub submitted_at: Option<DateTime<Utc>>,
    /// Share of all submitted points; zero when nobody has scored.
    pub percentage: f64,
}

impl LeaderboardEntry {
    pub fn percentage_label(&self) -> String {
        format!("{:.*}", PERCENT_PRECISION, self.percentage)
    }
}

/// Acknowledgement of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
}

/// Status and body of one leaderboard HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Raw access to the `/leaderboard` endpoint. An `Err` means no response arrived.
#[allow(async_fn_in_trait)]
pub trait LeaderboardTransport {
    async fn get(&self) -> Result<Reply>;
    async fn post(&self, record: &ScoreRecord) -> Result<Reply>;
}

#[derive(Clone, Debug)]
pub struct HttpLeaderboard {
    url: String,
    http: reqwest::Client,
}

impl HttpLeaderboard {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            url: format!("{}/leaderboard", base_url.trim_end_matches('/')),
            http: reqwest::Client::new(),
        }
    }
}

impl LeaderboardTransport for HttpLeaderboard {
    async fn get(&self) -> Result<Reply> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }

    async fn post(&self, record: &ScoreRecord) -> Result<Reply> {
        let response = self.http.post(&self.url).json(record).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(Reply { status, body })
    }
}

/// Sorts by score descending, keeping fetch order among ties, and attaches rank and share.
pub fn rank_entries(records: Vec<ScoreRecord>) -> Vec<LeaderboardEntry> {
    let total: u128 = records.iter().map(|r| u128::from(r.score)).sum();

    let mut records = records;
    records.sort_by(|a, b| b.score.cmp(&a.score));

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let percentage = if total > 0 {
                record.score as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            LeaderboardEntry {
                rank: i + 1,
                wallet: record.wallet,
                score: record.score,
                submitted_at: record.timestamp,
                percentage,
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct LeaderboardClient<T = HttpLeaderboard> {
    transport: T,
}

impl LeaderboardClient<HttpLeaderboard> {
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(HttpLeaderboard::new(base_url))
    }
}

impl<T: LeaderboardTransport> LeaderboardClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// All submitted scores, ranked.
    pub async fn fetch_ranked(&self) -> Result<Vec<LeaderboardEntry>> {
        let reply = self.transport.get().await?;
        if !reply.is_success() {
            return Err(DashError::Network(format!(
                "leaderboard responded with {}",
                reply.status
            )));
        }
        let records: Vec<ScoreRecord> = serde_json::from_str(&reply.body)?;
        tracing::debug!("fetched {} leaderboard entries", records.len());
        Ok(rank_entries(records))
    }

    /// Submits a finished quiz score. Not retried.
    pub async fn submit(
        &self,
        wallet: &WalletStatus,
        score: u64,
        submitted_at: DateTime<Utc>,
    ) -> Result<Ack> {
        let WalletStatus::Connected(address) = wallet else {
            return Err(DashError::Submission("connect a wallet to save your score".to_string()));
        };

        let record = ScoreRecord {
            wallet: address.to_string(),
            score,
            timestamp: Some(submitted_at),
        };

        let reply = self
            .transport
            .post(&record)
            .await
            .map_err(|e| DashError::Submission(e.to_string()))?;
        if !reply.is_success() {
            return Err(DashError::Submission(format!(
                "leaderboard responded with {}",
                reply.status
            )));
        }

        tracing::info!("saved score {} for {}", score, address);
        Ok(Ack {
            status: reply.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::test_helpers::account;

    fn record(wallet: &str, score: u64) -> ScoreRecord {
        ScoreRecord {
            wallet: wallet.to_string(),
            score,
            timestamp: None,
        }
    }

    struct FakeLeaderboard {
        get_reply: Result<Reply>,
        post_reply: Result<Reply>,
        posted: RefCell<Vec<ScoreRecord>>,
    }

    impl FakeLeaderboard {
        fn new() -> Self {
            Self {
                get_reply: Ok(reply(200, "[]")),
                post_reply: Ok(reply(201, "")),
                posted: RefCell::new(vec![]),
            }
        }
    }

    impl LeaderboardTransport for FakeLeaderboard {
        async fn get(&self) -> Result<Reply> {
            self.get_reply.clone()
        }

        async fn post(&self, record: &ScoreRecord) -> Result<Reply> {
            self.posted.borrow_mut().push(record.clone());
            self.post_reply.clone()
        }
    }

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn ranks_by_score_with_shares() {
        let ranked = rank_entries(vec![record("a", 30), record("b", 10), record("c", 20)]);

        let scores: Vec<u64> = ranked.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        let labels: Vec<String> = ranked.iter().map(|e| e.percentage_label()).collect();
        assert_eq!(labels, vec!["50.00", "33.33", "16.67"]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let sum: f64 = ranked.iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn ties_keep_fetch_order() {
        let ranked = rank_entries(vec![record("first", 5), record("top", 9), record("second", 5)]);
        let wallets: Vec<&str> = ranked.iter().map(|e| e.wallet.as_str()).collect();
        assert_eq!(wallets, vec!["top", "first", "second"]);
    }

    #[test]
    fn zero_total_means_zero_shares() {
        let ranked = rank_entries(vec![record("a", 0), record("b", 0)]);
        assert!(ranked.iter().all(|e| e.percentage == 0.0));
        assert!(rank_entries(vec![]).is_empty());
    }

    #[test]
    fn parses_api_records() {
        let records: Vec<ScoreRecord> = serde_json::from_str(
            r#"[{"wallet":"0xabc","score":12,"timestamp":"2025-03-01T10:00:00Z"},{"wallet":"0xdef","score":3}]"#,
        )
        .unwrap();
        assert_eq!(records[0].score, 12);
        assert!(records[0].timestamp.is_some());
        assert_eq!(records[1].timestamp, None);
    }

    #[test]
    fn accepts_epoch_millis_and_tolerates_odd_timestamps() {
        let records: Vec<ScoreRecord> = serde_json::from_str(
            r#"[
                {"wallet":"0xabc","score":5,"timestamp":1700000000000},
                {"wallet":"0xdef","score":4,"timestamp":"last tuesday"},
                {"wallet":"0x123","score":3,"timestamp":null},
                {"wallet":"0x456","score":2,"timestamp":{"seconds":1}}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            records[0].timestamp,
            DateTime::from_timestamp_millis(1_700_000_000_000)
        );
        assert!(records[1..].iter().all(|r| r.timestamp.is_none()));
    }

    #[tokio::test]
    async fn fetch_ranks_the_served_records() {
        let mut api = FakeLeaderboard::new();
        api.get_reply = Ok(reply(
            200,
            r#"[{"wallet":"a","score":10,"timestamp":1700000000000},{"wallet":"b","score":30}]"#,
        ));
        let ranked = LeaderboardClient::new(api).fetch_ranked().await.unwrap();
        assert_eq!(ranked[0].wallet, "b");
        assert_eq!(ranked[1].percentage_label(), "25.00");
        assert!(ranked[1].submitted_at.is_some());
    }

    #[tokio::test]
    async fn fetch_fails_on_error_status() {
        let mut api = FakeLeaderboard::new();
        api.get_reply = Ok(reply(500, "oops"));
        let err = LeaderboardClient::new(api).fetch_ranked().await.unwrap_err();
        assert!(matches!(err, DashError::Network(_)));
    }

    #[tokio::test]
    async fn fetch_fails_when_unreachable() {
        let mut api = FakeLeaderboard::new();
        api.get_reply = Err(DashError::Network("connection refused".into()));
        assert!(LeaderboardClient::new(api).fetch_ranked().await.is_err());
    }

    #[tokio::test]
    async fn disconnected_wallet_cannot_submit() {
        let client = LeaderboardClient::new(FakeLeaderboard::new());
        let err = client
            .submit(&WalletStatus::Disconnected, 10, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, DashError::Submission(_)));
        assert!(client.transport.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn submit_posts_the_score_once() {
        let client = LeaderboardClient::new(FakeLeaderboard::new());
        let at = Utc::now();
        let ack = client
            .submit(&WalletStatus::Connected(account()), 9, at)
            .await
            .unwrap();
        assert_eq!(ack, Ack { status: 201 });

        let posted = client.transport.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert!(posted[0].wallet.eq_ignore_ascii_case(&account().to_string()));
        assert_eq!(posted[0].score, 9);
        assert_eq!(posted[0].timestamp, Some(at));
    }

    #[tokio::test]
    async fn transport_failure_is_a_submission_error_without_retry() {
        let mut api = FakeLeaderboard::new();
        api.post_reply = Err(DashError::Network("connection reset".into()));
        let client = LeaderboardClient::new(api);
        let err = client
            .submit(&WalletStatus::Connected(account()), 9, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, DashError::Submission(_)));
        assert_eq!(client.transport.posted.borrow().len(), 1);
    }

    #[tokio::test]
    async fn rejected_submission_is_a_submission_error_without_retry() {
        let mut api = FakeLeaderboard::new();
        api.post_reply = Ok(reply(503, "busy"));
        let client = LeaderboardClient::new(api);
        let err = client
            .submit(&WalletStatus::Connected(account()), 9, Utc::now())
            .await
            .unwrap_err();
        assert_eq!(err, DashError::Submission("leaderboard responded with 503".to_string()));
        assert_eq!(client.transport.posted.borrow().len(), 1);
    }
}
