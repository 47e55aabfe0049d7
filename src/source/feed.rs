//! REST adapter for the remote prediction feed.
//!
//! The feed is an opaque provider: records arrive as JSON objects and are
//! passed through unmodified apart from dropping records whose `date` field
//! disagrees with the date they were requested for.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use super::UpstreamFeed;
use crate::domain::{Prediction, PredictionKind};
use crate::error::{PennantError, Result};

/// Wire shape of the day endpoint.
#[derive(Debug, Deserialize)]
struct DayEnvelope {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let http = Client::builder()
            .user_agent(concat!("pennant/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()
            .map_err(|e| PennantError::Internal(format!("failed to build feed HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Keep only records dated `date`, warning about anything else the feed sent.
fn filter_to_date(mut records: Vec<Prediction>, date: NaiveDate) -> Vec<Prediction> {
    let before = records.len();
    records.retain(|r| r.date == date);
    if records.len() != before {
        warn!(
            requested = %date,
            dropped = before - records.len(),
            "feed returned records for a different date; dropping them"
        );
    }
    records
}

#[async_trait]
impl UpstreamFeed for FeedClient {
    async fn fetch_day(&self, kind: PredictionKind, date: NaiveDate) -> Result<Vec<Prediction>> {
        let url = format!("{}/api/v1/predictions", self.base_url);
        let date_str = date.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[("type", kind.as_str()), ("date", date_str.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PennantError::UpstreamUnavailable(format!(
                "feed returned {status} for {url}?date={date}"
            )));
        }

        let envelope: DayEnvelope = resp.json().await?;
        Ok(filter_to_date(envelope.predictions, date))
    }

    async fn fetch_game(&self, game_id: u64) -> Result<Option<Prediction>> {
        let url = format!("{}/api/v1/predictions/{game_id}", self.base_url);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PennantError::UpstreamUnavailable(format!(
                "feed returned {status} for {url}"
            )));
        }

        Ok(Some(resp.json().await?))
    }
}
