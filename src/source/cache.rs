//! TTL cache decorator over the upstream feed.
//!
//! One long-lived instance is shared across all requests; per-day and
//! per-game entries live in concurrent maps and are discarded wholesale by
//! `invalidate()`. A forced fetch invalidates first, so the request is served
//! from a fresh upstream read and later non-forced calls see the new value.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::{PredictionSource, UpstreamFeed};
use crate::domain::{Prediction, PredictionKind};
use crate::error::Result;

struct Entry<T> {
    fetched_at: Instant,
    value: T,
}

impl<T> Entry<T> {
    fn now(value: T) -> Self {
        Self {
            fetched_at: Instant::now(),
            value,
        }
    }

    fn fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

pub struct CachedFeed<F> {
    feed: F,
    ttl: Duration,
    days: DashMap<(PredictionKind, NaiveDate), Entry<Vec<Prediction>>>,
    games: DashMap<u64, Entry<Prediction>>,
    refreshed_at: RwLock<Option<DateTime<Utc>>>,
}

impl<F: UpstreamFeed> CachedFeed<F> {
    pub fn new(feed: F, ttl: Duration) -> Self {
        Self {
            feed,
            ttl,
            days: DashMap::new(),
            games: DashMap::new(),
            refreshed_at: RwLock::new(None),
        }
    }

    async fn stamp_refresh(&self) {
        *self.refreshed_at.write().await = Some(Utc::now());
    }
}

#[async_trait]
impl<F: UpstreamFeed> PredictionSource for CachedFeed<F> {
    async fn fetch(
        &self,
        kind: PredictionKind,
        date: NaiveDate,
        force: bool,
    ) -> Result<Vec<Prediction>> {
        let key = (kind, date);

        if force {
            self.invalidate().await?;
        } else if let Some(entry) = self.days.get(&key) {
            if entry.fresh(self.ttl) {
                debug!(%date, kind = %kind, "serving predictions from cache");
                return Ok(entry.value.clone());
            }
        }

        let records = self.feed.fetch_day(kind, date).await?;
        for record in &records {
            self.games.insert(record.game_id, Entry::now(record.clone()));
        }
        // Empty days are cached like any other result.
        self.days.insert(key, Entry::now(records.clone()));
        self.stamp_refresh().await;

        Ok(records)
    }

    async fn fetch_by_id(&self, game_id: u64, force: bool) -> Result<Option<Prediction>> {
        if force {
            self.invalidate().await?;
        } else if let Some(entry) = self.games.get(&game_id) {
            if entry.fresh(self.ttl) {
                debug!(game_id, "serving prediction from cache");
                return Ok(Some(entry.value.clone()));
            }
        }

        match self.feed.fetch_game(game_id).await? {
            Some(record) => {
                self.games.insert(game_id, Entry::now(record.clone()));
                self.stamp_refresh().await;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn invalidate(&self) -> Result<()> {
        self.days.clear();
        self.games.clear();
        Ok(())
    }

    async fn last_refresh(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(*self.refreshed_at.read().await)
    }
}
