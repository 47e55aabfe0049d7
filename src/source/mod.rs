pub mod cache;
pub mod feed;
pub mod sample;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(test)]
use mockall::automock;

use crate::domain::{Prediction, PredictionKind};
use crate::error::Result;

pub use cache::CachedFeed;
pub use feed::FeedClient;
pub use sample::SampleGenerator;

/// Raw access to the remote prediction feed, one call per upstream request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamFeed: Send + Sync {
    /// All predictions the feed has for a market on a calendar date.
    /// An empty vector is a valid answer (no games scheduled).
    async fn fetch_day(&self, kind: PredictionKind, date: NaiveDate) -> Result<Vec<Prediction>>;

    /// A single prediction by game id; `None` when the feed has no such game.
    async fn fetch_game(&self, game_id: u64) -> Result<Option<Prediction>>;
}

/// The capability the retrieval layer consumes: a cache-backed view of the
/// upstream feed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Predictions for one market and date. `force` bypasses the cache by
    /// invalidating it before the fetch, so later non-forced calls observe
    /// the freshly fetched value.
    async fn fetch(
        &self,
        kind: PredictionKind,
        date: NaiveDate,
        force: bool,
    ) -> Result<Vec<Prediction>>;

    /// Single-game lookup, same `force` semantics.
    async fn fetch_by_id(&self, game_id: u64, force: bool) -> Result<Option<Prediction>>;

    /// Discard all cached records wholesale. Does not fetch anything.
    async fn invalidate(&self) -> Result<()>;

    /// When the source last completed a successful upstream fetch.
    async fn last_refresh(&self) -> Result<Option<DateTime<Utc>>>;
}
