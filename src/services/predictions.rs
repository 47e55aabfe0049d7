//! Retrieval core: date-window fallback over the cached upstream source,
//! degrading to deterministic sample data when the whole window is empty.
//!
//! The list path never fails and never returns empty. Upstream failures are
//! contained here: logged, then treated exactly like an empty day so the
//! chain moves on instead of surfacing an error to the caller.

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{fallback_window, Prediction, PredictionKind};
use crate::error::{PennantError, Result};
use crate::source::{PredictionSource, SampleGenerator};

pub struct PredictionService {
    source: Arc<dyn PredictionSource>,
    samples: SampleGenerator,
}

impl PredictionService {
    pub fn new(source: Arc<dyn PredictionSource>) -> Self {
        Self {
            source,
            samples: SampleGenerator::new(),
        }
    }

    /// Predictions for a market and date. Tries the target date, then the
    /// day before, then the day after; a hit is returned unchanged and ends
    /// the chain, with the served records carrying their own authoritative
    /// `date`. If the whole window is empty the sample set for the requested
    /// date is served instead.
    pub async fn predictions(
        &self,
        kind: PredictionKind,
        date: NaiveDate,
        force: bool,
    ) -> Vec<Prediction> {
        for day in fallback_window(date) {
            let records = self.fetch_contained(kind, day, force).await;
            if !records.is_empty() {
                if day != date {
                    info!(
                        requested = %date,
                        served = %day,
                        "no predictions for requested date; serving adjacent date"
                    );
                }
                return records;
            }
        }

        warn!(
            %date,
            kind = %kind,
            "no upstream data for date or adjacent days; serving sample predictions"
        );
        self.samples.generate(kind, date)
    }

    /// One fetch attempt with failure containment: an upstream error is
    /// logged and collapsed to an empty result so the fallback chain
    /// branches on a typed outcome rather than propagating.
    async fn fetch_contained(
        &self,
        kind: PredictionKind,
        day: NaiveDate,
        force: bool,
    ) -> Vec<Prediction> {
        match self.source.fetch(kind, day, force).await {
            Ok(records) => {
                if records.is_empty() {
                    debug!(%day, kind = %kind, "upstream has no games for date");
                }
                records
            }
            Err(err) => {
                warn!(%day, kind = %kind, error = %err, "upstream fetch failed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Single-game lookup. Absence and upstream failure both surface as
    /// `NotFound`; this path never degrades to sample data, since a
    /// synthetic record for an arbitrary id would be misleading.
    pub async fn prediction_by_id(&self, game_id: u64, force: bool) -> Result<Prediction> {
        match self.source.fetch_by_id(game_id, force).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(PennantError::NotFound { game_id }),
            Err(err) => {
                warn!(game_id, error = %err, "upstream lookup failed");
                Err(PennantError::NotFound { game_id })
            }
        }
    }

    /// Discard all cached records. Does not fetch eagerly; the next
    /// `predictions` call repopulates the cache.
    pub async fn refresh(&self) -> Result<()> {
        self.source.invalidate().await
    }

    /// When the source last completed a successful upstream fetch.
    pub async fn last_refresh(&self) -> Result<Option<DateTime<Utc>>> {
        self.source.last_refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockPredictionSource;
    use mockall::predicate::eq;

    const KIND: PredictionKind = PredictionKind::UnderOneRunFirst;

    fn july_fourth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn record(game_id: u64, date: NaiveDate) -> Prediction {
        let mut payload = serde_json::Map::new();
        payload.insert("home_team".into(), "Philadelphia Phillies".into());
        Prediction {
            game_id,
            date,
            payload,
        }
    }

    fn service(source: MockPredictionSource) -> PredictionService {
        PredictionService::new(Arc::new(source))
    }

    #[tokio::test]
    async fn target_date_hit_is_returned_unchanged_without_fallback() {
        let date = july_fourth();
        let expected = vec![record(1, date), record(2, date)];
        let returned = expected.clone();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .with(eq(KIND), eq(date), eq(false))
            .times(1)
            .returning(move |_, _, _| Ok(returned.clone()));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn empty_target_falls_back_to_previous_day() {
        let date = july_fourth();
        let prev = date.pred_opt().unwrap();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .with(eq(KIND), eq(date), eq(false))
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        source
            .expect_fetch()
            .with(eq(KIND), eq(prev), eq(false))
            .times(1)
            .returning(move |_, d, _| Ok(vec![record(7, d)]));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got.len(), 1);
        // The served records describe the prior day, not the requested one.
        assert_eq!(got[0].date, prev);
    }

    #[tokio::test]
    async fn empty_target_and_previous_fall_back_to_next_day() {
        let date = july_fourth();
        let next = date.succ_opt().unwrap();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .with(eq(KIND), eq(date), eq(false))
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        source
            .expect_fetch()
            .with(eq(KIND), eq(date.pred_opt().unwrap()), eq(false))
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        source
            .expect_fetch()
            .with(eq(KIND), eq(next), eq(false))
            .times(1)
            .returning(move |_, d, _| Ok(vec![record(9, d)]));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got[0].date, next);
    }

    #[tokio::test]
    async fn empty_window_serves_the_deterministic_sample_set() {
        let date = july_fourth();

        let mut source = MockPredictionSource::new();
        source.expect_fetch().times(3).returning(|_, _, _| Ok(Vec::new()));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got, SampleGenerator::new().generate(KIND, date));
        assert_eq!(got.len(), 6);
    }

    #[tokio::test]
    async fn upstream_failure_behaves_exactly_like_an_empty_day() {
        let date = july_fourth();
        let prev = date.pred_opt().unwrap();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .with(eq(KIND), eq(date), eq(false))
            .times(1)
            .returning(|_, _, _| Err(PennantError::UpstreamUnavailable("timeout".into())));
        source
            .expect_fetch()
            .with(eq(KIND), eq(prev), eq(false))
            .times(1)
            .returning(move |_, d, _| Ok(vec![record(3, d)]));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got[0].date, prev);
    }

    #[tokio::test]
    async fn failures_across_the_whole_window_still_serve_samples() {
        let date = july_fourth();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .times(3)
            .returning(|_, _, _| Err(PennantError::UpstreamUnavailable("down".into())));

        let got = service(source).predictions(KIND, date, false).await;
        assert_eq!(got, SampleGenerator::new().generate(KIND, date));
    }

    #[tokio::test]
    async fn force_flag_propagates_to_the_source() {
        let date = july_fourth();

        let mut source = MockPredictionSource::new();
        source
            .expect_fetch()
            .with(eq(KIND), eq(date), eq(true))
            .times(1)
            .returning(move |_, d, _| Ok(vec![record(5, d)]));

        let got = service(source).predictions(KIND, date, true).await;
        assert_eq!(got[0].game_id, 5);
    }

    #[tokio::test]
    async fn by_id_hit_returns_the_record() {
        let mut source = MockPredictionSource::new();
        source
            .expect_fetch_by_id()
            .with(eq(717465_u64), eq(false))
            .times(1)
            .returning(|id, _| Ok(Some(record(id, july_fourth()))));

        let got = service(source).prediction_by_id(717465, false).await.unwrap();
        assert_eq!(got.game_id, 717465);
    }

    #[tokio::test]
    async fn by_id_absence_is_not_found_never_sample_data() {
        let mut source = MockPredictionSource::new();
        source
            .expect_fetch_by_id()
            .times(1)
            .returning(|_, _| Ok(None));

        let err = service(source).prediction_by_id(999999, false).await.unwrap_err();
        assert!(matches!(err, PennantError::NotFound { game_id: 999999 }));
    }

    #[tokio::test]
    async fn by_id_upstream_failure_is_also_not_found() {
        let mut source = MockPredictionSource::new();
        source
            .expect_fetch_by_id()
            .times(1)
            .returning(|_, _| Err(PennantError::UpstreamUnavailable("down".into())));

        let err = service(source).prediction_by_id(42, false).await.unwrap_err();
        assert!(matches!(err, PennantError::NotFound { game_id: 42 }));
    }

    #[tokio::test]
    async fn refresh_delegates_to_invalidate_without_fetching() {
        let mut source = MockPredictionSource::new();
        source.expect_invalidate().times(1).returning(|| Ok(()));
        source.expect_fetch().times(0);

        assert!(service(source).refresh().await.is_ok());
    }

    #[tokio::test]
    async fn last_refresh_is_a_pass_through() {
        let stamp = Utc::now();
        let mut source = MockPredictionSource::new();
        source
            .expect_last_refresh()
            .times(1)
            .returning(move || Ok(Some(stamp)));

        let got = service(source).last_refresh().await.unwrap();
        assert_eq!(got, Some(stamp));
    }
}
