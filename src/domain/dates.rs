use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::{PennantError, Result};

/// Parse a YYYY-MM-DD query value into a typed date.
///
/// The caller decides what to do with a failure; handlers substitute today
/// at a single decision point rather than erroring.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PennantError::InvalidDate(raw.to_string()))
}

/// Today's date in the server's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The fixed three-day lookup window: the target date, the day before,
/// the day after. Calendar-range boundaries drop the missing neighbor.
pub fn fallback_window(date: NaiveDate) -> Vec<NaiveDate> {
    [Some(date), date.pred_opt(), date.succ_opt()]
        .into_iter()
        .flatten()
        .collect()
}

/// One selectable date offered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingDate {
    pub date: NaiveDate,
    pub display: String,
}

/// The dates clients may browse: `start` plus the six days after it.
pub fn upcoming_dates(start: NaiveDate) -> Vec<UpcomingDate> {
    (0..7)
        .filter_map(|offset| start.checked_add_days(chrono::Days::new(offset)))
        .map(|date| UpcomingDate {
            date,
            display: date.format("%A, %B %-d").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2025-07-04").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        for raw in ["not-a-date", "07/04/2025", "2025-13-40", ""] {
            assert!(parse_date(raw).is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn fallback_window_is_target_prev_next() {
        let d = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let window = fallback_window(d);
        assert_eq!(
            window,
            vec![
                d,
                NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn fallback_window_crosses_month_boundaries() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let window = fallback_window(d);
        assert_eq!(window[1], NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
        assert_eq!(window[2], NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
    }

    #[test]
    fn upcoming_dates_covers_a_week() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let dates = upcoming_dates(start);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0].date, start);
        assert_eq!(dates[0].display, "Friday, July 4");
        assert_eq!(dates[6].date, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
    }
}
