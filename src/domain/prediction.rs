use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A single game prediction.
///
/// Only `game_id` and `date` drive control decisions; everything else the
/// feed sends (teams, pitchers, ERAs, probability, rating, factor weights)
/// rides along in `payload` and is returned to callers unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub game_id: u64,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Which prediction market a request is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionKind {
    #[serde(rename = "under_1_run_1st")]
    UnderOneRunFirst,
    #[serde(rename = "over_2.5_runs_3")]
    OverTwoHalfThruThree,
    #[serde(rename = "over_3.5_runs_3")]
    OverThreeHalfThruThree,
}

impl Default for PredictionKind {
    fn default() -> Self {
        Self::UnderOneRunFirst
    }
}

impl PredictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderOneRunFirst => "under_1_run_1st",
            Self::OverTwoHalfThruThree => "over_2.5_runs_3",
            Self::OverThreeHalfThruThree => "over_3.5_runs_3",
        }
    }
}

impl std::fmt::Display for PredictionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PredictionKind {
    type Err = &'static str;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim() {
            "under_1_run_1st" => Ok(Self::UnderOneRunFirst),
            "over_2.5_runs_3" => Ok(Self::OverTwoHalfThruThree),
            "over_3.5_runs_3" => Ok(Self::OverThreeHalfThruThree),
            _ => Err("invalid prediction type; expected under_1_run_1st|over_2.5_runs_3|over_3.5_runs_3"),
        }
    }
}
