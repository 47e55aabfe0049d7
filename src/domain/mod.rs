pub mod dates;
pub mod prediction;

pub use dates::{fallback_window, parse_date, upcoming_dates, UpcomingDate};
pub use prediction::{Prediction, PredictionKind};
