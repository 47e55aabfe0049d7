pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod source;

pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use domain::{Prediction, PredictionKind};
pub use error::{PennantError, Result};
pub use services::PredictionService;
pub use source::{CachedFeed, FeedClient, PredictionSource, SampleGenerator, UpstreamFeed};
