pub mod predictions;

pub use predictions::PredictionService;
