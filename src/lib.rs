pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod xlsx;

#[cfg(test)]
mod testutil;

pub use config::DataPaths;
pub use error::{AnalyticsError, DataLoadError, Result};
pub use loader::{Dataset, DatasetRepository};
pub use model::*;
