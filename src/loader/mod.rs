pub mod dataset;
pub mod reader;
pub mod repository;
pub mod tables;

pub use dataset::Dataset;
pub use reader::{read_deliveries, read_deliveries_file, read_matches, read_matches_file};
pub use repository::DatasetRepository;

use crate::config::DataPaths;
use crate::error::DataLoadError;

/// Read both tables once, without caching
pub fn load(paths: &DataPaths) -> Result<Dataset, DataLoadError> {
    Dataset::from_paths(paths)
}
