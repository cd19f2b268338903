use super::dataset::Dataset;
use crate::config::DataPaths;
use crate::error::DataLoadError;
use std::cell::OnceCell;

/// Loads the dataset from disk on first use and hands out the same tables
/// on every later call.
#[derive(Debug)]
pub struct DatasetRepository {
    paths: DataPaths,
    cache: OnceCell<Dataset>,
}

impl DatasetRepository {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            cache: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn load(&self) -> Result<&Dataset, DataLoadError> {
        if let Some(dataset) = self.cache.get() {
            log::debug!("Dataset already loaded, reusing cached tables");
            return Ok(dataset);
        }
        let dataset = Dataset::from_paths(&self.paths)?;
        Ok(self.cache.get_or_init(|| dataset))
    }
}

impl Default for DatasetRepository {
    fn default() -> Self {
        Self::new(DataPaths::default())
    }
}
