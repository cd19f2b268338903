use std::path::{Path, PathBuf};

pub const DEFAULT_MATCHES_FILE: &str = "data/matches.csv";
pub const DEFAULT_DELIVERIES_FILE: &str = "data/deliveries.csv";

/// Location of the two source tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub matches: PathBuf,
    pub deliveries: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            matches: PathBuf::from(DEFAULT_MATCHES_FILE),
            deliveries: PathBuf::from(DEFAULT_DELIVERIES_FILE),
        }
    }
}

impl DataPaths {
    pub fn new(matches: impl Into<PathBuf>, deliveries: impl Into<PathBuf>) -> Self {
        Self {
            matches: matches.into(),
            deliveries: deliveries.into(),
        }
    }

    /// Both files under one directory, using the standard file names
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            matches: dir.join("matches.csv"),
            deliveries: dir.join("deliveries.csv"),
        }
    }
}
