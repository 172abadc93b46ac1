//! Store file configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("climblog.db")
}

/// Start with an empty collection when the store file does not exist yet.
const fn default_create_if_missing() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the binary store file. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Whether a missing store file is treated as an empty collection.
    /// When off, a missing file is a fatal startup error.
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            create_if_missing: default_create_if_missing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from("climblog.db"));
        assert!(config.create_if_missing);
    }
}
