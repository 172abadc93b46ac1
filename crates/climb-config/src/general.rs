//! General application configuration.

use serde::{Deserialize, Serialize};

/// How `print` renders the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintFormat {
    #[default]
    Table,
    Json,
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Ask `proceed [y/n]` before `remove climb` and `flush`.
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    /// Default rendering for `print`.
    #[serde(default)]
    pub default_format: PrintFormat,

    /// Print the welcome banner and help text on start.
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: default_true(),
            default_format: PrintFormat::default(),
            show_banner: default_true(),
        }
    }
}
