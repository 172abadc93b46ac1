use std::path::PathBuf;

use clap::ValueEnum;
use climb_config::PrintFormat;

/// Rendering used by the `print` command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<PrintFormat> for OutputFormat {
    fn from(format: PrintFormat) -> Self {
        match format {
            PrintFormat::Table => Self::Table,
            PrintFormat::Json => Self::Json,
        }
    }
}

/// Process-level flags, resolved against configuration in `bootstrap`.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub db: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_create: bool,
}
