use std::path::PathBuf;

use climb_config::ClimbConfig;

use crate::cli::{GlobalFlags, OutputFormat};

/// Effective settings for one run: configuration with flags layered on top.
#[derive(Clone, Debug)]
pub struct Settings {
    pub store_path: PathBuf,
    pub create_if_missing: bool,
    pub print_format: OutputFormat,
    pub confirm_destructive: bool,
    pub show_banner: bool,
    pub term_width: Option<usize>,
}

impl Settings {
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, config: &ClimbConfig) -> Self {
        Self {
            store_path: flags
                .db
                .clone()
                .unwrap_or_else(|| config.store.path.clone()),
            create_if_missing: config.store.create_if_missing && !flags.no_create,
            print_format: flags
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            confirm_destructive: config.general.confirm_destructive,
            show_banner: config.general.show_banner && !flags.quiet,
            term_width: crate::output::term_width(),
        }
    }
}

pub fn load_config() -> anyhow::Result<ClimbConfig> {
    let config = ClimbConfig::load_with_dotenv()?;
    tracing::debug!(
        store = %config.store.path.display(),
        create_if_missing = config.store.create_if_missing,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use climb_config::PrintFormat;

    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = ClimbConfig::default();
        config.store.path = PathBuf::from("from-config.db");
        config.general.default_format = PrintFormat::Json;

        let flags = GlobalFlags {
            db: Some(PathBuf::from("from-flag.db")),
            format: Some(OutputFormat::Table),
            no_create: true,
            quiet: true,
            ..GlobalFlags::default()
        };

        let settings = Settings::resolve(&flags, &config);
        assert_eq!(settings.store_path, PathBuf::from("from-flag.db"));
        assert_eq!(settings.print_format, OutputFormat::Table);
        assert!(!settings.create_if_missing);
        assert!(!settings.show_banner);
    }

    #[test]
    fn config_fills_missing_flags() {
        let mut config = ClimbConfig::default();
        config.general.default_format = PrintFormat::Json;
        config.general.confirm_destructive = false;

        let settings = Settings::resolve(&GlobalFlags::default(), &config);
        assert_eq!(settings.store_path, PathBuf::from("climblog.db"));
        assert_eq!(settings.print_format, OutputFormat::Json);
        assert!(settings.create_if_missing);
        assert!(!settings.confirm_destructive);
        assert!(settings.show_banner);
    }

    #[test]
    fn default_store_path_matches_store_crate() {
        let settings = Settings::resolve(&GlobalFlags::default(), &ClimbConfig::default());
        assert_eq!(
            settings.store_path,
            PathBuf::from(climb_store::DEFAULT_STORE_FILE)
        );
    }
}
