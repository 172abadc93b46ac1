//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use std::path::PathBuf;

use climb_config::{ClimbConfig, PrintFormat};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "/var/lib/climblog/log.db"
create_if_missing = false
"#,
        )?;

        let config: ClimbConfig = Figment::from(Serialized::defaults(ClimbConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.path, PathBuf::from("/var/lib/climblog/log.db"));
        assert!(!config.store.create_if_missing);
        Ok(())
    });
}

#[test]
fn local_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "climblog.toml",
            r#"
[general]
confirm_destructive = false
default_format = "json"
"#,
        )?;

        let config = ClimbConfig::load().expect("config loads");
        assert!(!config.general.confirm_destructive);
        assert_eq!(config.general.default_format, PrintFormat::Json);
        assert_eq!(config.store.path, PathBuf::from("climblog.db"));
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "climblog.toml",
            r#"
[store]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("CLIMBLOG_STORE__PATH", "from-env.db");
        jail.set_env("CLIMBLOG_STORE__CREATE_IF_MISSING", "false");

        let config = ClimbConfig::load().expect("config loads");
        assert_eq!(config.store.path, PathBuf::from("from-env.db"));
        assert!(!config.store.create_if_missing);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "climblog.toml",
            r#"
[general]
show_banner = false
"#,
        )?;

        let config = ClimbConfig::load().expect("config loads");
        assert!(!config.general.show_banner);
        assert!(config.general.confirm_destructive);
        assert!(config.store.create_if_missing);
        Ok(())
    });
}

#[test]
fn invalid_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "climblog.toml",
            r#"
[general]
default_format = "xml"
"#,
        )?;

        assert!(ClimbConfig::load().is_err());
        Ok(())
    });
}
