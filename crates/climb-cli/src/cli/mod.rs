use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Command-line arguments for the `climblog` binary.
///
/// Everything else happens at the interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "climblog", version, about = "climblog - personal climbing log")]
pub struct Cli {
    /// Store file (defaults to `climblog.db` in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Output format for the `print` command: table, json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (no banner, errors-only logging)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Fail instead of starting empty when the store file does not exist
    #[arg(long)]
    pub no_create: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for the session.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            db: self.db.clone(),
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            no_create: self.no_create,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_leave_everything_to_config() {
        let cli = Cli::try_parse_from(["climblog"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.db, None);
        assert_eq!(flags.format, None);
        assert!(!flags.quiet);
        assert!(!flags.no_create);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "climblog",
            "--db",
            "/tmp/log.db",
            "--format",
            "json",
            "--verbose",
            "--no-create",
        ])
        .expect("cli should parse");

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/log.db")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(cli.no_create);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["climblog", "--format", "xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let parsed = Cli::try_parse_from(["climblog", "-q", "-v"]);
        assert!(parsed.is_err());
    }
}
