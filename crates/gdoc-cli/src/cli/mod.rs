use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, UnmarshalArgs};

/// Top-level CLI parser for the `gdoc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gdoc",
    version,
    about = "Unmarshal Go doc comments into a schema-shaped JSON tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json (pretty) or raw (single line)
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn package_takes_dir_and_schema() {
        let cli = Cli::try_parse_from(["gdoc", "package", "./testdata", "--schema", "docs.toml"])
            .expect("cli should parse");

        let Commands::Package(args) = cli.command else {
            panic!("expected package command");
        };
        assert_eq!(args.dir, Path::new("./testdata"));
        assert_eq!(args.schema, Path::new("docs.toml"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "gdoc",
            "--format",
            "raw",
            "--verbose",
            "--config",
            "extra.toml",
            "module",
            ".",
            "-s",
            "docs.toml",
        ])
        .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.verbose);
        assert!(!flags.quiet);
        assert_eq!(flags.config.as_deref(), Some(Path::new("extra.toml")));
        assert!(matches!(cli.command, Commands::Module(_)));
    }

    #[test]
    fn schema_is_required() {
        assert!(Cli::try_parse_from(["gdoc", "package", "."]).is_err());
    }
}
