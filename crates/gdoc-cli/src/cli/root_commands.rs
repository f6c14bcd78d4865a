use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Read the Go files of one directory.
    Package(UnmarshalArgs),
    /// Read every directory under a module root, prefixing paths with the
    /// directory.
    Module(UnmarshalArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UnmarshalArgs {
    /// Package directory or module root.
    pub dir: PathBuf,

    /// TOML file describing the destination fields.
    #[arg(short, long)]
    pub schema: PathBuf,
}
