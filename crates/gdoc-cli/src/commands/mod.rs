use gdoc_config::GdocConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod unmarshal;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &GdocConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Package(args) => unmarshal::handle(args, unmarshal::Scope::Package, config, flags),
        Commands::Module(args) => unmarshal::handle(args, unmarshal::Scope::Module, config, flags),
    }
}
