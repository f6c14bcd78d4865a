use std::path::Path;

use anyhow::Context;
use gdoc_config::GdocConfig;
use gdoc_unmarshal::{DocValue, SchemaSpec, unmarshal_module_into, unmarshal_package_into};

use crate::cli::{GlobalFlags, UnmarshalArgs};
use crate::output::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Package,
    Module,
}

pub fn handle(
    args: &UnmarshalArgs,
    scope: Scope,
    config: &GdocConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = populate(&args.dir, &args.schema, scope, config)?;
    output(&value, flags.format)
}

/// Load the schema file and fill the tree it describes from `dir`.
pub fn populate(
    dir: &Path,
    schema: &Path,
    scope: Scope,
    config: &GdocConfig,
) -> anyhow::Result<DocValue> {
    let source = std::fs::read_to_string(schema)
        .with_context(|| format!("failed to read schema file {}", schema.display()))?;
    let spec = SchemaSpec::from_toml(&source)
        .with_context(|| format!("invalid schema file {}", schema.display()))?;

    let mut value = spec.to_value();
    let result = match scope {
        Scope::Package => unmarshal_package_into(dir, &mut value, config),
        Scope::Module => unmarshal_module_into(dir, &mut value, config),
    };
    result.with_context(|| format!("failed to unmarshal {}", dir.display()))?;

    tracing::debug!(dir = %dir.display(), ?scope, "doc tree populated");
    Ok(value)
}
