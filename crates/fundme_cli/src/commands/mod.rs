//! CLI command implementations.

pub mod deploy;
pub mod fund;
pub mod status;
pub mod withdraw;

use anyhow::Result;
use fundme_core::Config;
use std::path::Path;

/// Workspace root the CLI operates in.
pub(crate) fn root() -> &'static Path {
    Path::new(".")
}

/// Loads `fundme.toml`, applying a `--network` override if given.
pub(crate) fn load_config(network: Option<&str>) -> Result<Config> {
    let mut config = Config::load(root())?;
    if let Some(name) = network {
        config.network.name = name.to_string();
    }
    Ok(config)
}
