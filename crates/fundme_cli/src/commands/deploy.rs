//! Deploy command: run the fixture and persist the deployment.

use super::{load_config, root};
use anyhow::Result;
use console::style;
use fundme_core::{DeployContext, DeploymentLock};

/// Bootstrap a fresh context, deploy the fixture, and save it.
pub fn run(network: Option<&str>) -> Result<()> {
    let config = load_config(network)?;
    let _lock = DeploymentLock::acquire(root(), &config.network.name)?;

    let mut ctx = DeployContext::bootstrap(&config)?;
    ctx.deploy_all()?;
    ctx.save(root())?;

    let fund_me = ctx.fund_me("deployer")?;
    println!(
        "Deployed FundMe at {} on network {}",
        style(fund_me.address()).green(),
        config.network.name
    );
    Ok(())
}
