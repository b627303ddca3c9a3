//! Withdraw command: the withdrawal runner.
//!
//! Resolves the named deployment for the deployer account, prints its
//! address, invokes the withdrawal, and waits for confirmation. Any
//! failure propagates to a non-zero exit with the error on stderr; there
//! are no retries.

use super::{load_config, root};
use anyhow::{Context, Result};
use console::style;
use fundme_core::{DeployContext, DeploymentLock};

/// Withdraw the full contract balance to the deployer.
pub fn run(network: Option<&str>) -> Result<()> {
    let config = load_config(network)?;
    let _lock = DeploymentLock::acquire(root(), &config.network.name)?;

    let mut ctx =
        DeployContext::load(root(), &config).context("No deployment to withdraw from")?;
    let fund_me = ctx.fund_me("deployer")?;

    println!("Got contract FundMe at {}", fund_me.address());
    println!("Withdrawing from FundMe...");
    let receipt = fund_me.withdraw(&mut ctx.chain)?;
    ctx.save(root())?;

    println!("{} (tx {})", style("Withdrawn!").green(), receipt.tx_hash);
    Ok(())
}
