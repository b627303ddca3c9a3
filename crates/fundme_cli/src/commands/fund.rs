//! Fund command: send value to the FundMe contract as the deployer.

use super::{load_config, root};
use anyhow::{Context, Result};
use console::style;
use fundme_core::{format_ether, parse_ether_str, DeployContext, DeploymentLock};

/// Fund the deployed contract with `amount` ether.
pub fn run(network: Option<&str>, amount: &str) -> Result<()> {
    let config = load_config(network)?;
    let _lock = DeploymentLock::acquire(root(), &config.network.name)?;

    let value = parse_ether_str(amount)?;
    let mut ctx = DeployContext::load(root(), &config).context("No deployment to fund")?;
    let fund_me = ctx.fund_me("deployer")?;

    println!("Got contract FundMe at {}", fund_me.address());
    println!("Funding contract...");
    let receipt = fund_me.fund(&mut ctx.chain, value)?;
    ctx.save(root())?;

    println!(
        "{} {} ETH (tx {})",
        style("Funded").green(),
        format_ether(value),
        receipt.tx_hash
    );
    Ok(())
}
