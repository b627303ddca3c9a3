//! Status command: inspect the deployed contract.

use super::{load_config, root};
use anyhow::{Context, Result};
use fundme_core::{format_ether, DeployContext};

/// Print contract address, balance, and funder count.
pub fn run(network: Option<&str>) -> Result<()> {
    let config = load_config(network)?;
    let ctx = DeployContext::load(root(), &config).context("No deployment found")?;
    let fund_me = ctx.fund_me("deployer")?;

    let balance = ctx.chain.balance_of(fund_me.address());
    let funders = ctx.chain.fund_me(fund_me.address())?.funder_count();

    println!("Network:  {}", ctx.chain.network());
    println!("FundMe:   {}", fund_me.address());
    println!("Balance:  {} ETH", format_ether(balance));
    println!("Funders:  {funders}");
    println!("Block:    {}", ctx.chain.block_number());
    Ok(())
}
