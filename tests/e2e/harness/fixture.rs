//! Per-test deployment fixture, gated to development networks.

use anyhow::{Context, Result};
use fundme_core::{
    parse_ether, Address, Config, DeployContext, FundMeHandle, Wei, MOCK_V3_AGGREGATOR,
};

/// Environment variable selecting the active network for the suite.
pub const NETWORK_ENV: &str = "FUNDME_NETWORK";

/// A freshly deployed FundMe instance plus the accounts to drive it.
///
/// Rebuilt per test, the reusable deployment snapshot of the suite: mock
/// price feed and FundMe deployed, every account funded.
pub struct Fixture {
    /// Deployment context owning the chain.
    pub ctx: DeployContext,
    /// The deploying (owner) account.
    pub deployer: Address,
    /// FundMe handle calling as the deployer.
    pub fund_me: FundMeHandle,
    /// Address of the mock price feed.
    pub mock_feed: Address,
}

impl Fixture {
    /// Deploys a fresh fixture, or `None` when the active network is not
    /// in the development-chain allow-list — the caller returns early and
    /// the scenario is skipped.
    pub fn deploy() -> Option<Self> {
        let config = Self::config();
        if !config.is_development_chain(&config.network.name) {
            eprintln!(
                "skipping: network {} is not a development chain",
                config.network.name
            );
            return None;
        }
        Some(Self::deploy_with(config).expect("fixture deployment failed"))
    }

    /// Default configuration with the env-selected network applied.
    pub fn config() -> Config {
        let mut config = Config::default();
        if let Ok(name) = std::env::var(NETWORK_ENV) {
            config.network.name = name;
        }
        config
    }

    fn deploy_with(config: Config) -> Result<Self> {
        let mut ctx = DeployContext::bootstrap(&config)?;
        ctx.deploy_all()?;

        let deployer = ctx.accounts.named("deployer")?;
        let fund_me = ctx.fund_me("deployer")?;
        let mock_feed = ctx
            .chain
            .lookup(MOCK_V3_AGGREGATOR)
            .context("fixture did not deploy the mock feed")?;

        Ok(Self {
            ctx,
            deployer,
            fund_me,
            mock_feed,
        })
    }

    /// The suite's standard funding value: 50 ETH.
    pub fn send_value() -> Wei {
        parse_ether(50)
    }

    /// Account at `index`; index 0 is the deployer.
    pub fn account(&self, index: usize) -> Address {
        self.ctx
            .accounts
            .get(index)
            .expect("fixture account index out of range")
    }

    /// Balance of any address on the fixture chain.
    pub fn balance(&self, address: Address) -> Wei {
        self.ctx.chain.balance_of(address)
    }

    /// The FundMe handle re-bound to another calling account.
    pub fn fund_me_as(&self, account: Address) -> FundMeHandle {
        self.fund_me.connect(account)
    }
}
