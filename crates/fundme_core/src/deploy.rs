//! Deployment context: named accounts, contract fixtures, and persistence.
//!
//! All configuration is explicit. A [`DeployContext`] carries the network,
//! the account registry, and the chain with its contract registry, and is
//! threaded through the runner and the test harness; nothing reads ambient
//! global state.

use crate::address::Address;
use crate::chain::SimChain;
use crate::config::{AccountsConfig, Config};
use crate::contract::ContractState;
use crate::error::{FundMeError, Result};
use crate::fund_me::{FundMe, FundMeHandle};
use crate::price_feed::MockV3Aggregator;
use crate::types::parse_ether;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// Registered name of the FundMe deployment.
pub const FUND_ME: &str = "FundMe";

/// Registered name of the mock price feed deployment.
pub const MOCK_V3_AGGREGATOR: &str = "MockV3Aggregator";

/// Directory holding per-network deployment files.
pub const DEPLOYMENTS_DIR: &str = "deployments";

/// Deterministic accounts for one network, with logical role names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRegistry {
    named: BTreeMap<String, Address>,
    accounts: Vec<Address>,
}

impl AccountRegistry {
    /// Derives `config.count` accounts for `network` and resolves the
    /// configured role names to addresses.
    pub fn generate(network: &str, config: &AccountsConfig) -> Result<Self> {
        let accounts: Vec<Address> = (0..config.count)
            .map(|i| Address::account(network, i))
            .collect();

        let mut named = BTreeMap::new();
        for (role, index) in &config.named {
            let address = accounts.get(*index as usize).copied().ok_or_else(|| {
                FundMeError::ConfigError(format!(
                    "account role {role} points at index {index}, but only {} accounts exist",
                    accounts.len()
                ))
            })?;
            named.insert(role.clone(), address);
        }

        Ok(Self { named, accounts })
    }

    /// Resolves a logical role name ("deployer") to its account.
    pub fn named(&self, role: &str) -> Result<Address> {
        self.named
            .get(role)
            .copied()
            .ok_or_else(|| FundMeError::UnknownAccount(role.to_string()))
    }

    /// Account at `index`, if one exists.
    pub fn get(&self, index: usize) -> Option<Address> {
        self.accounts.get(index).copied()
    }

    /// All accounts, in derivation order.
    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }
}

/// Explicit deployment context threaded through runner and tests.
#[derive(Debug, Clone)]
pub struct DeployContext {
    /// Scaffold configuration the context was built from.
    pub config: Config,
    /// Named and positional accounts.
    pub accounts: AccountRegistry,
    /// The simulated chain holding balances and contracts.
    pub chain: SimChain,
}

/// On-disk shape of a persisted deployment.
#[derive(Serialize, Deserialize)]
struct DeploymentFile {
    accounts: AccountRegistry,
    chain: SimChain,
}

impl DeployContext {
    /// Creates a fresh context for the configured network: an empty chain
    /// plus funded accounts. No contracts are deployed yet.
    pub fn bootstrap(config: &Config) -> Result<Self> {
        let network = &config.network.name;
        let mut chain = SimChain::new(network.clone(), config.gas.gas_price());
        let accounts = AccountRegistry::generate(network, &config.accounts)?;

        let balance = parse_ether(config.accounts.initial_balance_eth);
        for address in accounts.accounts() {
            chain.add_account(*address, balance);
        }

        Ok(Self {
            config: config.clone(),
            accounts,
            chain,
        })
    }

    /// The deployment fixture: mock price feed (development chains only,
    /// otherwise the configured live feed), then FundMe wired to it.
    pub fn deploy_all(&mut self) -> Result<()> {
        let deployer = self.accounts.named("deployer")?;
        let network = self.chain.network().to_string();

        let feed_address = if self.config.is_development_chain(&network) {
            let feed = MockV3Aggregator::new(
                self.config.price_feed.decimals,
                self.config.price_feed.initial_answer,
            );
            self.chain
                .deploy(MOCK_V3_AGGREGATOR, deployer, ContractState::PriceFeed(feed))
        } else {
            let configured = self.config.network.price_feed.as_deref().ok_or_else(|| {
                FundMeError::ConfigError(format!(
                    "network {network} is not a development chain and has no price_feed configured"
                ))
            })?;
            Address::from_hex(configured)?
        };

        self.chain.deploy(
            FUND_ME,
            deployer,
            ContractState::FundMe(FundMe::new(deployer, feed_address)),
        );
        info!(%network, "deployment fixture complete");
        Ok(())
    }

    /// Resolves the named FundMe deployment for a configured account role.
    pub fn fund_me(&self, role: &str) -> Result<FundMeHandle> {
        let address = self.chain.lookup(FUND_ME)?;
        let caller = self.accounts.named(role)?;
        Ok(FundMeHandle::new(address, caller))
    }

    /// Loads the persisted deployment for the configured network.
    pub fn load(root: &Path, config: &Config) -> Result<Self> {
        let network = &config.network.name;
        let path = deployment_path(root, network);
        if !path.exists() {
            return Err(FundMeError::DeploymentNotFound(network.clone()));
        }
        let content = fs::read_to_string(&path)?;
        let file: DeploymentFile = serde_json::from_str(&content)
            .map_err(|e| FundMeError::Serialization(e.to_string()))?;
        Ok(Self {
            config: config.clone(),
            accounts: file.accounts,
            chain: file.chain,
        })
    }

    /// Persists the deployment under `deployments/<network>.json`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let dir = root.join(DEPLOYMENTS_DIR);
        fs::create_dir_all(&dir)?;
        let file = DeploymentFile {
            accounts: self.accounts.clone(),
            chain: self.chain.clone(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| FundMeError::Serialization(e.to_string()))?;
        fs::write(deployment_path(root, self.chain.network()), content)?;
        Ok(())
    }
}

fn deployment_path(root: &Path, network: &str) -> PathBuf {
    root.join(DEPLOYMENTS_DIR).join(format!("{network}.json"))
}

/// Exclusive lock over one network's deployment file.
///
/// State-changing CLI commands hold this across load-execute-save so two
/// concurrent invocations cannot interleave.
pub struct DeploymentLock {
    file: Option<File>,
    path: PathBuf,
}

impl DeploymentLock {
    /// Acquires the lock, failing immediately if another process holds it.
    pub fn acquire(root: &Path, network: &str) -> Result<Self> {
        let dir = root.join(DEPLOYMENTS_DIR);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{network}.lock"));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                file.try_lock_exclusive()
                    .map_err(|_| FundMeError::DeploymentLocked)?;
                Ok(Self {
                    file: Some(file),
                    path,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(FundMeError::DeploymentLocked)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for DeploymentLock {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.unlock();
        }
        let _ = fs::remove_file(&self.path);
    }
}
