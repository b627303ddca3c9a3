//! Configuration for networks, accounts, gas, and the price feed.
//!
//! Everything the original scaffold kept in a helper config lives here: the
//! development-chain allow-list, named account roles, and the mock price
//! feed's deployment parameters.

use crate::error::{FundMeError, Result};
use crate::types::{Wei, WEI_PER_GWEI};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the configuration file at the workspace root.
pub const CONFIG_FILE: &str = "fundme.toml";

/// Comprehensive configuration for the FundMe scaffold.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Network selection and gating.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Account registry configuration.
    #[serde(default)]
    pub accounts: AccountsConfig,

    /// Gas pricing.
    #[serde(default)]
    pub gas: GasConfig,

    /// Price feed deployment parameters.
    #[serde(default)]
    pub price_feed: PriceFeedConfig,
}

impl Config {
    /// Load configuration from `fundme.toml` under `root`, or defaults if
    /// the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| FundMeError::ConfigError(format!("failed to read config: {e}")))?;
            toml::from_str(&content)
                .map_err(|e| FundMeError::ConfigError(format!("failed to parse config: {e}")))
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to `fundme.toml` under `root`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| FundMeError::ConfigError(format!("failed to serialize config: {e}")))?;
        fs::write(&path, content)
            .map_err(|e| FundMeError::ConfigError(format!("failed to write config: {e}")))?;
        Ok(())
    }

    /// Returns true if `name` is in the development-chain allow-list.
    pub fn is_development_chain(&self, name: &str) -> bool {
        self.network.dev_chains.iter().any(|c| c == name)
    }
}

/// Network selection and gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Active network name (default: "localhost").
    pub name: String,

    /// Simulated/development network names. The test suite only runs when
    /// the active network is in this list, and the mock price feed is only
    /// deployed on these networks.
    pub dev_chains: Vec<String>,

    /// ETH/USD price feed address for live networks. Ignored on
    /// development chains, where a mock is deployed instead.
    pub price_feed: Option<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "localhost".to_string(),
            dev_chains: vec!["hardhat".to_string(), "localhost".to_string()],
            price_feed: None,
        }
    }
}

/// Account registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Logical role name to account index ("deployer" -> 0).
    pub named: BTreeMap<String, u32>,

    /// Number of accounts to create (default: 10).
    pub count: u32,

    /// Initial balance per account, in whole ether (default: 10000).
    pub initial_balance_eth: u64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        let mut named = BTreeMap::new();
        named.insert("deployer".to_string(), 0);
        Self {
            named,
            count: 10,
            initial_balance_eth: 10_000,
        }
    }
}

/// Gas pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasConfig {
    /// Effective gas price in gwei (default: 1).
    pub gas_price_gwei: u64,
}

impl GasConfig {
    /// Effective gas price in wei.
    pub fn gas_price(&self) -> Wei {
        self.gas_price_gwei as Wei * WEI_PER_GWEI
    }
}

impl Default for GasConfig {
    fn default() -> Self {
        Self { gas_price_gwei: 1 }
    }
}

/// Price feed deployment parameters for development chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceFeedConfig {
    /// Feed decimals (default: 8, matching the production aggregator).
    pub decimals: u8,

    /// Initial ETH/USD answer at feed decimals (default: 2000 USD).
    pub initial_answer: u128,
}

impl Default for PriceFeedConfig {
    fn default() -> Self {
        Self {
            decimals: 8,
            initial_answer: 2_000 * 100_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.network.name, "localhost");
        assert!(config.is_development_chain("hardhat"));
        assert!(config.is_development_chain("localhost"));
        assert!(!config.is_development_chain("mainnet"));
        assert_eq!(config.accounts.named.get("deployer"), Some(&0));
        assert_eq!(config.gas.gas_price(), WEI_PER_GWEI);
        assert_eq!(config.price_feed.decimals, 8);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.network.name, "localhost");
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.network.name = "hardhat".to_string();
        config.accounts.count = 6;
        config.gas.gas_price_gwei = 2;
        config.save(tmp.path()).unwrap();

        let loaded = Config::load(tmp.path()).unwrap();
        assert_eq!(loaded.network.name, "hardhat");
        assert_eq!(loaded.accounts.count, 6);
        assert_eq!(loaded.gas.gas_price_gwei, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[network]\nname = \"hardhat\"\ndev_chains = [\"hardhat\"]\n",
        )
        .unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.network.name, "hardhat");
        assert_eq!(config.accounts.count, 10);
        assert_eq!(config.price_feed.initial_answer, 2_000 * 100_000_000);
    }
}
