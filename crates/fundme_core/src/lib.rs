//! FundMe Core Library
//!
//! Test-and-deployment scaffold for the FundMe contract, providing:
//! - A simulated chain with accounts, serialized transactions, and
//!   deterministic gas accounting
//! - The FundMe contract and a mock ETH/USD price feed
//! - An explicit deployment context with named accounts and fixtures
//!
//! # Quick Start
//!
//! ```
//! use fundme_core::{parse_ether, Config, DeployContext};
//!
//! let mut config = Config::default();
//! config.network.name = "hardhat".to_string();
//!
//! let mut ctx = DeployContext::bootstrap(&config).unwrap();
//! ctx.deploy_all().unwrap();
//!
//! // Fund as the deployer, then withdraw the full contract balance.
//! let fund_me = ctx.fund_me("deployer").unwrap();
//! fund_me.fund(&mut ctx.chain, parse_ether(50)).unwrap();
//! let receipt = fund_me.withdraw(&mut ctx.chain).unwrap();
//!
//! assert_eq!(ctx.chain.balance_of(fund_me.address()), 0);
//! assert!(receipt.gas_cost() > 0);
//! ```

mod address;
mod chain;
mod config;
mod contract;
mod deploy;
mod error;
pub mod fund_me;
mod price_feed;
mod types;

pub use address::{Address, TxHash};
pub use chain::SimChain;
pub use config::{
    AccountsConfig, Config, GasConfig, NetworkConfig, PriceFeedConfig, CONFIG_FILE,
};
pub use contract::{CallEnv, ContractCall, ContractState};
pub use deploy::{
    AccountRegistry, DeployContext, DeploymentLock, DEPLOYMENTS_DIR, FUND_ME, MOCK_V3_AGGREGATOR,
};
pub use error::{FundMeError, Result};
pub use fund_me::{FundMe, FundMeHandle};
pub use price_feed::{MockV3Aggregator, PriceData};
pub use types::{
    format_ether, parse_ether, parse_ether_str, TxReceipt, Wei, WEI_PER_ETH, WEI_PER_GWEI,
};
