//! Contract call messages and registered contract state.

use crate::address::Address;
use crate::fund_me::FundMe;
use crate::price_feed::MockV3Aggregator;
use crate::types::Wei;
use serde::{Deserialize, Serialize};

/// State-changing call messages understood by the chain.
///
/// The attached value travels in the transaction envelope, not the message,
/// mirroring `msg.value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractCall {
    /// Payable funding call.
    Fund,
    /// Owner-only withdrawal of the full contract balance.
    Withdraw,
}

impl ContractCall {
    /// Method name as it appears in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Withdraw => "withdraw",
        }
    }
}

/// Execution environment for a contract call: the msg.sender/msg.value pair.
#[derive(Debug, Clone, Copy)]
pub struct CallEnv {
    /// Calling account.
    pub caller: Address,
    /// Value attached to the call, in wei.
    pub value: Wei,
}

/// State of a deployed contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContractState {
    /// The FundMe contract under test.
    FundMe(FundMe),
    /// Mock ETH/USD price feed.
    PriceFeed(MockV3Aggregator),
}

impl ContractState {
    /// Human-readable kind name for errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FundMe(_) => "FundMe",
            Self::PriceFeed(_) => "MockV3Aggregator",
        }
    }
}
