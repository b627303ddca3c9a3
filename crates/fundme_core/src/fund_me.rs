//! The FundMe contract: funding ledger, owner-gated withdrawal, and the
//! typed call handle used by the runner and the test suite.
//!
//! The funding minimum and revert reasons are contract-defined constants.
//! Harness code imports them from here instead of restating them.

use crate::address::Address;
use crate::chain::SimChain;
use crate::contract::{CallEnv, ContractCall};
use crate::error::{FundMeError, Result};
use crate::price_feed::PriceData;
use crate::types::{TxReceipt, Wei, WEI_PER_ETH};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum funding value in USD, 18 decimals (50 USD).
pub const MINIMUM_USD: u128 = 50 * WEI_PER_ETH;

/// Revert reason for a funding call below the minimum.
pub const NOT_ENOUGH_ETH: &str = "You need to spend more ETH!";

/// Revert reason for a withdrawal attempt by a non-owner.
pub const NOT_OWNER: &str = "FundMe__NotOwner";

/// FundMe contract state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundMe {
    owner: Address,
    price_feed: Address,
    amount_funded: BTreeMap<Address, Wei>,
    funders: Vec<Address>,
}

impl FundMe {
    /// Creates the contract owned by its deployer, wired to a price feed.
    pub fn new(owner: Address, price_feed: Address) -> Self {
        Self {
            owner,
            price_feed,
            amount_funded: BTreeMap::new(),
            funders: Vec::new(),
        }
    }

    /// Contract owner (the deploying account).
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Registered price feed address.
    pub fn price_feed(&self) -> Address {
        self.price_feed
    }

    /// Amount funded by `addr`, zero for unknown addresses.
    pub fn amount_funded(&self, addr: Address) -> Wei {
        self.amount_funded.get(&addr).copied().unwrap_or(0)
    }

    /// Funder at `index`. Reverts when the index is out of bounds, which is
    /// every index once a withdrawal has cleared the list.
    pub fn funder(&self, index: u64) -> Result<Address> {
        self.funders
            .get(index as usize)
            .copied()
            .ok_or_else(FundMeError::reverted)
    }

    /// Number of funders currently in the list.
    pub fn funder_count(&self) -> u64 {
        self.funders.len() as u64
    }

    /// Payable funding call.
    ///
    /// The sent value must convert to at least [`MINIMUM_USD`] at the
    /// feed's current answer.
    pub fn fund(&mut self, env: CallEnv, price: PriceData) -> Result<()> {
        if conversion_rate(env.value, price) < BigUint::from(MINIMUM_USD) {
            return Err(FundMeError::revert(NOT_ENOUGH_ETH));
        }
        *self.amount_funded.entry(env.caller).or_insert(0) += env.value;
        self.funders.push(env.caller);
        Ok(())
    }

    /// Owner-only withdrawal: zeroes every tracked amount and clears the
    /// funder list. The chain transfers the contract balance afterwards.
    pub fn withdraw(&mut self, env: CallEnv) -> Result<()> {
        if env.caller != self.owner {
            return Err(FundMeError::revert(NOT_OWNER));
        }
        for funder in self.funders.drain(..) {
            self.amount_funded.insert(funder, 0);
        }
        Ok(())
    }
}

/// Converts a wei value to USD (18 decimals) at the feed's answer.
///
/// `answer` is scaled from feed decimals to 18; the product can exceed
/// u128, so the math runs on `BigUint`.
fn conversion_rate(value: Wei, price: PriceData) -> BigUint {
    let scale = 10u128.pow(18 - price.decimals as u32);
    let eth_price = BigUint::from(price.answer) * scale;
    eth_price * value / WEI_PER_ETH
}

/// Call handle bound to a deployed FundMe instance and a calling account.
///
/// The equivalent of fetching a contract for a signer: state-changing calls
/// go through the chain and cost gas, view calls read state directly.
#[derive(Debug, Clone, Copy)]
pub struct FundMeHandle {
    address: Address,
    caller: Address,
}

impl FundMeHandle {
    /// Binds a handle to a deployed contract and a calling account.
    pub fn new(address: Address, caller: Address) -> Self {
        Self { address, caller }
    }

    /// Re-binds the handle to a different calling account.
    pub fn connect(&self, caller: Address) -> Self {
        Self {
            address: self.address,
            caller,
        }
    }

    /// Deployed contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Account this handle calls as.
    pub fn caller(&self) -> Address {
        self.caller
    }

    /// Sends `value` wei to the contract's fund method.
    pub fn fund(&self, chain: &mut SimChain, value: Wei) -> Result<TxReceipt> {
        chain.execute(self.caller, self.address, ContractCall::Fund, value)
    }

    /// Withdraws the full contract balance to the owner.
    pub fn withdraw(&self, chain: &mut SimChain) -> Result<TxReceipt> {
        chain.execute(self.caller, self.address, ContractCall::Withdraw, 0)
    }

    /// Registered price feed address.
    pub fn price_feed(&self, chain: &SimChain) -> Result<Address> {
        Ok(chain.fund_me(self.address)?.price_feed())
    }

    /// Amount funded by `addr`.
    pub fn amount_funded(&self, chain: &SimChain, addr: Address) -> Result<Wei> {
        Ok(chain.fund_me(self.address)?.amount_funded(addr))
    }

    /// Funder at `index`; reverts out of bounds.
    pub fn funder(&self, chain: &SimChain, index: u64) -> Result<Address> {
        chain.fund_me(self.address)?.funder(index)
    }
}
