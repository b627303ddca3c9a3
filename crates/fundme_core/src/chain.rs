//! Simulated chain: accounts, serialized transaction execution, gas
//! accounting, and the contract registry.
//!
//! Transactions run one at a time, one block each. A state-changing call
//! either commits atomically or reverts with no contract-state effect;
//! gas is charged in both cases.

use crate::address::{Address, TxHash};
use crate::contract::{CallEnv, ContractCall, ContractState};
use crate::error::{FundMeError, Result};
use crate::fund_me::FundMe;
use crate::price_feed::MockV3Aggregator;
use crate::types::{TxReceipt, Wei};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Base gas for any transaction.
const TX_BASE_GAS: u64 = 21_000;

/// Execution gas for a funding call.
const FUND_GAS: u64 = 46_500;

/// Execution gas for a withdrawal, before per-funder storage clearing.
const WITHDRAW_GAS: u64 = 14_200;

/// Gas per funder entry cleared during withdrawal.
const WITHDRAW_GAS_PER_FUNDER: u64 = 4_800;

/// The simulated chain.
///
/// Owns all balances and contract state for one network. Cloning and
/// serde support exist so deployments can be snapshotted and persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimChain {
    network: String,
    gas_price: Wei,
    state: ChainState,
}

/// Everything a transaction can touch, snapshotted as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChainState {
    balances: BTreeMap<Address, Wei>,
    contracts: BTreeMap<Address, ContractState>,
    names: BTreeMap<String, Address>,
    block_number: u64,
    deploy_nonce: u64,
}

impl SimChain {
    /// Creates an empty chain for `network` at the given gas price.
    pub fn new(network: impl Into<String>, gas_price: Wei) -> Self {
        Self {
            network: network.into(),
            gas_price,
            state: ChainState {
                balances: BTreeMap::new(),
                contracts: BTreeMap::new(),
                names: BTreeMap::new(),
                block_number: 0,
                deploy_nonce: 0,
            },
        }
    }

    /// Network name this chain simulates.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Effective gas price in wei.
    pub fn gas_price(&self) -> Wei {
        self.gas_price
    }

    /// Current block number.
    pub fn block_number(&self) -> u64 {
        self.state.block_number
    }

    /// Registers an externally-owned account with an initial balance.
    pub fn add_account(&mut self, address: Address, balance: Wei) {
        self.state.balances.insert(address, balance);
    }

    /// Balance of any address, zero if never seen.
    pub fn balance_of(&self, address: Address) -> Wei {
        self.state.balance(address)
    }

    /// Deploys a contract under `name`, deriving its address from the
    /// deployer and the chain's deploy nonce. Redeploying a name replaces
    /// the registered address.
    pub fn deploy(&mut self, name: &str, deployer: Address, contract: ContractState) -> Address {
        let address = Address::contract(deployer, self.state.deploy_nonce);
        self.state.deploy_nonce += 1;
        info!(name, %address, kind = contract.kind(), "deployed contract");
        self.state.contracts.insert(address, contract);
        self.state.names.insert(name.to_string(), address);
        address
    }

    /// Resolves a named deployment.
    pub fn lookup(&self, name: &str) -> Result<Address> {
        self.state
            .names
            .get(name)
            .copied()
            .ok_or_else(|| FundMeError::ContractNotFound(name.to_string()))
    }

    /// Borrows the FundMe state at `address` for view calls.
    pub fn fund_me(&self, address: Address) -> Result<&FundMe> {
        self.state.fund_me(address)
    }

    /// Borrows the price feed state at `address` for view calls.
    pub fn price_feed_at(&self, address: Address) -> Result<&MockV3Aggregator> {
        self.state.price_feed(address)
    }

    /// Mutable feed access, for driving the mock's answer in tests.
    pub fn price_feed_mut(&mut self, address: Address) -> Result<&mut MockV3Aggregator> {
        match self.state.contracts.get_mut(&address) {
            Some(ContractState::PriceFeed(feed)) => Ok(feed),
            Some(_) => Err(FundMeError::ContractKindMismatch {
                address,
                expected: "MockV3Aggregator",
            }),
            None => Err(FundMeError::ContractNotFound(address.to_string())),
        }
    }

    /// Executes a state-changing call and waits for its confirmation.
    ///
    /// The caller must cover `value` plus the (deterministic) gas cost, or
    /// the call fails with an infrastructure error before execution. On
    /// revert every contract-state and balance effect of the call is rolled
    /// back; gas is still charged.
    pub fn execute(
        &mut self,
        caller: Address,
        target: Address,
        call: ContractCall,
        value: Wei,
    ) -> Result<TxReceipt> {
        let gas_used = self.gas_for(target, call);
        let gas_cost = gas_used as Wei * self.gas_price;
        let available = self.state.balance(caller);
        let needed = value + gas_cost;
        if available < needed {
            return Err(FundMeError::InsufficientBalance {
                address: caller,
                needed,
                available,
            });
        }

        let env = CallEnv { caller, value };
        let snapshot = self.state.clone();

        self.state.debit(caller, value);
        self.state.credit(target, value);
        let outcome = self.state.dispatch(env, target, call);

        if let Err(err) = outcome {
            // Roll back the call's effects; the fee is still paid.
            self.state = snapshot;
            self.state.debit(caller, gas_cost);
            self.state.block_number += 1;
            debug!(%caller, %target, method = call.name(), %err, "transaction reverted");
            return Err(err);
        }

        self.state.debit(caller, gas_cost);
        self.state.block_number += 1;

        let receipt = TxReceipt {
            tx_hash: TxHash::compute(self.state.block_number, caller, target, value),
            block_number: self.state.block_number,
            from: caller,
            to: target,
            gas_used,
            effective_gas_price: self.gas_price,
        };
        debug!(
            tx = %receipt.tx_hash,
            %caller,
            %target,
            method = call.name(),
            value,
            gas_used,
            "transaction confirmed"
        );
        Ok(receipt)
    }

    /// Deterministic gas for a call against the current state.
    fn gas_for(&self, target: Address, call: ContractCall) -> u64 {
        match call {
            ContractCall::Fund => TX_BASE_GAS + FUND_GAS,
            ContractCall::Withdraw => {
                let funders = self
                    .state
                    .fund_me(target)
                    .map(|c| c.funder_count())
                    .unwrap_or(0);
                TX_BASE_GAS + WITHDRAW_GAS + WITHDRAW_GAS_PER_FUNDER * funders
            }
        }
    }
}

impl ChainState {
    fn balance(&self, address: Address) -> Wei {
        self.balances.get(&address).copied().unwrap_or(0)
    }

    fn credit(&mut self, address: Address, amount: Wei) {
        *self.balances.entry(address).or_insert(0) += amount;
    }

    fn debit(&mut self, address: Address, amount: Wei) {
        let entry = self.balances.entry(address).or_insert(0);
        debug_assert!(*entry >= amount, "debit checked by caller");
        *entry -= amount;
    }

    fn fund_me(&self, address: Address) -> Result<&FundMe> {
        match self.contracts.get(&address) {
            Some(ContractState::FundMe(c)) => Ok(c),
            Some(_) => Err(FundMeError::ContractKindMismatch {
                address,
                expected: "FundMe",
            }),
            None => Err(FundMeError::ContractNotFound(address.to_string())),
        }
    }

    fn fund_me_mut(&mut self, address: Address) -> Result<&mut FundMe> {
        match self.contracts.get_mut(&address) {
            Some(ContractState::FundMe(c)) => Ok(c),
            Some(_) => Err(FundMeError::ContractKindMismatch {
                address,
                expected: "FundMe",
            }),
            None => Err(FundMeError::ContractNotFound(address.to_string())),
        }
    }

    fn price_feed(&self, address: Address) -> Result<&MockV3Aggregator> {
        match self.contracts.get(&address) {
            Some(ContractState::PriceFeed(feed)) => Ok(feed),
            Some(_) => Err(FundMeError::ContractKindMismatch {
                address,
                expected: "MockV3Aggregator",
            }),
            None => Err(FundMeError::ContractNotFound(address.to_string())),
        }
    }

    /// Runs the contract logic for one call. Balance movement for the
    /// attached value has already happened; a revert here makes the caller
    /// restore the pre-call snapshot.
    fn dispatch(&mut self, env: CallEnv, target: Address, call: ContractCall) -> Result<()> {
        match call {
            ContractCall::Fund => {
                let feed_addr = self.fund_me(target)?.price_feed();
                let price = self.price_feed(feed_addr)?.price_data();
                self.fund_me_mut(target)?.fund(env, price)
            }
            ContractCall::Withdraw => {
                self.fund_me_mut(target)?.withdraw(env)?;
                let owner = self.fund_me(target)?.owner();
                let amount = self.balance(target);
                self.debit(target, amount);
                self.credit(owner, amount);
                Ok(())
            }
        }
    }
}
