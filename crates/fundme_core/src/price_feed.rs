//! Mock ETH/USD price feed aggregator.
//!
//! Stand-in for the production oracle on development chains: serves a
//! deterministic answer set at deployment and updatable for tests.

use serde::{Deserialize, Serialize};

/// Mock V3 aggregator contract state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockV3Aggregator {
    decimals: u8,
    latest_answer: u128,
    latest_round: u64,
}

impl MockV3Aggregator {
    /// Creates a feed with the given decimals and initial answer.
    pub fn new(decimals: u8, initial_answer: u128) -> Self {
        Self {
            decimals,
            latest_answer: initial_answer,
            latest_round: 1,
        }
    }

    /// Feed decimals.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Latest answer at feed decimals.
    pub fn latest_answer(&self) -> u128 {
        self.latest_answer
    }

    /// Latest round id, bumped on every answer update.
    pub fn latest_round(&self) -> u64 {
        self.latest_round
    }

    /// Replaces the answer and starts a new round.
    pub fn update_answer(&mut self, answer: u128) {
        self.latest_answer = answer;
        self.latest_round += 1;
    }

    /// Snapshot of the data a consumer contract needs.
    pub fn price_data(&self) -> PriceData {
        PriceData {
            answer: self.latest_answer,
            decimals: self.decimals,
        }
    }
}

/// Copyable snapshot of the feed's current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceData {
    /// Answer at feed decimals.
    pub answer: u128,
    /// Feed decimals.
    pub decimals: u8,
}
