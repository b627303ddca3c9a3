//! Wei amounts, ether conversions, and transaction receipts.

use crate::address::{Address, TxHash};
use crate::error::{FundMeError, Result};
use serde::{Deserialize, Serialize};

/// Amount in wei. 1 ether = 10^18 wei.
pub type Wei = u128;

/// Number of wei per ether.
pub const WEI_PER_ETH: Wei = 1_000_000_000_000_000_000;

/// Number of wei per gwei.
pub const WEI_PER_GWEI: Wei = 1_000_000_000;

/// Converts a whole number of ether to wei.
pub fn parse_ether(eth: u64) -> Wei {
    eth as Wei * WEI_PER_ETH
}

/// Parses a decimal ether string ("50", "0.1", "0.025") into wei.
///
/// At most 18 fractional digits are accepted.
pub fn parse_ether_str(s: &str) -> Result<Wei> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FundMeError::InvalidAmount("empty string".to_string()));
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if frac.len() > 18 {
        return Err(FundMeError::InvalidAmount(format!(
            "more than 18 decimal places: {s}"
        )));
    }

    let whole: Wei = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .map_err(|_| FundMeError::InvalidAmount(s.to_string()))? as Wei
    };

    let frac_wei: Wei = if frac.is_empty() {
        0
    } else {
        let digits = frac
            .parse::<u64>()
            .map_err(|_| FundMeError::InvalidAmount(s.to_string()))? as Wei;
        digits * 10u128.pow((18 - frac.len()) as u32)
    };

    whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| FundMeError::InvalidAmount(format!("amount overflows: {s}")))
}

/// Formats a wei amount as a decimal ether string, trimming trailing zeros.
pub fn format_ether(wei: Wei) -> String {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;
    if frac == 0 {
        return format!("{whole}");
    }
    let frac = format!("{frac:018}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Receipt for a confirmed state-changing call.
///
/// Only successful transactions produce a receipt; reverts surface as
/// [`FundMeError::Revert`] from the call itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Hash of the transaction envelope.
    pub tx_hash: TxHash,
    /// Block that confirmed the transaction.
    pub block_number: u64,
    /// Sending account.
    pub from: Address,
    /// Called contract.
    pub to: Address,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
    /// Price paid per unit of gas, in wei.
    pub effective_gas_price: Wei,
}

impl TxReceipt {
    /// Total transaction fee: gas used times effective gas price.
    pub fn gas_cost(&self) -> Wei {
        self.gas_used as Wei * self.effective_gas_price
    }
}
