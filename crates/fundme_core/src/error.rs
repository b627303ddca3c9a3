//! Error types for fundme_core operations.

use crate::address::Address;
use thiserror::Error;

/// Core error type for chain and deployment operations.
///
/// Two families surface here: reverts, raised by a contract when a
/// precondition fails (expected-and-asserted outcomes in tests), and
/// infrastructure errors from the call layer itself. Callers distinguish
/// them with [`FundMeError::is_revert`].
#[derive(Error, Debug)]
pub enum FundMeError {
    /// A contract call aborted and rolled back its state changes.
    #[error("execution reverted{}", .reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    Revert {
        /// Optional reason string supplied by the contract.
        reason: Option<String>,
    },

    /// No account is registered under the given role name.
    #[error("unknown account role: {0}")]
    UnknownAccount(String),

    /// No contract is deployed under the given name.
    #[error("contract not deployed: {0}")]
    ContractNotFound(String),

    /// The address does not hold a contract of the expected kind.
    #[error("no {expected} contract at {address}")]
    ContractKindMismatch {
        /// Address that was dereferenced.
        address: Address,
        /// Human-readable expected kind.
        expected: &'static str,
    },

    /// The sender cannot cover the transaction value plus gas.
    #[error("insufficient balance: {address} holds {available} wei, needs {needed}")]
    InsufficientBalance {
        /// Sending account.
        address: Address,
        /// Value plus gas cost in wei.
        needed: u128,
        /// Current balance in wei.
        available: u128,
    },

    /// No deployment file exists for the network.
    #[error("no deployment found for network {0}; run 'fundme deploy' first")]
    DeploymentNotFound(String),

    /// Another process holds the deployment lock.
    #[error("deployment locked by another process")]
    DeploymentLocked,

    /// Invalid hex string for an address or hash.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Invalid ether amount string.
    #[error("invalid ether amount: {0}")]
    InvalidAmount(String),

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization error while persisting or loading a deployment.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FundMeError {
    /// Builds a revert with a reason string.
    pub fn revert(reason: impl Into<String>) -> Self {
        Self::Revert {
            reason: Some(reason.into()),
        }
    }

    /// Builds a revert without a reason string.
    pub fn reverted() -> Self {
        Self::Revert { reason: None }
    }

    /// Returns true if this error is a contract revert.
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Revert { .. })
    }

    /// Returns the revert reason, if this is a revert that carries one.
    pub fn revert_reason(&self) -> Option<&str> {
        match self {
            Self::Revert { reason } => reason.as_deref(),
            _ => None,
        }
    }
}

/// Convenience Result type for fundme_core operations.
pub type Result<T> = std::result::Result<T, FundMeError>;
