//! Addresses, transaction hashes, and their canonical derivation.

use crate::error::{FundMeError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 20-byte account or contract address.
///
/// Account addresses are derived deterministically from the network name and
/// account index; contract addresses from the deployer and its deploy nonce.
/// The same inputs always produce the same address, so a deployment can be
/// rebuilt from configuration alone.
///
/// # Examples
///
/// ```
/// use fundme_core::Address;
///
/// let a = Address::account("localhost", 0);
/// let b = Address::account("localhost", 0);
/// assert_eq!(a, b);
/// assert!(a.to_string().starts_with("0x"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The length of an address in bytes.
    pub const LEN: usize = 20;

    /// Creates an address from raw bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Derives the address of the account at `index` on `network`.
    pub fn account(network: &str, index: u32) -> Self {
        let mut payload = Vec::with_capacity(network.len() + 4);
        payload.extend_from_slice(network.as_bytes());
        payload.extend_from_slice(&index.to_le_bytes());
        Self::truncate_hash(&canonical_bytes(EntityKind::Account, &payload))
    }

    /// Derives the address of the `nonce`-th contract deployed by `deployer`.
    pub fn contract(deployer: Address, nonce: u64) -> Self {
        let mut payload = Vec::with_capacity(20 + 8);
        payload.extend_from_slice(deployer.as_bytes());
        payload.extend_from_slice(&nonce.to_le_bytes());
        Self::truncate_hash(&canonical_bytes(EntityKind::Contract, &payload))
    }

    /// Parses an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != Self::LEN * 2 {
            return Err(FundMeError::InvalidHex(format!(
                "expected {} hex chars, got {}",
                Self::LEN * 2,
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| FundMeError::InvalidHex(e.to_string()))?;
        let arr: [u8; 20] = bytes
            .try_into()
            .map_err(|_| FundMeError::InvalidHex("invalid length".to_string()))?;
        Ok(Self(arr))
    }

    fn truncate_hash(canonical: &[u8]) -> Self {
        let hash = blake3::hash(canonical);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash.as_bytes()[..20]);
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{}...)", &hex::encode(self.0)[..8])
    }
}

// Addresses serialize as prefixed hex so they can key JSON maps in the
// persisted deployment file.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(D::Error::custom)
    }
}

/// A 32-byte transaction hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; 32]);

impl TxHash {
    /// Parses a hash from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(FundMeError::InvalidHex(format!(
                "expected 64 hex chars, got {}",
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| FundMeError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| FundMeError::InvalidHex("invalid length".to_string()))?;
        Ok(Self(arr))
    }

    /// Computes the hash of a transaction envelope.
    ///
    /// The block number makes repeated identical calls hash differently,
    /// matching one-transaction-per-block execution.
    pub fn compute(block_number: u64, from: Address, to: Address, value: u128) -> Self {
        let mut payload = Vec::with_capacity(8 + 20 + 20 + 16);
        payload.extend_from_slice(&block_number.to_le_bytes());
        payload.extend_from_slice(from.as_bytes());
        payload.extend_from_slice(to.as_bytes());
        payload.extend_from_slice(&value.to_le_bytes());
        let hash = blake3::hash(&canonical_bytes(EntityKind::Transaction, &payload));
        Self(*hash.as_bytes())
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash(0x{}...)", &hex::encode(self.0)[..12])
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TxHash::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Entity kind discriminant for the canonical envelope.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntityKind {
    Account = 1,
    Contract = 2,
    Transaction = 3,
}

/// Canonical envelope magic bytes.
const MAGIC: &[u8; 5] = b"FNDM1";

/// Constructs canonical bytes for hashing.
///
/// Format:
/// - Magic: "FNDM1" (5 bytes)
/// - Kind: u8 (1 byte)
/// - Length: u64 LE (8 bytes)
/// - Payload: variable bytes
fn canonical_bytes(kind: EntityKind, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + 1 + 8 + payload.len());
    out.extend_from_slice(MAGIC);
    out.push(kind as u8);
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(payload);
    out
}
