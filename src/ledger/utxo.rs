// Spendable output references

use crate::tx::TxHash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a spendable output: the hash of the transaction that created
/// it and the output's position within that transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtxoRef {
    tx_hash: TxHash,
    index: u32,
}

impl UtxoRef {
    pub fn new(tx_hash: TxHash, index: u32) -> Self {
        Self { tx_hash, index }
    }

    /// Hash of the creating transaction
    pub fn tx_hash(&self) -> &TxHash {
        &self.tx_hash
    }

    /// Position of the output in the creating transaction
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for UtxoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.index)
    }
}
