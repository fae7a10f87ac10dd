use crate::identity::{PublicKey, Signature};
use crate::ledger::UtxoRef;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Length of a transaction content hash
pub const HASH_LENGTH: usize = 32;

/// Monetary value carried by an output.
///
/// Signed so that a declared negative value can be represented and rejected
/// by validation instead of being unrepresentable.
pub type Value = i64;

/// Errors from constructing or signing a transaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxError {
    #[error("Input index {index} out of range: transaction has {len} inputs")]
    InputIndexOutOfRange { index: usize, len: usize },
}

/// Content hash of a finalized transaction (SHA256 of its raw bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxHash([u8; HASH_LENGTH]);

impl TxHash {
    /// Create a hash from raw bytes
    pub fn from_bytes(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Hash arbitrary data with SHA256
    pub fn digest(data: &[u8]) -> Self {
        let mut bytes = [0u8; HASH_LENGTH];
        bytes.copy_from_slice(&Sha256::digest(data));
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx:{}", hex::encode(&self.0[..8]))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", hex::encode(self.0))
    }
}

/// A value locked to the holder of `address`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    value: Value,
    address: PublicKey,
}

impl Output {
    pub fn new(value: Value, address: PublicKey) -> Self {
        Self { value, address }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// The key that must sign any transaction consuming this output
    pub fn address(&self) -> &PublicKey {
        &self.address
    }
}

/// A claim on an earlier output, authorized by a signature
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    prev_tx_hash: TxHash,
    output_index: u32,
    signature: Option<Signature>,
}

impl Input {
    /// Create an unsigned input spending `output_index` of `prev_tx_hash`
    pub fn new(prev_tx_hash: TxHash, output_index: u32) -> Self {
        Self {
            prev_tx_hash,
            output_index,
            signature: None,
        }
    }

    pub fn prev_tx_hash(&self) -> &TxHash {
        &self.prev_tx_hash
    }

    pub fn output_index(&self) -> u32 {
        self.output_index
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// The spendable output this input claims
    pub fn utxo_ref(&self) -> UtxoRef {
        UtxoRef::new(self.prev_tx_hash, self.output_index)
    }

    fn write_outpoint(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(self.prev_tx_hash.as_bytes());
        bytes.extend_from_slice(&self.output_index.to_le_bytes());
    }
}

/// An ordered set of inputs and outputs plus its content hash.
///
/// The hash is produced by [`Transaction::finalize`] and is cleared by any
/// later mutation. A hash that arrived from outside (deserialization) is only
/// trusted once [`Transaction::is_finalized`] confirms it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    inputs: Vec<Input>,
    outputs: Vec<Output>,
    hash: Option<TxHash>,
}

impl Transaction {
    /// Create an empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unsigned input
    pub fn add_input(&mut self, prev_tx_hash: TxHash, output_index: u32) {
        self.inputs.push(Input::new(prev_tx_hash, output_index));
        self.hash = None;
    }

    /// Append an output
    pub fn add_output(&mut self, value: Value, address: PublicKey) {
        self.outputs.push(Output::new(value, address));
        self.hash = None;
    }

    /// Remove the input at `index`, returning it if it existed
    pub fn remove_input(&mut self, index: usize) -> Option<Input> {
        if index >= self.inputs.len() {
            return None;
        }
        self.hash = None;
        Some(self.inputs.remove(index))
    }

    /// Remove the first input claiming `utxo`
    pub fn remove_input_ref(&mut self, utxo: &UtxoRef) -> Option<Input> {
        let index = self.inputs.iter().position(|i| &i.utxo_ref() == utxo)?;
        self.remove_input(index)
    }

    /// Attach a signature to the input at `index`
    pub fn add_signature(&mut self, signature: Signature, index: usize) -> Result<(), TxError> {
        let len = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(TxError::InputIndexOutOfRange { index, len })?;
        input.signature = Some(signature);
        self.hash = None;
        Ok(())
    }

    /// Bytes the owner of input `index` must sign.
    ///
    /// Layout: the input's outpoint (hash, index LE), then every output
    /// (value LE, address). Signatures are never part of the payload.
    pub fn signing_payload(&self, index: usize) -> Result<Vec<u8>, TxError> {
        let input = self.inputs.get(index).ok_or(TxError::InputIndexOutOfRange {
            index,
            len: self.inputs.len(),
        })?;

        let mut bytes = Vec::with_capacity(36 + self.outputs.len() * 40);
        input.write_outpoint(&mut bytes);
        self.write_outputs(&mut bytes);
        Ok(bytes)
    }

    /// Canonical raw layout that the content hash is computed over
    pub fn raw_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for input in &self.inputs {
            input.write_outpoint(&mut bytes);
            if let Some(signature) = &input.signature {
                bytes.extend_from_slice(signature.as_bytes());
            }
        }
        self.write_outputs(&mut bytes);
        bytes
    }

    fn write_outputs(&self, bytes: &mut Vec<u8>) {
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            bytes.extend_from_slice(output.address.as_bytes());
        }
    }

    /// Compute and store the content hash
    pub fn finalize(&mut self) -> TxHash {
        let hash = TxHash::digest(&self.raw_bytes());
        self.hash = Some(hash);
        hash
    }

    /// Whether a hash is present and matches the current content
    pub fn is_finalized(&self) -> bool {
        self.hash
            .is_some_and(|hash| hash == TxHash::digest(&self.raw_bytes()))
    }

    /// The content hash, if the transaction has been finalized
    pub fn try_hash(&self) -> Option<&TxHash> {
        self.hash.as_ref()
    }

    /// The content hash.
    ///
    /// # Panics
    ///
    /// Panics if the transaction was never finalized.
    pub fn hash(&self) -> &TxHash {
        self.hash
            .as_ref()
            .expect("transaction used before finalize()")
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn input(&self, index: usize) -> Option<&Input> {
        self.inputs.get(index)
    }

    pub fn output(&self, index: usize) -> Option<&Output> {
        self.outputs.get(index)
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Sum of declared output values
    pub fn total_output_value(&self) -> i128 {
        self.outputs.iter().map(|o| i128::from(o.value)).sum()
    }
}
