use crate::tx::Transaction;
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode transaction: {0}")]
    EncodeError(String),

    #[error("Failed to decode transaction: {0}")]
    DecodeError(String),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid base64 string: {0}")]
    InvalidBase64(String),

    #[error("Hash mismatch: carried hash does not match transaction content")]
    HashMismatch,
}

/// Codec for exchanging transactions with collaborators.
///
/// This is a transport encoding only; the content hash is always computed
/// over [`Transaction::raw_bytes`]. A decoded transaction that carries a hash
/// must carry the hash of its own content.
pub struct TxCodec;

impl TxCodec {
    /// Encode a transaction to compact binary bytes (postcard)
    pub fn encode(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
        postcard::to_allocvec(tx).map_err(|e| CodecError::EncodeError(e.to_string()))
    }

    /// Decode a transaction from binary bytes
    pub fn decode(bytes: &[u8]) -> Result<Transaction, CodecError> {
        let tx = postcard::from_bytes(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))?;
        Self::check_hash(&tx)?;
        Ok(tx)
    }

    /// Encode a whole batch of candidates
    pub fn encode_batch(txs: &[Transaction]) -> Result<Vec<u8>, CodecError> {
        postcard::to_allocvec(txs).map_err(|e| CodecError::EncodeError(e.to_string()))
    }

    /// Decode a batch of candidates, preserving order
    pub fn decode_batch(bytes: &[u8]) -> Result<Vec<Transaction>, CodecError> {
        let txs: Vec<Transaction> =
            postcard::from_bytes(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))?;
        txs.iter().try_for_each(Self::check_hash)?;
        Ok(txs)
    }

    // Unfinalized transactions pass; a carried hash must match the content
    fn check_hash(tx: &Transaction) -> Result<(), CodecError> {
        match tx.try_hash() {
            Some(_) if !tx.is_finalized() => Err(CodecError::HashMismatch),
            _ => Ok(()),
        }
    }

    /// Encode to hex string
    pub fn encode_hex(tx: &Transaction) -> Result<String, CodecError> {
        Ok(hex::encode(Self::encode(tx)?))
    }

    /// Decode from hex string
    pub fn decode_hex(hex_str: &str) -> Result<Transaction, CodecError> {
        let bytes = hex::decode(hex_str).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::decode(&bytes)
    }

    /// Encode to base64 string (URL-safe, no padding)
    pub fn encode_base64(tx: &Transaction) -> Result<String, CodecError> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        Ok(URL_SAFE_NO_PAD.encode(Self::encode(tx)?))
    }

    /// Decode from base64 string
    pub fn decode_base64(b64_str: &str) -> Result<Transaction, CodecError> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let bytes = URL_SAFE_NO_PAD
            .decode(b64_str)
            .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
        Self::decode(&bytes)
    }
}
