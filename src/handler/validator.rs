use crate::identity::Signer;
use crate::ledger::{UtxoPool, UtxoRef};
use crate::tx::{Transaction, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Why a transaction is not admissible against the current pool.
///
/// Callers that only need admissibility use [`TxValidator::is_valid`]; the
/// reason is kept for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing input: {utxo} claimed by input {index} is not spendable")]
    MissingInput { index: usize, utxo: UtxoRef },

    #[error("Invalid signature on input {index}")]
    InvalidSignature { index: usize },

    #[error("Duplicate input: {utxo} claimed again by input {index}")]
    DuplicateInput { index: usize, utxo: UtxoRef },

    #[error("Negative output: output {index} declares value {value}")]
    NegativeOutput { index: usize, value: Value },

    #[error("Value deficit: inputs total {inputs}, outputs total {outputs}")]
    ValueDeficit { inputs: i128, outputs: i128 },
}

/// Stateless admission check of a single transaction
pub struct TxValidator;

impl TxValidator {
    /// Validate `tx` against `pool`
    ///
    /// This performs, failing on the first violation:
    /// - per input, in order: the claimed output exists in `pool`, the
    ///   signature verifies against that output's address over the input's
    ///   signing payload, and the output was not already claimed by an
    ///   earlier input of the same transaction
    /// - every output value is non-negative
    /// - claimed input value covers declared output value
    pub fn validate(tx: &Transaction, pool: &UtxoPool) -> Result<(), ValidationError> {
        let mut claimed: HashSet<UtxoRef> = HashSet::with_capacity(tx.num_inputs());
        let mut input_total: i128 = 0;

        for (index, input) in tx.inputs().iter().enumerate() {
            let utxo = input.utxo_ref();

            let prev_output = pool
                .get_tx_output(&utxo)
                .ok_or(ValidationError::MissingInput { index, utxo })?;

            let signature = input
                .signature()
                .ok_or(ValidationError::InvalidSignature { index })?;
            let payload = tx
                .signing_payload(index)
                .map_err(|_| ValidationError::InvalidSignature { index })?;
            if !Signer::verify(prev_output.address(), &payload, signature) {
                return Err(ValidationError::InvalidSignature { index });
            }

            if !claimed.insert(utxo) {
                return Err(ValidationError::DuplicateInput { index, utxo });
            }

            input_total += i128::from(prev_output.value());
        }

        let mut output_total: i128 = 0;
        for (index, output) in tx.outputs().iter().enumerate() {
            if output.value() < 0 {
                return Err(ValidationError::NegativeOutput {
                    index,
                    value: output.value(),
                });
            }
            output_total += i128::from(output.value());
        }

        if input_total < output_total {
            return Err(ValidationError::ValueDeficit {
                inputs: input_total,
                outputs: output_total,
            });
        }

        Ok(())
    }

    /// Whether `tx` is admissible against `pool`
    pub fn is_valid(tx: &Transaction, pool: &UtxoPool) -> bool {
        Self::validate(tx, pool).is_ok()
    }
}
