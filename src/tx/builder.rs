use crate::identity::{Keypair, PublicKey, Signer};
use crate::tx::{Transaction, TxError, TxHash, Value};

struct PendingInput<'a> {
    prev_tx_hash: TxHash,
    output_index: u32,
    signer: Option<&'a Keypair>,
}

/// Builder for creating signed, finalized transactions
///
/// Signatures are produced only after every input and output is known,
/// since each input's signing payload covers the full output list.
#[derive(Default)]
pub struct TransactionBuilder<'a> {
    inputs: Vec<PendingInput<'a>>,
    outputs: Vec<(Value, PublicKey)>,
}

impl<'a> TransactionBuilder<'a> {
    /// Create a new TransactionBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Spend `output_index` of `prev_tx_hash`, signed by `signer`
    pub fn input(mut self, prev_tx_hash: TxHash, output_index: u32, signer: &'a Keypair) -> Self {
        self.inputs.push(PendingInput {
            prev_tx_hash,
            output_index,
            signer: Some(signer),
        });
        self
    }

    /// Spend an output without signing the claim
    pub fn unsigned_input(mut self, prev_tx_hash: TxHash, output_index: u32) -> Self {
        self.inputs.push(PendingInput {
            prev_tx_hash,
            output_index,
            signer: None,
        });
        self
    }

    /// Pay `value` to `address`
    pub fn output(mut self, value: Value, address: PublicKey) -> Self {
        self.outputs.push((value, address));
        self
    }

    /// Sign every input and finalize the transaction
    pub fn build(self) -> Result<Transaction, TxError> {
        let mut tx = Transaction::new();
        for pending in &self.inputs {
            tx.add_input(pending.prev_tx_hash, pending.output_index);
        }
        for (value, address) in self.outputs {
            tx.add_output(value, address);
        }

        for (index, pending) in self.inputs.iter().enumerate() {
            if let Some(signer) = pending.signer {
                let payload = tx.signing_payload(index)?;
                tx.add_signature(Signer::sign(signer, &payload), index)?;
            }
        }

        tx.finalize();
        Ok(tx)
    }
}
