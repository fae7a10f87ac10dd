use crate::ledger::UtxoPool;
use crate::tx::Transaction;

/// Advisory fee computation used to rank admissible candidates.
///
/// Never decides admissibility: inputs missing from the pool count as zero
/// instead of failing.
pub struct FeeEvaluator;

impl FeeEvaluator {
    /// Value of the inputs that currently resolve against `pool`
    pub fn input_value(tx: &Transaction, pool: &UtxoPool) -> i128 {
        tx.inputs()
            .iter()
            .filter_map(|input| pool.get_tx_output(&input.utxo_ref()))
            .map(|output| i128::from(output.value()))
            .sum()
    }

    /// Resolved input value minus declared output value
    pub fn fee(tx: &Transaction, pool: &UtxoPool) -> i128 {
        Self::input_value(tx, pool) - tx.total_output_value()
    }
}
