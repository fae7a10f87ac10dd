// UtxoPool - the set of outputs that may still be spent

use crate::ledger::UtxoRef;
use crate::tx::Output;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from spendable output reference to the output it denotes.
///
/// Every key present is value that no committed transaction has claimed yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoPool {
    utxos: HashMap<UtxoRef, Output>,
}

impl UtxoPool {
    /// Create a new empty pool
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    /// Add an output, returning the one previously stored under `utxo`
    pub fn add_utxo(&mut self, utxo: UtxoRef, output: Output) -> Option<Output> {
        self.utxos.insert(utxo, output)
    }

    /// Remove an output by reference
    pub fn remove_utxo(&mut self, utxo: &UtxoRef) -> Option<Output> {
        self.utxos.remove(utxo)
    }

    /// Look up the output behind a reference
    pub fn get_tx_output(&self, utxo: &UtxoRef) -> Option<&Output> {
        self.utxos.get(utxo)
    }

    /// Check if a reference is currently spendable
    pub fn contains(&self, utxo: &UtxoRef) -> bool {
        self.utxos.contains_key(utxo)
    }

    /// All references in the pool, sorted for reproducible iteration
    pub fn all_utxos(&self) -> Vec<UtxoRef> {
        let mut refs: Vec<UtxoRef> = self.utxos.keys().copied().collect();
        refs.sort();
        refs
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// Sum of the values of every spendable output
    pub fn total_value(&self) -> i128 {
        self.utxos.values().map(|o| i128::from(o.value())).sum()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&UtxoRef, &Output)> {
        self.utxos.iter()
    }
}

impl FromIterator<(UtxoRef, Output)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (UtxoRef, Output)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}
