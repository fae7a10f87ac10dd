// Ledger module - the pool of spendable outputs

mod pool;
mod utxo;

pub use pool::UtxoPool;
pub use utxo::UtxoRef;
