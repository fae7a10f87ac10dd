//! UTXO settlement core.
//!
//! Validates candidate transactions against a pool of unspent outputs and
//! commits a mutually consistent, non-double-spending subset of them,
//! either in first-admissible order or by greedily maximizing fees.

pub mod handler;
pub mod identity;
pub mod ledger;
pub mod tx;
