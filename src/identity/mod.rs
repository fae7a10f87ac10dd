// Identity module - Ed25519 keys and signature verification

mod keypair;
mod signer;

pub use keypair::*;
pub use signer::*;
