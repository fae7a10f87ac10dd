// Transaction module - inputs, outputs, signing payloads and encoding

mod builder;
mod codec;
mod model;

pub use builder::*;
pub use codec::*;
pub use model::*;
