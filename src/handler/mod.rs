// Handler module - transaction admission and batch settlement

mod config;
mod fee;
mod processor;
mod validator;

pub use config::{HandlerConfig, SelectionPolicy};
pub use fee::FeeEvaluator;
pub use processor::{BatchReport, Rejected, TxHandler};
pub use validator::{TxValidator, ValidationError};
