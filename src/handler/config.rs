use serde::{Deserialize, Serialize};
use std::fmt;

/// How the handler picks the next transaction to commit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Commit every admissible candidate as soon as a pass reaches it
    #[default]
    FirstAdmissible,
    /// Commit the admissible candidate with the greatest positive fee, then rescan
    MaxFee,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::FirstAdmissible => write!(f, "first-admissible"),
            SelectionPolicy::MaxFee => write!(f, "max-fee"),
        }
    }
}

/// Configuration for a [`TxHandler`](crate::handler::TxHandler)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Selection policy applied by `process`
    pub policy: SelectionPolicy,
}

impl HandlerConfig {
    /// Create a new config with builder pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection policy
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
