//! Error types
//!
//! Evaluation itself never fails. `RuleError` describes a catalog rule that
//! cannot be evaluated; the evaluator logs it and skips that one rule.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("rule on '{organism_id}' has an empty reason")]
    EmptyReason { organism_id: String },

    #[error("rule on '{organism_id}' has an empty target")]
    EmptyTarget { organism_id: String },

    #[error("rule on '{organism_id}' requires a group size of zero")]
    ZeroGroupSize { organism_id: String },

    #[error("rule on '{organism_id}' has a non-finite tank length: {length}")]
    InvalidLength { organism_id: String, length: f64 },
}
