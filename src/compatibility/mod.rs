//! Compatibility Evaluator
//!
//! Runs a fixed, ordered table of independent checks over the resolved stock.
//! Each check is a pure `fn(&EvaluationContext) -> Vec<Issue>` and can be unit
//! tested on its own; `evaluate` simply concatenates their output.
//!
//! Output order is check order, never severity. Ranking is the suggestion
//! engine's job.
//!
//! ## Checks (in order)
//! 1. Temperature overlap       - `ranges::check_temperature`
//! 2. pH overlap                - `ranges::check_ph`
//! 3. Minimum tank size         - `sizing::check_tank_size`
//! 4. Minimum group size        - `sizing::check_group_size`
//! 5. Bioload ceiling           - `sizing::check_bioload_ceiling`
//! 6. Aggression mixing         - `aggression::check_aggression`
//! 7. Declarative pairwise rules - `rules::check_rules`

pub mod ranges;
pub mod sizing;
pub mod aggression;
pub mod rules;

pub use aggression::check_aggression;
pub use ranges::{check_ph, check_temperature};
pub use rules::{check_rules, validate_rule};
pub use sizing::{check_bioload_ceiling, check_group_size, check_tank_size};

use crate::metrics::compute_bioload;
use crate::report::Issue;
use crate::tank::{Stock, TankConfiguration};
use crate::utils::EngineParams;

/// Everything a check may look at
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub stock: &'a Stock<'a>,
    pub config: &'a TankConfiguration,
    pub params: &'a EngineParams,
    /// Precomputed so checks never recompute it
    pub bioload: f64,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(stock: &'a Stock<'a>, config: &'a TankConfiguration, params: &'a EngineParams) -> Self {
        Self {
            stock,
            config,
            params,
            bioload: compute_bioload(stock),
        }
    }
}

/// A single compatibility check
pub type Check = fn(&EvaluationContext) -> Vec<Issue>;

/// All checks, in output order
pub const CHECKS: &[(&str, Check)] = &[
    ("temperature", check_temperature),
    ("ph", check_ph),
    ("tank_size", check_tank_size),
    ("group_size", check_group_size),
    ("bioload_ceiling", check_bioload_ceiling),
    ("aggression", check_aggression),
    ("rules", check_rules),
];

/// Run every check and concatenate the issues
pub fn evaluate(stock: &Stock, config: &TankConfiguration, params: &EngineParams) -> Vec<Issue> {
    let ctx = EvaluationContext::new(stock, config, params);
    evaluate_with_context(&ctx)
}

pub fn evaluate_with_context(ctx: &EvaluationContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (name, check) in CHECKS {
        let found = check(ctx);
        if !found.is_empty() {
            tracing::debug!("Check '{}' produced {} issue(s)", name, found.len());
        }
        issues.extend(found);
    }

    issues
}
