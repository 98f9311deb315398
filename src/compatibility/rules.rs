//! Declarative Pairwise Rules
//!
//! Organisms may carry their own `CompatibilityRule`s. The rule is
//! authoritative: a firing rule becomes an issue with the rule's severity and
//! its reason verbatim.
//!
//! - `Avoid` / `Warning` fire when the target is present elsewhere in the tank:
//!   in another item, or in the declaring item itself when it holds more than
//!   one individual. That second case is what makes self-referential rules
//!   ("avoid more than one male of this species") work.
//! - `Requires` fires when its predicate over the whole tank is false.
//!
//! A target that resolves to nothing in the tank simply never fires. A rule
//! that fails validation is logged and skipped; the remaining rules still run.

use super::EvaluationContext;
use crate::data::{CompatibilityRule, OrganismRecord, Requirement, RuleTarget};
use crate::error::RuleError;
use crate::report::{Issue, IssueCategory};
use crate::tank::StockedFish;

pub fn check_rules(ctx: &EvaluationContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    for fish in &ctx.stock.fish {
        for rule in &fish.organism.rules {
            match evaluate_rule(ctx, fish, rule) {
                Ok(true) => issues.push(
                    Issue::new(rule.severity(), IssueCategory::Rule, rule.reason())
                        .for_organism(fish.organism.id.clone()),
                ),
                Ok(false) => {}
                Err(e) => tracing::warn!("Skipping malformed compatibility rule: {}", e),
            }
        }
    }

    issues
}

/// Whether `rule`, declared by `owner`, fires in this tank
pub fn evaluate_rule(
    ctx: &EvaluationContext,
    owner: &StockedFish,
    rule: &CompatibilityRule,
) -> Result<bool, RuleError> {
    validate_rule(owner.organism, rule)?;

    let fires = match rule {
        CompatibilityRule::Avoid { target, .. } | CompatibilityRule::Warning { target, .. } => {
            target_present_elsewhere(ctx, owner, target)
        }
        CompatibilityRule::Requires { condition, .. } => !requirement_met(ctx, owner, condition),
    };

    Ok(fires)
}

/// Reject rules that cannot be evaluated meaningfully
pub fn validate_rule(owner: &OrganismRecord, rule: &CompatibilityRule) -> Result<(), RuleError> {
    let organism_id = || owner.id.clone();

    if rule.reason().trim().is_empty() {
        return Err(RuleError::EmptyReason { organism_id: organism_id() });
    }

    match rule {
        CompatibilityRule::Avoid { target, .. } | CompatibilityRule::Warning { target, .. } => {
            validate_target(owner, target)
        }
        CompatibilityRule::Requires { condition, .. } => match condition {
            Requirement::MinGroupSize(0) => {
                Err(RuleError::ZeroGroupSize { organism_id: organism_id() })
            }
            Requirement::MinTankLengthCm(length) if !length.is_finite() || *length < 0.0 => {
                Err(RuleError::InvalidLength {
                    organism_id: organism_id(),
                    length: *length,
                })
            }
            Requirement::Companion(target) => validate_target(owner, target),
            _ => Ok(()),
        },
    }
}

fn validate_target(owner: &OrganismRecord, target: &RuleTarget) -> Result<(), RuleError> {
    let value = match target {
        RuleTarget::Tag(tag) => tag,
        RuleTarget::Organism(id) => id,
    };

    if value.trim().is_empty() {
        Err(RuleError::EmptyTarget { organism_id: owner.id.clone() })
    } else {
        Ok(())
    }
}

/// Target matched by another item, or by the owner's own item if it holds
/// more than one individual
fn target_present_elsewhere(ctx: &EvaluationContext, owner: &StockedFish, target: &RuleTarget) -> bool {
    let in_own_item = owner.count() > 1 && target.matches(owner.organism);

    let in_other_fish = ctx
        .stock
        .fish
        .iter()
        .any(|f| f.index != owner.index && target.matches(f.organism));

    let in_plants = ctx.stock.plants.iter().any(|p| target.matches(p.organism));

    in_own_item || in_other_fish || in_plants
}

fn requirement_met(ctx: &EvaluationContext, owner: &StockedFish, condition: &Requirement) -> bool {
    match condition {
        Requirement::MinGroupSize(min) => ctx.stock.head_count(&owner.organism.id) >= *min,
        Requirement::SecureLid => ctx.config.has_lid,
        Requirement::MinTankLengthCm(length) => ctx.config.dimensions.length_cm >= *length,
        Requirement::Planted => ctx.stock.has_plants(),
        Requirement::Substrate(substrate) => ctx.config.substrate == *substrate,
        Requirement::Companion(target) => target_present_elsewhere(ctx, owner, target),
    }
}
