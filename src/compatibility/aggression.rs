//! Aggression mixing check
//!
//! Territorial or aggressive species only become a problem next to peaceful
//! tankmates. When both kinds are present, each aggressive species gets its own
//! warning so the keeper can act on them one at a time.

use rustc_hash::FxHashSet;

use super::EvaluationContext;
use crate::data::Severity;
use crate::report::{Issue, IssueCategory};

pub fn check_aggression(ctx: &EvaluationContext) -> Vec<Issue> {
    let fish = &ctx.stock.fish;

    let any_peaceful = fish.iter().any(|f| !f.organism.is_aggressive());
    if !any_peaceful {
        return Vec::new();
    }

    // One warning per species, even if it is split across items
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    fish.iter()
        .filter(|f| f.organism.is_aggressive())
        .filter(|f| seen.insert(f.organism.id.as_str()))
        .map(|f| {
            let org = f.organism;
            Issue::new(
                Severity::Warning,
                IssueCategory::Aggression,
                format!(
                    "{} is territorial or aggressive and may harass peaceful tankmates",
                    org.name
                ),
            )
            .with_remediation(format!(
                "Add hiding spots and line-of-sight breaks, or keep {} with similarly robust species",
                org.name
            ))
            .for_organism(org.id.clone())
        })
        .collect()
}
