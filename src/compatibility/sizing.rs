//! Tank size, group size and bioload ceiling checks

use super::EvaluationContext;
use crate::data::Severity;
use crate::report::{Issue, IssueCategory};

/// Critical for every fish item whose species needs a bigger tank
pub fn check_tank_size(ctx: &EvaluationContext) -> Vec<Issue> {
    let volume = ctx.config.volume_liters;

    ctx.stock
        .fish
        .iter()
        .filter(|f| f.organism.min_tank_size_liters > volume)
        .map(|f| {
            let org = f.organism;
            let deficit = org.min_tank_size_liters - volume;
            Issue::new(
                Severity::Critical,
                IssueCategory::TankSize,
                format!(
                    "{} needs at least {:.0}L but this tank holds {:.0}L ({:.0}L short)",
                    org.name, org.min_tank_size_liters, volume, deficit
                ),
            )
            .with_remediation(format!(
                "Use a tank of at least {:.0}L or remove {}",
                org.min_tank_size_liters, org.name
            ))
            .for_organism(org.id.clone())
        })
        .collect()
}

/// Warning for every fish item kept below its species' minimum group size
pub fn check_group_size(ctx: &EvaluationContext) -> Vec<Issue> {
    ctx.stock
        .fish
        .iter()
        .filter(|f| f.organism.min_group_size > 1 && f.count() < f.organism.min_group_size)
        .map(|f| {
            let org = f.organism;
            let deficit = org.min_group_size - f.count();
            Issue::new(
                Severity::Warning,
                IssueCategory::GroupSize,
                format!(
                    "{} should be kept in groups of at least {}; only {} planned ({} short)",
                    org.name,
                    org.min_group_size,
                    f.count(),
                    deficit
                ),
            )
            .with_remediation(format!("Add {} more {}", deficit, org.name))
            .for_organism(org.id.clone())
        })
        .collect()
}

/// Critical once bioload passes volume × ceiling factor
pub fn check_bioload_ceiling(ctx: &EvaluationContext) -> Vec<Issue> {
    let limit = ctx.config.volume_liters * ctx.params.bioload_ceiling_factor;

    if ctx.bioload > limit {
        vec![Issue::new(
            Severity::Critical,
            IssueCategory::Bioload,
            format!(
                "Bioload of {:.1} exceeds this tank's limit of {:.1}",
                ctx.bioload, limit
            ),
        )
        .with_remediation("Remove fish or move to a larger tank")]
    } else {
        Vec::new()
    }
}
