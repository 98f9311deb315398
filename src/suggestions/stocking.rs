//! Stocking suggestions: overstocking, school sizes, cleanup crew, centerpiece

use super::{join_names, SuggestionContext};
use crate::data::{tags, OrganismKind, OrganismRecord};
use crate::report::{Priority, Suggestion, SuggestionCategory};
use crate::utils::intersect_ranges;

/// Stocking above 100% of capacity
pub fn overstocking(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if ctx.stocking_percentage <= 100 {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Stocking,
        Priority::High,
        "Reduce Stocking",
        format!(
            "The tank is at {}% of capacity; remove some fish or move to a larger tank",
            ctx.stocking_percentage
        ),
        format!(
            "A bioload of {:.1} is more than {:.0}L of water can dilute between water changes",
            ctx.bioload, ctx.config.volume_liters
        ),
    )]
}

/// Action item for every group kept below its minimum size
pub fn schooling_deficits(ctx: &SuggestionContext) -> Vec<Suggestion> {
    ctx.stock
        .fish
        .iter()
        .filter(|f| f.organism.min_group_size > 1 && f.count() < f.organism.min_group_size)
        .map(|f| {
            let org = f.organism;
            let missing = org.min_group_size - f.count();
            Suggestion::new(
                SuggestionCategory::Stocking,
                Priority::High,
                format!("Grow the {} group", org.name),
                format!(
                    "Add {} more {} to reach a group of {}",
                    missing, org.name, org.min_group_size
                ),
                format!(
                    "{} is a social species; undersized groups become stressed and hide",
                    org.name
                ),
            )
            .for_organism(org.id.clone())
        })
        .collect()
}

/// Propose a bottom dweller when no fish works the substrate
pub fn cleanup_crew(ctx: &SuggestionContext) -> Vec<Suggestion> {
    let stock = ctx.stock;
    if !stock.has_fish() || stock.fish.iter().any(|f| f.organism.has_tag(tags::BOTTOM_DWELLER)) {
        return Vec::new();
    }

    let candidates: Vec<&OrganismRecord> = ctx
        .catalog
        .find_organisms_by_tag(tags::BOTTOM_DWELLER)
        .into_iter()
        .filter(|o| o.kind == OrganismKind::Fish)
        .filter(|o| o.min_tank_size_liters <= ctx.config.volume_liters)
        .filter(|o| shares_water(ctx, o))
        .take(ctx.params.cleanup_crew_candidates)
        .collect();

    let Some((first, alternatives)) = candidates.split_first() else {
        tracing::debug!(
            "No bottom-dweller fits a {:.0}L tank; skipping cleanup crew suggestion",
            ctx.config.volume_liters
        );
        return Vec::new();
    };

    let mut rationale =
        "Bottom dwellers eat leftover food that would otherwise rot on the substrate".to_string();
    if !alternatives.is_empty() {
        rationale.push_str(&format!(
            ". Other options: {}",
            join_names(alternatives.iter().map(|o| o.name.as_str()))
        ));
    }

    let group = first.min_group_size.max(1);
    vec![Suggestion::new(
        SuggestionCategory::CleanupCrew,
        Priority::Medium,
        "Add a Cleanup Crew",
        if group > 1 {
            format!("Consider a group of {} {}", group, first.name)
        } else {
            format!("Consider adding {}", first.name)
        },
        rationale,
    )
    .for_organism(first.id.clone())]
}

/// Candidate keeps a common temperature and pH window with the stocked fish
fn shares_water(ctx: &SuggestionContext, candidate: &OrganismRecord) -> bool {
    let fish = &ctx.stock.fish;

    let temperature = intersect_ranges(
        fish.iter()
            .map(|f| f.organism.temperature_c)
            .chain(std::iter::once(candidate.temperature_c)),
    );
    let ph = intersect_ranges(
        fish.iter()
            .map(|f| f.organism.ph)
            .chain(std::iter::once(candidate.ph)),
    );

    !temperature.is_some_and(|o| o.is_disjoint()) && !ph.is_some_and(|o| o.is_disjoint())
}

/// Community of small fish in a tank big enough for a showpiece
pub fn centerpiece(ctx: &SuggestionContext) -> Vec<Suggestion> {
    let fish = &ctx.stock.fish;
    let params = ctx.params;

    if fish.len() < 2 || ctx.config.volume_liters < params.centerpiece_min_volume_liters {
        return Vec::new();
    }
    if fish
        .iter()
        .any(|f| f.organism.adult_size_cm > params.centerpiece_max_adult_size_cm)
    {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Centerpiece,
        Priority::Low,
        "Consider a Centerpiece Fish",
        format!(
            "A single larger, peaceful fish (such as a gourami) can anchor a {:.0}L community",
            ctx.config.volume_liters
        ),
        format!(
            "Every fish planned is {:.0}cm or smaller",
            params.centerpiece_max_adult_size_cm
        ),
    )]
}
