//! Habitat suggestions: plants, cover, substrate

use super::{join_names, SuggestionContext};
use crate::data::{tags, OrganismRecord, Substrate};
use crate::report::{Priority, Suggestion, SuggestionCategory};

/// Fish but no live plants
pub fn planting(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if !ctx.stock.has_fish() || ctx.stock.has_plants() {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Plants,
        Priority::Medium,
        "Add Live Plants",
        "Start with a few hardy plants such as java fern, anubias or vallisneria",
        "Plants take up nitrate between water changes and give fish cover",
    )]
}

/// Fish but nothing to hide behind
pub fn hiding_spots(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if !ctx.stock.has_fish() || ctx.stock.has_hardscape() {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Hardscape,
        Priority::Low,
        "Add Hiding Spots",
        "Place rocks, driftwood or caves so every fish can get out of sight",
        "Fish without cover stay stressed, which weakens their immune response",
    )]
}

fn has_barbels(org: &OrganismRecord, ctx: &SuggestionContext) -> bool {
    org.has_tag(tags::BARBELS)
        || org
            .family
            .as_deref()
            .is_some_and(|family| ctx.params.is_barbel_family(family))
}

/// Gravel under fish that sift the bottom with barbels
pub fn substrate_mismatch(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if ctx.config.substrate != Substrate::Gravel {
        return Vec::new();
    }

    let mut sifters: Vec<&str> = Vec::new();
    for fish in &ctx.stock.fish {
        let org = fish.organism;
        if has_barbels(org, ctx) && !sifters.contains(&org.name.as_str()) {
            sifters.push(&org.name);
        }
    }

    if sifters.is_empty() {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Substrate,
        Priority::High,
        "Switch to Sand",
        "Replace the gravel with fine sand, at least where the bottom dwellers feed",
        format!(
            "{} dig with sensitive barbels that sharp gravel wears down",
            join_names(sifters)
        ),
    )]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::data::{HardscapeRecord, InMemoryCatalog, Material};
    use crate::tank::{TankConfiguration, TankItem};

    fn habitat_catalog() -> InMemoryCatalog {
        let mut cory = fish("panda-cory");
        cory.family = Some("Callichthyidae".to_string());
        let whiptail = with_tags(fish("whiptail"), &["Barbels"]);
        InMemoryCatalog::new(
            vec![fish("guppy"), cory, whiptail, plant("java-fern")],
            vec![HardscapeRecord {
                id: "seiryu".to_string(),
                name: "Seiryu stone".to_string(),
                size_cm: 15.0,
                material: Material::Rock,
            }],
        )
    }

    #[test]
    fn test_planting_and_hiding_spots_for_bare_tank() {
        let catalog = habitat_catalog();
        let config = TankConfiguration::with_volume(60.0);
        let items = [TankItem::fish("guppy", 5)];

        let plants = run(planting, &items, &catalog, &config);
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].priority, Priority::Medium);
        assert_eq!(plants[0].category, SuggestionCategory::Plants);

        let cover = run(hiding_spots, &items, &catalog, &config);
        assert_eq!(cover.len(), 1);
        assert_eq!(cover[0].priority, Priority::Low);
    }

    #[test]
    fn test_furnished_tank_needs_nothing() {
        let catalog = habitat_catalog();
        let config = TankConfiguration::with_volume(60.0);
        let items = [
            TankItem::fish("guppy", 5),
            TankItem::plant("java-fern"),
            TankItem::hardscape("seiryu"),
        ];

        assert!(run(planting, &items, &catalog, &config).is_empty());
        assert!(run(hiding_spots, &items, &catalog, &config).is_empty());
    }

    #[test]
    fn test_no_habitat_nudges_without_fish() {
        let catalog = habitat_catalog();
        let config = TankConfiguration::with_volume(60.0);

        assert!(run(planting, &[], &catalog, &config).is_empty());
        assert!(run(hiding_spots, &[], &catalog, &config).is_empty());
    }

    #[test]
    fn test_gravel_with_barbel_fish() {
        let catalog = habitat_catalog();
        let mut config = TankConfiguration::with_volume(60.0);
        config.substrate = Substrate::Gravel;

        // Matched by family
        let by_family = run(substrate_mismatch, &[TankItem::fish("panda-cory", 6)], &catalog, &config);
        assert_eq!(by_family.len(), 1);
        assert_eq!(by_family[0].priority, Priority::High);
        assert!(by_family[0].rationale.starts_with("panda cory"));

        // Matched by tag, case-insensitive; both named once
        let items = [
            TankItem::fish("panda-cory", 3),
            TankItem::fish("whiptail", 1),
            TankItem::fish("panda-cory", 3),
        ];
        let both = run(substrate_mismatch, &items, &catalog, &config);
        assert_eq!(both.len(), 1);
        assert!(both[0].rationale.starts_with("panda cory, whiptail dig"));

        assert!(run(substrate_mismatch, &[TankItem::fish("guppy", 5)], &catalog, &config).is_empty());
    }

    #[test]
    fn test_sand_is_fine_for_barbel_fish() {
        let catalog = habitat_catalog();
        let mut config = TankConfiguration::with_volume(60.0);
        config.substrate = Substrate::Sand;

        assert!(run(substrate_mismatch, &[TankItem::fish("panda-cory", 6)], &catalog, &config).is_empty());
    }
}
