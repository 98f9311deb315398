//! Equipment gaps: missing filter or heater

use super::{join_names, SuggestionContext};
use crate::metrics::minimum_filter_rate;
use crate::report::{Priority, Suggestion, SuggestionCategory};

/// Any fish and no filter
pub fn filter_gap(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if ctx.config.has_filter || !ctx.stock.has_fish() {
        return Vec::new();
    }

    let minimum = minimum_filter_rate(ctx.config.volume_liters, ctx.params);

    vec![Suggestion::new(
        SuggestionCategory::Equipment,
        Priority::High,
        "Filter Required",
        format!(
            "Add a filter rated for at least {:.0} L/h ({:.0} L/h recommended for this stocking level)",
            minimum, ctx.equipment.filter_rate_l_per_hour
        ),
        "Fish waste turns into ammonia within days; a filter houses the bacteria that break it down",
    )]
}

/// No heater while some fish need water warmer than the room
pub fn heater_gap(ctx: &SuggestionContext) -> Vec<Suggestion> {
    if ctx.config.has_heater {
        return Vec::new();
    }

    let ambient = ctx.params.ambient_temperature_c;
    let mut warm_water: Vec<&str> = Vec::new();
    for fish in &ctx.stock.fish {
        let org = fish.organism;
        if org.temperature_c.min > ambient && !warm_water.contains(&org.name.as_str()) {
            warm_water.push(&org.name);
        }
    }

    if warm_water.is_empty() {
        return Vec::new();
    }

    vec![Suggestion::new(
        SuggestionCategory::Equipment,
        Priority::High,
        "Heater Required",
        format!("Add a {}W heater", ctx.equipment.heater_watts),
        format!(
            "{} need water warmer than {:.0}°C room temperature",
            join_names(warm_water),
            ambient
        ),
    )]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::tank::{TankConfiguration, TankItem};

    #[test]
    fn test_filter_required_quotes_minimum_rate() {
        let catalog = catalog(vec![fish("guppy")]);
        let config = TankConfiguration::with_volume(54.3);

        let suggestions = run(filter_gap, &[TankItem::fish("guppy", 4)], &catalog, &config);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(suggestions[0].title, "Filter Required");
        assert!(suggestions[0].description.contains("at least 218 L/h"));
    }

    #[test]
    fn test_no_filter_suggestion_without_fish_or_with_filter() {
        let catalog = catalog(vec![fish("guppy"), plant("vallisneria")]);

        let plants_only = run(filter_gap, &[TankItem::plant("vallisneria")], &catalog, &TankConfiguration::with_volume(60.0));
        assert!(plants_only.is_empty());

        let equipped = TankConfiguration::with_volume(60.0).fully_equipped();
        assert!(run(filter_gap, &[TankItem::fish("guppy", 4)], &catalog, &equipped).is_empty());
    }

    #[test]
    fn test_heater_only_for_warm_water_species() {
        let catalog = catalog(vec![
            with_temp(fish("white-cloud"), 14.0, 22.0),
            with_temp(fish("ram"), 26.0, 30.0),
        ]);
        let config = TankConfiguration::with_volume(110.0);

        assert!(run(heater_gap, &[TankItem::fish("white-cloud", 6)], &catalog, &config).is_empty());

        let suggestions = run(
            heater_gap,
            &[TankItem::fish("white-cloud", 6), TankItem::fish("ram", 2)],
            &catalog,
            &config,
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].description, "Add a 150W heater");
        assert!(suggestions[0].rationale.contains("ram"));
        assert!(!suggestions[0].rationale.contains("white cloud"));
    }

    #[test]
    fn test_heater_not_suggested_when_fitted() {
        let catalog = catalog(vec![with_temp(fish("ram"), 26.0, 30.0)]);
        let config = TankConfiguration::with_volume(110.0).fully_equipped();

        assert!(run(heater_gap, &[TankItem::fish("ram", 2)], &catalog, &config).is_empty());
    }
}
