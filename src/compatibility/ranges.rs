//! Temperature and pH overlap checks
//!
//! Both only run with two or more fish items. pH has no narrow-range warning.

use super::EvaluationContext;
use crate::data::Severity;
use crate::report::{Issue, IssueCategory};
use crate::utils::{intersect_ranges, RangeOverlap};

/// Critical if no common temperature window, warning if it is narrow
pub fn check_temperature(ctx: &EvaluationContext) -> Vec<Issue> {
    if ctx.stock.fish.len() < 2 {
        return Vec::new();
    }

    let overlap = intersect_ranges(ctx.stock.fish.iter().map(|f| f.organism.temperature_c));

    match overlap {
        Some(RangeOverlap::Disjoint { low, high }) => vec![Issue::new(
            Severity::Critical,
            IssueCategory::Temperature,
            format!(
                "No common temperature range: one species needs at least {:.1}°C while another tolerates at most {:.1}°C",
                low, high
            ),
        )
        .with_remediation("Choose species whose temperature ranges overlap")],

        Some(RangeOverlap::Common { low, high, width })
            if width < ctx.params.narrow_temperature_margin =>
        {
            vec![Issue::new(
                Severity::Warning,
                IssueCategory::Temperature,
                format!(
                    "Narrow temperature range: only {:.1}-{:.1}°C suits every species",
                    low, high
                ),
            )
            .with_remediation("Use a thermostat-controlled heater and monitor temperature closely")]
        }

        _ => Vec::new(),
    }
}

/// Critical if no common pH window
pub fn check_ph(ctx: &EvaluationContext) -> Vec<Issue> {
    if ctx.stock.fish.len() < 2 {
        return Vec::new();
    }

    match intersect_ranges(ctx.stock.fish.iter().map(|f| f.organism.ph)) {
        Some(RangeOverlap::Disjoint { low, high }) => vec![Issue::new(
            Severity::Critical,
            IssueCategory::Ph,
            format!(
                "No common pH range: one species needs at least pH {:.1} while another tolerates at most pH {:.1}",
                low, high
            ),
        )
        .with_remediation("Choose species whose pH ranges overlap")],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::tank::{Stock, TankConfiguration, TankItem};
    use crate::utils::EngineParams;

    fn run(check: fn(&EvaluationContext) -> Vec<Issue>, items: &[TankItem], catalog: &crate::data::InMemoryCatalog) -> Vec<Issue> {
        let stock = Stock::resolve(items, catalog);
        let config = TankConfiguration::with_volume(100.0);
        let params = EngineParams::default();
        check(&EvaluationContext::new(&stock, &config, &params))
    }

    #[test]
    fn test_no_common_temperature() {
        let catalog = catalog(vec![
            with_temp(fish("a"), 22.0, 26.0),
            with_temp(fish("b"), 27.0, 30.0),
        ]);
        let items = vec![TankItem::fish("a", 1), TankItem::fish("b", 1)];

        let issues = run(check_temperature, &items, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert!(issues[0].message.contains("No common temperature range"));
        assert!(issues[0].message.contains("27.0"));
        assert!(issues[0].message.contains("26.0"));
    }

    #[test]
    fn test_narrow_temperature() {
        let catalog = catalog(vec![
            with_temp(fish("a"), 22.0, 25.0),
            with_temp(fish("b"), 24.0, 30.0),
        ]);
        let items = vec![TankItem::fish("a", 1), TankItem::fish("b", 1)];

        let issues = run(check_temperature, &items, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("Narrow temperature range"));
    }

    #[test]
    fn test_two_degree_overlap_is_fine() {
        let catalog = catalog(vec![
            with_temp(fish("a"), 22.0, 26.0),
            with_temp(fish("b"), 24.0, 30.0),
        ]);
        let items = vec![TankItem::fish("a", 1), TankItem::fish("b", 1)];

        assert!(run(check_temperature, &items, &catalog).is_empty());
    }

    #[test]
    fn test_single_fish_item_skipped() {
        let catalog = catalog(vec![with_temp(fish("a"), 30.0, 20.0)]);
        let items = vec![TankItem::fish("a", 12)];

        assert!(run(check_temperature, &items, &catalog).is_empty());
        assert!(run(check_ph, &items, &catalog).is_empty());
    }

    #[test]
    fn test_ph_disjoint_only() {
        let catalog = catalog(vec![
            with_ph(fish("soft"), 5.0, 6.5),
            with_ph(fish("hard"), 7.8, 8.6),
            with_ph(fish("tight"), 6.4, 6.5),
        ]);

        let disjoint = vec![TankItem::fish("soft", 1), TankItem::fish("hard", 1)];
        let issues = run(check_ph, &disjoint, &catalog);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("No common pH range"));

        // Narrow pH overlap produces nothing
        let narrow = vec![TankItem::fish("soft", 1), TankItem::fish("tight", 1)];
        assert!(run(check_ph, &narrow, &catalog).is_empty());
    }

    #[test]
    fn test_permutation_invariant() {
        let catalog = catalog(vec![
            with_ph(with_temp(fish("a"), 20.0, 24.0), 6.0, 7.0),
            with_ph(with_temp(fish("b"), 23.0, 28.0), 6.5, 7.5),
            with_ph(with_temp(fish("c"), 21.0, 27.0), 7.2, 8.0),
        ]);
        let forward = vec![TankItem::fish("a", 1), TankItem::fish("b", 1), TankItem::fish("c", 1)];
        let reversed: Vec<TankItem> = forward.iter().rev().cloned().collect();

        assert_eq!(
            run(check_temperature, &forward, &catalog),
            run(check_temperature, &reversed, &catalog)
        );
        assert_eq!(run(check_ph, &forward, &catalog), run(check_ph, &reversed, &catalog));
    }
}
