//! Tank Scorer - Main coordinator for evaluating a planned tank
//!
//! Wires the catalog and engine parameters into the metric, compatibility and
//! suggestion modules. Every method resolves the item list against the catalog
//! first, so unknown references are dropped the same way everywhere.
//!
//! Includes a parallel (Rayon) batch path for scoring many scenarios at once.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compatibility::{self, EvaluationContext};
use crate::data::Catalog;
use crate::metrics::{
    bioload_breakdown, compute_bioload, compute_stocking_percentage, recommend_equipment,
    EquipmentRecommendation, StockingLevel,
};
use crate::report::{Issue, Suggestion, TankReport};
use crate::suggestions::{self, SuggestionContext};
use crate::tank::{Stock, TankConfiguration, TankItem};
use crate::utils::EngineParams;

/// One tank plan to score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub items: Vec<TankItem>,
    pub config: TankConfiguration,
}

/// Main tank scorer
///
/// Holds no mutable state; one scorer can serve any number of threads.
pub struct TankScorer<'c> {
    catalog: &'c dyn Catalog,
    params: EngineParams,
}

impl<'c> TankScorer<'c> {
    pub fn new(catalog: &'c dyn Catalog, params: EngineParams) -> Self {
        Self { catalog, params }
    }

    /// Scorer with the stock empirical constants
    pub fn with_default_params(catalog: &'c dyn Catalog) -> Self {
        Self::new(catalog, EngineParams::default())
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    fn resolve<'a>(&'a self, items: &'a [TankItem]) -> Stock<'a> {
        Stock::resolve(items, self.catalog)
    }

    /// Total bioload of the fish in `items`
    pub fn bioload(&self, items: &[TankItem]) -> f64 {
        compute_bioload(&self.resolve(items))
    }

    /// Bioload as a percentage of the tank's capacity
    pub fn stocking_percentage(&self, items: &[TankItem], config: &TankConfiguration) -> i64 {
        compute_stocking_percentage(self.bioload(items), config, &self.params)
    }

    pub fn recommend_equipment(
        &self,
        items: &[TankItem],
        config: &TankConfiguration,
    ) -> EquipmentRecommendation {
        let stock = self.resolve(items);
        recommend_equipment(config, compute_bioload(&stock), stock.has_plants(), &self.params)
    }

    /// Compatibility issues, in check order
    pub fn evaluate(&self, items: &[TankItem], config: &TankConfiguration) -> Vec<Issue> {
        compatibility::evaluate(&self.resolve(items), config, &self.params)
    }

    /// Priority-sorted suggestions
    pub fn suggest(&self, items: &[TankItem], config: &TankConfiguration) -> Vec<Suggestion> {
        suggestions::suggest(&self.resolve(items), config, &self.params, self.catalog)
    }

    /// Full report: metrics, issues and suggestions from a single resolution pass
    pub fn score(&self, items: &[TankItem], config: &TankConfiguration) -> TankReport {
        let stock = self.resolve(items);

        let suggestion_ctx = SuggestionContext::new(&stock, config, &self.params, self.catalog);
        let evaluation_ctx = EvaluationContext::new(&stock, config, &self.params);

        let issues = compatibility::evaluate_with_context(&evaluation_ctx);
        let suggestions = suggestions::suggest_with_context(&suggestion_ctx);

        tracing::debug!(
            "Scored {:.0}L tank: {} fish item(s), bioload {:.1}, {}% stocked, {} issue(s), {} suggestion(s)",
            config.volume_liters,
            stock.fish.len(),
            suggestion_ctx.bioload,
            suggestion_ctx.stocking_percentage,
            issues.len(),
            suggestions.len()
        );

        TankReport {
            volume_liters: config.volume_liters,
            bioload: suggestion_ctx.bioload,
            stocking_percentage: suggestion_ctx.stocking_percentage,
            stocking_level: StockingLevel::from_percentage(suggestion_ctx.stocking_percentage),
            bioload_breakdown: bioload_breakdown(&stock),
            equipment: suggestion_ctx.equipment.clone(),
            issues,
            suggestions,
            unresolved_items: stock.unresolved,
        }
    }

    /// Score independent scenarios in parallel; output order matches input order
    pub fn score_batch(&self, scenarios: &[Scenario]) -> Vec<TankReport> {
        tracing::info!("Scoring {} scenario(s) in parallel", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| self.score(&scenario.items, &scenario.config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::fixtures::*;
    use crate::data::Severity;
    use crate::report::Priority;
    use approx::assert_relative_eq;

    fn community_catalog() -> crate::data::InMemoryCatalog {
        let mut ember = fish("ember-tetra");
        ember.min_group_size = 8;
        ember.adult_size_cm = 2.0;
        catalog(vec![
            fish("guppy"),
            ember,
            with_temp(fish("goldfish"), 10.0, 20.0),
            plant("java-fern"),
        ])
    }

    #[test]
    fn test_score_matches_individual_calls() {
        let catalog = community_catalog();
        let scorer = TankScorer::with_default_params(&catalog);
        let items = vec![
            TankItem::fish("guppy", 6),
            TankItem::fish("ember-tetra", 3),
            TankItem::plant("java-fern"),
        ];
        let config = TankConfiguration::with_volume(60.0);

        let report = scorer.score(&items, &config);

        // 4 × 6 + 2 × 3 = 30 on 40 capacity
        assert_relative_eq!(report.bioload, 30.0);
        assert_relative_eq!(report.bioload, scorer.bioload(&items));
        assert_eq!(report.stocking_percentage, 75);
        assert_eq!(report.stocking_percentage, scorer.stocking_percentage(&items, &config));
        assert_eq!(report.stocking_level, StockingLevel::Moderate);
        assert_eq!(report.equipment, scorer.recommend_equipment(&items, &config));
        assert_eq!(report.issues, scorer.evaluate(&items, &config));
        assert_eq!(report.suggestions, scorer.suggest(&items, &config));
        assert_eq!(report.bioload_breakdown.len(), 2);
        assert_eq!(report.unresolved_items, 0);
    }

    #[test]
    fn test_unknown_items_are_dropped_and_counted() {
        let catalog = community_catalog();
        let scorer = TankScorer::with_default_params(&catalog);
        let items = vec![TankItem::fish("guppy", 5), TankItem::fish("atlantis-eel", 2)];

        let report = scorer.score(&items, &TankConfiguration::with_volume(60.0));

        assert_relative_eq!(report.bioload, 20.0);
        assert_eq!(report.unresolved_items, 1);
    }

    #[test]
    fn test_temperature_clash_reported() {
        let catalog = community_catalog();
        let scorer = TankScorer::with_default_params(&catalog);
        let items = vec![TankItem::fish("guppy", 5), TankItem::fish("goldfish", 2)];

        let report = scorer.score(&items, &TankConfiguration::with_volume(200.0).fully_equipped());

        assert!(report.has_critical_issues());
        assert_eq!(report.count_issues(Severity::Critical), 1);
    }

    #[test]
    fn test_custom_params_flow_through() {
        let catalog = community_catalog();
        let params = EngineParams {
            capacity_divisor: 3.0,
            ..EngineParams::default()
        };
        let scorer = TankScorer::new(&catalog, params);

        // 20 bioload on 60 / 3 = 20 capacity
        let pct = scorer.stocking_percentage(&[TankItem::fish("guppy", 5)], &TankConfiguration::with_volume(60.0));
        assert_eq!(pct, 100);
    }

    #[test]
    fn test_score_batch_preserves_order() {
        let catalog = community_catalog();
        let scorer = TankScorer::with_default_params(&catalog);

        let scenarios: Vec<Scenario> = (1..=12)
            .map(|n| Scenario {
                items: vec![TankItem::fish("guppy", n)],
                config: TankConfiguration::with_volume(60.0),
            })
            .collect();

        let reports = scorer.score_batch(&scenarios);

        assert_eq!(reports.len(), 12);
        for (n, report) in (1..=12).zip(&reports) {
            assert_relative_eq!(report.bioload, 4.0 * n as f64);
        }
        assert_eq!(reports[0].suggestions[0].priority, Priority::High);
    }
}
