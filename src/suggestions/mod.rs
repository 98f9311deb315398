//! Suggestion Engine
//!
//! Turns the tank's gaps into a short, prioritized to-do list. Generators run
//! in a fixed order; the result is then stable-sorted by priority, so within a
//! tier suggestions keep generation order and repeated calls return the same
//! list in the same order.
//!
//! ## Generators (in order)
//! 1. Filter gap              - `equipment::filter_gap`
//! 2. Heater gap              - `equipment::heater_gap`
//! 3. Overstocking            - `stocking::overstocking`
//! 4. Schooling deficits      - `stocking::schooling_deficits`
//! 5. Cleanup crew            - `stocking::cleanup_crew`
//! 6. Planting nudge          - `habitat::planting`
//! 7. Hiding spots            - `habitat::hiding_spots`
//! 8. Substrate mismatch      - `habitat::substrate_mismatch`
//! 9. Centerpiece             - `stocking::centerpiece`

pub mod equipment;
pub mod stocking;
pub mod habitat;

use crate::data::Catalog;
use crate::metrics::{compute_bioload, compute_stocking_percentage, recommend_equipment, EquipmentRecommendation};
use crate::report::Suggestion;
use crate::tank::{Stock, TankConfiguration};
use crate::utils::EngineParams;

/// Inputs shared by every generator
pub struct SuggestionContext<'a> {
    pub stock: &'a Stock<'a>,
    pub config: &'a TankConfiguration,
    pub params: &'a EngineParams,
    pub catalog: &'a dyn Catalog,
    pub bioload: f64,
    pub stocking_percentage: i64,
    pub equipment: EquipmentRecommendation,
}

impl<'a> SuggestionContext<'a> {
    pub fn new(
        stock: &'a Stock<'a>,
        config: &'a TankConfiguration,
        params: &'a EngineParams,
        catalog: &'a dyn Catalog,
    ) -> Self {
        let bioload = compute_bioload(stock);
        Self {
            stock,
            config,
            params,
            catalog,
            bioload,
            stocking_percentage: compute_stocking_percentage(bioload, config, params),
            equipment: recommend_equipment(config, bioload, stock.has_plants(), params),
        }
    }
}

/// A single suggestion generator
pub type Generator = fn(&SuggestionContext) -> Vec<Suggestion>;

/// All generators, in generation order
pub const GENERATORS: &[(&str, Generator)] = &[
    ("filter_gap", equipment::filter_gap),
    ("heater_gap", equipment::heater_gap),
    ("overstocking", stocking::overstocking),
    ("schooling_deficits", stocking::schooling_deficits),
    ("cleanup_crew", stocking::cleanup_crew),
    ("planting", habitat::planting),
    ("hiding_spots", habitat::hiding_spots),
    ("substrate_mismatch", habitat::substrate_mismatch),
    ("centerpiece", stocking::centerpiece),
];

/// Build the priority-sorted suggestion list
pub fn suggest(
    stock: &Stock,
    config: &TankConfiguration,
    params: &EngineParams,
    catalog: &dyn Catalog,
) -> Vec<Suggestion> {
    let ctx = SuggestionContext::new(stock, config, params, catalog);
    suggest_with_context(&ctx)
}

pub fn suggest_with_context(ctx: &SuggestionContext) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = GENERATORS
        .iter()
        .flat_map(|(name, generate)| {
            let found = generate(ctx);
            if !found.is_empty() {
                tracing::debug!("Generator '{}' produced {} suggestion(s)", name, found.len());
            }
            found
        })
        .collect();

    // `sort_by_key` is stable
    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

/// Comma-separated organism names, e.g. "Neon Tetra, Cardinal Tetra"
pub(crate) fn join_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect::<Vec<_>>().join(", ")
}
