//! BIOLOAD: Waste-Load Score
//!
//! Weighted proxy for the waste and oxygen burden of the stocked fish.
//!
//! Per fish item:
//!   contribution = adult_size_cm × count × mass_multiplier × diet_multiplier
//!
//! Plants and hardscape contribute nothing. Unknown body shape or diet falls
//! back to a multiplier of 1.0, so this never fails.

use serde::{Deserialize, Serialize};

use crate::data::OrganismRecord;
use crate::tank::Stock;

/// Bioload attributed to one fish item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBioload {
    /// Position in the caller's item list
    pub item_index: usize,
    pub organism_id: String,
    pub count: u32,
    pub bioload: f64,
}

/// Waste contribution of `count` individuals of `organism`
pub fn item_bioload(organism: &OrganismRecord, count: u32) -> f64 {
    let size = organism.adult_size_cm.max(0.0);
    size * count as f64 * organism.body_shape.mass_multiplier() * organism.diet.multiplier()
}

/// Total bioload of the stocked fish
pub fn compute_bioload(stock: &Stock) -> f64 {
    stock
        .fish
        .iter()
        .map(|f| item_bioload(f.organism, f.count()))
        // `sum` of an empty f64 iterator is -0.0
        .fold(0.0, |total, b| total + b)
}

/// Per-item breakdown, in item order
pub fn bioload_breakdown(stock: &Stock) -> Vec<ItemBioload> {
    stock
        .fish
        .iter()
        .map(|f| ItemBioload {
            item_index: f.index,
            organism_id: f.organism.id.clone(),
            count: f.count(),
            bioload: item_bioload(f.organism, f.count()),
        })
        .collect()
}
