//! Metric modules for tank scoring
//!
//! Numeric outputs: bioload, stocking percentage and equipment sizing.

pub mod bioload;
pub mod capacity;
pub mod equipment;

// Re-export metric functions
pub use bioload::{bioload_breakdown, compute_bioload, item_bioload, ItemBioload};
pub use capacity::{capacity_points, compute_stocking_percentage, StockingLevel};
pub use equipment::{
    filter_rate, heater_watts, lighting_lumens, minimum_filter_rate, recommend_equipment,
    EquipmentRecommendation,
};
