//! EQUIPMENT: Filter, Heater and Lighting Sizing
//!
//! Three independent lookups:
//!   - Filter turnover: volume × 7 above 80% stocking, else volume × 5
//!   - Heater: smallest ladder rung ≥ volume (top rung if the tank is larger)
//!   - Lighting: volume × 30 lumens if planted, else volume × 15

use serde::{Deserialize, Serialize};

use super::capacity::compute_stocking_percentage;
use crate::tank::TankConfiguration;
use crate::utils::EngineParams;

/// Recommended equipment sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecommendation {
    pub filter_rate_l_per_hour: f64,
    pub heater_watts: u32,
    pub lighting_lumens: f64,
}

/// Size filter, heater and lighting for the tank
pub fn recommend_equipment(
    config: &TankConfiguration,
    bioload: f64,
    has_plants: bool,
    params: &EngineParams,
) -> EquipmentRecommendation {
    let stocking = compute_stocking_percentage(bioload, config, params);

    EquipmentRecommendation {
        filter_rate_l_per_hour: filter_rate(config.volume_liters, stocking, params),
        heater_watts: heater_watts(config.volume_liters, params),
        lighting_lumens: lighting_lumens(config.volume_liters, has_plants, params),
    }
}

/// Filter throughput in litres per hour
pub fn filter_rate(volume_liters: f64, stocking_percentage: i64, params: &EngineParams) -> f64 {
    let turnover = if stocking_percentage > params.heavy_stocking_threshold {
        params.heavy_turnover
    } else {
        params.standard_turnover
    };
    volume_liters * turnover
}

/// Lowest acceptable filter rate, used when no filter is fitted
pub fn minimum_filter_rate(volume_liters: f64, params: &EngineParams) -> f64 {
    (volume_liters * params.minimum_turnover).ceil()
}

/// Heater wattage from the fixed ladder
///
/// Tanks larger than the top rung get the top rung; multiple heaters are the
/// keeper's call.
pub fn heater_watts(volume_liters: f64, params: &EngineParams) -> u32 {
    params
        .heater_ladder
        .iter()
        .copied()
        .find(|&watts| watts as f64 >= volume_liters)
        .or_else(|| params.heater_ladder.last().copied())
        .unwrap_or(0)
}

pub fn lighting_lumens(volume_liters: f64, has_plants: bool, params: &EngineParams) -> f64 {
    let per_liter = if has_plants {
        params.planted_lumens_per_liter
    } else {
        params.unplanted_lumens_per_liter
    };
    volume_liters * per_liter
}
