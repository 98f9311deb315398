//! CAPACITY: Stocking Percentage
//!
//! capacity_points     = volume_liters / capacity_divisor
//! stocking_percentage = round(bioload / capacity_points × 100)
//!
//! Not clamped: anything above 100 is an overstocking signal the UI shows as-is.

use serde::{Deserialize, Serialize};

use crate::tank::TankConfiguration;
use crate::utils::EngineParams;

/// Bioload points the tank can carry
pub fn capacity_points(config: &TankConfiguration, params: &EngineParams) -> f64 {
    config.volume_liters / params.capacity_divisor
}

/// Bioload as a percentage of capacity
pub fn compute_stocking_percentage(
    bioload: f64,
    config: &TankConfiguration,
    params: &EngineParams,
) -> i64 {
    // `as` saturates and maps NaN to 0, so a zero-volume tank cannot panic
    (bioload / capacity_points(config, params) * 100.0).round() as i64
}

/// Coarse stocking label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StockingLevel {
    Light,
    Moderate,
    Full,
    Overstocked,
}

impl StockingLevel {
    pub fn from_percentage(percentage: i64) -> Self {
        match percentage {
            p if p <= 50 => StockingLevel::Light,
            p if p <= 80 => StockingLevel::Moderate,
            p if p <= 100 => StockingLevel::Full,
            _ => StockingLevel::Overstocked,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            StockingLevel::Light => "Lightly stocked",
            StockingLevel::Moderate => "Moderately stocked",
            StockingLevel::Full => "Fully stocked",
            StockingLevel::Overstocked => "Overstocked",
        }
    }
}
