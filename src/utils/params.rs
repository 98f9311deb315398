//! Engine Parameters
//!
//! Every empirical constant the engine uses, gathered in one serde struct so a
//! deployment can retune them from a JSON file without touching code. Defaults
//! reproduce the stock behaviour of the planner.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants for scoring, equipment sizing and suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Litres of water per bioload point of capacity
    pub capacity_divisor: f64,
    /// Bioload ceiling as a multiple of volume (litres)
    pub bioload_ceiling_factor: f64,

    /// Overlap below this many °C is flagged as narrow
    pub narrow_temperature_margin: f64,

    /// Turnover (volumes/hour) for normally stocked tanks
    pub standard_turnover: f64,
    /// Turnover once stocking passes `heavy_stocking_threshold`
    pub heavy_turnover: f64,
    /// Stocking percentage above which heavy turnover applies
    pub heavy_stocking_threshold: i64,
    /// Absolute minimum turnover quoted when a filter is missing
    pub minimum_turnover: f64,

    /// Available heater sizes in watts, ascending
    pub heater_ladder: Vec<u32>,
    /// Room temperature; fish needing warmer water need a heater
    pub ambient_temperature_c: f64,

    pub planted_lumens_per_liter: f64,
    pub unplanted_lumens_per_liter: f64,

    /// Families whose members root in the substrate with barbels
    pub barbel_families: Vec<String>,
    /// Bottom-dweller candidates considered for a cleanup crew
    pub cleanup_crew_candidates: usize,

    pub centerpiece_min_volume_liters: f64,
    /// Fish larger than this already act as a centerpiece
    pub centerpiece_max_adult_size_cm: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            capacity_divisor: 1.5,
            bioload_ceiling_factor: 2.0,
            narrow_temperature_margin: 2.0,
            standard_turnover: 5.0,
            heavy_turnover: 7.0,
            heavy_stocking_threshold: 80,
            minimum_turnover: 4.0,
            heater_ladder: vec![25, 50, 75, 100, 150, 200, 300, 400, 500],
            ambient_temperature_c: 20.0,
            planted_lumens_per_liter: 30.0,
            unplanted_lumens_per_liter: 15.0,
            barbel_families: vec![
                "Callichthyidae".to_string(),
                "Cobitidae".to_string(),
                "Botiidae".to_string(),
                "Nemacheilidae".to_string(),
            ],
            cleanup_crew_candidates: 3,
            centerpiece_min_volume_liters: 54.0,
            centerpiece_max_adult_size_cm: 6.0,
        }
    }
}

impl EngineParams {
    /// Load parameters from a JSON file; omitted fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine params file: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid engine params in {:?}", path))
    }

    /// Parse and validate parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let params: EngineParams =
            serde_json::from_str(json).with_context(|| "Failed to parse engine params JSON")?;
        params.validate()?;
        Ok(params)
    }

    /// Reject values that would make every downstream number meaningless
    pub fn validate(&self) -> Result<()> {
        if !(self.capacity_divisor > 0.0) {
            anyhow::bail!("capacity_divisor must be positive, got {}", self.capacity_divisor);
        }
        if !(self.bioload_ceiling_factor > 0.0) {
            anyhow::bail!(
                "bioload_ceiling_factor must be positive, got {}",
                self.bioload_ceiling_factor
            );
        }
        if self.heater_ladder.is_empty() {
            anyhow::bail!("heater_ladder must list at least one heater size");
        }
        if self.heater_ladder.windows(2).any(|w| w[0] >= w[1]) {
            anyhow::bail!("heater_ladder must be strictly ascending: {:?}", self.heater_ladder);
        }
        Ok(())
    }

    pub fn is_barbel_family(&self, family: &str) -> bool {
        self.barbel_families
            .iter()
            .any(|f| f.eq_ignore_ascii_case(family))
    }
}
