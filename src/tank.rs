//! Tank Items, Configuration and Stock Resolution
//!
//! `TankItem`s arrive from the planner UI as catalog references. Every engine
//! entry point resolves them once into a `Stock`, a borrowed view that pairs
//! each item with its catalog record. Items whose reference does not resolve
//! (or whose kind disagrees with the record) are dropped here, so downstream
//! checks never see them.

use serde::{Deserialize, Serialize};

use crate::data::{Catalog, HardscapeRecord, OrganismKind, OrganismRecord, Substrate};

/// What a placed item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Fish,
    Plant,
    Hardscape,
}

/// Visual placement (owned by the renderer, ignored by the engine)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub flipped: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            flipped: false,
        }
    }
}

/// One placement in the hypothetical tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankItem {
    pub kind: ItemKind,
    /// Catalog identity this item refers to
    pub ref_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub placement: Placement,
}

fn default_quantity() -> u32 {
    1
}

impl TankItem {
    pub fn new(kind: ItemKind, ref_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            kind,
            ref_id: ref_id.into(),
            quantity,
            placement: Placement::default(),
        }
    }

    pub fn fish(ref_id: impl Into<String>, quantity: u32) -> Self {
        Self::new(ItemKind::Fish, ref_id, quantity)
    }

    pub fn plant(ref_id: impl Into<String>) -> Self {
        Self::new(ItemKind::Plant, ref_id, 1)
    }

    pub fn hardscape(ref_id: impl Into<String>) -> Self {
        Self::new(ItemKind::Hardscape, ref_id, 1)
    }

    /// Head count, never below one
    pub fn count(&self) -> u32 {
        self.quantity.max(1)
    }
}

/// Tank dimensions in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

/// The tank being planned
///
/// `volume_liters > 0` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankConfiguration {
    pub volume_liters: f64,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub substrate: Substrate,
    #[serde(default)]
    pub has_filter: bool,
    #[serde(default)]
    pub has_heater: bool,
    #[serde(default)]
    pub has_lighting: bool,
    #[serde(default)]
    pub has_lid: bool,
}

impl TankConfiguration {
    /// Bare tank of the given volume with no equipment
    pub fn with_volume(volume_liters: f64) -> Self {
        Self {
            volume_liters,
            dimensions: Dimensions::default(),
            substrate: Substrate::Unknown,
            has_filter: false,
            has_heater: false,
            has_lighting: false,
            has_lid: false,
        }
    }

    /// Same tank with filter, heater, light and lid fitted
    pub fn fully_equipped(mut self) -> Self {
        self.has_filter = true;
        self.has_heater = true;
        self.has_lighting = true;
        self.has_lid = true;
        self
    }
}

// ============================================================================
// Resolved stock
// ============================================================================

/// A fish item joined with its organism record
#[derive(Debug, Clone, Copy)]
pub struct StockedFish<'a> {
    /// Position in the caller's item list
    pub index: usize,
    pub item: &'a TankItem,
    pub organism: &'a OrganismRecord,
}

impl StockedFish<'_> {
    pub fn count(&self) -> u32 {
        self.item.count()
    }
}

/// A plant item joined with its organism record
#[derive(Debug, Clone, Copy)]
pub struct StockedPlant<'a> {
    pub index: usize,
    pub item: &'a TankItem,
    pub organism: &'a OrganismRecord,
}

/// A hardscape item joined with its record
#[derive(Debug, Clone, Copy)]
pub struct StockedHardscape<'a> {
    pub index: usize,
    pub item: &'a TankItem,
    pub record: &'a HardscapeRecord,
}

/// Items resolved against the catalog, split by kind, in caller order
#[derive(Debug, Clone, Default)]
pub struct Stock<'a> {
    pub fish: Vec<StockedFish<'a>>,
    pub plants: Vec<StockedPlant<'a>>,
    pub hardscape: Vec<StockedHardscape<'a>>,
    /// Items dropped because their reference did not resolve
    pub unresolved: usize,
}

impl<'a> Stock<'a> {
    /// Resolve `items` against `catalog`
    pub fn resolve(items: &'a [TankItem], catalog: &'a dyn Catalog) -> Self {
        let mut stock = Stock::default();

        for (index, item) in items.iter().enumerate() {
            match item.kind {
                ItemKind::Fish => match catalog.find_organism_by_id(&item.ref_id) {
                    Some(organism) if organism.kind == OrganismKind::Fish => {
                        stock.fish.push(StockedFish { index, item, organism });
                    }
                    _ => stock.unresolved += 1,
                },
                ItemKind::Plant => match catalog.find_organism_by_id(&item.ref_id) {
                    Some(organism) if organism.kind == OrganismKind::Plant => {
                        stock.plants.push(StockedPlant { index, item, organism });
                    }
                    _ => stock.unresolved += 1,
                },
                ItemKind::Hardscape => match catalog.find_hardscape_by_id(&item.ref_id) {
                    Some(record) => stock.hardscape.push(StockedHardscape { index, item, record }),
                    None => stock.unresolved += 1,
                },
            }
        }

        if stock.unresolved > 0 {
            tracing::debug!(
                "Excluded {} tank item(s) with unresolved catalog references",
                stock.unresolved
            );
        }

        stock
    }

    pub fn has_fish(&self) -> bool {
        !self.fish.is_empty()
    }

    pub fn has_plants(&self) -> bool {
        !self.plants.is_empty()
    }

    pub fn has_hardscape(&self) -> bool {
        !self.hardscape.is_empty()
    }

    /// Total head count of one species across all of its items
    pub fn head_count(&self, organism_id: &str) -> u32 {
        self.fish
            .iter()
            .filter(|f| f.organism.id == organism_id)
            .map(|f| f.count())
            .sum()
    }
}
