//! Catalog Records and Lookup
//!
//! Read-only organism, plant and hardscape records plus the `Catalog` trait the
//! engine consumes. The catalog is always injected; nothing in this crate reads
//! a global table.
//!
//! Records deserialize with lenient defaults: a missing body shape, diet or tag
//! list falls back to `Unknown` / empty rather than failing the whole record.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Well-known behavior tags.
///
/// Tags stay plain strings because compatibility rules can target any tag the
/// catalog authors invent; these are the ones the engine itself reads.
pub mod tags {
    pub const TERRITORIAL: &str = "territorial";
    pub const AGGRESSIVE: &str = "aggressive";
    pub const BOTTOM_DWELLER: &str = "bottom-dweller";
    pub const SURFACE_DWELLER: &str = "surface-dweller";
    pub const SCHOOLING: &str = "schooling";
    pub const BARBELS: &str = "barbels";
}

// ============================================================================
// Classifications
// ============================================================================

/// Organism kind as recorded in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrganismKind {
    #[default]
    Fish,
    Plant,
}

/// Body shape, used to weight waste output per centimetre of fish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BodyShape {
    Streamlined,
    LaterallyCompressed,
    DorsoventrallyFlattened,
    Globular,
    Elongate,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BodyShape {
    /// Mass multiplier relative to a streamlined fish of the same length
    pub fn mass_multiplier(&self) -> f64 {
        match self {
            BodyShape::Streamlined => 1.0,
            BodyShape::LaterallyCompressed => 1.2,
            BodyShape::DorsoventrallyFlattened => 1.1,
            BodyShape::Globular => 1.6,
            BodyShape::Elongate => 1.2,
            BodyShape::Unknown => 1.0,
        }
    }
}

/// Diet classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Carnivore,
    Omnivore,
    Herbivore,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Diet {
    /// Protein-heavy diets produce more waste
    pub fn multiplier(&self) -> f64 {
        match self {
            Diet::Carnivore => 1.1,
            _ => 1.0,
        }
    }
}

/// Tank substrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Substrate {
    Sand,
    Gravel,
    Soil,
    Bare,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Substrate {
    pub fn display_text(&self) -> &'static str {
        match self {
            Substrate::Sand => "sand",
            Substrate::Gravel => "gravel",
            Substrate::Soil => "soil",
            Substrate::Bare => "bare bottom",
            Substrate::Unknown => "unknown substrate",
        }
    }
}

/// Hardscape material category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    Rock,
    Wood,
    Decoration,
    #[default]
    #[serde(other)]
    Other,
}

/// Inclusive tolerance range (temperature in °C, or pH)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceRange {
    pub min: f64,
    pub max: f64,
}

impl ToleranceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

// ============================================================================
// Compatibility Rules
// ============================================================================

/// Severity level for compatibility issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn display_text(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
        }
    }
}

/// What a pairwise rule points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "kebab-case")]
pub enum RuleTarget {
    /// Any organism carrying this behavior tag
    Tag(String),
    /// One specific catalog identity
    Organism(String),
}

impl RuleTarget {
    /// Whether `organism` is hit by this target
    pub fn matches(&self, organism: &OrganismRecord) -> bool {
        match self {
            RuleTarget::Tag(tag) => organism.has_tag(tag),
            RuleTarget::Organism(id) => organism.id == *id,
        }
    }
}

/// Predicate for a `requires` rule, evaluated against the whole tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Requirement {
    /// At least this many of the declaring species across all items
    MinGroupSize(u32),
    /// Tank must have a secure lid (jumpers, escape artists)
    SecureLid,
    /// Minimum tank length in centimetres (active swimmers)
    MinTankLengthCm(f64),
    /// At least one plant item
    Planted,
    /// Specific substrate
    Substrate(Substrate),
    /// Another organism matching the target must be present
    Companion(RuleTarget),
}

/// Declarative co-housing constraint attached to an organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CompatibilityRule {
    Requires {
        condition: Requirement,
        severity: Severity,
        reason: String,
    },
    Avoid {
        target: RuleTarget,
        severity: Severity,
        reason: String,
    },
    Warning {
        target: RuleTarget,
        severity: Severity,
        reason: String,
    },
}

impl CompatibilityRule {
    pub fn severity(&self) -> Severity {
        match self {
            CompatibilityRule::Requires { severity, .. }
            | CompatibilityRule::Avoid { severity, .. }
            | CompatibilityRule::Warning { severity, .. } => *severity,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            CompatibilityRule::Requires { reason, .. }
            | CompatibilityRule::Avoid { reason, .. }
            | CompatibilityRule::Warning { reason, .. } => reason,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Immutable catalog entry for a fish-like or plant-like organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub kind: OrganismKind,
    /// Adult length in centimetres
    pub adult_size_cm: f64,
    pub temperature_c: ToleranceRange,
    pub ph: ToleranceRange,
    #[serde(default)]
    pub min_tank_size_liters: f64,
    #[serde(default = "default_group_size")]
    pub min_group_size: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub diet: Diet,
    #[serde(default)]
    pub body_shape: BodyShape,
    #[serde(default)]
    pub rules: Vec<CompatibilityRule>,
}

fn default_group_size() -> u32 {
    1
}

impl OrganismRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Territorial or aggressive
    pub fn is_aggressive(&self) -> bool {
        self.has_tag(tags::TERRITORIAL) || self.has_tag(tags::AGGRESSIVE)
    }
}

/// Immutable catalog entry for rocks, wood and decorations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardscapeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size_cm: f64,
    #[serde(default)]
    pub material: Material,
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only catalog lookup, resolved in memory before evaluation starts
pub trait Catalog: Sync {
    fn find_organism_by_id(&self, id: &str) -> Option<&OrganismRecord>;

    /// Organisms carrying `tag`, in catalog order
    fn find_organisms_by_tag(&self, tag: &str) -> Vec<&OrganismRecord>;

    fn find_hardscape_by_id(&self, id: &str) -> Option<&HardscapeRecord>;
}

/// Vec-backed catalog with id indices
///
/// Deserializing goes through `CatalogRecords`, so indices are always built.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(from = "CatalogRecords")]
pub struct InMemoryCatalog {
    organisms: Vec<OrganismRecord>,
    #[serde(default)]
    hardscape: Vec<HardscapeRecord>,

    #[serde(skip)]
    organism_index: FxHashMap<String, usize>,
    #[serde(skip)]
    hardscape_index: FxHashMap<String, usize>,
}

/// Serialized shape of a catalog: just the records
#[derive(Deserialize)]
struct CatalogRecords {
    organisms: Vec<OrganismRecord>,
    #[serde(default)]
    hardscape: Vec<HardscapeRecord>,
}

impl From<CatalogRecords> for InMemoryCatalog {
    fn from(records: CatalogRecords) -> Self {
        InMemoryCatalog::new(records.organisms, records.hardscape)
    }
}

impl InMemoryCatalog {
    pub fn new(organisms: Vec<OrganismRecord>, hardscape: Vec<HardscapeRecord>) -> Self {
        let mut catalog = Self {
            organisms,
            hardscape,
            organism_index: FxHashMap::default(),
            hardscape_index: FxHashMap::default(),
        };
        catalog.build_indices();
        catalog
    }

    fn build_indices(&mut self) {
        // First record wins on duplicate ids
        self.organism_index.clear();
        for (i, org) in self.organisms.iter().enumerate() {
            self.organism_index.entry(org.id.clone()).or_insert(i);
        }
        self.hardscape_index.clear();
        for (i, rec) in self.hardscape.iter().enumerate() {
            self.hardscape_index.entry(rec.id.clone()).or_insert(i);
        }
    }

    pub fn organisms(&self) -> &[OrganismRecord] {
        &self.organisms
    }

    pub fn len(&self) -> usize {
        self.organisms.len() + self.hardscape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for InMemoryCatalog {
    fn find_organism_by_id(&self, id: &str) -> Option<&OrganismRecord> {
        self.organism_index.get(id).map(|&i| &self.organisms[i])
    }

    fn find_organisms_by_tag(&self, tag: &str) -> Vec<&OrganismRecord> {
        self.organisms.iter().filter(|o| o.has_tag(tag)).collect()
    }

    fn find_hardscape_by_id(&self, id: &str) -> Option<&HardscapeRecord> {
        self.hardscape_index.get(id).map(|&i| &self.hardscape[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetra() -> OrganismRecord {
        OrganismRecord {
            id: "neon-tetra".to_string(),
            name: "Neon Tetra".to_string(),
            family: Some("Characidae".to_string()),
            kind: OrganismKind::Fish,
            adult_size_cm: 3.5,
            temperature_c: ToleranceRange::new(20.0, 26.0),
            ph: ToleranceRange::new(5.0, 7.0),
            min_tank_size_liters: 40.0,
            min_group_size: 6,
            tags: vec!["schooling".to_string()],
            diet: Diet::Omnivore,
            body_shape: BodyShape::Streamlined,
            rules: vec![],
        }
    }

    #[test]
    fn test_lookup_by_id_and_tag() {
        let catalog = InMemoryCatalog::new(vec![tetra()], vec![]);

        assert!(catalog.find_organism_by_id("neon-tetra").is_some());
        assert!(catalog.find_organism_by_id("missing").is_none());
        assert_eq!(catalog.find_organisms_by_tag("Schooling").len(), 1);
        assert!(catalog.find_organisms_by_tag(tags::BOTTOM_DWELLER).is_empty());
    }

    #[test]
    fn test_missing_classifications_default() {
        let json = r#"{
            "id": "mystery",
            "name": "Mystery Fish",
            "adult_size_cm": 4.0,
            "temperature_c": {"min": 22.0, "max": 28.0},
            "ph": {"min": 6.0, "max": 7.5},
            "body_shape": "something-new"
        }"#;

        let org: OrganismRecord = serde_json::from_str(json).unwrap();
        assert_eq!(org.body_shape, BodyShape::Unknown);
        assert_eq!(org.diet, Diet::Unknown);
        assert_eq!(org.min_group_size, 1);
        assert!(org.rules.is_empty());
    }

    #[test]
    fn test_rule_deserialization() {
        let json = r#"[
            {"kind": "avoid", "target": {"by": "tag", "value": "aggressive"},
             "severity": "critical", "reason": "Gets bullied"},
            {"kind": "requires", "condition": {"type": "secure-lid"},
             "severity": "warning", "reason": "Known jumper"},
            {"kind": "requires", "condition": {"type": "min-tank-length-cm", "value": 90.0},
             "severity": "warning", "reason": "Needs swimming room"}
        ]"#;

        let rules: Vec<CompatibilityRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].severity(), Severity::Critical);
        assert_eq!(rules[1].reason(), "Known jumper");
        assert!(matches!(
            rules[2],
            CompatibilityRule::Requires { condition: Requirement::MinTankLengthCm(_), .. }
        ));
    }

    #[test]
    fn test_catalog_indices_after_deserialize() {
        let json = r#"{
            "organisms": [],
            "hardscape": [{"id": "seiryu", "name": "Seiryu Stone", "size_cm": 20.0, "material": "rock"}]
        }"#;

        let catalog: InMemoryCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.find_hardscape_by_id("seiryu").unwrap().material, Material::Rock);
        assert!(catalog.find_organism_by_id("seiryu").is_none());
    }

    #[test]
    fn test_deserialized_catalog_resolves_without_rebuild() {
        let json = r#"{
            "organisms": [
                {"id": "neon-tetra", "name": "Neon Tetra", "adult_size_cm": 3.5,
                 "temperature_c": {"min": 20.0, "max": 26.0}, "ph": {"min": 5.0, "max": 7.0}},
                {"id": "neon-tetra", "name": "Duplicate", "adult_size_cm": 9.0,
                 "temperature_c": {"min": 20.0, "max": 26.0}, "ph": {"min": 5.0, "max": 7.0}}
            ]
        }"#;

        let catalog: InMemoryCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        // First record wins on duplicate ids
        assert_eq!(catalog.find_organism_by_id("neon-tetra").unwrap().name, "Neon Tetra");

        // Serializing and reading back keeps lookups working
        let round_trip: InMemoryCatalog =
            serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
        assert!(round_trip.find_organism_by_id("neon-tetra").is_some());
    }
}
