//! Tank Scorer Rust Implementation
//!
//! Stocking evaluation for planned aquariums: how much waste the fish produce,
//! how full the tank is, what equipment it needs, which species clash, and
//! what to do next.
//!
//! Module layout:
//! - `data`: Catalog records, compatibility rules and the `Catalog` trait
//! - `tank`: The caller's item list, tank configuration and resolved stock
//! - `metrics/`: Bioload, capacity and equipment sizing
//! - `compatibility/`: Ordered table of compatibility checks
//! - `suggestions/`: Ordered table of suggestion generators
//! - `report/`: Report types plus JSON and Markdown formatters
//! - `scorer`: `TankScorer`, the coordinator most callers want
//!
//! Everything is synchronous and pure. The catalog is injected and read-only,
//! so a single scorer can be shared across threads.

pub mod utils;
pub mod data;
pub mod tank;
pub mod metrics;
pub mod compatibility;
pub mod suggestions;
pub mod report;
pub mod scorer;
pub mod error;

// Re-export commonly used types
pub use data::{
    BodyShape, Catalog, CompatibilityRule, Diet, HardscapeRecord, InMemoryCatalog, Material,
    OrganismKind, OrganismRecord, Requirement, RuleTarget, Severity, Substrate, ToleranceRange,
};
pub use error::RuleError;
pub use metrics::*;
pub use report::{
    Issue, IssueCategory, JsonFormatter, MarkdownFormatter, Priority, Suggestion,
    SuggestionCategory, TankReport,
};
pub use scorer::{Scenario, TankScorer};
pub use tank::{ItemKind, Placement, TankConfiguration, TankItem};
pub use utils::EngineParams;
