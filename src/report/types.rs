//! Report types: issues, suggestions and the full tank report

use serde::{Deserialize, Serialize};

use crate::data::Severity;
use crate::metrics::{EquipmentRecommendation, ItemBioload, StockingLevel};

/// Complete evaluation of one tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankReport {
    pub volume_liters: f64,
    pub bioload: f64,
    pub stocking_percentage: i64,
    pub stocking_level: StockingLevel,
    pub bioload_breakdown: Vec<ItemBioload>,
    pub equipment: EquipmentRecommendation,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    /// Items dropped because their catalog reference did not resolve
    pub unresolved_items: usize,
}

impl TankReport {
    pub fn has_critical_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    pub fn count_issues(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Which check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Temperature,
    Ph,
    TankSize,
    GroupSize,
    Bioload,
    Aggression,
    Rule,
}

/// Compatibility problem found in the tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    pub remediation: Option<String>,
    /// Organism the issue is about, when it concerns one species
    pub organism_id: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            remediation: None,
            organism_id: None,
        }
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    pub fn for_organism(mut self, organism_id: impl Into<String>) -> Self {
        self.organism_id = Some(organism_id.into());
        self
    }
}

/// Suggestion priority; declaration order is sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn display_text(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    Equipment,
    Stocking,
    CleanupCrew,
    Plants,
    Hardscape,
    Substrate,
    Centerpiece,
}

/// Actionable next step for the keeper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub rationale: String,
    /// Catalog organism the suggestion proposes or concerns
    pub organism_id: Option<String>,
}

impl Suggestion {
    pub fn new(
        category: SuggestionCategory,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            priority,
            rationale: rationale.into(),
            organism_id: None,
        }
    }

    pub fn for_organism(mut self, organism_id: impl Into<String>) -> Self {
        self.organism_id = Some(organism_id.into());
        self
    }
}
