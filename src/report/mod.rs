pub mod types;
pub mod formatters;

pub use types::{
    Issue, IssueCategory, Priority, Suggestion, SuggestionCategory, TankReport,
};
pub use formatters::{JsonFormatter, MarkdownFormatter};
