//! Utility modules for tank scoring
//!
//! Contains shared functionality used across multiple components:
//! - Params: Tunable engine constants (JSON-loadable)
//! - Ranges: Tolerance range intersection

pub mod params;
pub mod ranges;

// Re-export commonly used types
pub use params::EngineParams;
pub use ranges::{intersect_ranges, RangeOverlap};
