use crate::report::types::TankReport;

/// JSON formatter for tank reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &TankReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &TankReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
