use crate::report::types::{Issue, Suggestion, TankReport};

/// Markdown formatter for tank reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &TankReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!(
            "# {:.0}L Tank - {}\n\n",
            report.volume_liters,
            report.stocking_level.display_text()
        ));
        md.push_str(&format!(
            "**Stocking:** {}% (bioload {:.1})\n\n",
            report.stocking_percentage, report.bioload
        ));
        if report.unresolved_items > 0 {
            md.push_str(&format!(
                "*{} item(s) were not found in the catalog and were ignored.*\n\n",
                report.unresolved_items
            ));
        }

        // Equipment
        md.push_str("## Equipment\n\n");
        md.push_str("| Item | Recommendation |\n");
        md.push_str("|------|----------------|\n");
        md.push_str(&format!(
            "| Filter | {:.0} L/h |\n",
            report.equipment.filter_rate_l_per_hour
        ));
        md.push_str(&format!("| Heater | {} W |\n", report.equipment.heater_watts));
        md.push_str(&format!(
            "| Lighting | {:.0} lm |\n\n",
            report.equipment.lighting_lumens
        ));

        // Bioload breakdown
        if !report.bioload_breakdown.is_empty() {
            md.push_str("## Bioload\n\n");
            md.push_str("| Organism | Count | Bioload |\n");
            md.push_str("|----------|-------|---------|\n");
            for entry in &report.bioload_breakdown {
                md.push_str(&format!(
                    "| {} | {} | {:.1} |\n",
                    entry.organism_id, entry.count, entry.bioload
                ));
            }
            md.push('\n');
        }

        // Issues
        if report.issues.is_empty() {
            md.push_str("## Compatibility\n\n✅ No compatibility issues found\n\n");
        } else {
            md.push_str("## Compatibility Issues\n\n");
            for issue in &report.issues {
                Self::format_issue(&mut md, issue);
            }
        }

        // Suggestions
        if !report.suggestions.is_empty() {
            md.push_str("## Suggestions\n\n");
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                Self::format_suggestion(&mut md, i + 1, suggestion);
            }
        }

        md
    }

    fn format_issue(md: &mut String, issue: &Issue) {
        md.push_str(&format!(
            "{} **{}**: {}\n\n",
            issue.severity.icon(),
            issue.severity.display_text(),
            issue.message
        ));
        if let Some(remediation) = &issue.remediation {
            md.push_str(&format!("*Advice:* {}\n\n", remediation));
        }
    }

    fn format_suggestion(md: &mut String, rank: usize, suggestion: &Suggestion) {
        md.push_str(&format!(
            "{}. **{}** [{}]  \n",
            rank,
            suggestion.title,
            suggestion.priority.display_text()
        ));
        md.push_str(&format!("{}  \n", suggestion.description));
        md.push_str(&format!("*Why:* {}\n\n", suggestion.rationale));
    }
}
