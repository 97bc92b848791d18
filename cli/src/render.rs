use crate::error::Result;
use colored::Colorize;
use processing_errors::{ErrorSummary, GroupedErrors};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a ErrorSummary,
    groups: &'a GroupedErrors,
}

/// Render the summary as plain text, one "Nx Title" line per error type
pub fn render_text(summary: &ErrorSummary) -> String {
    if summary.is_empty() {
        return "No processing errors found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{}\n",
        format!(
            "{} processing error{} encountered while ingesting check-ins",
            summary.total_errors,
            if summary.total_errors == 1 { "" } else { "s" }
        )
        .bold()
    ));

    for section in &summary.sections {
        let indent = match &section.heading {
            Some(heading) => {
                output.push_str(&format!("\n{} ({})\n", heading.cyan().bold(), section.total));
                "  "
            }
            None => "",
        };

        for line in &section.lines {
            output.push_str(&format!(
                "{indent}{} {}\n",
                line.count_label().yellow().bold(),
                line.title
            ));
        }
    }

    output
}

/// Render the summary together with the raw grouping as pretty JSON
pub fn render_json(grouped: &GroupedErrors, summary: &ErrorSummary) -> Result<String> {
    let report = JsonReport {
        summary,
        groups: grouped,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
