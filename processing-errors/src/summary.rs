//! Display policy for grouped errors, expressed as structured data
//!
//! Decides which headings and lines a report shows; turning them into text
//! or markup is left to the caller.

use crate::config::ReportConfig;
use crate::grouping::{ErrorTypeKey, GroupedErrors, ProjectKey};
use serde::Serialize;

/// Report-ready view of a grouping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub total_errors: usize,
    /// Whether sections carry a project heading
    pub show_projects: bool,
    pub sections: Vec<SummarySection>,
}

/// Errors of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySection {
    pub project_id: ProjectKey,
    pub heading: Option<String>,
    pub total: usize,
    pub lines: Vec<SummaryLine>,
}

/// One error type with its count, e.g. "3x Check-in already completed"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    #[serde(rename = "type")]
    pub error_type: ErrorTypeKey,
    pub count: usize,
    pub title: String,
}

impl SummaryLine {
    pub fn count_label(&self) -> String {
        format!("{}x", self.count)
    }
}

impl ErrorSummary {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }
}

/// Build the summary for a grouping under the given configuration
pub fn build_summary(grouped: &GroupedErrors, config: &ReportConfig) -> ErrorSummary {
    let show_projects = !(config.collapse_single_project && grouped.is_single_project());

    let sections = grouped
        .projects()
        .map(|(project, buckets)| SummarySection {
            project_id: project.clone(),
            heading: show_projects.then(|| config.project_label(project)),
            total: grouped.project_total(project),
            lines: buckets
                .iter()
                .map(|(error_type, bucket)| SummaryLine {
                    error_type: error_type.clone(),
                    count: bucket.count,
                    title: config.type_label(error_type),
                })
                .collect(),
        })
        .collect();

    ErrorSummary {
        total_errors: grouped.total_errors(),
        show_projects,
        sections,
    }
}
