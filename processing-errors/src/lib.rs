//! Processing Errors - grouping of monitor check-in ingestion failures
//!
//! This crate folds a flat list of check-in processing error records into a
//! project -> error type grouping with occurrence counts, and provides the
//! loading, configuration and summary pieces needed to report on it.

// Core modules
pub mod error;
pub mod types;
pub mod error_type;

// Main functionality modules
pub mod grouping;
pub mod summary;
pub mod loader;
pub mod config;

// Re-export main types for convenience
pub use config::{ReportConfig, OutputFormat, ConfigLoader, DefaultConfigLoader, DEFAULT_CONFIG_FILE};
pub use error::{ProcessingErrorsError, Result};
pub use error_type::{ProcessingErrorType, title_for_code};
pub use grouping::{
    group_processing_errors, ErrorBucket, ErrorGrouper, ErrorTypeKey, GroupedErrors,
    ProcessingErrorGrouper, ProjectKey,
};
pub use loader::{load_records, parse_records, read_records};
pub use summary::{build_summary, ErrorSummary, SummaryLine, SummarySection};
pub use types::{CheckinProcessingError, ErrorDetail, ErrorTypeCode, GroupKey, ProjectId};

/// Group records and build the report summary in one step
pub fn summarize(records: &[CheckinProcessingError], config: &ReportConfig) -> (GroupedErrors, ErrorSummary) {
    let grouped = group_processing_errors(records);
    let summary = build_summary(&grouped, config);
    (grouped, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the convenience entry point wires grouping and summary together
    #[test]
    fn test_summarize() {
        let records = vec![
            CheckinProcessingError::new(Some(1), vec![ErrorDetail::new(1), ErrorDetail::new(6)]),
            CheckinProcessingError::new(Some(2), vec![ErrorDetail::new(6)]),
        ];

        let (grouped, summary) = summarize(&records, &ReportConfig::default());

        assert_eq!(grouped.total_errors(), 3);
        assert_eq!(summary.total_errors, 3);
        assert_eq!(summary.sections.len(), 2);
    }

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = ProcessingErrorsError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));
    }
}
