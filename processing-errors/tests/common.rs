//! Shared fixtures for processing-errors integration tests

#![allow(dead_code)]

use processing_errors::{CheckinProcessingError, ErrorDetail, ErrorTypeCode, ProjectId};
use serde_json::json;

/// Builder mirroring the records the ingestion backend stores
pub struct CheckinErrorFixture {
    project_id: Option<ProjectId>,
    errors: Vec<ErrorDetail>,
}

impl CheckinErrorFixture {
    /// Project 1 with a single "check-in already completed" error
    pub fn new() -> Self {
        Self {
            project_id: Some(1),
            errors: vec![ErrorDetail::new(1)],
        }
    }

    pub fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn without_project(mut self) -> Self {
        self.project_id = None;
        self
    }

    pub fn errors(mut self, types: &[ErrorTypeCode]) -> Self {
        self.errors = types.iter().map(|code| ErrorDetail::new(*code)).collect();
        self
    }

    pub fn build(self) -> CheckinProcessingError {
        let mut record = CheckinProcessingError::new(self.project_id, self.errors);
        record.id = Some("ad8f0d1a-7d3e-4f3c-9c7b-2a1d4e0f9b11".to_string());
        record.checkin.extra.insert("ts".to_string(), json!(1717000000));
        record
            .checkin
            .message
            .extra
            .insert("type".to_string(), json!("check_in"));
        record
    }
}

/// Two default records, one with types [1, 6] and one with type [6]
pub fn single_project_records(project_id: ProjectId) -> Vec<CheckinProcessingError> {
    vec![
        CheckinErrorFixture::new().project(project_id).build(),
        CheckinErrorFixture::new().project(project_id).build(),
        CheckinErrorFixture::new().project(project_id).errors(&[1, 6]).build(),
        CheckinErrorFixture::new().project(project_id).errors(&[6]).build(),
    ]
}

pub fn two_project_records() -> Vec<CheckinProcessingError> {
    let mut records = single_project_records(1);
    records.extend(vec![
        CheckinErrorFixture::new().project(2).build(),
        CheckinErrorFixture::new().project(2).build(),
        CheckinErrorFixture::new().project(2).errors(&[6]).build(),
        CheckinErrorFixture::new().project(2).errors(&[1, 6]).build(),
    ]);
    records
}

pub fn total_error_entries(records: &[CheckinProcessingError]) -> usize {
    records.iter().map(|record| record.errors.len()).sum()
}
