//! Two level grouping of processing errors by project, then by error type

use crate::types::{CheckinProcessingError, ErrorDetail, GroupKey};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Project grouping key. `None` collects check-ins without a project id.
pub type ProjectKey = Option<GroupKey>;

/// Error type grouping key. `None` collects errors without a type code.
pub type ErrorTypeKey = Option<GroupKey>;

/// Buckets of a single project, keyed by error type
pub type TypeBuckets = BTreeMap<ErrorTypeKey, ErrorBucket>;

/// Occurrences of one error type within one project
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBucket {
    /// Number of error entries seen for this (project, type) pair, always >= 1
    pub count: usize,
    /// First error entry seen for this pair
    pub sample: ErrorDetail,
}

/// Errors grouped by project and then by error type.
///
/// Both levels iterate in ascending key order with absent keys first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedErrors {
    projects: BTreeMap<ProjectKey, TypeBuckets>,
}

impl GroupedErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, project: ProjectKey, detail: &ErrorDetail) {
        self.projects
            .entry(project)
            .or_default()
            .entry(detail.error_type.clone())
            .and_modify(|bucket| bucket.count += 1)
            .or_insert_with(|| ErrorBucket {
                count: 1,
                sample: detail.clone(),
            });
    }

    pub fn projects(&self) -> impl Iterator<Item = (&ProjectKey, &TypeBuckets)> {
        self.projects.iter()
    }

    pub fn project(&self, project: &ProjectKey) -> Option<&TypeBuckets> {
        self.projects.get(project)
    }

    pub fn bucket(&self, project: &ProjectKey, error_type: &ErrorTypeKey) -> Option<&ErrorBucket> {
        self.project(project)?.get(error_type)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of distinct (project, type) pairs
    pub fn bucket_count(&self) -> usize {
        self.projects.values().map(BTreeMap::len).sum()
    }

    /// Total number of error entries across every bucket
    pub fn total_errors(&self) -> usize {
        self.projects.keys().map(|project| self.project_total(project)).sum()
    }

    pub fn project_total(&self, project: &ProjectKey) -> usize {
        self.project(project)
            .map(|buckets| buckets.values().map(|bucket| bucket.count).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn is_single_project(&self) -> bool {
        self.projects.len() == 1
    }
}

#[derive(Serialize)]
struct ProjectEntry<'a> {
    project_id: &'a ProjectKey,
    errors: Vec<TypeEntry<'a>>,
}

#[derive(Serialize)]
struct TypeEntry<'a> {
    #[serde(rename = "type")]
    error_type: &'a ErrorTypeKey,
    count: usize,
    sample: &'a ErrorDetail,
}

// Absent keys cannot be JSON object keys, so the grouping serializes as a list.
impl Serialize for GroupedErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.projects.len()))?;
        for (project_id, buckets) in &self.projects {
            seq.serialize_element(&ProjectEntry {
                project_id,
                errors: buckets
                    .iter()
                    .map(|(error_type, bucket)| TypeEntry {
                        error_type,
                        count: bucket.count,
                        sample: &bucket.sample,
                    })
                    .collect(),
            })?;
        }
        seq.end()
    }
}

/// Trait for processing error grouping - pure business logic
pub trait ErrorGrouper: Send + Sync {
    /// Group every error entry of every record into its (project, type) bucket
    fn group(&self, records: &[CheckinProcessingError]) -> GroupedErrors;
}

/// Default implementation of error grouper
pub struct ProcessingErrorGrouper;

impl ProcessingErrorGrouper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessingErrorGrouper {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorGrouper for ProcessingErrorGrouper {
    fn group(&self, records: &[CheckinProcessingError]) -> GroupedErrors {
        let mut grouped = GroupedErrors::new();

        for record in records {
            let project = record.project_id().cloned();
            for detail in &record.errors {
                grouped.record(project.clone(), detail);
            }
        }

        grouped
    }
}

/// Group records with the default grouper
pub fn group_processing_errors(records: &[CheckinProcessingError]) -> GroupedErrors {
    ProcessingErrorGrouper::new().group(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorTypeCode, ProjectId};

    fn key(code: i64) -> Option<GroupKey> {
        Some(GroupKey::Code(code))
    }

    fn record(project_id: ProjectId, types: &[ErrorTypeCode]) -> CheckinProcessingError {
        CheckinProcessingError::new(
            Some(project_id),
            types.iter().map(|code| ErrorDetail::new(*code)).collect(),
        )
    }

    #[test]
    fn test_groups_flattened_errors_by_type() {
        let records = vec![
            record(1, &[1]),
            record(1, &[1]),
            record(1, &[1, 6]),
            record(1, &[6]),
        ];

        let grouped = group_processing_errors(&records);

        assert_eq!(grouped.project_count(), 1);
        assert_eq!(grouped.bucket(&key(1), &key(1)).unwrap().count, 3);
        assert_eq!(grouped.bucket(&key(1), &key(6)).unwrap().count, 2);
        assert_eq!(grouped.total_errors(), 5);
    }

    #[test]
    fn test_sample_is_first_seen_entry() {
        let records = vec![
            CheckinProcessingError::new(
                Some(1),
                vec![ErrorDetail::new(3).with_context("duration", -1)],
            ),
            CheckinProcessingError::new(
                Some(1),
                vec![ErrorDetail::new(3).with_context("duration", -2)],
            ),
        ];

        let grouped = group_processing_errors(&records);
        let bucket = grouped.bucket(&key(1), &key(3)).unwrap();

        assert_eq!(bucket.count, 2);
        assert_eq!(bucket.sample.context["duration"], -1);
    }

    #[test]
    fn test_absent_keys_are_ordinary_buckets() {
        let records = vec![
            CheckinProcessingError::new(None, vec![ErrorDetail::default()]),
            CheckinProcessingError::new(None, vec![ErrorDetail::new(6)]),
            record(4, &[6]),
        ];

        let grouped = group_processing_errors(&records);

        assert_eq!(grouped.project_count(), 2);
        assert_eq!(grouped.bucket(&None, &None).unwrap().count, 1);
        assert_eq!(grouped.bucket(&None, &key(6)).unwrap().count, 1);
        assert_eq!(grouped.projects().next().unwrap().0, &None);
    }

    #[test]
    fn test_records_without_errors_add_nothing() {
        let grouped = group_processing_errors(&[record(9, &[])]);

        assert!(grouped.is_empty());
        assert_eq!(grouped.project_total(&key(9)), 0);
    }

    #[test]
    fn test_keys_iterate_in_ascending_order() {
        let records = vec![record(7, &[6, 1]), record(2, &[11, 0])];

        let grouped = group_processing_errors(&records);

        let projects: Vec<_> = grouped.projects().map(|(project, _)| project.clone()).collect();
        assert_eq!(projects, vec![key(2), key(7)]);

        let types: Vec<_> = grouped.project(&key(2)).unwrap().keys().cloned().collect();
        assert_eq!(types, vec![key(0), key(11)]);
    }

    #[test]
    fn test_serializes_as_project_list() {
        let grouped = group_processing_errors(&[record(1, &[6, 6])]);

        let value = serde_json::to_value(&grouped).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"project_id": 1, "errors": [{"type": 6, "count": 2, "sample": {"type": 6}}]}
            ])
        );
    }

    #[test]
    fn test_malformed_keys_group_as_their_raw_values() {
        let records: Vec<CheckinProcessingError> = serde_json::from_str(
            r#"[
                {"checkin": {"message": {"project_id": 1}}, "errors": [{"type": 1}]},
                {"checkin": {"message": {"project_id": 1}}, "errors": [{"type": "6"}, {"type": 1.5}]},
                {"checkin": {"message": {"project_id": "abc"}}, "errors": [{"type": "6"}]},
                {"checkin": {"message": {"project_id": "abc"}}, "errors": [{"type": "6"}]}
            ]"#,
        )
        .unwrap();

        let grouped = group_processing_errors(&records);
        let text = |value: &str| Some(GroupKey::Text(value.to_string()));

        assert_eq!(grouped.total_errors(), 5);
        assert_eq!(grouped.bucket(&key(1), &key(1)).unwrap().count, 1);
        assert_eq!(grouped.bucket(&key(1), &text("6")).unwrap().count, 1);
        assert_eq!(
            grouped
                .bucket(&key(1), &Some(GroupKey::Raw("1.5".to_string())))
                .unwrap()
                .count,
            1
        );
        assert_eq!(grouped.bucket(&text("abc"), &text("6")).unwrap().count, 2);
        assert!(grouped.bucket(&key(1), &key(6)).is_none());

        let projects: Vec<_> = grouped.projects().map(|(project, _)| project.clone()).collect();
        assert_eq!(projects, vec![key(1), text("abc")]);
    }
}
