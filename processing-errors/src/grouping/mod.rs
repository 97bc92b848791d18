//! Grouping of check-in processing errors - pure business logic only
//!
//! Records are folded into a project -> error type -> bucket structure
//! without any presentation concerns.

pub mod grouper;

pub use grouper::{
    group_processing_errors, ErrorBucket, ErrorGrouper, ErrorTypeKey, GroupedErrors,
    ProcessingErrorGrouper, ProjectKey, TypeBuckets,
};
