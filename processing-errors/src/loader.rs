//! Reading already-fetched processing error records
//!
//! Accepts a JSON array (the shape of the API response), a single JSON
//! object, or JSON Lines with one record per line.

use crate::error::{ProcessingErrorsError, Result};
use crate::types::CheckinProcessingError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse records from a JSON array, a single object or a JSON Lines document
pub fn parse_records(content: &str) -> Result<Vec<CheckinProcessingError>> {
    let trimmed = content.trim_start();

    let records = if trimmed.is_empty() {
        Vec::new()
    } else if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else if let Ok(record) = serde_json::from_str::<CheckinProcessingError>(trimmed) {
        // A whole-document object, possibly spread over several lines
        vec![record]
    } else {
        parse_json_lines(content)?
    };

    debug!(records = records.len(), "parsed processing error records");
    Ok(records)
}

fn parse_json_lines(content: &str) -> Result<Vec<CheckinProcessingError>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ProcessingErrorsError::JsonLine {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Read records from any reader, e.g. stdin
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<CheckinProcessingError>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_records(&content)
}

/// Load records from a file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CheckinProcessingError>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ProcessingErrorsError::Io(e).with_context(format!("Failed to read {}", path.display()))
    })?;

    parse_records(&content)
        .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
}
