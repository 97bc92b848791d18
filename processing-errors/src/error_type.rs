//! Known check-in processing error types and their display titles

use crate::types::{ErrorTypeCode, GroupKey};

/// Kinds of failure the ingestion pipeline reports for a check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcessingErrorType {
    CheckinEnvironmentMismatch,
    CheckinFinished,
    CheckinGuidProjectMismatch,
    CheckinInvalidDuration,
    CheckinInvalidGuid,
    CheckinValidationFailed,
    MonitorDisabled,
    MonitorDisabledNoQuota,
    MonitorInvalidConfig,
    MonitorInvalidEnvironment,
    MonitorLimitExceeded,
    MonitorNotFound,
    MonitorOverQuota,
    MonitorEnvironmentLimitExceeded,
    MonitorEnvironmentRatelimited,
    OrganizationKillswitchEnabled,
}

impl ProcessingErrorType {
    pub const ALL: [ProcessingErrorType; 16] = [
        Self::CheckinEnvironmentMismatch,
        Self::CheckinFinished,
        Self::CheckinGuidProjectMismatch,
        Self::CheckinInvalidDuration,
        Self::CheckinInvalidGuid,
        Self::CheckinValidationFailed,
        Self::MonitorDisabled,
        Self::MonitorDisabledNoQuota,
        Self::MonitorInvalidConfig,
        Self::MonitorInvalidEnvironment,
        Self::MonitorLimitExceeded,
        Self::MonitorNotFound,
        Self::MonitorOverQuota,
        Self::MonitorEnvironmentLimitExceeded,
        Self::MonitorEnvironmentRatelimited,
        Self::OrganizationKillswitchEnabled,
    ];

    pub fn from_code(code: ErrorTypeCode) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn code(self) -> ErrorTypeCode {
        self as ErrorTypeCode
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CheckinEnvironmentMismatch => "Environment mismatch",
            Self::CheckinFinished => "Check-in already completed",
            Self::CheckinGuidProjectMismatch => "Check-in GUID belongs to a different project",
            Self::CheckinInvalidDuration => "Invalid duration",
            Self::CheckinInvalidGuid => "Invalid GUID",
            Self::CheckinValidationFailed => "Failed check-in validation",
            Self::MonitorDisabled => "Monitor disabled",
            Self::MonitorDisabledNoQuota => "Monitor disabled due to quota",
            Self::MonitorInvalidConfig => "Invalid monitor configuration",
            Self::MonitorInvalidEnvironment => "Invalid environment",
            Self::MonitorLimitExceeded => "Monitor limit exceeded",
            Self::MonitorNotFound => "Monitor not found",
            Self::MonitorOverQuota => "Monitor over quota",
            Self::MonitorEnvironmentLimitExceeded => "Environment limit exceeded",
            Self::MonitorEnvironmentRatelimited => "Environment rate limited",
            Self::OrganizationKillswitchEnabled => "Organization killswitch enabled",
        }
    }
}

/// Title for a type key, including codes this build does not know about
/// and values that are not integer codes at all
pub fn title_for_code(code: Option<&GroupKey>) -> String {
    match code {
        Some(key) => match key.as_code().and_then(ProcessingErrorType::from_code) {
            Some(kind) => kind.title().to_string(),
            None => format!("Unknown error (type {key})"),
        },
        None => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (index, kind) in ProcessingErrorType::ALL.iter().enumerate() {
            assert_eq!(kind.code(), index as ErrorTypeCode);
            assert_eq!(ProcessingErrorType::from_code(index as ErrorTypeCode), Some(*kind));
        }
    }

    #[test]
    fn test_titles_for_known_codes() {
        assert_eq!(title_for_code(Some(&GroupKey::Code(1))), "Check-in already completed");
        assert_eq!(title_for_code(Some(&GroupKey::Code(6))), "Monitor disabled");
    }

    #[test]
    fn test_titles_for_unknown_and_absent_codes() {
        assert_eq!(ProcessingErrorType::from_code(-1), None);
        assert_eq!(ProcessingErrorType::from_code(16), None);
        assert_eq!(title_for_code(Some(&GroupKey::Code(42))), "Unknown error (type 42)");
        assert_eq!(title_for_code(None), "Unknown error");
    }

    #[test]
    fn test_titles_for_non_integer_codes() {
        assert_eq!(
            title_for_code(Some(&GroupKey::Text("6".to_string()))),
            "Unknown error (type 6)"
        );
        assert_eq!(
            title_for_code(Some(&GroupKey::Raw("1.5".to_string()))),
            "Unknown error (type 1.5)"
        );
    }
}
