//! Error codes and exit status for triagectl
//!
//! Standard exit codes for the different failure modes.

use triage_common::error::TriageError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when no usable problem input was supplied
pub const EXIT_MISSING_INPUT: i32 = 64;

/// Exit code when the API returned an undecodable response
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the diagnostics API is unavailable/unreachable
pub const EXIT_API_UNAVAILABLE: i32 = 70;

/// Map a failure to its process exit code.
pub fn exit_code_for(error: &TriageError) -> i32 {
    match error {
        TriageError::MissingInput => EXIT_MISSING_INPUT,
        TriageError::Parse(_) | TriageError::Json(_) => EXIT_INVALID_RESPONSE,
        TriageError::ApiConnectivity(_) => EXIT_API_UNAVAILABLE,
        TriageError::ApiRequest(_) | TriageError::NoResults | TriageError::Io(_) => {
            EXIT_GENERAL_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_classes_map_to_distinct_codes() {
        assert_eq!(exit_code_for(&TriageError::MissingInput), EXIT_MISSING_INPUT);
        assert_eq!(
            exit_code_for(&TriageError::Parse("bad shape".into())),
            EXIT_INVALID_RESPONSE
        );
        assert_eq!(
            exit_code_for(&TriageError::ApiConnectivity("refused".into())),
            EXIT_API_UNAVAILABLE
        );
        assert_eq!(exit_code_for(&TriageError::NoResults), EXIT_GENERAL_ERROR);
        assert_eq!(
            exit_code_for(&TriageError::ApiRequest("403 Forbidden".into())),
            EXIT_GENERAL_ERROR
        );
    }
}
