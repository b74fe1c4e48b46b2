//! Error conversion for MCP tool results

use nomad_core::NomadError;
use rmcp::ErrorData;

/// Maps a planner error to an MCP error. Validation failures become
/// `invalid_params` so the client can correct its arguments.
pub fn to_mcp_error(message: &str, error: &NomadError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_validation_errors_are_invalid_params() {
        let err = NomadError::invalid_input("days").with_reason("Please enter a valid number of days.");
        let mapped = to_mcp_error("Failed to create itinerary", &err);
        assert_eq!(mapped.code, ErrorCode::INVALID_PARAMS);
        assert!(mapped.message.contains("Please enter a valid number of days."));

        let mapped = to_mcp_error("Failed to load", &NomadError::ItineraryNotFound { id: 3 });
        assert_eq!(mapped.code, ErrorCode::INTERNAL_ERROR);
    }
}
