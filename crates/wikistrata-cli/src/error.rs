use thiserror::Error;

use wikistrata_core::{WikidataError, WikidataErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", format_query_error(.0))]
    Query(#[from] WikidataError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Query(error) => match error.kind() {
                WikidataErrorKind::InvalidRequest | WikidataErrorKind::EndpointNotFound => 2,
                WikidataErrorKind::RateLimit
                | WikidataErrorKind::ServiceUnavailable
                | WikidataErrorKind::ApiError => 3,
                WikidataErrorKind::InvalidResponse
                | WikidataErrorKind::InvalidPeriodData
                | WikidataErrorKind::TransformError => 4,
                WikidataErrorKind::Unknown => 1,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

fn format_query_error(error: &WikidataError) -> String {
    format!("[{}] {}", error.code(), error.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_availability_maps_to_exit_code_3() {
        let error = CliError::from(WikidataError::from_status(503));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn request_side_errors_map_to_exit_code_2() {
        let error = CliError::from(WikidataError::from_status(400));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn data_errors_map_to_exit_code_4() {
        let error = CliError::from(WikidataError::invalid_response("garbage body"));
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn query_errors_render_with_their_code() {
        let error = CliError::from(WikidataError::from_status(429));
        assert!(error.to_string().starts_with("[RATE_LIMIT]"));
    }
}
