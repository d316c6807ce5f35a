//! Error types for the Pixora client.
//!
//! Two kinds of failure reach the view controller:
//!
//! | Kind | Type | Handling |
//! |------|------|----------|
//! | Fetch failure | [`ApiError`] | Stored as a message in the error slot |
//! | Validation failure | [`FilterError`] | Invalid value is silently dropped |
//!
//! Fetch failures are caught where the async call completes and never
//! propagate past the controller. There is no automatic retry.

mod api;
mod filter;
mod kind;

pub use api::ApiError;
pub use filter::FilterError;
pub use kind::ErrorKind;

/// Result alias for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_kinds_are_split_by_source() {
        let fetch: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(fetch.kind(), ErrorKind::FetchFailure);

        let server_validation = ApiError::from_status(422, "bad year");
        assert_eq!(server_validation.kind(), ErrorKind::FetchFailure);

        let input = FilterError::YearOutOfRange(1850);
        assert_eq!(input.kind(), ErrorKind::ValidationFailure);
    }

    #[test]
    fn test_every_api_error_has_user_message() {
        let errors = vec![
            ApiError::Network("down".to_string()),
            ApiError::from_status(500, "boom"),
            ApiError::from_status(404, "gone"),
            ApiError::from_status(400, "bad"),
            ApiError::InvalidResponse("not json".to_string()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty(), "empty message for {:?}", err);
        }
    }
}
