use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MileageError {
    #[error("activity feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("athlete metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("no athlete found")]
    NoAthleteFound,

    #[error("malformed activity: {0}")]
    MalformedActivity(String),

    #[error("invalid week '{0}', expected 'current' or YYYY-MM-DD")]
    InvalidWeek(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("reload superseded by a newer request")]
    Superseded,
}

impl MileageError {
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::FeedUnavailable(msg.into())
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::MetadataUnavailable(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<MileageError> for AppError {
    fn from(err: MileageError) -> Self {
        match err {
            MileageError::InvalidWeek(_) => Self::bad_request(err.to_string()),
            MileageError::FeedUnavailable(_) => Self::unavailable(err.to_string()),
            MileageError::Superseded => Self::conflict(err.to_string()),
            other => Self::internal(other),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_week_maps_to_bad_request() {
        let err: AppError = MileageError::InvalidWeek("next-tuesday".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("next-tuesday"));
        assert!(err.message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn feed_failure_maps_to_service_unavailable() {
        let err: AppError = MileageError::feed("HTTP status 500").into();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message, "activity feed unavailable: HTTP status 500");
    }

    #[test]
    fn config_failure_is_internal() {
        let err: AppError = MileageError::config("PORT must be a number").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
