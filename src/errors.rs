use axum::http::StatusCode;
use thiserror::Error;

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

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Why a stored record could not be read. Never leaves the store: every
/// variant degrades to the default record.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no stored record")]
    Missing,
    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse record: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stored record is not a JSON object")]
    Shape,
}
