use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type.
///
/// Validation and referential failures are client errors (400); store and
/// configuration failures are server errors (500). Absence of a previous
/// bill is `Ok(None)` at the store layer and never travels through here.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Missing or malformed required input; message names the offending field
    #[error("{0}")]
    Validation(String),

    /// A bill write referenced a house that does not exist.
    /// The message text is part of the wire contract.
    #[error("Invalid houseId")]
    InvalidHouseReference,

    /// Store unreachable or a query rejected for non-constraint reasons
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bad environment variables, missing rate columns, and the like
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidHouseReference => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
