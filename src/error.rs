//! Error handling for the application

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Pricing(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Pricing(e) if e.is_client_error() => PricingErrorResponse {
                error_type: e.error_type().to_string(),
                message: e.to_string(),
            },
            AppError::Pricing(e) => {
                tracing::error!("Pricing configuration error: {}", e);
                PricingErrorResponse {
                    error_type: e.error_type().to_string(),
                    message: "Pricing is not configured".to_string(),
                }
            }
            AppError::InvalidQuery(rejection) => PricingErrorResponse {
                error_type: "invalid_query".to_string(),
                message: rejection.body_text(),
            },
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                PricingErrorResponse {
                    error_type: "database_error".to_string(),
                    message: "Database error".to_string(),
                }
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {}", e);
                PricingErrorResponse {
                    error_type: "database_error".to_string(),
                    message: "Database error".to_string(),
                }
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                PricingErrorResponse {
                    error_type: "internal_error".to_string(),
                    message: "Internal error".to_string(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
