//! Error handling for the pricing service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::engine::ValidationError;
use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User-correctable stay validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed property record from the calling layer. A backend bug,
    /// not a user mistake, so it gets a different status and is logged
    /// at error level.
    #[error("property {property_id} failed integrity checks")]
    InvalidProperty {
        property_id: i64,
        errors: Vec<String>,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                PricingErrorResponse {
                    error_type: err.kind().to_string(),
                    message: err.to_string(),
                    details: None,
                },
            ),
            AppError::InvalidProperty { property_id, errors } => {
                tracing::error!(property_id, ?errors, "malformed property record");
                (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse {
                        error_type: "invalid_property".to_string(),
                        message: format!("property {} failed integrity checks", property_id),
                        details: Some(serde_json::json!({ "errors": errors })),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
