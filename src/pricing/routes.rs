//! HTTP surface for the pricing engine.
//!
//! A thin DTO shell: deserialize, run the pure engine with an injected
//! reference day, serialize. All rules live in [`engine`].
//!
//! [`engine`]: crate::pricing::engine

use axum::{routing::post, Json, Router};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::pricing::engine;
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::QuoteResponse;

pub fn router() -> Router {
    Router::new().route("/quote", post(quote))
}

/// `POST /api/pricing/quote`
///
/// 200 with an itemized quote, 422 with a validation kind the UI maps
/// to an inline field message, or 400 when the supplied property record
/// is malformed.
async fn quote(Json(req): Json<QuoteRequest>) -> Result<Json<QuoteResponse>> {
    // Reference day is part of the request so tests stay deterministic;
    // live callers omit it and get the current UTC calendar day.
    let today = req.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let stay = req.stay_request();
    let property = req.property.into_property();

    let integrity_errors = property.integrity_errors();
    if !integrity_errors.is_empty() {
        return Err(AppError::InvalidProperty {
            property_id: property.id,
            errors: integrity_errors,
        });
    }

    let range = engine::validate(stay.selection, stay.guests, &property, today)?;
    let breakdown = engine::compute_breakdown(range, &property);

    tracing::debug!(
        property_id = property.id,
        nights = breakdown.nights,
        total = %breakdown.total,
        "quote computed"
    );

    Ok(Json(QuoteResponse::new(
        property.id,
        range.check_in(),
        range.check_out(),
        stay.guests,
        &breakdown,
    )))
}
