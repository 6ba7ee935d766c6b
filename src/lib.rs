//! Stay pricing service for the ChillSpace rental marketplace.
//!
//! The engine itself is a pure, synchronous library: [`pricing`] takes a
//! stay selection plus the property record the caller already holds and
//! returns either an itemized [`PriceBreakdown`] or a single
//! [`ValidationError`]. The Axum layer on top exists so the browser
//! screens can fetch quotes over JSON; it adds no rules of its own.

pub mod error;
pub mod money;
pub mod pricing;
pub mod routes;

pub use money::{round_money, Money};
pub use pricing::{
    compute_breakdown, price_for, validate, DateRange, PriceBreakdown, Property, ServiceFee,
    StayRequest, StaySelection, ValidationError,
};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// CORS is permissive: the SPA is served from a different origin and
/// the quote endpoint is read-only computation.
pub fn app() -> Router {
    Router::new()
        .merge(routes::router())
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
