//! Stay pricing engine for the ChillSpace marketplace.
//!
//! Validates requested date ranges and guest counts against a listing
//! and itemizes the stay price (nights, nightly subtotal, fees, total).
//! The booking and property-details screens call this over HTTP/JSON.

pub mod calculators;
pub mod engine;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use engine::{compute_breakdown, price_for, validate, ValidationError};
pub use models::{DateRange, PriceBreakdown, Property, ServiceFee, StayRequest, StaySelection};
pub use routes::router;
