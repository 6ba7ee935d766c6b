//! Stay validation and quoting.
//!
//! The single place date-range and guest rules live; every screen that
//! needs a price or a range check goes through [`price_for`]. All
//! functions are pure: the reference "today" for the past-date check is
//! a parameter, never an ambient clock read.

use chrono::NaiveDate;

use crate::pricing::calculators::{nightly_subtotal, service_fee_amount};
use crate::pricing::models::{DateRange, PriceBreakdown, Property, StayRequest, StaySelection};

/// User-correctable validation failures.
///
/// Exactly one is reported per attempt, in the order the checks below
/// run; the UI maps each kind to an inline message next to the
/// offending field. The engine defines no user-facing message text,
/// only the kind (the `Display` strings are log-grade).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("check-in date is missing")]
    MissingCheckIn,

    #[error("check-out date is missing")]
    MissingCheckOut,

    #[error("check-out must be after check-in")]
    InvalidRange,

    #[error("check-in is before the current day")]
    PastDate,

    #[error("guest count exceeds the property maximum")]
    GuestCountExceeded,

    #[error("guest count must be at least one")]
    GuestCountInvalid,
}

impl ValidationError {
    /// Stable identifier the calling UI switches on.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingCheckIn => "missing_check_in",
            ValidationError::MissingCheckOut => "missing_check_out",
            ValidationError::InvalidRange => "invalid_range",
            ValidationError::PastDate => "past_date",
            ValidationError::GuestCountExceeded => "guest_count_exceeded",
            ValidationError::GuestCountInvalid => "guest_count_invalid",
        }
    }
}

/// Validate a stay selection against a property.
///
/// Checks run in a fixed order and stop at the first failure:
/// missing check-in, missing check-out, inverted or zero-night range,
/// check-in before `today`, guests over the property maximum, guests
/// below one. On success the selection is promoted to a [`DateRange`].
pub fn validate(
    selection: StaySelection,
    guests: i32,
    property: &Property,
    today: NaiveDate,
) -> Result<DateRange, ValidationError> {
    let check_in = selection.check_in.ok_or(ValidationError::MissingCheckIn)?;
    let check_out = selection.check_out.ok_or(ValidationError::MissingCheckOut)?;
    let range = DateRange::new(check_in, check_out).ok_or(ValidationError::InvalidRange)?;
    if check_in < today {
        return Err(ValidationError::PastDate);
    }
    if guests > property.max_guests {
        return Err(ValidationError::GuestCountExceeded);
    }
    if guests < 1 {
        return Err(ValidationError::GuestCountInvalid);
    }
    Ok(range)
}

/// Itemize the price of a validated stay.
///
/// The [`DateRange`] argument carries the precondition: only validation
/// can produce one, so this function never sees an invalid window.
pub fn compute_breakdown(range: DateRange, property: &Property) -> PriceBreakdown {
    debug_assert!(
        property.integrity_errors().is_empty(),
        "malformed property {} reached compute_breakdown",
        property.id
    );

    let nights = range.nights();
    let subtotal = nightly_subtotal(nights, property.nightly_rate);
    let service_fee = service_fee_amount(&property.service_fee, subtotal);

    PriceBreakdown {
        nights,
        nightly_rate: property.nightly_rate,
        nightly_subtotal: subtotal,
        cleaning_fee: property.cleaning_fee,
        service_fee,
        total: subtotal + property.cleaning_fee + service_fee,
        currency: property.currency.clone(),
    }
}

/// Validate then price: the entry point the booking and property-details
/// screens use.
pub fn price_for(
    request: &StayRequest,
    property: &Property,
    today: NaiveDate,
) -> Result<PriceBreakdown, ValidationError> {
    debug_assert_eq!(request.property_id, property.id);
    let range = validate(request.selection, request.guests, property, today)?;
    Ok(compute_breakdown(range, property))
}
