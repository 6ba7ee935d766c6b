//! Domain types for stay pricing.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::money::Money;
use crate::pricing::calculators;

/// Ceiling for any single money field on a listing ($10,000,000.00).
///
/// Keeps every amount a validated stay can produce comfortably inside
/// the i64 cent range, so engine arithmetic never reaches the
/// saturation point of [`Money`].
pub const MAX_LISTING_AMOUNT: Money = Money::from_minor(1_000_000_000);

/// Ceiling for a rate-based service fee: 100% of the nightly subtotal.
pub const MAX_SERVICE_FEE_RATE: Decimal = Decimal::ONE;

/// Rental listing fields the engine prices against.
///
/// Supplied read-only by the marketplace backend via the calling screen;
/// the engine never fetches, caches, or mutates these.
#[derive(Debug, Clone)]
pub struct Property {
    pub id: i64,
    pub nightly_rate: Money,
    pub max_guests: i32,
    pub cleaning_fee: Money,
    pub service_fee: ServiceFee,
    /// ISO currency code shared by every amount on this listing.
    pub currency: String,
}

impl Property {
    /// Integrity checks for values the backend is supposed to guarantee.
    ///
    /// A non-empty result means the calling layer handed us a malformed
    /// record. That is a caller bug, not a user input error, and is
    /// reported through a different channel than [`ValidationError`].
    ///
    /// [`ValidationError`]: crate::pricing::engine::ValidationError
    pub fn integrity_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.nightly_rate <= Money::ZERO {
            errors.push("nightly_rate must be positive".to_string());
        } else if self.nightly_rate > MAX_LISTING_AMOUNT {
            errors.push("nightly_rate exceeds the listing maximum".to_string());
        }
        if self.max_guests < 1 {
            errors.push("max_guests must be at least one".to_string());
        }
        if self.cleaning_fee.is_negative() {
            errors.push("cleaning_fee must not be negative".to_string());
        } else if self.cleaning_fee > MAX_LISTING_AMOUNT {
            errors.push("cleaning_fee exceeds the listing maximum".to_string());
        }
        match &self.service_fee {
            ServiceFee::Fixed(amount) if amount.is_negative() => {
                errors.push("service_fee must not be negative".to_string());
            }
            ServiceFee::Fixed(amount) if *amount > MAX_LISTING_AMOUNT => {
                errors.push("service_fee exceeds the listing maximum".to_string());
            }
            ServiceFee::Rate(rate) if rate.is_sign_negative() => {
                errors.push("service_fee_rate must not be negative".to_string());
            }
            ServiceFee::Rate(rate) if *rate > MAX_SERVICE_FEE_RATE => {
                errors.push("service_fee_rate must not exceed 1".to_string());
            }
            _ => {}
        }
        errors
    }
}

/// Service fee policy attached to a listing.
#[derive(Debug, Clone)]
pub enum ServiceFee {
    /// Flat amount per stay.
    Fixed(Money),
    /// Fraction of the nightly subtotal (e.g. `0.12` for 12%).
    Rate(Decimal),
}

/// Raw date-picker state. Either end may still be unset while the user
/// is mid-selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaySelection {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// A validated stay window: check-out strictly after check-in.
///
/// Successful validation is the only way to obtain one, so pricing code
/// downstream never sees an inverted or zero-night range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Returns `None` unless `check_out` is strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        (check_out > check_in).then_some(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whole nights spanned by the window. At least 1 by construction.
    pub fn nights(&self) -> i64 {
        calculators::nights_between(self.check_in, self.check_out)
    }
}

/// What the booking and property-details screens ask to have priced.
#[derive(Debug, Clone, Copy)]
pub struct StayRequest {
    pub property_id: i64,
    pub selection: StaySelection,
    pub guests: i32,
}

/// Itemized price for a stay. A pure derived value recomputed on every
/// selection change; never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub nights: i64,
    pub nightly_rate: Money,
    /// `nights * nightly_rate`.
    pub nightly_subtotal: Money,
    pub cleaning_fee: Money,
    pub service_fee: Money,
    /// `nightly_subtotal + cleaning_fee + service_fee`, exact.
    pub total: Money,
    pub currency: String,
}
