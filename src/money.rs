//! Minor-unit money arithmetic.
//!
//! All pricing math runs on integer cents so totals are exact; decimal
//! major units appear only at the serde boundary.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use chillspace_pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// A monetary amount in minor units (cents).
///
/// Currency is carried separately (on the property and in response DTOs);
/// `Money` is just the exact quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Wrap an amount already expressed in minor units.
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// The raw minor-unit amount.
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Convert a major-unit decimal (e.g. `175.00`) to minor units.
    ///
    /// Anything below cent precision is banker's-rounded away first, so
    /// `from_decimal(dec!(18.525))` yields 1852 cents. Amounts beyond
    /// the `i64` cent range saturate toward the matching extreme, which
    /// keeps them far outside the listing maximums that validation
    /// enforces - they get rejected there instead of collapsing to zero.
    pub fn from_decimal(amount: Decimal) -> Self {
        let cents = round_money(amount, 2).checked_mul(Decimal::ONE_HUNDRED);
        match cents.and_then(|c| c.to_i64()) {
            Some(minor) => Money(minor),
            None if amount.is_sign_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    /// Major-unit decimal with two fractional digits (`1852` -> `18.52`).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

// Saturating arithmetic: validated listings are bounded well below the
// i64 cent range, so saturation is unreachable for any stay that passed
// validation and an over-range operand can never wrap into a plausible
// total.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0.saturating_mul(rhs))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
