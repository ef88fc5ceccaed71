use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, ToPrimitive};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

const CENTS_PER_UNIT: i64 = 100;

/// A price or order total, stored as a whole number of cents.
///
/// Menu prices are written as decimals (`25.99`), but summing them as floats drifts
/// (`25.99 + 25.99` is not `51.98` in binary floating point). Keeping cents in an `i64`
/// makes totals exact and comparisons against zero unambiguous.
///
/// Negative amounts are allowed; the ledger does not police prices unless asked to.
/// Addition saturates at the `i64` bounds instead of overflowing.
///
/// # Examples
/// ```
/// use order_ledger::common::money::Money;
///
/// let steak: Money = "25.99".parse().unwrap();
/// assert_eq!(steak.cents(), 2599);
/// assert_eq!((steak + steak).to_string(), "51.98");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(CENTS_PER_UNIT);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        // Ties round away from zero, so anything under half a cent becomes zero.
        let cents =
            bd.with_scale_round(2, RoundingMode::HalfUp) * BigDecimal::from(CENTS_PER_UNIT);
        let value = cents
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
