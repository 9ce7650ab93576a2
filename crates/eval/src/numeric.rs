//! Share arithmetic.
//!
//! Shares are unreduced `u64` fractions so every heir of one computation
//! carries a denominator built from the same base. All integer arithmetic is
//! checked. Percentages use `rust_decimal::Decimal` with
//! `RoundingStrategy::MidpointNearestEven`; no `f64` anywhere in the share
//! path.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::types::EvalError;

/// An unreduced fraction of the estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::new(0, 1);
    pub const WHOLE: Fraction = Fraction::new(1, 1);

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Exact sum, reduced to lowest terms.
    pub fn checked_add(self, other: Fraction) -> Result<Fraction, EvalError> {
        let g = gcd(self.denominator, other.denominator);
        let lhs_scale = other.denominator / g;
        let rhs_scale = self.denominator / g;
        let denominator = checked_mul(self.denominator, lhs_scale, "share sum denominator")?;
        let numerator = checked_mul(self.numerator, lhs_scale, "share sum numerator")?
            .checked_add(checked_mul(other.numerator, rhs_scale, "share sum numerator")?)
            .ok_or_else(|| EvalError::Overflow {
                message: "share sum numerator".to_string(),
            })?;
        Ok(Fraction::new(numerator, denominator).reduced())
    }

    pub fn reduced(self) -> Fraction {
        let g = gcd(self.numerator, self.denominator);
        if g <= 1 {
            return self;
        }
        Fraction::new(self.numerator / g, self.denominator / g)
    }

    /// True when the fraction equals 1 regardless of how it is written.
    pub fn is_whole(self) -> bool {
        self.numerator == self.denominator
    }

    /// `n/d`, or the bare numerator when the denominator is 1.
    pub fn to_fraction_string(self) -> String {
        if self.denominator == 1 {
            return self.numerator.to_string();
        }
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Share as a percentage of the estate, rounded to two places.
    pub fn to_percentage(self) -> Result<Decimal, EvalError> {
        let scaled = Decimal::from(self.numerator)
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| EvalError::Overflow {
                message: format!("percentage of {}", self.to_fraction_string()),
            })?;
        let pct = scaled
            .checked_div(Decimal::from(self.denominator))
            .ok_or_else(|| EvalError::Overflow {
                message: format!("percentage of {}", self.to_fraction_string()),
            })?;
        let mut rounded = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(2);
        Ok(rounded)
    }

    /// Percentage rendered as `12.34%`.
    pub fn to_percentage_string(self) -> Result<String, EvalError> {
        Ok(format!("{}%", self.to_percentage()?))
    }
}

/// Multiply share components, failing on overflow.
pub fn checked_mul(left: u64, right: u64, what: &str) -> Result<u64, EvalError> {
    left.checked_mul(right).ok_or_else(|| EvalError::Overflow {
        message: format!("{} overflow ({} x {})", what, left, right),
    })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_string_keeps_unreduced_form() {
        assert_eq!(Fraction::new(1, 4).to_fraction_string(), "1/4");
        assert_eq!(Fraction::new(2, 4).to_fraction_string(), "2/4");
        assert_eq!(Fraction::WHOLE.to_fraction_string(), "1");
    }

    #[test]
    fn percentage_two_places() {
        assert_eq!(Fraction::new(1, 2).to_percentage_string().unwrap(), "50.00%");
        assert_eq!(Fraction::new(1, 3).to_percentage_string().unwrap(), "33.33%");
        assert_eq!(Fraction::new(2, 3).to_percentage_string().unwrap(), "66.67%");
        assert_eq!(Fraction::WHOLE.to_percentage_string().unwrap(), "100.00%");
        assert_eq!(Fraction::ZERO.to_percentage_string().unwrap(), "0.00%");
    }

    #[test]
    fn percentage_midpoint_rounds_to_even() {
        // 1/32 = 3.125%, 3/32 = 9.375%
        assert_eq!(Fraction::new(1, 32).to_percentage_string().unwrap(), "3.12%");
        assert_eq!(Fraction::new(3, 32).to_percentage_string().unwrap(), "9.38%");
    }

    #[test]
    fn sum_is_exact_and_reduced() {
        let total = Fraction::new(1, 3)
            .checked_add(Fraction::new(1, 3))
            .unwrap()
            .checked_add(Fraction::new(1, 3))
            .unwrap();
        assert_eq!(total, Fraction::WHOLE);
        let total = Fraction::new(1, 2).checked_add(Fraction::new(1, 4)).unwrap();
        assert_eq!(total, Fraction::new(3, 4));
        assert!(!total.is_whole());
    }

    #[test]
    fn sum_from_zero() {
        let total = Fraction::ZERO.checked_add(Fraction::new(2, 8)).unwrap();
        assert_eq!(total, Fraction::new(1, 4));
    }

    #[test]
    fn mul_overflow_detected() {
        let err = checked_mul(u64::MAX, 2, "base denominator").unwrap_err();
        assert!(matches!(err, EvalError::Overflow { .. }));
    }
}
