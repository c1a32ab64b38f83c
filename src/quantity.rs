// ============================================================================
// Quantity Value Type
// Exact decimal amounts paired with a unit
// ============================================================================

use crate::unit::Unit;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable pairing of an exact decimal amount and a unit.
///
/// Amounts are stored as [`rust_decimal::Decimal`], never as binary floating
/// point, so arithmetic and conversions accumulate no representational drift.
/// Every operation returns a fresh `Quantity`; nothing is ever mutated in
/// place.
///
/// Arithmetic and comparison are unit-aware: operands are converted through
/// the [`Unit`] capability before the decimal operation runs.
///
/// # Contracts
///
/// Mixing inconvertible units in addition, subtraction, conversion, or
/// ordering is a programmer error and panics. Check
/// [`Unit::is_convertible`] first when graceful handling is needed. Equality
/// is the one exception: quantities with inconvertible units compare as
/// simply not equal.
///
/// # Example
/// ```ignore
/// use unit_quantity::prelude::*;
///
/// let total = Quantity::from_i64(1, Length::Meter)
///     + Quantity::from_i64(50, Length::Centimeter);
/// assert_eq!(total.to_string(), "1.5 meter");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<U> {
    amount: Decimal,
    unit: U,
}

impl<U> Quantity<U> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a quantity from an exact decimal amount and a unit.
    #[inline]
    pub const fn new(amount: Decimal, unit: U) -> Self {
        Self { amount, unit }
    }

    /// Create a quantity from an integer amount.
    #[inline]
    pub fn from_i64(amount: i64, unit: U) -> Self {
        Self::new(Decimal::from(amount), unit)
    }

    /// Create a quantity from a double-precision float.
    ///
    /// The float is normalized through its canonical decimal representation,
    /// so no binary rounding error is introduced beyond what the float
    /// itself already carries. Returns `None` for NaN or infinite inputs.
    #[inline]
    pub fn from_f64(amount: f64, unit: U) -> Option<Self> {
        Decimal::from_f64(amount).map(|amount| Self::new(amount, unit))
    }

    /// Create a quantity from a single-precision float.
    ///
    /// Returns `None` for NaN or infinite inputs.
    #[inline]
    pub fn from_f32(amount: f32, unit: U) -> Option<Self> {
        Decimal::from_f32(amount).map(|amount| Self::new(amount, unit))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The unit the amount is expressed in.
    #[inline]
    pub const fn unit(&self) -> &U {
        &self.unit
    }

    /// Round the amount to `precision` fractional digits, same unit.
    ///
    /// Rounds to nearest with ties broken away from zero. Rounding never
    /// fails: inexact results are accepted and a precision larger than the
    /// amount's scale leaves it unchanged.
    #[inline]
    pub fn rounded(self, precision: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero),
            unit: self.unit,
        }
    }

    #[inline]
    fn scale_by(self, factor: Decimal) -> Self {
        Self {
            amount: self.amount * factor,
            unit: self.unit,
        }
    }
}

impl<U: Unit> Quantity<U> {
    /// Re-express this quantity in `target`.
    ///
    /// # Panics
    /// Panics if the units are not convertible.
    pub fn convert_to(self, target: U) -> Self {
        assert!(
            self.unit.is_convertible(&target),
            "cannot convert between inconvertible units"
        );
        let converted = self.unit.convert(self.amount, &target);
        tracing::trace!(from = %self.amount, to = %converted, "unit conversion");
        Self {
            amount: converted,
            unit: target,
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    /// Add two quantities; the right operand is converted into the left
    /// operand's unit first, and the result carries the left operand's unit.
    ///
    /// # Panics
    /// Panics if the units are not convertible.
    fn add(self, rhs: Self) -> Self::Output {
        assert!(
            self.unit.is_convertible(&rhs.unit),
            "cannot add quantities with inconvertible units"
        );
        let converted = rhs.unit.convert(rhs.amount, &self.unit);
        Self {
            amount: self.amount + converted,
            unit: self.unit,
        }
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    /// Subtract `rhs`, converted into the left operand's unit first; the
    /// result carries the left operand's unit.
    ///
    /// # Panics
    /// Panics if the units are not convertible.
    fn sub(self, rhs: Self) -> Self::Output {
        assert!(
            self.unit.is_convertible(&rhs.unit),
            "cannot subtract quantities with inconvertible units"
        );
        let converted = rhs.unit.convert(rhs.amount, &self.unit);
        Self {
            amount: self.amount - converted,
            unit: self.unit,
        }
    }
}

impl<U> Neg for Quantity<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            unit: self.unit,
        }
    }
}

// ============================================================================
// Scalar Multiplication
// Both operand orders are supported and produce identical results.
// ============================================================================

impl<U> Mul<Decimal> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Decimal) -> Self::Output {
        self.scale_by(rhs)
    }
}

impl<U> Mul<Quantity<U>> for Decimal {
    type Output = Quantity<U>;

    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs.scale_by(self)
    }
}

impl<U> Mul<i64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.scale_by(Decimal::from(rhs))
    }
}

impl<U> Mul<Quantity<U>> for i64 {
    type Output = Quantity<U>;

    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs.scale_by(Decimal::from(self))
    }
}

impl<U> Mul<f64> for Quantity<U> {
    type Output = Self;

    /// # Panics
    /// Panics if the scalar is NaN or infinite.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale_by(Decimal::from_f64(rhs).expect("finite f64 scalar"))
    }
}

impl<U> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    /// # Panics
    /// Panics if the scalar is NaN or infinite.
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs.scale_by(Decimal::from_f64(self).expect("finite f64 scalar"))
    }
}

impl<U> Mul<f32> for Quantity<U> {
    type Output = Self;

    /// # Panics
    /// Panics if the scalar is NaN or infinite.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale_by(Decimal::from_f32(rhs).expect("finite f32 scalar"))
    }
}

impl<U> Mul<Quantity<U>> for f32 {
    type Output = Quantity<U>;

    /// # Panics
    /// Panics if the scalar is NaN or infinite.
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs.scale_by(Decimal::from_f32(self).expect("finite f32 scalar"))
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<U: Unit> PartialEq for Quantity<U> {
    /// Unit-aware exact equality.
    ///
    /// Convertible operands are compared after converting the right operand
    /// into the left operand's unit. Inconvertible operands are simply not
    /// equal; unlike the ordering operators this never panics.
    fn eq(&self, other: &Self) -> bool {
        if !self.unit.is_convertible(&other.unit) {
            return false;
        }
        self.amount == other.unit.convert(other.amount, &self.unit)
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    /// Unit-aware exact ordering. The left operand is converted into the
    /// right operand's unit, then amounts compare with no tolerance.
    ///
    /// # Panics
    /// Panics if the units are not convertible. Ordering does not degrade
    /// gracefully the way equality does.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        assert!(
            self.unit.is_convertible(&other.unit),
            "cannot order quantities with inconvertible units"
        );
        let converted = self.unit.convert(self.amount, &other.unit);
        converted.partial_cmp(&other.amount)
    }
}

// ============================================================================
// Display
// ============================================================================

impl<U: fmt::Display> fmt::Display for Quantity<U> {
    /// Formats as `"<amount> <unit>"` with the amount in canonical form
    /// (trailing fractional zeros stripped).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.unit)
    }
}

// ============================================================================
// Tests
// ============================================================================
