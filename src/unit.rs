// ============================================================================
// Unit Capability
// ============================================================================

use rust_decimal::Decimal;

/// Capability contract for measurement units.
///
/// A `Unit` is an opaque handle supplied by the surrounding unit system; this
/// crate never defines a catalog of units itself. Any concrete unit system
/// (SI, imperial, custom) can plug in by implementing the two operations
/// below.
///
/// # Contract
///
/// - `is_convertible` must be symmetric and reflexive: it is a same-dimension
///   check (two length units are convertible, a length and a duration are
///   not).
/// - `convert` is only defined when `is_convertible(self, to)` holds; callers
///   check first. For linear unit systems it must be the mathematically exact
///   rescale (`amount * conversion_factor(self, to)`), so that round-trip
///   conversions with exact factors lose nothing.
pub trait Unit {
    /// Whether `self` and `other` belong to the same dimension and can be
    /// rescaled into one another.
    fn is_convertible(&self, other: &Self) -> bool;

    /// Rescale an amount expressed in `self` into `to`.
    ///
    /// Unspecified when the units are not convertible; callers must check
    /// `is_convertible` first.
    fn convert(&self, amount: Decimal, to: &Self) -> Decimal;
}
