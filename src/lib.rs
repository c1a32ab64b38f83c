// ============================================================================
// Unit Quantity Library
// Exact decimal quantities with unit-aware arithmetic
// ============================================================================

//! # Unit Quantity
//!
//! A precise, unit-aware decimal quantity library: [`Quantity`] pairs an
//! exact decimal amount with a unit and supports arithmetic, comparison,
//! conversion, and rounding with no binary floating-point error.
//!
//! ## Features
//!
//! - **Exact decimal amounts** backed by `rust_decimal` (no `f64` drift)
//! - **Unit-aware operators** that convert operands before adding,
//!   subtracting, or comparing
//! - **Pluggable unit systems** through the minimal [`Unit`] capability
//!   trait; no unit catalog is baked in
//! - **Fail-fast contracts** for inconvertible-unit misuse, with equality as
//!   the one graceful exception
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use unit_quantity::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Length {
//!     Meter,
//!     Centimeter,
//! }
//!
//! impl Unit for Length {
//!     fn is_convertible(&self, _other: &Self) -> bool {
//!         true // single dimension
//!     }
//!
//!     fn convert(&self, amount: Decimal, to: &Self) -> Decimal {
//!         match (self, to) {
//!             (Length::Meter, Length::Centimeter) => amount * Decimal::from(100),
//!             (Length::Centimeter, Length::Meter) => amount / Decimal::from(100),
//!             _ => amount,
//!         }
//!     }
//! }
//!
//! let total = Quantity::from_i64(1, Length::Meter)
//!     + Quantity::from_i64(50, Length::Centimeter);
//!
//! // Left operand's unit wins
//! assert_eq!(*total.unit(), Length::Meter);
//! assert_eq!(total, Quantity::new(Decimal::new(15, 1), Length::Meter));
//! ```

pub mod quantity;
pub mod unit;

// Re-exports for convenience
pub mod prelude {
    pub use crate::quantity::Quantity;
    pub use crate::unit::Unit;
}
