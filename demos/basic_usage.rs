// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;
use unit_quantity::prelude::*;

/// A small concrete unit system: two dimensions, linear factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Si {
    Meter,
    Centimeter,
    Kilometer,
    Second,
}

impl Si {
    fn dimension(self) -> u8 {
        match self {
            Si::Meter | Si::Centimeter | Si::Kilometer => 0,
            Si::Second => 1,
        }
    }

    fn factor(self) -> Decimal {
        match self {
            Si::Meter | Si::Second => Decimal::ONE,
            Si::Centimeter => Decimal::new(1, 2),
            Si::Kilometer => Decimal::from(1000),
        }
    }
}

impl Unit for Si {
    fn is_convertible(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
    }

    fn convert(&self, amount: Decimal, to: &Self) -> Decimal {
        amount * (self.factor() / to.factor())
    }
}

impl fmt::Display for Si {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Si::Meter => "meter",
            Si::Centimeter => "centimeter",
            Si::Kilometer => "kilometer",
            Si::Second => "second",
        };
        write!(f, "{}", name)
    }
}

fn main() {
    println!("=== Unit Quantity Example ===\n");

    // Mixed-unit arithmetic: the left operand's unit wins
    let total = Quantity::from_i64(1, Si::Meter) + Quantity::from_i64(50, Si::Centimeter);
    println!("1 meter + 50 centimeter = {}", total);

    // Conversion preserves the exact amount
    let in_cm = total.convert_to(Si::Centimeter);
    println!("... which is {}", in_cm);
    println!("... and back: {}\n", in_cm.convert_to(Si::Meter));

    // Scalar multiplication works from either side
    let lap = Quantity::new(Decimal::new(4125, 1), Si::Meter); // 412.5
    println!("one lap:  {}", lap);
    println!("ten laps: {}", 10i64 * lap);
    println!("half lap: {}\n", lap * 0.5f64);

    // Rounding is half-away-from-zero and never fails
    let reading = Quantity::from_f64(2.5, Si::Meter).unwrap();
    println!("{} rounded to whole meters: {}\n", reading, reading.rounded(0));

    // Comparison converts first
    let sprint = Quantity::from_i64(100, Si::Meter);
    let walk = Quantity::new(Decimal::new(5, 2), Si::Kilometer); // 0.05 km
    println!("{} < {} ? {}", sprint, walk, sprint < walk);

    // Equality degrades gracefully across dimensions
    let pause = Quantity::from_i64(100, Si::Second);
    println!("{} == {} ? {}", sprint, pause, sprint == pause);
}
