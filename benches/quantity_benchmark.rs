// ============================================================================
// Quantity Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Addition through unit conversion, scalar multiplication
// 2. Conversion - Rescaling between units of one dimension
// 3. Comparison - Unit-aware equality and ordering
// 4. Rounding - Half-away-from-zero rounding at various precisions
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use unit_quantity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Si {
    Meter,
    Centimeter,
    Kilometer,
}

impl Si {
    fn factor(self) -> Decimal {
        match self {
            Si::Meter => Decimal::ONE,
            Si::Centimeter => Decimal::new(1, 2),
            Si::Kilometer => Decimal::from(1000),
        }
    }
}

impl Unit for Si {
    fn is_convertible(&self, _other: &Self) -> bool {
        true
    }

    fn convert(&self, amount: Decimal, to: &Self) -> Decimal {
        amount * (self.factor() / to.factor())
    }
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    group.bench_function("same_unit", |b| {
        let lhs = Quantity::new(Decimal::new(123_456, 3), Si::Meter);
        let rhs = Quantity::new(Decimal::new(789_012, 3), Si::Meter);
        b.iter(|| black_box(black_box(lhs) + black_box(rhs)));
    });

    group.bench_function("cross_unit", |b| {
        let lhs = Quantity::new(Decimal::new(123_456, 3), Si::Meter);
        let rhs = Quantity::new(Decimal::new(789_012, 1), Si::Centimeter);
        b.iter(|| black_box(black_box(lhs) + black_box(rhs)));
    });

    group.finish();
}

fn benchmark_scalar_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_multiplication");
    let q = Quantity::new(Decimal::new(123_456, 3), Si::Meter);

    group.bench_function("i64", |b| {
        b.iter(|| black_box(black_box(q) * black_box(7i64)));
    });

    group.bench_function("f64", |b| {
        b.iter(|| black_box(black_box(q) * black_box(2.5f64)));
    });

    group.bench_function("decimal", |b| {
        let factor = Decimal::new(25, 1);
        b.iter(|| black_box(black_box(q) * black_box(factor)));
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for (name, target) in [("to_centimeter", Si::Centimeter), ("to_kilometer", Si::Kilometer)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &target, |b, &target| {
            let q = Quantity::new(Decimal::new(123_456, 3), Si::Meter);
            b.iter(|| black_box(black_box(q).convert_to(target)));
        });
    }

    group.finish();
}

// ============================================================================
// Comparison and Rounding Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    let lhs = Quantity::new(Decimal::new(123_456, 3), Si::Meter);
    let rhs = Quantity::new(Decimal::new(12_345_600, 1), Si::Centimeter);

    group.bench_function("equality_cross_unit", |b| {
        b.iter(|| black_box(black_box(lhs) == black_box(rhs)));
    });

    group.bench_function("ordering_cross_unit", |b| {
        b.iter(|| black_box(black_box(lhs) < black_box(rhs)));
    });

    group.finish();
}

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");
    let q = Quantity::new(Decimal::new(123_456_789, 6), Si::Meter);

    for precision in [0u32, 2, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| {
                b.iter(|| black_box(black_box(q).rounded(precision)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_addition,
    benchmark_scalar_multiplication,
    benchmark_conversion,
    benchmark_comparison,
    benchmark_rounding,
);
criterion_main!(benches);
