//! Benchmarks of the fixed-point constructions.
//!
//! Compares direct recursion with the deferred recursive fixed point and
//! both self-application formulations on the same inputs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fixrust::core::direct;
use fixrust::core::factory::{factorial_factory, fibonacci_factory};
use fixrust::core::fix::{fix_thunked, y, y_closure};
use fixrust::core::func::factory;

/// Factorial of 20: twenty unfoldings per call.
fn bench_factorial(c: &mut Criterion) {
    let thunked = fix_thunked(factory(factorial_factory));
    let named = y()(factory(factorial_factory));
    let literal = y_closure()(factory(factorial_factory));

    c.bench_function("factorial_20_direct", |b| b.iter(|| direct::factorial(black_box(20))));
    c.bench_function("factorial_20_fix_thunked", |b| b.iter(|| thunked(black_box(20))));
    c.bench_function("factorial_20_y", |b| b.iter(|| named(black_box(20))));
    c.bench_function("factorial_20_y_closure", |b| b.iter(|| literal(black_box(20))));
}

/// Fibonacci of 15: exponential call tree, dominated by unfolding cost.
fn bench_fibonacci(c: &mut Criterion) {
    let named = y()(factory(fibonacci_factory));

    c.bench_function("fibonacci_15_direct", |b| b.iter(|| direct::fibonacci(black_box(15))));
    c.bench_function("fibonacci_15_y", |b| b.iter(|| named(black_box(15))));
}

criterion_group!(benches, bench_factorial, bench_fibonacci);
criterion_main!(benches);
