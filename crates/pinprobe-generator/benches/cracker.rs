//! Benchmarks for PIN candidate generation.
//!
//! # Benchmarks
//!
//! - **`sequence_2580`**: full sequence-preserving expansion of `2580`
//!   (4 x 5 x 5 x 2 = 200 candidates).
//! - **`brute_force_147`**: full brute force over `147` (in-play set of 6
//!   digits, 216 candidates).
//! - **`brute_force_first_100`**: the first 100 candidates of a brute-force
//!   run over an 8-digit PIN, exercising the lazy pull path without paying
//!   for the full space.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench cracker
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use pinprobe_generator::{Pin, PinCracker};

fn bench_sequence(c: &mut Criterion) {
    let cracker = PinCracker::new();
    let pin: Pin = "2580".parse().unwrap();

    c.bench_function("sequence_2580", |b| {
        b.iter(|| {
            let candidates: Vec<_> = cracker.crack_pin(hint::black_box(&pin)).unwrap().collect();
            hint::black_box(candidates)
        });
    });
}

fn bench_brute_force(c: &mut Criterion) {
    let cracker = PinCracker::new().with_sequence(false);
    let pin: Pin = "147".parse().unwrap();

    c.bench_function("brute_force_147", |b| {
        b.iter(|| {
            let candidates: Vec<_> = cracker.crack_pin(hint::black_box(&pin)).unwrap().collect();
            hint::black_box(candidates)
        });
    });
}

fn bench_brute_force_lazy(c: &mut Criterion) {
    let cracker = PinCracker::new().with_sequence(false);
    let pin: Pin = "25802580".parse().unwrap();

    c.bench_function("brute_force_first_100", |b| {
        b.iter(|| {
            let candidates: Vec<_> = cracker
                .crack_pin(hint::black_box(&pin))
                .unwrap()
                .take(100)
                .collect();
            hint::black_box(candidates)
        });
    });
}

criterion_group!(
    benches,
    bench_sequence,
    bench_brute_force,
    bench_brute_force_lazy
);
criterion_main!(benches);
