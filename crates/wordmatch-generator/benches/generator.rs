//! Benchmarks for board generation.
//!
//! # Benchmarks
//!
//! - **`generator_five_categories`**: 8x8 boards from five categories, the
//!   default game setup.
//! - **`generator_three_categories`**: 8x8 boards from three categories, where
//!   redraws are far more frequent.
//!
//! Fixed seeds keep the measured boards identical between runs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use wordmatch_catalog::TokenCatalog;
use wordmatch_generator::{BoardGenerator, BoardSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_with_categories(c: &mut Criterion, name: &str, categories: &[&str]) {
    let catalog = TokenCatalog::builtin();
    let palette = catalog.palette(categories).unwrap();
    let generator = BoardGenerator::new(&palette, 8, 8).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generator_five_categories(c: &mut Criterion) {
    bench_with_categories(
        c,
        "generator_five_categories",
        &["fruit", "vegetable", "meat", "fish", "drink"],
    );
}

fn bench_generator_three_categories(c: &mut Criterion) {
    bench_with_categories(c, "generator_three_categories", &["fruit", "animal", "color"]);
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets =
        bench_generator_five_categories,
        bench_generator_three_categories
);
criterion_main!(benches);
