//! Benchmarks for swaps and cascades.
//!
//! # Benchmarks
//!
//! - **`game_first_accepted_swap`**: scans an 8x8 board for the first swap that
//!   forms a run and resolves its cascade.
//! - **`game_refused_swaps`**: tries every horizontal swap of a fresh board,
//!   most of which are refused and rolled back.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench game
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use wordmatch_catalog::TokenCatalog;
use wordmatch_core::Position;
use wordmatch_game::Game;
use wordmatch_generator::BoardSeed;

const SEEDS: [&str; 2] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const CATEGORIES: [&str; 5] = ["fruit", "vegetable", "meat", "fish", "drink"];

fn horizontal_swaps(game: &Game) -> impl Iterator<Item = (Position, Position)> + use<> {
    let dims = game.dims();
    dims.positions()
        .filter(move |pos| pos.col + 1 < dims.cols())
        .map(|pos| (pos, Position::new(pos.row, pos.col + 1)))
}

fn games() -> Vec<Game> {
    let catalog = TokenCatalog::builtin();
    SEEDS
        .into_iter()
        .map(|seed| {
            let seed = BoardSeed::from_str(seed).unwrap();
            Game::with_seed(&catalog, CATEGORIES, 8, 8, seed).unwrap()
        })
        .collect()
}

fn bench_first_accepted_swap(c: &mut Criterion) {
    for (i, game) in games().into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("game_first_accepted_swap", format!("seed_{i}")),
            &game,
            |b, game| {
                b.iter_batched(
                    || game.clone(),
                    |mut game| {
                        for (from, to) in horizontal_swaps(&game) {
                            if game.attempt_swap(from, to).unwrap().accepted {
                                break;
                            }
                        }
                        hint::black_box(game.score())
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_refused_swaps(c: &mut Criterion) {
    for (i, game) in games().into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("game_refused_swaps", format!("seed_{i}")),
            &game,
            |b, game| {
                b.iter_batched(
                    || game.clone(),
                    |mut game| {
                        let swaps: Vec<_> = horizontal_swaps(&game).collect();
                        for (from, to) in swaps {
                            let _ = hint::black_box(game.attempt_swap(from, to));
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_first_accepted_swap, bench_refused_swaps);
criterion_main!(benches);
