//! Benchmarks for clue derivation.
//!
//! A play-mode board re-derives the full grid's clues after every single
//! cell mutation, so this measures the per-input-event cost at the largest
//! expected puzzle size (20×20).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench clues
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use pixelace_core::{ClueSet, Grid, Position};

fn striped_grid(side: usize) -> Grid<bool> {
    let mut grid = Grid::new(side, side);
    for pos in (0..side).flat_map(|y| (0..side).map(move |x| Position::new(x, y))) {
        grid.set(pos, (pos.x + pos.y) % 3 != 0);
    }
    grid
}

fn bench_derive(c: &mut Criterion) {
    let grid = striped_grid(20);
    c.bench_function("derive_clues_20x20", |b| {
        b.iter(|| ClueSet::derive(hint::black_box(&grid), |&cell| cell));
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
