use std::hint::black_box;

use campo_core::{Board, GameConfig, MineGenerator, RandomMineGenerator};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_cascade(c: &mut Criterion) {
    let empty = Board::from_mine_coords(64, &[]).unwrap();
    c.bench_function("cascade_64x64_mine_free", |b| {
        b.iter(|| black_box(&empty).reveal((0, 0)).unwrap())
    });

    let config = GameConfig::new(64, 256);
    let mines = RandomMineGenerator::new(42).generate(config);
    let sparse = Board::from_mine_coords(config.size, &mines).unwrap();
    c.bench_function("cascade_64x64_sparse", |b| {
        b.iter(|| black_box(&sparse).reveal((32, 32)).unwrap())
    });
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
