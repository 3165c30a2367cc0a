use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{merge_and_push, shift, GameConfig, GameEngine, Grid};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows(&[
        [2, 2, 4, 8],
        [0, 4, 4, 0],
        [16, 0, 16, 2],
        [2, 4, 8, 16],
    ])
    .unwrap()
}

fn bench_merge_row(c: &mut Criterion) {
    c.bench_function("merge_and_push_row", |b| {
        b.iter(|| merge_and_push(black_box(&[2u32, 2, 2, 2][..])))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("rotate_clockwise_4x4", |b| {
        b.iter(|| black_box(&grid).rotate_clockwise())
    });
}

fn bench_shift(c: &mut Criterion) {
    let grid = busy_grid();
    for dir in Direction::ALL {
        c.bench_function(&format!("shift_{}", dir.as_str().to_lowercase()), |b| {
            b.iter(|| shift(black_box(&grid), dir))
        });
    }
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_until_full", |b| {
        b.iter(|| {
            let mut game = GameEngine::new(GameConfig::default(), 12345);
            let mut i = 0usize;
            while !game.is_game_over() && i < 1_000 {
                game.apply_move(Direction::ALL[i % 4]);
                i += 1;
            }
        })
    });
}

criterion_group!(
    benches,
    bench_merge_row,
    bench_rotate,
    bench_shift,
    bench_apply_move
);
criterion_main!(benches);
