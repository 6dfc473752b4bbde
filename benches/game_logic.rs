use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use minotris::core::{Game, GameConfig, Grid, Mino, Shape, ShapeSet, Turn};
use minotris::types::{Color, PieceKind};

fn new_game() -> Game {
    Game::new(&GameConfig::default(), ShapeSet::standard().unwrap(), 12345)
}

fn bench_tick(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_over() {
                game = new_game();
            }
            black_box(game.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Grid::new(10, 20);
    for y in 16..20 {
        for x in 0..10 {
            full.set_cell(x, y, Color::Cyan.cell());
        }
    }
    let landed = Mino::new(Arc::new(Shape::standard(PieceKind::I).unwrap()), 0, 16);

    c.bench_function("clear_4_lines", |b| {
        b.iter_batched_ref(
            || full.clone(),
            |grid| grid.clear_lines(black_box(&landed)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_lock_and_spawn(c: &mut Criterion) {
    c.bench_function("drop_lock_spawn", |b| {
        b.iter_batched_ref(
            new_game,
            |game| {
                game.hard_drop();
                black_box(game.tick())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = new_game();
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !game.try_move(black_box(dx), 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = new_game();
    game.try_move(0, 2);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(game.try_rotate(Turn::Right));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_lock_and_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
