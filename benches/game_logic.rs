use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::types::{GameConfig, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default(), 12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            state.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default(), 12345);
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default(), 12345);
    state.start();

    c.bench_function("shift", |b| {
        b.iter(|| {
            state.move_left();
            state.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default(), 12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
