use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::move_generation::legal_move_generator::get_all_legal_moves;
use chess_rules::move_generation::perft::perft;
use chess_rules::utils::random_game::play_random_game;
use chess_rules::GameState;

const START_NODES: &[u64] = &[20, 400, 8902];

fn bench_perft_start_position(c: &mut Criterion) {
    let game = GameState::new_game();
    let mut group = c.benchmark_group("perft_start_position");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    for (index, expected) in START_NODES.iter().copied().enumerate() {
        let depth = (index + 1) as u8;
        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let counts = perft(black_box(&game), depth);
                assert_eq!(counts.nodes as u64, expected);
                counts
            });
        });
    }

    group.finish();
}

fn bench_legal_move_generation(c: &mut Criterion) {
    // Middlegame-ish positions reached by short random playouts.
    let positions: Vec<GameState> = (0..8u64)
        .map(|seed| play_random_game(seed, 24).final_state)
        .collect();

    c.bench_function("all_legal_moves_random_positions", |b| {
        b.iter(|| {
            positions
                .iter()
                .map(|game| get_all_legal_moves(black_box(game)).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_perft_start_position, bench_legal_move_generation);
criterion_main!(benches);
