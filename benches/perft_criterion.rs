use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_generator::generate_legal_moves;
use quince_chess::move_generation::move_generator::generate_pseudo_legal_moves;
use quince_chess::move_generation::perft::perft;
use quince_chess::moves::move_record::MoveRecord;

/// Depths benchmarked per suite; expected node counts double as a
/// correctness guard before any measurement happens.
const NODES_QUICK: &[usize] = &[20, 400, 8902];
const NODES_STANDARD: &[usize] = &[20, 400, 8902, 197_281];

fn expected_nodes() -> &'static [usize] {
    match std::env::var("QUINCE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => NODES_STANDARD,
        _ => NODES_QUICK,
    }
}

/// A middlegame-ish position reached by replaying an opening line.
fn open_game() -> GameState {
    let mut game = GameState::new_game();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5"] {
        let mv = MoveRecord::from_long_algebraic(text, &game.board)
            .expect("opening line should parse against its own positions");
        game.make_move(mv);
    }
    game
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, game) in [("startpos", GameState::new_game()), ("open_game", open_game())] {
        group.bench_function(BenchmarkId::new("pseudo_legal", name), |b| {
            b.iter(|| generate_pseudo_legal_moves(black_box(&game)).len());
        });
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| generate_legal_moves(black_box(&game)).len());
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let expected = expected_nodes();
    let game = GameState::new_game();

    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth_idx, expected_nodes) in expected.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft(&game, depth);
        assert_eq!(
            warmup.nodes, *expected_nodes,
            "node mismatch in warmup at depth {depth}"
        );

        group.throughput(Throughput::Elements(*expected_nodes as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let counts = perft(black_box(&game), black_box(depth));
                    assert_eq!(counts.nodes, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen, bench_perft);
criterion_main!(movegen_benches);
