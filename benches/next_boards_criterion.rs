use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use four_bishops::board_state::board::Board;
use four_bishops::board_state::board_types::{Color, Position};
use four_bishops::move_generation::move_generator::BishopMoveGenerator;
use four_bishops::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    white: [(u8, u8); 4],
    black: [(u8, u8); 4],
    expected_white_moves: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        white: [(0, 0), (0, 1), (0, 2), (0, 3)],
        black: [(4, 0), (4, 1), (4, 2), (4, 3)],
        expected_white_moves: 4,
    },
    BenchCase {
        name: "diagonals",
        white: [(0, 0), (1, 1), (2, 2), (3, 3)],
        black: [(4, 3), (3, 2), (2, 1), (1, 0)],
        expected_white_moves: 6,
    },
];

const START_PERFT: &[u64] = &[4, 18, 60, 220, 668];

fn build(case: &BenchCase) -> Board {
    Board::new(
        case.white.map(|(x, y)| Position::new(x, y)),
        case.black.map(|(x, y)| Position::new(x, y)),
    )
}

fn bench_next_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_boards");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = build(case);

        // Correctness guard before benchmarking.
        assert_eq!(
            board.next_boards(Color::White).len(),
            case.expected_white_moves,
            "move count mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(board.next_boards(black_box(Color::White))))
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.sample_size(20);
    let start = Board::default();

    for (depth_idx, expected_nodes) in START_PERFT.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        assert_eq!(perft(&BishopMoveGenerator, &start, Color::White, depth), *expected_nodes);

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(BenchmarkId::from_parameter(format!("d{depth}")), expected_nodes, |b, expected| {
            b.iter(|| {
                let nodes = perft(&BishopMoveGenerator, black_box(&start), Color::White, black_box(depth));
                assert_eq!(nodes, *expected);
                black_box(nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(next_boards_benches, bench_next_boards, bench_perft);
criterion_main!(next_boards_benches);
