//! Command-line solver for the four bishops puzzle.
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --quiet`
//! `cargo run --release -- --perft 6`
//! `cargo run --release -- --playout 30 --seed 7`
//!
//! Verbosity follows `RUST_LOG` (default `info`).

use std::io::Write;
use std::process;
use std::time::Instant;

use four_bishops::board_state::board::Board;
use four_bishops::board_state::board_types::Color;
use four_bishops::move_generation::move_generator::BishopMoveGenerator;
use four_bishops::move_generation::perft::perft_table;
use four_bishops::move_generation::playout::random_playout;
use four_bishops::search::search_errors::SearchResult;
use four_bishops::search::shortest_path::{search_shortest_path, SearchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn parse_arg<T: std::str::FromStr>(flag: &str) -> Option<T> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return Some(v);
            }
            log::warn!("ignoring unparsable value {:?} for {flag}", args[i + 1]);
        }
    }
    None
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn print_line(boards: &[Board], first_mover: Color, quiet: bool) {
    let mut mover = first_mover;
    for (ply, board) in boards.iter().enumerate() {
        if ply == 0 {
            println!("Start");
        } else {
            println!("Ply {ply} ({mover})");
            mover = mover.opposite();
        }
        if !quiet {
            println!("{board}");
        }
    }
}

fn run_solve(quiet: bool) -> SearchResult<()> {
    let start = Board::default();
    let goal = start.swapped();

    println!(
        "Four bishops swap, started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let timer = Instant::now();
    let path = search_shortest_path(&BishopMoveGenerator, &start, &goal, SearchConfig::default())?;
    let elapsed_ms = timer.elapsed().as_millis();

    print_line(&path.boards, Color::White, quiet);
    println!(
        "Solved in {} plies: visited={} expanded={} elapsed_ms={elapsed_ms}",
        path.plies(),
        path.stats.visited,
        path.stats.expanded
    );
    Ok(())
}

fn run_perft(depth: u8) {
    let start = Board::default();
    for (i, nodes) in perft_table(&BishopMoveGenerator, &start, Color::White, depth)
        .into_iter()
        .enumerate()
    {
        println!("perft depth={} nodes={nodes}", i + 1);
    }
}

fn run_playout(plies: usize, seed: u64, quiet: bool) {
    let mut rng = StdRng::seed_from_u64(seed);
    let line = random_playout(&BishopMoveGenerator, &Board::default(), Color::White, plies, &mut rng);
    print_line(&line, Color::White, quiet);
    println!("Playout of {} plies (seed {seed})", line.len() - 1);
}

fn main() {
    init_logging();
    let quiet = has_flag("--quiet");

    if let Some(depth) = parse_arg::<u8>("--perft") {
        run_perft(depth.max(1));
    } else if let Some(plies) = parse_arg::<usize>("--playout") {
        run_playout(plies, parse_arg::<u64>("--seed").unwrap_or(0), quiet);
    } else if let Err(e) = run_solve(quiet) {
        log::error!("Fatal error: {e}");
        process::exit(1);
    }

    std::io::stdout().flush().ok();
}
