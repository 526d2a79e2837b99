use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{
    Board, HUMAN_MARK, Mark, MinimaxSearch, Position, PruningMode, calculate_minimax_move,
    check_win, get_available_moves,
};

fn bench_single_move_empty_board(pruning: PruningMode) {
    let mut board = Board::new();
    let search = MinimaxSearch::new(9).with_pruning(pruning);
    black_box(calculate_minimax_move(&mut board, &search));
}

fn bench_single_move_after_corner_opening() {
    let mut board = Board::new();
    board.place(Position::new(0, 0), HUMAN_MARK);
    black_box(calculate_minimax_move(&mut board, &MinimaxSearch::new(8)));
}

fn bench_full_game_self_play() {
    let mut board = Board::new();
    let mut mark = HUMAN_MARK;
    let search = MinimaxSearch::new(8);

    // The engine only plays O; X always takes the first free cell.
    while !board.is_full() {
        let position = if mark == Mark::O {
            match calculate_minimax_move(&mut board, &search).best_move {
                Some(position) => position,
                None => break,
            }
        } else {
            match get_available_moves(&board).first() {
                Some(&position) => position,
                None => break,
            }
        };
        board.place(position, mark);
        if check_win(&board).is_some() {
            break;
        }
        mark = if mark == Mark::X { Mark::O } else { Mark::X };
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty_row_pruning", |b| {
        b.iter(|| bench_single_move_empty_board(PruningMode::Row))
    });

    group.bench_function("single_move_empty_full_pruning", |b| {
        b.iter(|| bench_single_move_empty_board(PruningMode::Full))
    });

    group.bench_function("single_move_corner_opening", |b| {
        b.iter(bench_single_move_after_corner_opening)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
