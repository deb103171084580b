//! Criterion benchmark for the DFS solver over a representative puzzle.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use euclidea::geom::{Board, Point, Segment};
use euclidea::problem::{Statement, Target};
use euclidea::solver::solve;

fn midpoint_statement() -> Statement {
    let a = Point::new(-3.0, 0.0);
    let b = Point::new(3.0, 0.0);
    let mut board = Board::new();
    board.add_segment(Segment::new(a, b));
    let target = Target::new().with_point(Point::new(0.0, 0.0));
    Statement::new("bench_midpoint", board, target).with_sequence("E", "OOI")
}

fn bench_solve_sequential(c: &mut Criterion) {
    c.bench_function("solve_midpoint_sequential", |b| {
        b.iter_batched(
            midpoint_statement,
            |statement| {
                let _outcome = solve(&statement, "E", 0, 1).expect("known goal");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_solve_sequential);
criterion_main!(benches);
