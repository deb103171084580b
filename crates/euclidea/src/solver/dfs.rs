//! The recursive tool-sequence search: a single procedure that shrinks the
//! sequence and grows the board one candidate at a time, backtracking via
//! the board's journal instead of cloning on the sequential hot path.

use tracing::debug;

use crate::configs::EARLY_STOP;
use crate::geom::Board;
use crate::problem::Target;

use super::tools::{self, Candidate};
use super::types::ParallelContext;

/// Drives the search for one board/sequence pair. `depth` is the number of
/// tool-sequence symbols already consumed. Mutates `board` in place and
/// restores it (via the journal) before returning, except along the
/// worker-fan-out path where the board handed in is an already-disposable
/// clone. `on_success` runs at most once across the whole search, on
/// whichever board first satisfies `target`.
pub fn solve(
    board: &mut Board,
    sequence: &str,
    depth: usize,
    target: &Target,
    ctx: &ParallelContext,
    on_success: &(dyn Fn(&Board) + Sync),
) {
    if ctx.cancelled.is_set() {
        return;
    }

    if EARLY_STOP || sequence.is_empty() {
        if target.is_satisfied_by(board) {
            if ctx.claim_success() {
                debug!(depth, "target satisfied, claiming success");
                on_success(board);
                ctx.cancelled.set();
            }
            ctx.record_visit();
            return;
        }
    }
    ctx.record_visit();

    if sequence.is_empty() {
        return;
    }

    if !board.has_degrees_of_freedom() {
        let mut bootstrapped = board.clone();
        bootstrapped.generate_random_points(&mut rand::thread_rng());
        solve(&mut bootstrapped, sequence, depth, target, ctx, on_success);
        return;
    }

    let tool = sequence.chars().next().expect("sequence is non-empty");
    let rest = &sequence[tool.len_utf8()..];
    let points = board.points.snapshot();
    let candidates = tools::generate_candidates(tool, board, &points);

    let fan_out_depth = if ctx.parallel_depth == 0 {
        None
    } else {
        Some(ctx.parallel_depth - 1)
    };

    if fan_out_depth == Some(depth) {
        std::thread::scope(|scope| {
            for candidate in &candidates {
                if ctx.cancelled.is_set() {
                    break;
                }
                if candidate.already_present(board) {
                    continue;
                }
                ctx.acquire_worker_slot();
                let mut worker_board = board.clone();
                candidate.apply_trace(&mut worker_board);
                scope.spawn(move || {
                    let mut worker_board = worker_board;
                    solve(&mut worker_board, rest, depth + 1, target, ctx, on_success);
                    ctx.release_worker_slot();
                });
            }
        });
    } else {
        for candidate in &candidates {
            if ctx.cancelled.is_set() {
                return;
            }
            recurse_in_place(board, candidate, rest, depth, target, ctx, on_success);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn recurse_in_place(
    board: &mut Board,
    candidate: &Candidate,
    rest: &str,
    depth: usize,
    target: &Target,
    ctx: &ParallelContext,
    on_success: &(dyn Fn(&Board) + Sync),
) {
    if candidate.already_present(board) {
        return;
    }
    candidate.apply_trace(board);
    solve(board, rest, depth + 1, target, ctx, on_success);
    board.remove_last();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Line, Point, Segment};

    fn no_op(_board: &Board) {}

    #[test]
    fn solves_a_perpendicular_bisector_in_one_step() {
        let a = Point::new(-2.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let mut board = Board::new();
        board.add_point(a);
        board.add_point(b);

        let target = Target::new().with_line(Segment::new(a, b).bisector());
        let ctx = ParallelContext::sequential();
        solve(&mut board, "+", 0, &target, &ctx, &no_op);

        assert!(ctx.cancelled.is_set());
        assert!(ctx.boards_searched() > 0);
    }

    #[test]
    fn reports_no_solution_without_latching_success() {
        let a = Point::new(-2.0, 0.0);
        let b = Point::new(2.0, 0.0);

        let mut reachable_board = Board::new();
        reachable_board.add_point(a);
        reachable_board.add_point(b);
        let reachable_target = Target::new().with_line(Line::from_two_points(&a, &b));
        let ctx = ParallelContext::sequential();
        solve(&mut reachable_board, "I", 0, &reachable_target, &ctx, &no_op);
        assert!(ctx.cancelled.is_set());

        let mut unreachable_board = Board::new();
        unreachable_board.add_point(a);
        unreachable_board.add_point(b);
        // A line through these two points will never equal their segment's
        // perpendicular bisector.
        let unreachable_target = Target::new().with_line(Segment::new(a, b).bisector());
        let ctx2 = ParallelContext::sequential();
        solve(
            &mut unreachable_board,
            "I",
            0,
            &unreachable_target,
            &ctx2,
            &no_op,
        );
        assert!(!ctx2.cancelled.is_set());
    }

    #[test]
    fn board_is_restored_after_a_failed_branch() {
        let a = Point::new(-2.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let mut board = Board::new();
        board.add_point(a);
        board.add_point(b);
        let before_lines = board.lines.len();

        let unreachable_target =
            Target::new().with_line(Line::from_coefficients(1.0, 0.0, -999.0));
        let ctx = ParallelContext::sequential();
        solve(&mut board, "I", 0, &unreachable_target, &ctx, &no_op);

        assert_eq!(board.journal_len(), 0);
        assert_eq!(board.lines.len(), before_lines);
    }
}
