//! Tool-sequence search over a puzzle's board: the public entry point plus
//! the recursive driver, candidate generation, and concurrency primitives it
//! is built from.

mod dfs;
#[cfg(test)]
mod scenarios;
mod tools;
mod types;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::error::{EuclideaError, Result};
use crate::geom::Board;
use crate::problem::Statement;
use crate::render;

pub use types::{ParallelContext, SearchOutcome};

/// Tries every candidate tool sequence the puzzle's `goal` prescribes
/// against its initial board, looking for a configuration that satisfies
/// its target. On success, renders the winning board to
/// `<name>_<goal>_<unix-seconds>.png` in the current directory (best-effort;
/// a render failure is logged, not propagated).
pub fn solve(
    statement: &Statement,
    goal: &str,
    parallel_depth: usize,
    thread_limit: usize,
) -> Result<SearchOutcome> {
    if thread_limit == 0 {
        return Err(EuclideaError::invalid_search_config(
            "thread_limit must be at least 1",
        ));
    }
    let sequence = statement.sequence(goal);
    let clamped_depth = ParallelContext::clamp_depth(parallel_depth, sequence.len());
    let ctx = ParallelContext::new(clamped_depth, thread_limit);

    let name = statement.name.clone();
    let goal_owned = goal.to_string();
    let on_success = move |board: &Board| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let filename = format!("{name}_{goal_owned}_{timestamp}.png");
        if let Err(err) = render::render_board_to_png(board, std::path::Path::new(&filename)) {
            warn!(%err, filename, "failed to render solved board");
        } else {
            info!(filename, "rendered solved board");
        }
    };

    let mut board = statement.board.clone();
    dfs::solve(&mut board, sequence, 0, &statement.target, &ctx, &on_success);

    Ok(SearchOutcome {
        found: ctx.cancelled.is_set(),
        boards_searched: ctx.boards_searched(),
    })
}
