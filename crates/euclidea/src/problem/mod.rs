//! The puzzle library: named constructions, each an initial [`Board`] plus a
//! [`Target`] the solver must reach, plus the known tool-sequence goals for
//! that puzzle (elementary moves, or a tool-restricted alternative).

mod alpha;
mod beta;
mod kappa;
mod omicron;

use std::collections::HashMap;

use crate::geom::{Board, Circle, Line, Point};
use crate::hashset::FingerprintSet;

/// The subset of primitives that must all be present (by fingerprint) in a
/// board for a construction to count as solved.
#[derive(Clone, Debug, Default)]
pub struct Target {
    pub points: FingerprintSet<Point>,
    pub lines: FingerprintSet<Line>,
    pub circles: FingerprintSet<Circle>,
}

impl Target {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, p: Point) -> Self {
        self.points.add(p);
        self
    }

    pub fn with_line(mut self, l: Line) -> Self {
        self.lines.add(l);
        self
    }

    pub fn with_circle(mut self, c: Circle) -> Self {
        self.circles.add(c);
        self
    }

    pub fn is_satisfied_by(&self, board: &Board) -> bool {
        self.points.iter().all(|p| board.points.contains(p))
            && self.lines.iter().all(|l| board.lines.contains(l))
            && self.circles.iter().all(|c| board.circles.contains(c))
    }
}

/// A puzzle: its starting configuration, the target it must reach, and the
/// known tool sequences (keyed by goal name) that solve it.
#[derive(Clone, Debug)]
pub struct Statement {
    pub name: String,
    pub board: Board,
    pub target: Target,
    pub sequences: HashMap<String, String>,
}

impl Statement {
    pub fn new(name: impl Into<String>, board: Board, target: Target) -> Self {
        Self {
            name: name.into(),
            board,
            target,
            sequences: HashMap::new(),
        }
    }

    pub fn with_sequence(mut self, goal: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.sequences.insert(goal.into(), sequence.into());
        self
    }

    /// The tool sequence registered for `goal` (e.g. `"E"` for elementary
    /// moves, or a tool-restricted alternative like `"L"`). A goal absent
    /// from the puzzle's own `{goal→sequence}` map is a programming error
    /// in the problem library, not a recoverable condition: it aborts.
    pub fn sequence(&self, goal: &str) -> &str {
        self.sequences
            .get(goal)
            .unwrap_or_else(|| panic!("problem '{}' has no goal named '{goal}'", self.name))
    }
}

/// One named chapter of the puzzle library.
pub struct Chapter {
    pub name: &'static str,
    pub problems: Vec<(&'static str, fn() -> Statement)>,
}

/// The full puzzle library, grouped by chapter, mirroring the chapters a
/// construction-puzzle app organizes its levels into.
pub fn library() -> Vec<Chapter> {
    vec![
        Chapter {
            name: "alpha",
            problems: alpha::problems(),
        },
        Chapter {
            name: "beta",
            problems: beta::problems(),
        },
        Chapter {
            name: "kappa",
            problems: kappa::problems(),
        },
        Chapter {
            name: "omicron",
            problems: omicron::problems(),
        },
    ]
}

/// Looks up a single puzzle by chapter and problem name. An unknown chapter
/// or problem name is a programming error (a CLI caller should validate
/// against [`library`] before calling, the way it validates goal names), not
/// a recoverable result: it aborts loudly rather than being surfaced as an
/// `Err`.
pub fn find(chapter: &str, problem: &str) -> Statement {
    let chapters = library();
    let found_chapter = chapters
        .iter()
        .find(|c| c.name == chapter)
        .unwrap_or_else(|| panic!("no chapter named '{chapter}'"));
    found_chapter
        .problems
        .iter()
        .find(|(name, _)| *name == problem)
        .unwrap_or_else(|| panic!("no problem named '{problem}' in chapter '{chapter}'"))
        .1()
}
