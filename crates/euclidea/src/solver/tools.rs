//! Candidate generation for each tool-sequence symbol.
//!
//! Every tool ultimately proposes a `Line` or a `Circle`; the recursive
//! driver in [`crate::solver::dfs`] is the only place that decides whether a
//! candidate is genuinely new and worth recursing into.

use crate::geom::{Board, Circle, Line, Point, Segment};
use crate::hashset::FingerprintSet;

/// A primitive the solver is considering adding to the board.
#[derive(Clone, Copy, Debug)]
pub enum Candidate {
    Line(Line),
    Circle(Circle),
}

impl Candidate {
    pub fn already_present(&self, board: &Board) -> bool {
        match self {
            Candidate::Line(l) => board.lines.contains(l),
            Candidate::Circle(c) => board.circles.contains(c),
        }
    }

    pub fn apply_trace(&self, board: &mut Board) {
        match self {
            Candidate::Line(l) => board.add_line_trace(*l),
            Candidate::Circle(c) => board.add_circle_trace(*c),
        }
    }
}

/// Every line the `L`/`Z` tools may reflect or translate a point through:
/// the board's own lines, plus the line underlying each half-line and
/// segment not already represented as a line, deduplicated by fingerprint.
fn line_likes(board: &Board) -> Vec<Line> {
    let mut set: FingerprintSet<Line> = FingerprintSet::new();
    for l in board.lines.iter() {
        set.add(*l);
    }
    for h in board.half_lines.iter() {
        set.add(Line::from_half_line(h));
    }
    for s in board.segments.iter() {
        set.add(Line::from_segment(s));
    }
    set.snapshot()
}

/// Dispatches on the current tool-sequence symbol and returns the raw
/// (possibly duplicate-against-the-board) candidates it proposes.
pub fn generate_candidates(tool: char, board: &Board, points: &[Point]) -> Vec<Candidate> {
    match tool {
        'O' => circles_through_two_points(points),
        'I' => lines_through_two_points(points),
        '+' => perpendicular_bisectors(points),
        'A' => angle_bisectors(points),
        'Q' => circles_by_radius(points),
        'L' => perpendicular_lines(board, points),
        'Z' => parallel_lines(board, points),
        other => panic!("unknown tool symbol '{other}'"),
    }
}

/// `O`: circle centered at the first of an ordered pair, through the
/// second. Both orderings of every pair are kept — they generally differ.
fn circles_through_two_points(points: &[Point]) -> Vec<Candidate> {
    let mut out = Vec::new();
    for (i, center) in points.iter().enumerate() {
        for (j, on_side) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            out.push(Candidate::Circle(Circle::from_point(*center, *on_side)));
        }
    }
    out
}

/// `I`: the line through each unordered pair of distinct points.
fn lines_through_two_points(points: &[Point]) -> Vec<Candidate> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            out.push(Candidate::Line(Line::from_two_points(
                &points[i], &points[j],
            )));
        }
    }
    out
}

/// `+`: the perpendicular bisector of each unordered pair of distinct points.
fn perpendicular_bisectors(points: &[Point]) -> Vec<Candidate> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let s = Segment::new(points[i], points[j]);
            out.push(Candidate::Line(s.bisector()));
        }
    }
    out
}

/// Every `(i, j, k)` with `i < k`, `j != i`, `j != k`: the index triples the
/// `A` and `Q` tools both iterate, `j` being the vertex/center.
fn vertex_triples(n: usize) -> Vec<(usize, usize, usize)> {
    let mut out = Vec::new();
    for i in 0..n {
        for k in (i + 1)..n {
            for j in 0..n {
                if j != i && j != k {
                    out.push((i, j, k));
                }
            }
        }
    }
    out
}

/// `A`: the angle bisector of `(p_i, p_j, p_k)` at vertex `p_j`. Collinear
/// triples with `p_j` between two same-direction arms have no bisector and
/// are skipped rather than handed to the board.
fn angle_bisectors(points: &[Point]) -> Vec<Candidate> {
    vertex_triples(points.len())
        .into_iter()
        .filter_map(|(i, j, k)| {
            Line::angle_bisector(&points[i], &points[j], &points[k]).map(Candidate::Line)
        })
        .collect()
}

/// `Q`: the circle centered at `p_j` with radius `|p_i p_k|`.
fn circles_by_radius(points: &[Point]) -> Vec<Candidate> {
    vertex_triples(points.len())
        .into_iter()
        .map(|(i, j, k)| {
            let radius = Segment::new(points[i], points[k]).length();
            Candidate::Circle(Circle::from_radius(points[j], radius))
        })
        .collect()
}

/// `L`: the perpendicular through each point to each line-like, deduplicated
/// by fingerprint before being handed back to the caller.
fn perpendicular_lines(board: &Board, points: &[Point]) -> Vec<Candidate> {
    let mut set: FingerprintSet<Line> = FingerprintSet::new();
    for l in line_likes(board) {
        for p in points {
            set.add(l.perpendicular_through(p));
        }
    }
    set.snapshot().into_iter().map(Candidate::Line).collect()
}

/// `Z`: the parallel through each point to each line-like, deduplicated by
/// fingerprint before being handed back to the caller.
fn parallel_lines(board: &Board, points: &[Point]) -> Vec<Candidate> {
    let mut set: FingerprintSet<Line> = FingerprintSet::new();
    for l in line_likes(board) {
        for p in points {
            set.add(l.parallel_through(p));
        }
    }
    set.snapshot().into_iter().map(Candidate::Line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_candidates_keep_both_orderings() {
        let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0)];
        let candidates = circles_through_two_points(&points);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn line_candidates_cover_each_unordered_pair_once() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let candidates = lines_through_two_points(&points);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn vertex_triples_exclude_the_vertex_from_the_endpoints() {
        let triples = vertex_triples(3);
        for (i, j, k) in triples {
            assert_ne!(i, j);
            assert_ne!(j, k);
            assert!(i < k);
        }
    }

    #[test]
    fn perpendicular_lines_dedupe_across_coincident_line_likes() {
        let mut board = Board::new();
        board.add_line(Line::from_two_points(
            &Point::new(-5.0, 0.0),
            &Point::new(5.0, 0.0),
        ));
        board.add_segment(Segment::new(Point::new(-5.0, 0.0), Point::new(5.0, 0.0)));
        let points = vec![Point::new(0.0, 3.0)];
        let candidates = perpendicular_lines(&board, &points);
        assert_eq!(candidates.len(), 1);
    }
}
