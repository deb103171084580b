//! The mutable construction state: five de-duplicated primitive sets plus an
//! unwindable journal, so the solver's hot path can mutate-and-undo instead
//! of cloning at every recursion level.

use rand::Rng;

use crate::configs::{MAX_POINT_COORD, MAX_SEQUENCE_LENGTH};
use crate::hashset::FingerprintSet;

use super::circle::Circle;
use super::halfline::HalfLine;
use super::intersection;
use super::line::Line;
use super::point::Point;
use super::segment::Segment;

/// One undoable mutation: which primitive was added, and which points (not
/// already present) were created as a side effect of adding it.
#[derive(Clone, Debug)]
enum JournalEntry {
    Point,
    HalfLine(HalfLine, Vec<Point>),
    Segment(Segment, Vec<Point>),
    Line(Line, Vec<Point>),
    Circle(Circle, Vec<Point>),
}

/// The current state of a straightedge-and-compass construction: every
/// primitive discovered so far, grouped by kind, plus the journal that lets
/// the solver undo its most recent addition in constant time.
#[derive(Clone, Debug, Default)]
pub struct Board {
    pub points: FingerprintSet<Point>,
    pub lines: FingerprintSet<Line>,
    pub half_lines: FingerprintSet<HalfLine>,
    pub segments: FingerprintSet<Segment>,
    pub circles: FingerprintSet<Circle>,
    journal: Vec<JournalEntry>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `p` unless it falls outside the visible coordinate range.
    pub fn add_point(&mut self, p: Point) {
        if p.x.abs() <= MAX_POINT_COORD && p.y.abs() <= MAX_POINT_COORD {
            self.points.add(p);
        }
    }

    pub fn add_half_line(&mut self, h: HalfLine) {
        self.half_lines.add(h);
        self.add_point(h.point);
    }

    pub fn add_segment(&mut self, s: Segment) {
        self.segments.add(s);
        self.add_point(s.point1);
        self.add_point(s.point2);
    }

    /// Intersects `l` against every existing line-like and curve primitive,
    /// adds every resulting in-range point, then inserts `l` itself.
    pub fn add_line(&mut self, l: Line) {
        for new_point in self.line_intersections(&l) {
            self.add_point(new_point);
        }
        self.lines.add(l);
    }

    /// Intersects `c` against every existing line-like and curve primitive,
    /// adds every resulting in-range point, then inserts `c` itself.
    pub fn add_circle(&mut self, c: Circle) {
        for new_point in self.circle_intersections(&c) {
            self.add_point(new_point);
        }
        self.circles.add(c);
    }

    /// Same as [`Board::add_line`], but journals the primitive and the
    /// subset of newly-created points that weren't already present, so
    /// [`Board::remove_last`] can undo it exactly.
    pub fn add_line_trace(&mut self, l: Line) {
        let mut new_points = Vec::new();
        for p in self.line_intersections(&l) {
            if !self.points.contains(&p) {
                new_points.push(p);
            }
            self.add_point(p);
        }
        self.lines.add(l);
        self.push_journal(JournalEntry::Line(l, new_points));
    }

    pub fn add_circle_trace(&mut self, c: Circle) {
        let mut new_points = Vec::new();
        for p in self.circle_intersections(&c) {
            if !self.points.contains(&p) {
                new_points.push(p);
            }
            self.add_point(p);
        }
        self.circles.add(c);
        self.push_journal(JournalEntry::Circle(c, new_points));
    }

    pub fn add_half_line_trace(&mut self, h: HalfLine) {
        let new_points = if self.points.contains(&h.point) {
            Vec::new()
        } else {
            vec![h.point]
        };
        self.add_half_line(h);
        self.push_journal(JournalEntry::HalfLine(h, new_points));
    }

    pub fn add_segment_trace(&mut self, s: Segment) {
        let mut new_points = Vec::new();
        if !self.points.contains(&s.point1) {
            new_points.push(s.point1);
        }
        if !self.points.contains(&s.point2) {
            new_points.push(s.point2);
        }
        self.add_segment(s);
        self.push_journal(JournalEntry::Segment(s, new_points));
    }

    pub fn add_point_trace(&mut self, p: Point) {
        self.add_point(p);
        self.push_journal(JournalEntry::Point);
    }

    /// Pops the journal head, removing its primitive and every point it
    /// created. Unwinding an empty journal is a caller error.
    pub fn remove_last(&mut self) {
        let entry = self
            .journal
            .pop()
            .expect("remove_last: journal is empty");
        match entry {
            JournalEntry::Point => {}
            JournalEntry::HalfLine(h, points) => {
                self.half_lines.remove(&h);
                for p in points {
                    self.points.remove(&p);
                }
            }
            JournalEntry::Segment(s, points) => {
                self.segments.remove(&s);
                for p in points {
                    self.points.remove(&p);
                }
            }
            JournalEntry::Line(l, points) => {
                self.lines.remove(&l);
                for p in points {
                    self.points.remove(&p);
                }
            }
            JournalEntry::Circle(c, points) => {
                self.circles.remove(&c);
                for p in points {
                    self.points.remove(&p);
                }
            }
        }
    }

    pub fn journal_len(&self) -> usize {
        self.journal.len()
    }

    /// Appends one journal entry. The journal is bounded by
    /// `MAX_SEQUENCE_LENGTH`: a tool-sequence string longer than that would
    /// be a problem-library bug, not a recoverable runtime condition.
    fn push_journal(&mut self, entry: JournalEntry) {
        debug_assert!(
            self.journal.len() < MAX_SEQUENCE_LENGTH,
            "journal exceeded MAX_SEQUENCE_LENGTH"
        );
        self.journal.push(entry);
    }

    fn line_intersections(&self, l: &Line) -> Vec<Point> {
        let mut out = Vec::new();
        for other in self.lines.snapshot() {
            out.extend(intersection::line_line(l, &other).points);
        }
        for h in self.half_lines.snapshot() {
            out.extend(intersection::line_halfline(l, &h).points);
        }
        for s in self.segments.snapshot() {
            out.extend(intersection::line_segment(l, &s).points);
        }
        for c in self.circles.snapshot() {
            out.extend(intersection::line_circle(l, &c).points);
        }
        out
    }

    fn circle_intersections(&self, c: &Circle) -> Vec<Point> {
        let mut out = Vec::new();
        for l in self.lines.snapshot() {
            out.extend(intersection::line_circle(&l, c).points);
        }
        for h in self.half_lines.snapshot() {
            out.extend(intersection::halfline_circle(&h, c).points);
        }
        for s in self.segments.snapshot() {
            out.extend(intersection::segment_circle(&s, c).points);
        }
        for other in self.circles.snapshot() {
            out.extend(intersection::circle_circle(c, &other).points);
        }
        out
    }

    /// Whether the board has enough independent points to generate
    /// candidates for the pairwise/triple-based tools (`O`, `I`, `+`, `A`,
    /// `Q`). Below two points, the solver must bootstrap with
    /// [`Board::generate_random_points`] first.
    pub fn has_degrees_of_freedom(&self) -> bool {
        self.points.len() >= 2
    }

    /// Samples one random point on each existing line, half-line, segment,
    /// and circle, and adds it to the board (untraced: the solver recurses
    /// into this without consuming a tool-sequence symbol, so there is
    /// nothing to unwind on the way back out beyond a normal board clone).
    pub fn generate_random_points<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let lines = self.lines.snapshot();
        let half_lines = self.half_lines.snapshot();
        let segments = self.segments.snapshot();
        let circles = self.circles.snapshot();
        for l in &lines {
            self.add_point(l.random_point(rng));
        }
        for h in &half_lines {
            self.add_point(h.random_point(rng));
        }
        for s in &segments {
            self.add_point(s.random_point(rng));
        }
        for c in &circles {
            self.add_point(c.random_point(rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn add_line_intersects_existing_lines() {
        let mut board = Board::new();
        board.add_line(Line::from_two_points(
            &Point::new(-5.0, 0.0),
            &Point::new(5.0, 0.0),
        ));
        board.add_line(Line::from_two_points(
            &Point::new(0.0, -5.0),
            &Point::new(0.0, 5.0),
        ));
        assert_eq!(board.points.len(), 1);
        assert!(board.points.contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn trace_then_unwind_restores_the_board() {
        let mut board = Board::new();
        board.add_line(Line::from_two_points(
            &Point::new(-5.0, 0.0),
            &Point::new(5.0, 0.0),
        ));
        let before_points = board.points.len();
        let before_lines = board.lines.len();

        board.add_line_trace(Line::from_two_points(
            &Point::new(0.0, -5.0),
            &Point::new(0.0, 5.0),
        ));
        assert_eq!(board.journal_len(), 1);
        assert!(board.points.len() > before_points);

        board.remove_last();
        assert_eq!(board.journal_len(), 0);
        assert_eq!(board.points.len(), before_points);
        assert_eq!(board.lines.len(), before_lines);
    }

    #[test]
    fn unwinding_never_removes_points_created_before_the_trace() {
        let mut board = Board::new();
        board.add_point(Point::new(0.0, 0.0));
        board.add_line_trace(Line::from_two_points(
            &Point::new(-5.0, 0.0),
            &Point::new(5.0, 0.0),
        ));
        board.remove_last();
        assert!(board.points.contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn out_of_range_points_are_silently_dropped() {
        let mut board = Board::new();
        board.add_point(Point::new(1e6, 0.0));
        assert!(board.points.is_empty());
    }

    #[test]
    fn bootstrap_samples_a_point_on_every_curve() {
        let mut board = Board::new();
        board.add_line(Line::from_two_points(
            &Point::new(-5.0, 0.0),
            &Point::new(5.0, 0.0),
        ));
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        board.generate_random_points(&mut rng);
        assert!(board.points.len() >= 1);
    }

    fn fingerprint_multiset<T: crate::hashset::Fingerprinted + Clone>(
        set: &FingerprintSet<T>,
    ) -> Vec<i64> {
        let mut prints: Vec<i64> = set.iter().map(|v| v.fingerprint()).collect();
        prints.sort_unstable();
        prints
    }

    fn board_fingerprint(board: &Board) -> (Vec<i64>, Vec<i64>, Vec<i64>, Vec<i64>, Vec<i64>) {
        (
            fingerprint_multiset(&board.points),
            fingerprint_multiset(&board.lines),
            fingerprint_multiset(&board.half_lines),
            fingerprint_multiset(&board.segments),
            fingerprint_multiset(&board.circles),
        )
    }

    proptest! {
        /// Any sequence of `add_line_trace`/`add_circle_trace` calls, fully
        /// unwound in reverse via `remove_last`, restores the board to its
        /// starting fingerprint multiset.
        #[test]
        fn trace_and_full_unwind_is_the_identity(
            coords in prop::collection::vec(
                (
                    any::<bool>(),
                    -20.0f64..20.0,
                    -20.0f64..20.0,
                    -20.0f64..20.0,
                    -20.0f64..20.0,
                ),
                0..10,
            )
        ) {
            let mut board = Board::new();
            board.add_point(Point::new(0.3, 0.7));
            board.add_point(Point::new(-1.1, 4.4));
            let before = board_fingerprint(&board);

            let mut applied = 0;
            for (is_line, x1, y1, x2, y2) in &coords {
                let p1 = Point::new(*x1, *y1);
                let p2 = Point::new(*x2, *y2);
                if p1.approx_eq(&p2) {
                    continue;
                }
                if *is_line {
                    board.add_line_trace(Line::from_two_points(&p1, &p2));
                } else {
                    let radius = Segment::new(p1, p2).length();
                    if radius < crate::configs::TOLERANCE {
                        continue;
                    }
                    board.add_circle_trace(Circle::from_radius(p1, radius));
                }
                applied += 1;
            }

            for _ in 0..applied {
                board.remove_last();
            }

            prop_assert_eq!(board_fingerprint(&board), before);
        }
    }
}
