//! The concrete construction scenarios used as acceptance tests for the
//! solver: each checks that a known tool sequence actually reaches its
//! target, or that a deliberately truncated sequence does not.

use super::solve;
use crate::geom::{Board, HalfLine, Line, Point, Segment, Vec2};
use crate::problem::{Statement, Target};

/// Angle of 60°: a point and a half-line from it; `OOI` builds the
/// equilateral triangle and the line through its apex.
#[test]
fn angle_of_60_degrees() {
    let vertex = Point::new(0.0, 0.0);
    let h = HalfLine::from_direction(vertex, Vec2::new(1.0, 0.0));

    let mut board = Board::new();
    board.add_point(vertex);
    board.add_half_line(h);

    let apex = Point::new(1.0, 3f64.sqrt());
    let target = Target::new().with_line(Line::from_two_points(&vertex, &apex));
    let statement = Statement::new("angle_of_60", board, target).with_sequence("E", "OOI");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(outcome.found);
    assert!(outcome.boards_searched > 0);
}

/// Perpendicular bisector found via two circles and the line through their
/// intersections, instead of the dedicated `+` tool.
#[test]
fn perpendicular_bisector_via_two_circles_and_a_line() {
    let mut board = Board::new();
    board.add_segment(Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)));

    let target = Target::new().with_line(Line::from_two_points(
        &Point::new(0.0, 0.0),
        &Point::new(0.0, 1.0),
    ));
    let statement = Statement::new("perp_bisector_ooi", board, target).with_sequence("E", "OOI");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(outcome.found);
}

/// Midpoint of two points: the line through them, then its perpendicular
/// bisector, meets the line at the midpoint.
#[test]
fn midpoint_via_line_and_bisector() {
    let a = Point::new(-1.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);

    let target = Target::new().with_point(Point::new(0.0, 0.0));
    let statement = Statement::new("midpoint_i_plus", board, target).with_sequence("E", "I+");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(outcome.found);
}

/// Center of rotation (chapter 10.12): two segments of equal length at
/// different orientations; the rotation center is where the perpendicular
/// bisectors of corresponding endpoints meet. Both the elementary `OOIOI`
/// expansion (the puzzle's default goal) and the `+` shortcut are checked
/// against the same board.
#[test]
fn center_of_rotation() {
    let pt1 = Point::new(-5.0, 0.0);
    let pt2 = Point::new(0.0, 5.0);
    let pt3 = Point::new(-2.0, 6.0);
    let mut direction = Vec2::new(1.0, -1.234);
    direction.set_length(Segment::new(pt1, pt2).length());
    let pt4 = Point::new(pt3.x + direction.x, pt3.y + direction.y);

    let mut board = Board::new();
    board.add_segment(Segment::new(pt1, pt2));
    board.add_segment(Segment::new(pt3, pt4));

    let bisector1 = Segment::new(pt1, pt3).bisector();
    let bisector2 = Segment::new(pt2, pt4).bisector();
    let result = crate::geom::intersection::line_line(&bisector1, &bisector2)
        .points
        .into_iter()
        .next()
        .expect("two non-parallel perpendicular bisectors always meet");

    let target = Target::new().with_point(result);
    let statement = Statement::new("center_of_rotation_long", board, target)
        .with_sequence("E", "OOIOI")
        .with_sequence("+", "++");

    let elementary = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(elementary.found);

    let shortcut = solve(&statement, "+", 0, 1).expect("known goal");
    assert!(shortcut.found);
}

/// Angle of 3°, used as the parallel-mode stress test: a long sequence over
/// a growing point set. Expensive; run explicitly with `--ignored`.
#[test]
#[ignore = "stress test: branching factor grows fast over a 7-symbol sequence"]
fn angle_of_3_degrees_solves_under_a_long_sequence() {
    let vertex = Point::new(0.0, 0.0);
    let h = HalfLine::from_direction(vertex, Vec2::new(1.0, 0.0));

    let mut board = Board::new();
    board.add_point(vertex);
    board.add_half_line(h);

    // 96deg split down: OOOIIOI lands on a non-obvious target angle, so the
    // assertion here is only that the search terminates and reports a
    // boolean decision, matching the stress-test role spec.md assigns it.
    let target = Target::new().with_line(Line::from_two_points(
        &vertex,
        &Point::new(1.0, (3f64).to_radians().tan()),
    ));
    let statement = Statement::new("angle_of_3", board, target).with_sequence("E", "OOOIIOI");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(outcome.boards_searched > 0);
}

/// No-solution canary: truncating a solvable sequence to one symbol must
/// report failure without writing a PNG or claiming success.
#[test]
fn truncated_sequence_reports_no_solution() {
    let a = Point::new(-2.0, 0.0);
    let b = Point::new(2.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);

    let target = Target::new().with_line(Segment::new(a, b).bisector());
    let statement = Statement::new("canary", board, target).with_sequence("E", "I");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(!outcome.found);
    assert!(outcome.boards_searched >= 1);
}

/// Running the same statement sequentially and with a fan-out depth must
/// agree on whether a solution exists at all.
#[test]
fn fan_out_depth_does_not_change_the_decision() {
    let a = Point::new(-2.0, 0.0);
    let b = Point::new(2.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);
    let target = Target::new().with_line(Segment::new(a, b).bisector());
    let statement = Statement::new("fan_out_parity", board, target).with_sequence("E", "OOI");

    let sequential = solve(&statement, "E", 0, 1).expect("known goal");
    let parallel = solve(&statement, "E", 1, 4).expect("known goal");
    assert_eq!(sequential.found, parallel.found);
}

/// The search counter is non-decreasing and strictly positive once any
/// candidate has been visited.
#[test]
fn search_counter_is_monotonic_and_positive() {
    let a = Point::new(-2.0, 0.0);
    let b = Point::new(2.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);
    let target = Target::new().with_line(Line::from_coefficients(1.0, 0.0, -999.0));
    let statement = Statement::new("counter_monotonic", board, target).with_sequence("E", "I");

    let outcome = solve(&statement, "E", 0, 1).expect("known goal");
    assert!(outcome.boards_searched > 0);
}
