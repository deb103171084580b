//! Introductory constructions: the perpendicular bisector, the midpoint, and
//! building an equilateral triangle to mark off a 60° angle.

use std::f64::consts::PI;

use crate::geom::{Board, Circle, HalfLine, Line, Point, Segment, Vec2};

use super::{Statement, Target};

pub fn problems() -> Vec<(&'static str, fn() -> Statement)> {
    vec![
        ("perpendicular_bisector", perpendicular_bisector),
        ("midpoint", midpoint),
        ("angle_of_60_degrees", angle_of_60_degrees),
        ("angle_of_30_degrees", angle_of_30_degrees),
        ("angle_of_3_degrees", angle_of_3_degrees),
        ("inscribed_square", inscribed_square),
    ]
}

fn perpendicular_bisector() -> Statement {
    let a = Point::new(-2.0, 0.0);
    let b = Point::new(2.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);

    let target = Target::new().with_line(Segment::new(a, b).bisector());

    Statement::new("perpendicular_bisector", board, target).with_sequence("E", "+")
}

fn midpoint() -> Statement {
    let a = Point::new(-3.0, 0.0);
    let b = Point::new(3.0, 0.0);
    let mut board = Board::new();
    board.add_segment(Segment::new(a, b));

    let target = Target::new().with_point(Point::new(0.0, 0.0));

    Statement::new("midpoint", board, target).with_sequence("E", "OOI")
}

fn equilateral_apex(a: Point, b: Point) -> Point {
    let angle = PI / 3.0;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    Point::new(
        a.x + dx * angle.cos() - dy * angle.sin(),
        a.y + dx * angle.sin() + dy * angle.cos(),
    )
}

fn angle_of_60_degrees() -> Statement {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(4.0, 0.0);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);

    let apex = equilateral_apex(a, b);
    let target = Target::new().with_line(Line::from_two_points(&a, &apex));

    Statement::new("angle_of_60_degrees", board, target).with_sequence("E", "OOI")
}

/// Bisecting a 60° angle marked by an equilateral triangle halves it to 30°.
fn angle_of_30_degrees() -> Statement {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(4.0, 0.0);
    let apex = equilateral_apex(a, b);
    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);
    board.add_point(apex);

    let half_angle = PI / 6.0;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let bisected = Point::new(
        a.x + dx * half_angle.cos() - dy * half_angle.sin(),
        a.y + dx * half_angle.sin() + dy * half_angle.cos(),
    );
    let target = Target::new().with_line(Line::from_two_points(&a, &bisected));

    Statement::new("angle_of_30_degrees", board, target).with_sequence("E", "A")
}

/// A vertex and a half-line mark the initial ray; the target is a line at 3°
/// from it. Long elementary sequence, used as a stress test for parallel
/// fan-out: the branching factor grows fast as points accumulate.
fn angle_of_3_degrees() -> Statement {
    let vertex = Point::new(0.0, 0.0);
    let ray = HalfLine::from_direction(vertex, Vec2::new(1.0, 0.0));

    let mut board = Board::new();
    board.add_point(vertex);
    board.add_half_line(ray);

    let angle = 3f64.to_radians();
    let target = Target::new().with_line(Line::from_two_points(
        &vertex,
        &Point::new(angle.cos(), angle.sin()),
    ));

    Statement::new("angle_of_3_degrees", board, target).with_sequence("E", "OOOIIOI")
}

/// A circle and a marked point on top of it; inscribe a square by striking
/// the diameter through the marked point, then the perpendicular diameter,
/// leaving all four corners of the square on the rim.
fn inscribed_square() -> Statement {
    let center = Point::new(0.0, 0.0);
    let top = Point::new(0.0, 2.0);
    let c = Circle::from_radius(center, 2.0);

    let mut board = Board::new();
    board.add_circle(c);
    board.add_point(center);
    board.add_point(top);

    let right = Point::new(2.0, 0.0);
    let left = Point::new(-2.0, 0.0);
    let bottom = Point::new(0.0, -2.0);
    let target = Target::new()
        .with_point(right)
        .with_point(left)
        .with_point(bottom)
        .with_line(Line::from_two_points(&right, &bottom))
        .with_line(Line::from_two_points(&left, &bottom));

    Statement::new("inscribed_square", board, target).with_sequence("E", "OOIII")
}
