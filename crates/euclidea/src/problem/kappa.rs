//! Tangency constructions: a tangent at a marked point on a circle, and a
//! circle built tangent to a line at a marked foot.

use crate::geom::{Board, Circle, Line, Point, Segment};

use super::{Statement, Target};

pub fn problems() -> Vec<(&'static str, fn() -> Statement)> {
    vec![
        ("tangent_to_circle_at_point", tangent_to_circle_at_point),
        ("circle_tangent_to_line", circle_tangent_to_line),
        ("angle_bisector", angle_bisector),
        ("intersection_of_angle_bisectors", intersection_of_angle_bisectors),
    ]
}

/// A scalene angle `(p1, vertex, p3)`; the `A` tool bisects it directly.
fn angle_bisector() -> Statement {
    let vertex = Point::new(0.0, 0.0);
    let p1 = Point::new(6.0, 0.0);
    let p3 = Point::new(2.0, 5.0);

    let mut board = Board::new();
    board.add_point(vertex);
    board.add_point(p1);
    board.add_point(p3);

    let target = Target::new().with_line(
        Line::angle_bisector(&p1, &vertex, &p3).expect("p1, vertex, p3 form a scalene angle"),
    );

    Statement::new("angle_bisector", board, target).with_sequence("E", "A")
}

/// Given a circle and a marked point on its rim, the tangent there is the
/// perpendicular to the radius through that point.
fn tangent_to_circle_at_point() -> Statement {
    let center = Point::new(0.0, 0.0);
    let on_rim = Point::new(4.0, 0.0);

    let mut board = Board::new();
    board.add_point(center);
    board.add_point(on_rim);
    board.add_circle(Circle::from_point(center, on_rim));

    let radius_line = Line::from_two_points(&center, &on_rim);
    let target = Target::new().with_line(radius_line.perpendicular_through(&on_rim));

    Statement::new("tangent_to_circle_at_point", board, target).with_sequence("E", "IL")
}

/// A line and a marked foot on it, plus the center of the desired tangent
/// circle, already placed so the radius is perpendicular to the line.
fn circle_tangent_to_line() -> Statement {
    let l = Line::from_two_points(&Point::new(-5.0, 0.0), &Point::new(5.0, 0.0));
    let foot = Point::new(1.0, 0.0);
    let center = Point::new(1.0, 3.0);

    let mut board = Board::new();
    board.add_line(l);
    board.add_point(foot);
    board.add_point(center);

    let target = Target::new().with_circle(Circle::from_point(center, foot));

    Statement::new("circle_tangent_to_line", board, target).with_sequence("E", "O")
}

/// Two angle bisectors of a triangle's vertices meet at the incenter.
fn intersection_of_angle_bisectors() -> Statement {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(6.0, 0.0);
    let c = Point::new(1.0, 4.0);

    let mut board = Board::new();
    board.add_point(a);
    board.add_point(b);
    board.add_point(c);

    let incenter = incenter_by_construction(a, b, c);
    let target = Target::new().with_point(incenter);

    Statement::new("intersection_of_angle_bisectors", board, target).with_sequence("E", "AA")
}

/// Closed-form incenter, used only to state the target point independently
/// of the bisector construction above.
fn incenter_by_construction(a: Point, b: Point, c: Point) -> Point {
    let side_a = Segment::new(b, c).length();
    let side_b = Segment::new(a, c).length();
    let side_c = Segment::new(a, b).length();
    let perimeter = side_a + side_b + side_c;
    Point::new(
        (side_a * a.x + side_b * b.x + side_c * c.x) / perimeter,
        (side_a * a.y + side_b * b.y + side_c * c.y) / perimeter,
    )
}
