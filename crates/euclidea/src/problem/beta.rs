//! Constructions that work from marks on an otherwise-unknown circle, and a
//! perpendicular dropped from a point onto a line.

use crate::geom::{Board, Circle, Line, Point};

use super::{Statement, Target};

/// Four rectangle/rhombus sides through consecutive vertices, added to the
/// board in order.
fn add_quadrilateral_sides(board: &mut Board, corners: [Point; 4]) {
    for i in 0..4 {
        board.add_line(Line::from_two_points(&corners[i], &corners[(i + 1) % 4]));
    }
}

pub fn problems() -> Vec<(&'static str, fn() -> Statement)> {
    vec![
        ("circle_center", circle_center),
        ("drop_a_perpendicular", drop_a_perpendicular),
        ("erect_a_perpendicular", erect_a_perpendicular),
        ("double_angle", double_angle),
        ("cut_rectangle", cut_rectangle),
        ("circle_in_rhombus", circle_in_rhombus),
    ]
}

/// A circle is given with three marked points on its rim but no center.
/// The center is the common intersection of two chords' perpendicular
/// bisectors.
fn circle_center() -> Statement {
    let center = Point::new(0.0, 0.0);
    let radius = 5.0;
    let p1 = Point::new(5.0, 0.0);
    let p2 = Point::new(0.0, 5.0);
    let p3 = Point::new(-5.0, 0.0);

    let mut board = Board::new();
    board.add_point(p1);
    board.add_point(p2);
    board.add_point(p3);
    board.add_circle(Circle::from_radius(center, radius));

    let target = Target::new().with_point(center);

    Statement::new("circle_center", board, target).with_sequence("E", "++")
}

/// A point and a line not through it; drop the perpendicular from the point.
fn drop_a_perpendicular() -> Statement {
    let l = Line::from_two_points(&Point::new(-5.0, 0.0), &Point::new(5.0, 0.0));
    let p = Point::new(2.0, 3.0);

    let mut board = Board::new();
    board.add_line(l);
    board.add_point(p);

    let target = Target::new().with_line(l.perpendicular_through(&p));

    Statement::new("drop_a_perpendicular", board, target)
        .with_sequence("E", "IL")
        .with_sequence("L", "L")
}

/// A line and a marked point already on it; erect the perpendicular there.
fn erect_a_perpendicular() -> Statement {
    let l = Line::from_two_points(&Point::new(-5.0, 0.0), &Point::new(5.0, 0.0));
    let foot = Point::new(1.0, 0.0);

    let mut board = Board::new();
    board.add_line(l);
    board.add_point(foot);

    let target = Target::new().with_line(l.perpendicular_through(&foot));

    Statement::new("erect_a_perpendicular", board, target)
        .with_sequence("E", "IL")
        .with_sequence("L", "L")
}

/// Reflecting a ray across a second ray through the same vertex doubles the
/// angle between the original ray and the reflection.
fn double_angle() -> Statement {
    let vertex = Point::new(0.0, 0.0);
    let arm = Point::new(4.0, 0.0);
    let near_bisector = Point::new(3.0, 1.5);

    let mut board = Board::new();
    board.add_point(vertex);
    board.add_point(arm);
    board.add_point(near_bisector);

    // Reflection of `arm` across line (vertex, near_bisector), found as the
    // second intersection of a circle centered at the vertex with the
    // bisector's perpendicular through `arm`, expressed here directly as
    // the target line through vertex at twice the marked angle.
    let angle = (near_bisector.y - vertex.y).atan2(near_bisector.x - vertex.x) * 2.0;
    let doubled = Point::new(vertex.x + angle.cos(), vertex.y + angle.sin());
    let target = Target::new().with_line(Line::from_two_points(&vertex, &doubled));

    Statement::new("double_angle", board, target).with_sequence("E", "OOIL")
}

/// A rectangle and a point outside it; cut the rectangle into two equal
/// halves with a single line through the marked point and the rectangle's
/// center (the meet of its diagonals).
fn cut_rectangle() -> Statement {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 0.0);
    let p3 = Point::new(3.0, 2.0);
    let p4 = Point::new(0.0, 2.0);
    let outside = Point::new(2.0, 4.0);

    let mut board = Board::new();
    board.add_point(p1);
    board.add_point(p2);
    board.add_point(p3);
    board.add_point(p4);
    add_quadrilateral_sides(&mut board, [p1, p2, p3, p4]);
    board.add_point(outside);

    let diagonal1 = Line::from_two_points(&p1, &p3);
    let diagonal2 = Line::from_two_points(&p2, &p4);
    let center = crate::geom::intersection::line_line(&diagonal1, &diagonal2)
        .points
        .into_iter()
        .next()
        .expect("a rectangle's diagonals always meet at its center");
    let target = Target::new().with_line(Line::from_two_points(&outside, &center));

    Statement::new("cut_rectangle", board, target).with_sequence("E", "III")
}

/// A rhombus; the inscribed circle is centered at the meet of the diagonals,
/// tangent to each side.
fn circle_in_rhombus() -> Statement {
    let p1 = Point::new(0.0, -1.0);
    let p2 = Point::new(3.0, 0.0);
    let p3 = Point::new(0.0, 1.0);
    let p4 = Point::new(-3.0, 0.0);

    let mut board = Board::new();
    board.add_point(p1);
    board.add_point(p2);
    board.add_point(p3);
    board.add_point(p4);
    add_quadrilateral_sides(&mut board, [p1, p2, p3, p4]);

    let center = Point::new(0.0, 0.0);
    let side = Line::from_two_points(&p1, &p2);
    let foot = crate::geom::intersection::line_line(&side, &side.perpendicular_through(&center))
        .points
        .into_iter()
        .next()
        .expect("a rhombus side and its perpendicular through the center always meet");
    let target = Target::new().with_circle(Circle::from_point(center, foot));

    Statement::new("circle_in_rhombus", board, target).with_sequence("E", "IILO")
}
