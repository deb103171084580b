//! Later constructions: a circle's center of rotation, and a line-circle
//! intersection used to cut a marked length off a ray.

use crate::geom::{Board, Circle, Line, Point, Segment, Vec2};

use super::{Statement, Target};

pub fn problems() -> Vec<(&'static str, fn() -> Statement)> {
    vec![
        ("center_of_rotation", center_of_rotation),
        ("line_circle_intersection", line_circle_intersection),
    ]
}

/// Two segments of equal length at different orientations, related by an
/// unknown rotation: `(pt1, pt3)` and `(pt2, pt4)` are corresponding-endpoint
/// pairs, so the center of rotation — equidistant from each point and its
/// image — lies on both pairs' perpendicular bisectors, at their meet.
fn center_of_rotation() -> Statement {
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

    Statement::new("center_of_rotation", board, target)
        .with_sequence("E", "OOIOI")
        .with_sequence("+", "++")
}

/// A marked center and a marked pair of points whose distance sets the
/// radius: the `Q` tool copies that distance onto a circle at the center.
fn line_circle_intersection() -> Statement {
    let origin = Point::new(0.0, 0.0);
    let along = Point::new(1.0, 0.0);
    let radius_p1 = Point::new(10.0, 0.0);
    let radius_p2 = Point::new(10.0, 3.0);

    let mut board = Board::new();
    board.add_point(origin);
    board.add_point(along);
    board.add_point(radius_p1);
    board.add_point(radius_p2);
    board.add_line(Line::from_two_points(&origin, &along));

    let target = Target::new().with_circle(Circle::from_radius(origin, 3.0));

    Statement::new("line_circle_intersection", board, target).with_sequence("E", "Q")
}
