//! Pairwise intersection routines for all five primitive kinds.
//!
//! Every routine here is a pure function of its two operands: it allocates
//! no identity, mutates nothing, and is symmetric in the sense that
//! `intersect(a, b)` and `intersect(b, a)` agree on the resulting point set
//! (the table below is written in one canonical order per unordered pair;
//! callers needing the mirrored signature call through the existing one).

use crate::configs::TOLERANCE;

use super::circle::Circle;
use super::halfline::HalfLine;
use super::line::Line;
use super::point::Point;
use super::segment::Segment;

/// 0, 1, or 2 intersection points.
#[derive(Clone, Debug, Default)]
pub struct Intersection {
    pub points: Vec<Point>,
}

impl Intersection {
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn one(p: Point) -> Self {
        Self { points: vec![p] }
    }

    pub fn two(p1: Point, p2: Point) -> Self {
        Self {
            points: vec![p1, p2],
        }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }
}

/// Two lines meet at one point by Cramer's rule, unless their canonicalized
/// coefficients declare them parallel.
pub fn line_line(l1: &Line, l2: &Line) -> Intersection {
    if l1.a == l2.a && l1.b == l2.b {
        return Intersection::empty();
    }
    let denom = l1.a * l2.b - l2.a * l1.b;
    let x = (-l2.b * l1.c + l1.b * l2.c) / denom;
    let y = (l2.a * l1.c - l1.a * l2.c) / denom;
    Intersection::one(Point::new(x, y))
}

/// A line meets a circle in 0, 1 (tangent), or 2 points.
pub fn line_circle(l: &Line, c: &Circle) -> Intersection {
    let dist_numer = l.a * c.center.x + l.b * c.center.y + l.c;
    let dist_denom_sq = l.a * l.a + l.b * l.b;
    let dist = dist_numer.abs() / dist_denom_sq.sqrt();
    if (dist - c.radius).abs() < TOLERANCE {
        let tangent_line = Line::from_direction(&c.center, &l.normal_vector());
        return line_line(l, &tangent_line);
    }
    if dist > c.radius {
        return Intersection::empty();
    }
    let det = (dist_denom_sq * c.radius * c.radius - dist_numer * dist_numer).sqrt();
    let ptxc = l.b * l.b * c.center.x - l.a * (l.c + l.b * c.center.y);
    let ptyc = -l.b * (l.c + l.a * c.center.x) + l.a * l.a * c.center.y;
    let pt1x = (ptxc - l.b * det) / dist_denom_sq;
    let pt2x = (ptxc + l.b * det) / dist_denom_sq;
    let pt1y = (ptyc + l.a * det) / dist_denom_sq;
    let pt2y = (ptyc - l.a * det) / dist_denom_sq;
    Intersection::two(Point::new(pt1x, pt1y), Point::new(pt2x, pt2y))
}

/// Intersects as a full line, then keeps only the point(s) in range.
pub fn line_halfline(l: &Line, h: &HalfLine) -> Intersection {
    let full = line_line(l, &Line::from_half_line(h));
    match full.points.first() {
        Some(&p) if h.point_in_range(&p) => Intersection::one(p),
        _ => Intersection::empty(),
    }
}

pub fn line_segment(l: &Line, s: &Segment) -> Intersection {
    let full = line_line(l, &Line::from_segment(s));
    match full.points.first() {
        Some(&p) if s.point_in_range(&p) => Intersection::one(p),
        _ => Intersection::empty(),
    }
}

pub fn halfline_halfline(h1: &HalfLine, h2: &HalfLine) -> Intersection {
    let full = line_halfline(&Line::from_half_line(h1), h2);
    match full.points.first() {
        Some(&p) if h1.point_in_range(&p) => Intersection::one(p),
        _ => Intersection::empty(),
    }
}

pub fn halfline_segment(h: &HalfLine, s: &Segment) -> Intersection {
    let full = line_segment(&Line::from_half_line(h), s);
    match full.points.first() {
        Some(&p) if h.point_in_range(&p) => Intersection::one(p),
        _ => Intersection::empty(),
    }
}

/// A half-line meets a circle by intersecting the underlying line, then
/// filtering the 0/1/2 candidate points by range.
pub fn halfline_circle(h: &HalfLine, c: &Circle) -> Intersection {
    let full = line_circle(&Line::from_half_line(h), c);
    let kept: Vec<Point> = full
        .points
        .into_iter()
        .filter(|p| h.point_in_range(p))
        .collect();
    Intersection { points: kept }
}

pub fn segment_segment(s1: &Segment, s2: &Segment) -> Intersection {
    let full = line_segment(&Line::from_segment(s1), s2);
    match full.points.first() {
        Some(&p) if s1.point_in_range(&p) => Intersection::one(p),
        _ => Intersection::empty(),
    }
}

/// A segment meets a circle by intersecting the underlying line, then
/// filtering the 0/1/2 candidate points by range.
pub fn segment_circle(s: &Segment, c: &Circle) -> Intersection {
    let full = line_circle(&Line::from_segment(s), c);
    let kept: Vec<Point> = full
        .points
        .into_iter()
        .filter(|p| s.point_in_range(p))
        .collect();
    Intersection { points: kept }
}

/// Two circles meet at 0, 1 (tangent), or 2 points.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> Intersection {
    if c1.center.approx_eq(&c2.center) {
        return Intersection::empty();
    }
    let dist = Segment::new(c1.center, c2.center).length();
    if (dist - c1.radius - c2.radius).abs() < TOLERANCE {
        let mut v = super::vec2::Vec2::from_points(c1.center.coords(), c2.center.coords());
        v.set_length(c1.radius);
        return Intersection::one(Point::new(c1.center.x + v.x, c1.center.y + v.y));
    }
    if dist > c1.radius + c2.radius {
        return Intersection::empty();
    }
    if (c1.radius - c2.radius).abs() > dist {
        return Intersection::empty();
    }
    // https://math.stackexchange.com/a/1367732
    let r2 = dist * dist;
    let coeff1 = (c1.radius * c1.radius - c2.radius * c2.radius) / r2;
    let coeff2 = (2.0 * (c1.radius * c1.radius + c2.radius * c2.radius) / r2
        - coeff1 * coeff1
        - 1.0)
        .sqrt();
    let (cx1, cy1) = (c1.center.x, c1.center.y);
    let (cx2, cy2) = (c2.center.x, c2.center.y);
    let pt1x = (cx1 + cx2) / 2.0 + (cx2 - cx1) * coeff1 / 2.0 + (cy2 - cy1) * coeff2 / 2.0;
    let pt2x = (cx1 + cx2) / 2.0 + (cx2 - cx1) * coeff1 / 2.0 - (cy2 - cy1) * coeff2 / 2.0;
    let pt1y = (cy1 + cy2) / 2.0 + (cy2 - cy1) * coeff1 / 2.0 - (cx2 - cx1) * coeff2 / 2.0;
    let pt2y = (cy1 + cy2) / 2.0 + (cy2 - cy1) * coeff1 / 2.0 + (cx2 - cx1) * coeff2 / 2.0;
    Intersection::two(Point::new(pt1x, pt1y), Point::new(pt2x, pt2y))
}
