//! Segment primitive: two endpoints stored in canonical order.

use rand::Rng;

use crate::configs::{HASH_PRECISION, PRIME, TOLERANCE};
use crate::hashset::Fingerprinted;

use super::line::Line;
use super::point::Point;
use super::vec2::Vec2;

/// A segment between two distinct points, canonically ordered (smaller `x`
/// first, ties broken by smaller `y`) so construction order never affects
/// the fingerprint.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub point1: Point,
    pub point2: Point,
}

impl Segment {
    /// Constructing a segment from two coincident points is a programming
    /// error: a segment with zero length has no well-defined direction.
    pub fn new(p1: Point, p2: Point) -> Self {
        assert!(
            !p1.approx_eq(&p2),
            "Segment::new: both endpoints are the same point"
        );
        let p1_first = if (p1.x - p2.x).abs() < TOLERANCE {
            p1.y < p2.y
        } else {
            p1.x < p2.x
        };
        if p1_first {
            Self {
                point1: p1,
                point2: p2,
            }
        } else {
            Self {
                point1: p2,
                point2: p1,
            }
        }
    }

    pub fn from_direction(start: Point, mut direction: Vec2, length: f64) -> Self {
        direction.set_length(length);
        let end = Point::new(start.x + direction.x, start.y + direction.y);
        Self::new(start, end)
    }

    pub fn length(&self) -> f64 {
        let dx = self.point2.x - self.point1.x;
        let dy = self.point2.y - self.point1.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The perpendicular bisector of this segment.
    pub fn bisector(&self) -> Line {
        let mid = Point::new(
            (self.point1.x + self.point2.x) / 2.0,
            (self.point1.y + self.point2.y) / 2.0,
        );
        let v = Vec2::from_points(self.point1.coords(), self.point2.coords()).perpendicular();
        Line::from_direction(&mid, &v)
    }

    /// Whether `p` falls within the segment's coordinate box (with tolerance
    /// slack so shared endpoints don't fall out).
    pub fn point_in_range(&self, p: &Point) -> bool {
        if p.x < self.point1.x - TOLERANCE || p.x > self.point2.x + TOLERANCE {
            return false;
        }
        if (self.point1.x - self.point2.x).abs() < TOLERANCE
            && (p.y < self.point1.y - TOLERANCE || p.y > self.point2.y + TOLERANCE)
        {
            return false;
        }
        true
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.point_in_range(p) && Line::from_segment(self).contains_point(p)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let mut v = Vec2::from_points(self.point1.coords(), self.point2.coords());
        let length = v.length();
        v.set_length(rng.gen_range(0.0..=length));
        Point::new(self.point1.x + v.x, self.point1.y + v.y)
    }
}

impl Fingerprinted for Segment {
    fn fingerprint(&self) -> i64 {
        let x1 = (self.point1.x * HASH_PRECISION).round() as i64;
        let y1 = (self.point1.y * HASH_PRECISION).round() as i64;
        let x2 = (self.point2.x * HASH_PRECISION).round() as i64;
        let y2 = (self.point2.y * HASH_PRECISION).round() as i64;
        x1.wrapping_mul(PRIME)
            .wrapping_add(y1)
            .wrapping_mul(PRIME)
            .wrapping_add(x2)
            .wrapping_mul(PRIME)
            .wrapping_add(y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn degenerate_segment_panics() {
        let p = Point::new(1.0, 1.0);
        Segment::new(p, p);
    }

    #[test]
    fn endpoint_order_does_not_affect_fingerprint() {
        let p1 = Point::new(1.0, 0.0);
        let p2 = Point::new(-1.0, 0.0);
        let s1 = Segment::new(p1, p2);
        let s2 = Segment::new(p2, p1);
        assert_eq!(s1.fingerprint(), s2.fingerprint());
    }

    #[test]
    fn bisector_passes_through_midpoint_perpendicular() {
        let s = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
        let l = s.bisector();
        assert!(l.contains_point(&Point::new(0.0, 0.0)));
        assert!(l.contains_point(&Point::new(0.0, 5.0)));
    }
}
