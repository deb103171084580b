//! Line primitive: `ax + by + c = 0`, canonicalized so that equal lines
//! built by different constructions share a fingerprint.

use rand::Rng;

use crate::configs::{PRIME, RANDOM_POINT_RANGE, TOLERANCE};
use crate::hashset::Fingerprinted;

use super::halfline::HalfLine;
use super::point::Point;
use super::segment::Segment;
use super::vec2::Vec2;

const MAX_COEFF: f64 = 1e7;
const LINE_THRESHOLD: f64 = 0.1;

/// A line `ax + by + c = 0`. Non-unique as coefficients, so construction
/// always canonicalizes: `a` is pinned non-negative (or `a=0 ∧ b≥0`), then
/// the largest-magnitude coefficient is scaled to `MAX_COEFF`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
}

impl Line {
    pub fn from_coefficients(mut a: f64, mut b: f64, mut c: f64) -> Self {
        if a < 0.0 {
            a = -a;
            b = -b;
            c = -c;
        } else if a == 0.0 && b < 0.0 {
            b = -b;
            c = -c;
        }
        let max = a.max(b.abs()).max(c.abs());
        let coeff = MAX_COEFF / max;
        Self {
            a: a * coeff,
            b: b * coeff,
            c: c * coeff,
        }
    }

    pub fn from_two_points(p1: &Point, p2: &Point) -> Self {
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = p2.x * p1.y - p1.x * p2.y;
        Self::from_coefficients(a, b, c)
    }

    pub fn from_segment(s: &Segment) -> Self {
        Self::from_two_points(&s.point1, &s.point2)
    }

    /// A line through `point` whose normal is `direction`.
    pub fn from_direction(point: &Point, direction: &Vec2) -> Self {
        let n = direction.perpendicular();
        Self::from_coefficients(n.x, n.y, -n.x * point.x - n.y * point.y)
    }

    pub fn from_half_line(h: &HalfLine) -> Self {
        Self::from_direction(&h.point, &h.direction)
    }

    /// The angle bisector of `(p1, p2, p3)` at vertex `p2`.
    ///
    /// Shortens the longer arm to the shorter arm's length, then bisects the
    /// segment between the shortened endpoint and the short arm's far end.
    /// `None` if `p2` lies between two collinear, same-direction arms: the
    /// shortened point then coincides with the short arm's far end and there
    /// is no well-defined bisector to build a segment from.
    pub fn angle_bisector(p1: &Point, p2: &Point, p3: &Point) -> Option<Self> {
        let s1 = Segment::new(*p1, *p2);
        let s2 = Segment::new(*p2, *p3);
        let d1 = s1.length();
        let d2 = s2.length();
        let (short_end, long_arm, short_len) = if d1 > d2 {
            (*p3, s1, d2)
        } else {
            (*p1, s2, d1)
        };
        let c = super::circle::Circle::from_radius(*p2, short_len);
        let q = crate::geom::intersection::segment_circle(&long_arm, &c)
            .points
            .into_iter()
            .next()
            .expect("angle bisector: short radius must cut the long arm");
        if q.approx_eq(&short_end) {
            return None;
        }
        Some(Segment::new(short_end, q).bisector())
    }

    /// Returns the fingerprint, identical for any two canonicalized lines
    /// that differ by less than the rounding tolerance.
    pub fn contains_point(&self, p: &Point) -> bool {
        (self.a * p.x + self.b * p.y + self.c).abs() < LINE_THRESHOLD
    }

    #[inline]
    pub fn normal_vector(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    #[inline]
    pub fn parallel_vector(&self) -> Vec2 {
        Vec2::new(-self.b, self.a)
    }

    pub fn perpendicular_through(&self, p: &Point) -> Line {
        Line::from_direction(p, &self.normal_vector())
    }

    pub fn parallel_through(&self, p: &Point) -> Line {
        Line::from_direction(p, &self.parallel_vector())
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        (self.a * p.x + self.b * p.y + self.c).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }

    /// A uniformly sampled point on the line within `RANDOM_POINT_RANGE` of
    /// the origin, used by the solver's degree-of-freedom bootstrap.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        if self.b.abs() > TOLERANCE {
            let x = rng.gen_range(-RANDOM_POINT_RANGE..=RANDOM_POINT_RANGE);
            let y = -(self.a * x + self.c) / self.b;
            Point::new(x, y)
        } else {
            let y = rng.gen_range(-RANDOM_POINT_RANGE..=RANDOM_POINT_RANGE);
            let x = -(self.b * y + self.c) / self.a;
            Point::new(x, y)
        }
    }
}

impl Fingerprinted for Line {
    fn fingerprint(&self) -> i64 {
        let ca = self.a.round() as i64;
        let cb = self.b.round() as i64;
        let cc = self.c.round() as i64;
        ca.wrapping_mul(PRIME)
            .wrapping_add(cb)
            .wrapping_mul(PRIME)
            .wrapping_add(cc)
    }
}
