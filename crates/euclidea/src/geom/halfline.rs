//! Half-line primitive: a ray from an endpoint along a unit direction.

use rand::Rng;

use crate::configs::{HASH_PRECISION, PRIME, RANDOM_POINT_RANGE, TOLERANCE};
use crate::hashset::Fingerprinted;

use super::line::Line;
use super::point::Point;
use super::vec2::Vec2;

/// A ray, uniquely determined by its endpoint and normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct HalfLine {
    pub point: Point,
    pub direction: Vec2,
}

impl HalfLine {
    /// Builds a half-line from its endpoint and a direction that is
    /// normalized in place (the caller's vector is consumed, not aliased).
    pub fn from_direction(point: Point, mut direction: Vec2) -> Self {
        direction.normalize();
        Self { point, direction }
    }

    pub fn from_two_points(source: Point, towards: Point) -> Self {
        let direction = Vec2::from_points(source.coords(), towards.coords());
        Self::from_direction(source, direction)
    }

    /// Whether `p` lies within the half-line's coordinate range (the single
    /// side of `point` that `direction` points toward).
    pub fn point_in_range(&self, p: &Point) -> bool {
        if self.direction.x.abs() < TOLERANCE {
            if self.direction.y < 0.0 && p.y - self.point.y - TOLERANCE > 0.0 {
                return false;
            }
            if self.direction.y > 0.0 && p.y - self.point.y + TOLERANCE < 0.0 {
                return false;
            }
        } else {
            if self.direction.x < 0.0 && p.x - self.point.x - TOLERANCE > 0.0 {
                return false;
            }
            if self.direction.x > 0.0 && p.x - self.point.x + TOLERANCE < 0.0 {
                return false;
            }
        }
        true
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.point_in_range(p) && Line::from_half_line(self).contains_point(p)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let mut v = self.direction;
        v.set_length(rng.gen_range(0.0..=RANDOM_POINT_RANGE));
        Point::new(self.point.x + v.x, self.point.y + v.y)
    }
}

impl Fingerprinted for HalfLine {
    fn fingerprint(&self) -> i64 {
        let dx = (self.direction.x * HASH_PRECISION).round() as i64;
        let dy = (self.direction.y * HASH_PRECISION).round() as i64;
        let px = (self.point.x * HASH_PRECISION).round() as i64;
        let py = (self.point.y * HASH_PRECISION).round() as i64;
        dx.wrapping_mul(PRIME)
            .wrapping_add(dy)
            .wrapping_mul(PRIME)
            .wrapping_add(px)
            .wrapping_mul(PRIME)
            .wrapping_add(py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_in_range_respects_direction() {
        let h = HalfLine::from_direction(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert!(h.point_in_range(&Point::new(5.0, 0.0)));
        assert!(!h.point_in_range(&Point::new(-5.0, 0.0)));
    }

    #[test]
    fn direction_is_normalized_on_construction() {
        let h = HalfLine::from_direction(Point::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((h.direction.length() - 1.0).abs() < 1e-9);
    }
}
