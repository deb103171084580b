//! Circle primitive: center point plus radius.

use rand::Rng;

use crate::configs::{HASH_PRECISION, PRIME, TOLERANCE};
use crate::hashset::Fingerprinted;

use super::point::Point;
use super::segment::Segment;
use super::vec2::Vec2;

/// A circle, uniquely determined by its center and radius.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// A circle centered at `center` passing through `on_side`.
    pub fn from_point(center: Point, on_side: Point) -> Self {
        Self {
            center,
            radius: Segment::new(center, on_side).length(),
        }
    }

    pub fn from_radius(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        (Segment::new(*p, self.center).length() - self.radius).abs() < TOLERANCE
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x: f64 = rng.gen_range(-1.0..=1.0);
        let mut y = (1.0 - x * x).sqrt();
        if rng.gen_bool(0.5) {
            y = -y;
        }
        let mut v = Vec2::new(x, y);
        v.set_length(self.radius);
        Point::new(self.center.x + v.x, self.center.y + v.y)
    }
}

impl Fingerprinted for Circle {
    fn fingerprint(&self) -> i64 {
        let cx = (self.center.x * HASH_PRECISION).round() as i64;
        let cy = (self.center.y * HASH_PRECISION).round() as i64;
        let cr = (self.radius * HASH_PRECISION).round() as i64;
        cx.wrapping_mul(PRIME)
            .wrapping_add(cy)
            .wrapping_mul(PRIME)
            .wrapping_add(cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_on_the_circumference() {
        let c = Circle::from_radius(Point::new(0.0, 0.0), 2.0);
        assert!(c.contains_point(&Point::new(2.0, 0.0)));
        assert!(c.contains_point(&Point::new(0.0, -2.0)));
        assert!(!c.contains_point(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn from_point_measures_the_radius() {
        let c = Circle::from_point(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((c.radius - 5.0).abs() < 1e-9);
    }
}
