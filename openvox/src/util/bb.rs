//! Axis-aligned bounding boxes.

use std::ops::Add;
use std::fmt;

use glam::DVec3;


/// An axis-aligned bounding box, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {

    /// The unit cube of a single block.
    pub const CUBE: Self = Self::new(DVec3::ZERO, DVec3::ONE);

    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create a box with the given horizontal width and height, its bottom face being
    /// centered on the given position. This is how entity boxes are laid out.
    pub fn new_bottom_centered(pos: DVec3, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self {
            min: DVec3::new(pos.x - half, pos.y, pos.z - half),
            max: DVec3::new(pos.x + half, pos.y + height, pos.z + half),
        }
    }

    pub fn size(self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// Expand this bounding box in all direction by the given delta.
    pub fn inflate(self, delta: DVec3) -> Self {
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Offset this bounding box' coordinates by the given delta.
    pub fn offset(self, delta: DVec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Return true if this bounding box intersects with the given one.
    pub fn intersects(self, other: Self) -> bool {
        other.max.x > self.min.x && other.min.x < self.max.x &&
        other.max.y > self.min.y && other.min.y < self.max.y &&
        other.max.z > self.min.z && other.min.z < self.max.z
    }

    /// Return true if this bounding box contains the given point.
    pub fn contains(self, point: DVec3) -> bool {
        point.x > self.min.x && point.x < self.max.x &&
        point.y > self.min.y && point.y < self.max.y &&
        point.z > self.min.z && point.z < self.max.z
    }

}

impl Add<DVec3> for BoundingBox {
    type Output = Self;
    #[inline]
    fn add(self, rhs: DVec3) -> Self::Output {
        self.offset(rhs)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn inflate_and_intersect() {
        let bb = BoundingBox::CUBE + DVec3::new(10.0, 64.0, 10.0);
        let area = bb.inflate(DVec3::splat(7.0));
        assert_eq!(area.min, DVec3::new(3.0, 57.0, 3.0));
        assert_eq!(area.max, DVec3::new(18.0, 72.0, 18.0));
        // Touching faces are not an intersection.
        assert!(!area.intersects(BoundingBox::CUBE + DVec3::new(18.0, 64.0, 10.0)));
        assert!(area.intersects(BoundingBox::CUBE + DVec3::new(17.5, 64.0, 10.0)));
    }

    #[test]
    fn bottom_centered() {
        let bb = BoundingBox::new_bottom_centered(DVec3::new(0.5, 1.0, 0.5), 0.6, 1.8);
        assert!((bb.min.x - 0.2).abs() < 1e-9);
        assert!((bb.max.y - 2.8).abs() < 1e-9);
        assert!(bb.contains(DVec3::new(0.5, 1.5, 0.5)));
    }

}
