//! Sprinkler block metadata functions and placement rules.
//! 
//! The sprinkler is a thin horizontal pipe that lays on top of a solid block, it can
//! be oriented along the X or Z axis and carries a liquid level in its metadata.

use std::f32::consts::TAU;

use glam::{DVec3, IVec3};

use crate::util::BoundingBox;
use crate::world::World;
use crate::block;


/// Pipe box when oriented along the Z axis, relative to the block origin.
const BASE_BOX: BoundingBox = BoundingBox::new(DVec3::new(0.3, 0.0, 0.0), DVec3::new(0.7, 0.3, 1.0));

/// Default liquid level for a newly placed sprinkler.
pub const DEFAULT_LEVEL: u8 = 1;


/// Horizontal axis the sprinkler pipe is laid along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

impl Axis {

    /// Get the horizontal axis a look is mostly pointing to, yaw is in radians.
    pub fn from_yaw(yaw: f32) -> Self {
        match ((yaw * 4.0 / TAU + 0.5).floor() as i32) & 1 {
            0 => Self::Z,
            _ => Self::X,
        }
    }

}

#[inline]
pub fn get_axis(metadata: u8) -> Axis {
    if metadata & 1 == 0 { Axis::Z } else { Axis::X }
}

#[inline]
pub fn set_axis(metadata: &mut u8, axis: Axis) {
    *metadata &= !1;
    *metadata |= (axis == Axis::X) as u8;
}

/// Get the liquid level of the sprinkler, in range 0..16.
#[inline]
pub fn get_level(metadata: u8) -> u8 {
    (metadata >> 1) & 15
}

#[inline]
pub fn set_level(metadata: &mut u8, level: u8) {
    *metadata &= !(15 << 1);
    *metadata |= (level & 15) << 1;
}

/// Build the metadata of a sprinkler freshly placed along the given axis.
pub fn new_metadata(axis: Axis) -> u8 {
    let mut metadata = 0;
    set_axis(&mut metadata, axis);
    set_level(&mut metadata, DEFAULT_LEVEL);
    metadata
}

/// Get the collision box of the sprinkler, relative to its block origin. The base box
/// is rotated a quarter turn around the block's vertical center line for the X axis.
pub fn get_box(metadata: u8) -> BoundingBox {
    match get_axis(metadata) {
        Axis::Z => BASE_BOX,
        Axis::X => BoundingBox::new(
            DVec3::new(BASE_BOX.min.z, BASE_BOX.min.y, BASE_BOX.min.x),
            DVec3::new(BASE_BOX.max.z, BASE_BOX.max.y, BASE_BOX.max.x),
        ),
    }
}

/// A sprinkler can only be placed on top of a solid block.
pub fn can_place_at(world: &World, pos: IVec3) -> bool {
    let Some((below_id, _)) = world.get_block(pos - IVec3::Y) else { return false };
    block::material::is_cube(below_id)
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn metadata() {

        let mut metadata = new_metadata(Axis::X);
        assert_eq!(get_axis(metadata), Axis::X);
        assert_eq!(get_level(metadata), DEFAULT_LEVEL);

        set_level(&mut metadata, 15);
        set_axis(&mut metadata, Axis::Z);
        assert_eq!(get_axis(metadata), Axis::Z);
        assert_eq!(get_level(metadata), 15);

    }

    #[test]
    fn rotated_box() {

        let z = get_box(new_metadata(Axis::Z));
        assert_eq!(z, BASE_BOX);
        
        let x = get_box(new_metadata(Axis::X));
        assert_eq!(x.min, DVec3::new(0.0, 0.0, 0.3));
        assert_eq!(x.max, DVec3::new(1.0, 0.3, 0.7));
        assert_eq!(x.size().y, z.size().y);

    }

    #[test]
    fn axis_from_yaw() {
        assert_eq!(Axis::from_yaw(0.0), Axis::Z);
        assert_eq!(Axis::from_yaw(TAU / 4.0), Axis::X);
        assert_eq!(Axis::from_yaw(TAU / 2.0), Axis::Z);
        assert_eq!(Axis::from_yaw(-TAU / 4.0), Axis::X);
    }

}
