//! Collision boxes of blocks, relative to the block's origin.

use glam::DVec3;

use crate::util::BoundingBox;
use crate::block;

use super::sprinkler;


/// Get the collision box of a block, relative to its position, none is returned for
/// blocks without collision.
pub fn get_box(id: u8, metadata: u8) -> Option<BoundingBox> {
    match id {
        block::AIR |
        block::TALL_GRASS |
        block::TORCH |
        block::SNOW => None,
        _ if block::material::is_fluid(id) => None,
        block::GRAVE => Some(BoundingBox::new(DVec3::ZERO, DVec3::new(1.0, 0.2, 1.0))),
        block::CHEST => Some(BoundingBox::new(DVec3::new(0.0625, 0.0, 0.0625), DVec3::new(0.9375, 0.875, 0.9375))),
        block::AUTO_ENCHANTMENT_TABLE => Some(BoundingBox::new(DVec3::ZERO, DVec3::new(1.0, 0.75, 1.0))),
        block::SPRINKLER => Some(sprinkler::get_box(metadata)),
        _ => Some(BoundingBox::CUBE),
    }
}
