//! Material properties of blocks.

use crate::block;


/// Return true if a block is an opaque full cube, such blocks can support other blocks
/// placed on top of them.
pub fn is_cube(id: u8) -> bool {
    match id {
        block::AIR |
        block::WATER_MOVING |
        block::WATER_STILL |
        block::LAVA_MOVING |
        block::LAVA_STILL |
        block::GLASS |
        block::TALL_GRASS |
        block::TORCH |
        block::CHEST |
        block::SNOW |
        block::GRAVE |
        block::SPRINKLER |
        block::AUTO_ENCHANTMENT_TABLE => false,
        _ => true,
    }
}

/// Return true if the block is a fluid.
pub fn is_fluid(id: u8) -> bool {
    matches!(id, 
        block::WATER_MOVING | 
        block::WATER_STILL | 
        block::LAVA_MOVING | 
        block::LAVA_STILL)
}

/// Return true if a block can be replaced when placing another block in its place.
pub fn is_replaceable(id: u8) -> bool {
    matches!(id, block::AIR | block::TALL_GRASS | block::SNOW) || is_fluid(id)
}
