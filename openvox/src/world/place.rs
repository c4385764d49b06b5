//! Advanced block placing methods.

use glam::IVec3;

use tracing::debug;

use crate::block::sprinkler;
use crate::block_entity::{self, BlockEntityHooks};
use crate::entity::Player;
use crate::block;

use super::World;


impl World {

    /// This function checks if the given block id can be placed at a particular 
    /// position in the world.
    pub fn can_place_block(&self, pos: IVec3, id: u8) -> bool {
        let base = match id {
            block::SPRINKLER => sprinkler::can_place_at(self, pos),
            block::TORCH |
            block::SNOW => self.is_block_cube(pos - IVec3::Y),
            _ => true,
        };
        base && self.is_block_replaceable(pos)
    }

    /// Return true if the block at the given position is a full solid cube.
    pub fn is_block_cube(&self, pos: IVec3) -> bool {
        self.get_block(pos).is_some_and(|(id, _)| block::material::is_cube(id))
    }

    /// Return true if the block at the given position can be replaced by a placed 
    /// block, false if out of the world.
    pub fn is_block_replaceable(&self, pos: IVec3) -> bool {
        self.get_block(pos).is_some_and(|(id, _)| block::material::is_replaceable(id))
    }

    /// Place a block at the given position, if allowed. The metadata of some blocks is
    /// derived from the placer's look. If the block has a block entity, it is created
    /// and its `placed` hook is run with the placer and the custom name of the placed
    /// stack. Returns true if the block has been placed.
    pub fn place_block(&mut self, pos: IVec3, id: u8, metadata: u8, placer: Option<&Player>, stack_name: Option<&str>) -> bool {

        if !self.can_place_block(pos, id) {
            return false;
        }

        let metadata = match (id, placer) {
            (block::SPRINKLER, Some(player)) => sprinkler::new_metadata(sprinkler::Axis::from_yaw(player.look.x)),
            (block::SPRINKLER, None) => sprinkler::new_metadata(sprinkler::get_axis(metadata)),
            _ => metadata,
        };

        self.set_block(pos, id, metadata);
        debug!("placed {} at {pos}", block::name(id));

        if let Some(block_entity) = block_entity::new_for_block(id) {
            self.set_block_entity(pos, block_entity);
            self.with_block_entity(pos, |block_entity, world| {
                block_entity.placed(world, pos, placer, stack_name);
            });
        } else {
            self.remove_block_entity(pos);
        }

        true

    }

}


#[cfg(test)]
mod tests {

    use crate::block_entity::BlockEntity;
    use super::*;

    #[test]
    fn sprinkler_needs_solid_below() {

        let mut world = World::new();
        let pos = IVec3::new(0, 10, 0);
        assert!(!world.place_block(pos, block::SPRINKLER, 0, None, None));

        world.set_block(pos - IVec3::Y, block::GLASS, 0);
        assert!(!world.place_block(pos, block::SPRINKLER, 0, None, None));

        world.set_block(pos - IVec3::Y, block::STONE, 0);
        assert!(world.place_block(pos, block::SPRINKLER, 0, None, None));
        let (id, metadata) = world.get_block(pos).unwrap();
        assert_eq!(id, block::SPRINKLER);
        assert_eq!(sprinkler::get_level(metadata), sprinkler::DEFAULT_LEVEL);

        // Cannot place twice at the same position.
        assert!(!world.place_block(pos, block::SPRINKLER, 0, None, None));

    }

    #[test]
    fn sprinkler_axis_from_player() {

        let mut world = World::new();
        let pos = IVec3::new(0, 10, 0);
        world.set_block(pos - IVec3::Y, block::STONE, 0);

        let mut player = Player::new("Alice");
        player.look.x = std::f32::consts::FRAC_PI_2;
        assert!(world.place_block(pos, block::SPRINKLER, 0, Some(&player), None));
        let (_, metadata) = world.get_block(pos).unwrap();
        assert_eq!(sprinkler::get_axis(metadata), sprinkler::Axis::X);

    }

    #[test]
    fn block_entity_created() {

        let mut world = World::new();
        let pos = IVec3::new(0, 10, 0);
        assert!(world.place_block(pos, block::AUTO_ENCHANTMENT_TABLE, 0, None, None));
        assert!(matches!(world.get_block_entity(pos), Some(BlockEntity::AutoEnchantmentTable(_))));

    }

}
