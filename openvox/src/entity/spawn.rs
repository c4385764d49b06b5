//! Natural spawn conditions of entities.

use glam::IVec3;

use crate::world::{World, Difficulty};

use super::{Entity, EntityKind};


/// Bats only spawn below this altitude.
const BAT_MAX_Y: i32 = 63;


impl Entity {

    /// Return true if this entity can naturally spawn at its current position, this
    /// checks light level, free space and kind specific conditions. This function may
    /// draw numbers from the world's random number generator.
    pub fn can_naturally_spawn(&self, world: &mut World) -> bool {

        let kind = self.kind();
        let block_pos = self.0.pos.floor().as_ivec3();

        let allowed = match kind {
            EntityKind::Item => true,
            EntityKind::Bat => {
                if block_pos.y >= BAT_MAX_Y {
                    return false;
                }
                let light = world.get_light(block_pos);
                light as i32 <= world.get_rand_mut().next_int_bounded(4)
            }
            _ if kind.is_hostile() => {
                if world.get_difficulty() == Difficulty::Peaceful {
                    return false;
                }
                let light = world.get_light(block_pos);
                light as i32 <= world.get_rand_mut().next_int_bounded(8)
            }
            _ => {
                // Animals need a grass block under them and daylight.
                let ground_ok = matches!(world.get_block(block_pos - IVec3::Y), Some((crate::block::GRASS, _)));
                ground_ok && world.get_light(block_pos) > 8
            }
        };

        allowed
            && !world.has_block_colliding(self.0.bb)
            && !world.has_entity_colliding(self.0.bb)
            && !world.has_fluid_colliding(self.0.bb)

    }

}
