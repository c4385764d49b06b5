//! World ticking functions.

use glam::IVec3;

use crate::block_entity::BlockEntityHooks;

use super::World;


impl World {

    /// Tick the world, this advances the time, the weather and runs the tick hook of 
    /// every block entity, in insertion order.
    pub fn tick(&mut self) {

        self.time += 1;

        if !self.is_remote() {
            self.tick_weather();
        }

        self.tick_block_entities();

    }

    /// Tick all block entities. Block entities added while ticking are not ticked 
    /// before the next tick, and those removed are not ticked anymore.
    fn tick_block_entities(&mut self) {
        let positions = self.block_entities.keys().copied().collect::<Vec<IVec3>>();
        for pos in positions {
            self.with_block_entity(pos, |block_entity, world| {
                block_entity.tick(world, pos);
            });
        }
    }

}
