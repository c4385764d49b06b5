//! Looting functions to spawn items in a world.

use std::ops::{Mul, Sub};

use glam::{IVec3, DVec3};

use crate::entity::{EntityKind, Kind};
use crate::item::ItemStack;

use super::World;


/// Methods related to loot spawning in the world.
impl World {

    /// Spawn item entity in the world containing the given stack. The velocity of the 
    /// spawned item stack is random and the initial position depends on the given spread.
    /// This item entity will be impossible to pickup for 10 ticks. Returns the id of the
    /// spawned entity, none if the stack is empty.
    pub fn spawn_loot(&mut self, mut pos: DVec3, stack: ItemStack, spread: f32) -> Option<u32> {

        if stack.is_empty() {
            return None;
        }
        
        if spread != 0.0 {
            pos += self.rand.next_float_vec()
                .mul(spread)
                .as_dvec3()
                .sub(spread as f64 * 0.5);
        }

        let mut entity = EntityKind::Item.new_default(pos);
        entity.0.persistent = true;
        entity.0.vel.x = self.rand.next_double() * 0.2 - 0.1;
        entity.0.vel.y = 0.2;
        entity.0.vel.z = self.rand.next_double() * 0.2 - 0.1;
        if let Kind::Item(item) = &mut entity.1 {
            item.stack = stack;
            item.frozen_time = 10;
        }

        Some(self.spawn_entity(entity))

    }

    /// Spawn every given stack as loot around the center of the given block, returning
    /// the number of stacks actually spawned.
    pub fn spawn_block_stacks_loot(&mut self, pos: IVec3, stacks: impl IntoIterator<Item = ItemStack>) -> usize {
        stacks.into_iter()
            .filter(|stack| self.spawn_loot(pos.as_dvec3() + 0.5, *stack, 0.7).is_some())
            .count()
    }

}


#[cfg(test)]
mod tests {

    use crate::item;
    use super::*;

    #[test]
    fn block_stacks() {

        let mut world = World::new();
        let pos = IVec3::new(2, 64, 2);
        let stacks = [
            ItemStack::new(item::APPLE, 0).with_size(3),
            ItemStack::EMPTY,
            ItemStack::new(item::BONE, 0),
        ];

        assert_eq!(world.spawn_block_stacks_loot(pos, stacks), 2);

        let spawned = world.iter_entities().filter_map(|e| e.item_stack()).collect::<Vec<_>>();
        assert_eq!(spawned, [stacks[0], stacks[2]]);

        for entity in world.iter_entities() {
            assert!(entity.0.pos.distance(pos.as_dvec3() + 0.5) < 1.0);
        }

    }

}
