//! Interaction of players with blocks in the world.

use glam::IVec3;

use crate::block_entity::BlockEntityHooks;
use crate::entity::{Player, Hand};

use super::World;


impl World {

    /// Interact with a block at given position, using the given hand of the player. 
    /// This function returns true if an interaction has been handled and some action 
    /// happened to the world, which should typically prevent usage of the player's 
    /// hand item. Only blocks with a block entity are interactive.
    pub fn interact_block(&mut self, pos: IVec3, player: &mut Player, hand: Hand) -> bool {
        self.with_block_entity(pos, |block_entity, world| {
            block_entity.activated(world, pos, player, hand)
        }).unwrap_or(false)
    }

}
