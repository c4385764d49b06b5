//! This module contains definition and behaviors for block entities.

use glam::IVec3;

use crate::serde::block_entity_nbt::BlockEntityNbtError;
use crate::serde::nbt::{NbtCompound, NbtCompoundParse};
use crate::entity::{Player, Hand};
use crate::world::World;
use crate::block;

pub mod grave;
pub mod auto_enchantment_table;


/// All kinds of block entities.
#[derive(Debug, Clone)]
pub enum BlockEntity {
    Grave(grave::GraveBlockEntity),
    AutoEnchantmentTable(auto_enchantment_table::AutoEnchantmentTableBlockEntity),
}

/// Create the default block entity attached to the given block, if any.
pub fn new_for_block(id: u8) -> Option<BlockEntity> {
    Some(match id {
        block::GRAVE => BlockEntity::Grave(Default::default()),
        block::AUTO_ENCHANTMENT_TABLE => BlockEntity::AutoEnchantmentTable(Default::default()),
        _ => return None,
    })
}


/// Hooks called by the world on a block entity. While a hook is running, the block 
/// entity is taken out of the world, so it cannot be queried through the world.
pub trait BlockEntityHooks {

    /// Called on each world tick.
    fn tick(&mut self, world: &mut World, pos: IVec3) {
        let _ = (world, pos);
    }

    /// Called just after the block entity has been created by a placed block. The 
    /// placer is absent if the block was not placed by a player, the stack name is the
    /// custom name of the placed item stack, if it has one.
    fn placed(&mut self, world: &mut World, pos: IVec3, placer: Option<&Player>, stack_name: Option<&str>) {
        let _ = (world, pos, placer, stack_name);
    }

    /// Called when a player interacts with the block, returns true if the interaction
    /// has been handled.
    fn activated(&mut self, world: &mut World, pos: IVec3, player: &mut Player, hand: Hand) -> bool {
        let _ = (world, pos, player, hand);
        false
    }

    /// Write the kind specific data of this block entity into the given compound.
    fn to_nbt(&self, comp: &mut NbtCompound);

    /// Read the kind specific data of this block entity from the given compound.
    fn from_nbt(&mut self, comp: &NbtCompoundParse) -> Result<(), BlockEntityNbtError>;

}

impl BlockEntity {

    /// Get the identifier of this block entity kind, as saved in NBT.
    pub fn id(&self) -> &'static str {
        match self {
            BlockEntity::Grave(_) => "Grave",
            BlockEntity::AutoEnchantmentTable(_) => "AutoEnchantmentTable",
        }
    }

    /// Create a default block entity from its NBT identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "Grave" => BlockEntity::Grave(Default::default()),
            "AutoEnchantmentTable" => BlockEntity::AutoEnchantmentTable(Default::default()),
            _ => return None,
        })
    }

}

impl BlockEntityHooks for BlockEntity {

    fn tick(&mut self, world: &mut World, pos: IVec3) {
        match self {
            BlockEntity::Grave(grave) => grave.tick(world, pos),
            BlockEntity::AutoEnchantmentTable(table) => table.tick(world, pos),
        }
    }

    fn placed(&mut self, world: &mut World, pos: IVec3, placer: Option<&Player>, stack_name: Option<&str>) {
        match self {
            BlockEntity::Grave(grave) => grave.placed(world, pos, placer, stack_name),
            BlockEntity::AutoEnchantmentTable(table) => table.placed(world, pos, placer, stack_name),
        }
    }

    fn activated(&mut self, world: &mut World, pos: IVec3, player: &mut Player, hand: Hand) -> bool {
        match self {
            BlockEntity::Grave(grave) => grave.activated(world, pos, player, hand),
            BlockEntity::AutoEnchantmentTable(table) => table.activated(world, pos, player, hand),
        }
    }

    fn to_nbt(&self, comp: &mut NbtCompound) {
        match self {
            BlockEntity::Grave(grave) => grave.to_nbt(comp),
            BlockEntity::AutoEnchantmentTable(table) => table.to_nbt(comp),
        }
    }

    fn from_nbt(&mut self, comp: &NbtCompoundParse) -> Result<(), BlockEntityNbtError> {
        match self {
            BlockEntity::Grave(grave) => grave.from_nbt(comp),
            BlockEntity::AutoEnchantmentTable(table) => table.from_nbt(comp),
        }
    }

}
