//! Serialization and deserialization of block entities to and from NBT.

pub mod nbt;
pub mod item_stack_nbt;
pub mod slot_nbt;
pub mod block_entity_nbt;
