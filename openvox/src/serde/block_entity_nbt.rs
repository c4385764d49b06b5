//! NBT serialization and deserialization for [`BlockEntity`] type.

use glam::IVec3;

use crate::block_entity::{BlockEntity, BlockEntityHooks};

use super::nbt::{NbtCompound, NbtCompoundParse, NbtParseError};


/// Error type returned when decoding a block entity from NBT.
#[derive(thiserror::Error, Debug)]
pub enum BlockEntityNbtError {
    #[error("{0}")]
    Parse(#[from] NbtParseError),
    #[error("Invalid text message: {0}")]
    Message(#[from] serde_json::Error),
    #[error("Unknown block entity id: {0}")]
    UnknownId(String),
}


/// Encode a block entity and its position into a new NBT compound, the compound 
/// contains the block entity kind id and its coordinates.
pub fn to_nbt(pos: IVec3, block_entity: &BlockEntity) -> NbtCompound {
    let mut comp = NbtCompound::new();
    comp.insert("id", block_entity.id());
    comp.insert("x", pos.x);
    comp.insert("y", pos.y);
    comp.insert("z", pos.z);
    block_entity.to_nbt(&mut comp);
    comp
}

/// Decode a block entity and its position from a NBT compound.
pub fn from_nbt(comp: &NbtCompoundParse) -> Result<(IVec3, BlockEntity), BlockEntityNbtError> {

    let id = comp.get_string("id")?;
    let mut block_entity = BlockEntity::from_id(id)
        .ok_or_else(|| BlockEntityNbtError::UnknownId(id.to_string()))?;

    let pos = IVec3 {
        x: comp.get_int("x")?,
        y: comp.get_int("y")?,
        z: comp.get_int("z")?,
    };

    block_entity.from_nbt(comp)?;
    Ok((pos, block_entity))

}


#[cfg(test)]
mod tests {

    use crate::block_entity::grave::GraveBlockEntity;
    use crate::serde::nbt::Nbt;
    use crate::item::{self, ItemStack};
    use super::*;

    #[test]
    fn grave_round_trip() {

        let mut grave = GraveBlockEntity::default();
        grave.username = "Alice".to_string();
        grave.set_loot(&[ItemStack::new(item::BONE, 0).with_size(3)]);

        let pos = IVec3::new(-5, 70, 12);
        let comp = to_nbt(pos, &BlockEntity::Grave(grave));
        assert_eq!(comp.get_string("id"), Some("Grave"));
        assert_eq!(comp.get_int("x"), Some(-5));

        let nbt = Nbt::Compound(comp);
        let (read_pos, read) = from_nbt(&nbt.parse().as_compound().unwrap()).unwrap();
        assert_eq!(read_pos, pos);
        let BlockEntity::Grave(read) = read else { panic!("expected grave") };
        assert_eq!(read.username, "Alice");
        assert_eq!(read.inv[0], ItemStack::new(item::BONE, 0).with_size(3));

    }

    #[test]
    fn unknown_id() {

        let mut comp = NbtCompound::new();
        comp.insert("id", "Furnace");
        comp.insert("x", 0i32);
        comp.insert("y", 0i32);
        comp.insert("z", 0i32);

        let nbt = Nbt::Compound(comp);
        let err = from_nbt(&nbt.parse().as_compound().unwrap()).unwrap_err();
        assert!(matches!(err, BlockEntityNbtError::UnknownId(id) if id == "Furnace"));

    }

    #[test]
    fn missing_position() {

        let mut comp = NbtCompound::new();
        comp.insert("id", "Grave");

        let nbt = Nbt::Compound(comp);
        let err = from_nbt(&nbt.parse().as_compound().unwrap()).unwrap_err();
        assert!(matches!(err, BlockEntityNbtError::Parse(_)));

    }

}
