//! Common NBT serde functions for item slots and whole inventories.

use tracing::warn;

use crate::serde::nbt::{NbtParseError, NbtCompoundParse, NbtCompound, Nbt};
use crate::inventory::Inventory;
use crate::item::ItemStack;

use super::item_stack_nbt;

/// Create a slot and item stack from a NBT compound.
pub fn from_nbt(comp: &NbtCompoundParse) -> Result<(u8, ItemStack), NbtParseError> {
    let slot = comp.get_byte("Slot")? as u8;
    let stack = item_stack_nbt::from_nbt(comp)?;
    Ok((slot, stack))
}

/// Encode a slot and item stack into a NBT compound.
pub fn to_nbt(comp: &mut NbtCompound, slot: u8, stack: ItemStack) -> &mut NbtCompound {
    comp.insert("Slot", slot as i8);
    item_stack_nbt::to_nbt(comp, stack)
}

/// Encode the non-empty stacks of an inventory into a list of slot compounds.
pub fn to_nbt_from_inv(inv: &[ItemStack]) -> Vec<Nbt> {
    let mut list = Vec::new();
    for (index, stack) in inv.iter().copied().enumerate() {
        if index < 256 && !stack.is_empty() {
            let mut comp = NbtCompound::new();
            to_nbt(&mut comp, index as u8, stack);
            list.push(comp.into());
        }
    }
    list
}

/// Write a whole inventory into the given compound, its slot count is saved in `size`
/// and its stacks in `Items`.
pub fn inv_to_nbt(comp: &mut NbtCompound, inv: &Inventory) {
    comp.insert("size", inv.size().min(i32::MAX as usize) as i32);
    comp.insert("Items", to_nbt_from_inv(inv));
}

/// Read a whole inventory from the given compound, the inventory is reallocated to the
/// saved slot count, or to the default size if absent. Missing items leave the inventory
/// empty and slots out of range are discarded.
pub fn inv_from_nbt(comp: &NbtCompoundParse, default_size: usize) -> Result<Inventory, NbtParseError> {

    let size = match comp.get_opt("size", |tag| tag.as_int())? {
        Some(size) => size.clamp(0, 256) as usize,
        None => default_size,
    };

    let mut inv = Inventory::new(size);

    let Some(items) = comp.get_opt("Items", |tag| tag.as_list())? else {
        return Ok(inv);
    };

    for item in items.iter() {
        let (slot, stack) = from_nbt(&item.as_compound()?)?;
        if (slot as usize) < inv.size() {
            inv[slot as usize] = stack;
        } else {
            warn!("discarding stack {stack:?} in out of range slot {slot}");
        }
    }

    Ok(inv)

}


#[cfg(test)]
mod tests {

    use crate::item;
    use super::*;

    #[test]
    fn inventory_round_trip() {

        let mut inv = Inventory::new(5);
        inv[1] = ItemStack::new(item::IRON_SHOVEL, 12);
        inv[4] = ItemStack::new(item::APPLE, 0).with_size(10);

        let mut comp = NbtCompound::new();
        inv_to_nbt(&mut comp, &inv);
        assert_eq!(comp.get_int("size"), Some(5));
        assert_eq!(comp.get_list("Items").map(|l| l.len()), Some(2));

        let nbt = Nbt::Compound(comp);
        let read = inv_from_nbt(&nbt.parse().as_compound().unwrap(), 1).unwrap();
        assert_eq!(read, inv);

    }

    #[test]
    fn out_of_range_slot() {

        let mut slot = NbtCompound::new();
        to_nbt(&mut slot, 3, ItemStack::new(item::BONE, 0));

        let mut comp = NbtCompound::new();
        comp.insert("size", 0i32);
        comp.insert("Items", vec![Nbt::Compound(slot)]);

        let nbt = Nbt::Compound(comp);
        let read = inv_from_nbt(&nbt.parse().as_compound().unwrap(), 1).unwrap();
        assert_eq!(read.size(), 0);

    }

    #[test]
    fn missing_keys() {

        let nbt = Nbt::Compound(NbtCompound::new());
        let read = inv_from_nbt(&nbt.parse().as_compound().unwrap(), 3).unwrap();
        assert_eq!(read, Inventory::new(3));

        let mut comp = NbtCompound::new();
        comp.insert("size", 2i32);
        let nbt = Nbt::Compound(comp);
        let read = inv_from_nbt(&nbt.parse().as_compound().unwrap(), 3).unwrap();
        assert_eq!(read, Inventory::new(2));

    }

}
