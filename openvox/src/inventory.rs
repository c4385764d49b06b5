//! Fixed capacity inventory storing item stacks.

use std::ops::{Deref, DerefMut};

use crate::item::ItemStack;


/// An inventory with a fixed number of slots. The capacity is decided on creation and
/// can only be changed by clearing the whole inventory, there is no partial resize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stacks: Box<[ItemStack]>,
}

impl Inventory {

    /// Create a new empty inventory with the given number of slots.
    pub fn new(size: usize) -> Self {
        Self { stacks: vec![ItemStack::EMPTY; size].into_boxed_slice() }
    }

    /// Number of slots in this inventory, empty or not.
    #[inline]
    pub fn size(&self) -> usize {
        self.stacks.len()
    }

    /// Discard all stacks and reallocate the inventory with the given slot count.
    pub fn clear_and_set_size(&mut self, size: usize) {
        *self = Self::new(size);
    }

    /// Copy stacks from the given slice, slot by slot, as much as both sizes allow.
    pub fn copy_from(&mut self, stacks: &[ItemStack]) {
        for (dst, &src) in self.stacks.iter_mut().zip(stacks) {
            *dst = src;
        }
    }

    /// Return true if every slot of this inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|stack| stack.is_empty())
    }

    /// Iterate over non-empty stacks with their slot index.
    pub fn iter_non_empty(&self) -> impl Iterator<Item = (usize, ItemStack)> + '_ {
        self.stacks.iter()
            .copied()
            .enumerate()
            .filter(|(_, stack)| !stack.is_empty())
    }

}

impl Deref for Inventory {
    type Target = [ItemStack];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.stacks
    }
}

impl DerefMut for Inventory {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.stacks
    }
}


#[cfg(test)]
mod tests {

    use crate::item::{self, ItemStack};
    use super::*;

    #[test]
    fn copy_and_clear() {

        let loot = [
            ItemStack::new(item::APPLE, 0).with_size(3),
            ItemStack::EMPTY,
            ItemStack::new(item::DIAMOND, 0),
        ];

        let mut inv = Inventory::new(loot.len());
        inv.copy_from(&loot);
        assert_eq!(&inv[..], &loot[..]);
        assert_eq!(inv.iter_non_empty().map(|(i, _)| i).collect::<Vec<_>>(), [0, 2]);
        assert!(!inv.is_empty());

        inv.clear_and_set_size(0);
        assert_eq!(inv.size(), 0);
        assert!(inv.is_empty());

    }

    #[test]
    fn copy_from_bigger() {
        let mut inv = Inventory::new(1);
        inv.copy_from(&[ItemStack::new(item::BONE, 0), ItemStack::new(item::STICK, 0)]);
        assert_eq!(inv.size(), 1);
        assert_eq!(inv[0].id, item::BONE);
    }

}
