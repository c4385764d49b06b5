//! Player data, players are not stored in the world but are given explicitly to the
//! world's interaction methods.

use glam::{DVec3, Vec2};

use crate::item::ItemStack;
use crate::text::TextComponent;


/// The game mode of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Survival,
    /// Unrestricted resources mode.
    Creative,
}

/// The hand a player is interacting with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Main,
    Off,
}

/// Carried inventory of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInventory {
    /// Main inventory, the 9 first slots are the hotbar.
    pub main: [ItemStack; 36],
    /// Armor slots, from feet to head.
    pub armor: [ItemStack; 4],
    /// The off hand slot.
    pub off_hand: ItemStack,
    /// Selected hotbar slot, in range 0..9.
    pub hand_slot: u8,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self {
            main: [ItemStack::EMPTY; 36],
            armor: [ItemStack::EMPTY; 4],
            off_hand: ItemStack::EMPTY,
            hand_slot: 0,
        }
    }
}

impl PlayerInventory {

    /// Total number of slots, main, armor and off hand.
    pub const SIZE: usize = 36 + 4 + 1;

    /// Get the stack held in the given hand.
    pub fn get_held(&self, hand: Hand) -> ItemStack {
        match hand {
            Hand::Main => self.main[self.hand_slot as usize % 9],
            Hand::Off => self.off_hand,
        }
    }

    /// Set the stack held in the given hand.
    pub fn set_held(&mut self, hand: Hand, stack: ItemStack) {
        match hand {
            Hand::Main => self.main[self.hand_slot as usize % 9] = stack,
            Hand::Off => self.off_hand = stack,
        }
    }

    /// Get a copy of every slot of the inventory, main slots first, then armor and off
    /// hand, the length is always [`Self::SIZE`].
    pub fn to_stacks(&self) -> Vec<ItemStack> {
        let mut stacks = Vec::with_capacity(Self::SIZE);
        stacks.extend_from_slice(&self.main);
        stacks.extend_from_slice(&self.armor);
        stacks.push(self.off_hand);
        stacks
    }

}

/// A player interacting with the world.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Profile name of the player.
    pub username: String,
    /// Game mode of the player.
    pub game_mode: GameMode,
    /// True for automated players (machines acting as players), they are never given
    /// ownership of anything.
    pub fake: bool,
    /// Position of the player's feet.
    pub pos: DVec3,
    /// Yaw and pitch angles of the look, in radians.
    pub look: Vec2,
    /// Carried inventory.
    pub inv: PlayerInventory,
    /// Chat messages received by this player, in order.
    pub messages: Vec<TextComponent>,
}

impl Player {

    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), ..Default::default() }
    }

    /// Deliver a private chat message to this player.
    pub fn send_message(&mut self, message: TextComponent) {
        self.messages.push(message);
    }

    /// Block position the player is standing in.
    pub fn block_pos(&self) -> glam::IVec3 {
        self.pos.floor().as_ivec3()
    }

}


#[cfg(test)]
mod tests {

    use crate::item;
    use super::*;

    #[test]
    fn held_stacks() {

        let mut inv = PlayerInventory::default();
        inv.hand_slot = 3;
        inv.set_held(Hand::Main, ItemStack::new(item::IRON_SHOVEL, 0));
        inv.set_held(Hand::Off, ItemStack::new(item::BREAD, 0));

        assert_eq!(inv.main[3].id, item::IRON_SHOVEL);
        assert_eq!(inv.get_held(Hand::Main).id, item::IRON_SHOVEL);
        assert_eq!(inv.get_held(Hand::Off).id, item::BREAD);

        let stacks = inv.to_stacks();
        assert_eq!(stacks.len(), PlayerInventory::SIZE);
        assert_eq!(stacks[3].id, item::IRON_SHOVEL);
        assert_eq!(stacks[PlayerInventory::SIZE - 1].id, item::BREAD);

    }

}
