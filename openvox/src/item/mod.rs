//! Item enumeration, item stacks and tool classes.

use crate::block;


/// Internal macro to easily define items registry.
macro_rules! items {
    (
        $($name:ident / $id:literal : $init:expr),* $(,)?
    ) => {

        static ITEMS: [Item; 256] = {
            let mut arr = [Item::new("undefined"); 256];
            $(arr[$id as usize] = $init;)*
            arr
        };

        $(pub const $name: u16 = $id + 256;)*

    };
}

items! {
    IRON_SHOVEL/0:      Item::new_tool("iron_shovel", ToolClass::Shovel, 250),
    IRON_PICKAXE/1:     Item::new_tool("iron_pickaxe", ToolClass::Pickaxe, 250),
    IRON_AXE/2:         Item::new_tool("iron_axe", ToolClass::Axe, 250),
    APPLE/4:            Item::new("apple"),
    BOW/5:              Item::new("bow").with_max_damage(384).with_max_stack_size(1),
    ARROW/6:            Item::new("arrow"),
    COAL/7:             Item::new("coal"),
    DIAMOND/8:          Item::new("diamond"),
    IRON_INGOT/9:       Item::new("iron_ingot"),
    GOLD_INGOT/10:      Item::new("gold_ingot"),
    IRON_SWORD/11:      Item::new_tool("iron_sword", ToolClass::Sword, 250),
    WOOD_SWORD/12:      Item::new_tool("wood_sword", ToolClass::Sword, 59),
    WOOD_SHOVEL/13:     Item::new_tool("wood_shovel", ToolClass::Shovel, 59),
    WOOD_PICKAXE/14:    Item::new_tool("wood_pickaxe", ToolClass::Pickaxe, 59),
    WOOD_AXE/15:        Item::new_tool("wood_axe", ToolClass::Axe, 59),
    STONE_SWORD/16:     Item::new_tool("stone_sword", ToolClass::Sword, 131),
    STONE_SHOVEL/17:    Item::new_tool("stone_shovel", ToolClass::Shovel, 131),
    STONE_PICKAXE/18:   Item::new_tool("stone_pickaxe", ToolClass::Pickaxe, 131),
    STONE_AXE/19:       Item::new_tool("stone_axe", ToolClass::Axe, 131),
    DIAMOND_SWORD/20:   Item::new_tool("diamond_sword", ToolClass::Sword, 1561),
    DIAMOND_SHOVEL/21:  Item::new_tool("diamond_shovel", ToolClass::Shovel, 1561),
    DIAMOND_PICKAXE/22: Item::new_tool("diamond_pickaxe", ToolClass::Pickaxe, 1561),
    DIAMOND_AXE/23:     Item::new_tool("diamond_axe", ToolClass::Axe, 1561),
    STICK/24:           Item::new("stick"),
    GOLD_SWORD/27:      Item::new_tool("gold_sword", ToolClass::Sword, 32),
    GOLD_SHOVEL/28:     Item::new_tool("gold_shovel", ToolClass::Shovel, 32),
    GOLD_PICKAXE/29:    Item::new_tool("gold_pickaxe", ToolClass::Pickaxe, 32),
    GOLD_AXE/30:        Item::new_tool("gold_axe", ToolClass::Axe, 32),
    STRING/31:          Item::new("string"),
    BONE/96:            Item::new("bone"),
    BREAD/41:           Item::new("bread"),
    BUCKET/69:          Item::new("bucket").with_max_stack_size(1),
    DYE/95:             Item::new("dye"),
    BOOK/84:            Item::new("book"),
}

/// Damage value of the lapis lazuli dye.
pub const DYE_LAPIS: u16 = 4;


/// Get an item from its numeric id.
pub fn from_id(id: u16) -> &'static Item {
    static BLOCK_ITEM: Item = Item::new("block").with_block();
    if id < 256 {
        &BLOCK_ITEM
    } else {
        &ITEMS[((id - 256) & 255) as usize]
    }
}


/// Class of a tool, it tells which kind of work the tool is efficient at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolClass {
    Shovel,
    Pickaxe,
    Axe,
    Sword,
}

/// This structure describe an item.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    /// The name of the item, used for debug purpose.
    pub name: &'static str,
    /// Set to true if this item is derived from a block.
    pub block: bool,
    /// Maximum stack size for this item.
    pub max_stack_size: u16,
    /// The maximum durability of the item, zero if the item cannot be damaged.
    pub max_damage: u16,
    /// Tool class of this item, if it's a tool.
    pub tool: Option<ToolClass>,
}

impl Item {

    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            block: false,
            max_stack_size: 64,
            max_damage: 0,
            tool: None,
        }
    }

    const fn new_tool(name: &'static str, tool: ToolClass, max_damage: u16) -> Self {
        let mut item = Self::new(name).with_max_damage(max_damage).with_max_stack_size(1);
        item.tool = Some(tool);
        item
    }

    const fn with_block(mut self) -> Self {
        self.block = true;
        self
    }

    const fn with_max_stack_size(mut self, max_stack_size: u16) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    const fn with_max_damage(mut self, max_damage: u16) -> Self {
        self.max_damage = max_damage;
        self
    }

}


/// An item stack defines the actual number of items and their damage value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// The item id.
    pub id: u16,
    /// The stack size.
    pub size: u16,
    /// The damage value of the stack.
    pub damage: u16,
}

impl ItemStack {

    pub const EMPTY: Self = Self { id: block::AIR as u16, size: 0, damage: 0 };

    /// Create a new item stack of size 1 from an item id and damage.
    pub const fn new(id: u16, damage: u16) -> Self {
        Self { id, size: 1, damage }
    }

    /// Create a new item stack of size 1 from a block id and metadata.
    pub const fn new_block(id: u8, metadata: u8) -> Self {
        Self { id: id as u16, size: 1, damage: metadata as u16 }
    }

    pub fn with_size(mut self, size: u16) -> ItemStack {
        self.size = size;
        self
    }

    pub fn with_damage(mut self, damage: u16) -> ItemStack {
        self.damage = damage;
        self
    }

    /// Return true if this item stack is air, which is a special case where the item 
    /// stack represent an empty slot.
    pub fn is_empty(self) -> bool {
        self.id == block::AIR as u16 || self.size == 0
    }

    /// Simplify this item stack by converting it into `None` if empty.
    pub fn to_non_empty(self) -> Option<ItemStack> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Return the tool class of this stack's item, if any.
    pub fn tool_class(self) -> Option<ToolClass> {
        if self.is_empty() {
            None
        } else {
            from_id(self.id).tool
        }
    }

    /// Increment the damage of this stack by the given amount, for items that cannot be
    /// damaged this do nothing. When the durability is exceeded one item of the stack
    /// is consumed, the stack becoming empty if it was the last one.
    pub fn inc_damage(self, amount: u16) -> ItemStack {

        let item = from_id(self.id);
        if item.max_damage == 0 || self.is_empty() {
            return self;
        }

        let damage = self.damage.saturating_add(amount);
        if damage <= item.max_damage {
            return self.with_damage(damage);
        }

        if self.size > 1 {
            ItemStack { id: self.id, size: self.size - 1, damage: 0 }
        } else {
            ItemStack::EMPTY
        }

    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn tool_classes() {
        assert_eq!(ItemStack::new(IRON_SHOVEL, 0).tool_class(), Some(ToolClass::Shovel));
        assert_eq!(ItemStack::new(GOLD_SHOVEL, 0).tool_class(), Some(ToolClass::Shovel));
        assert_eq!(ItemStack::new(DIAMOND_PICKAXE, 0).tool_class(), Some(ToolClass::Pickaxe));
        assert_eq!(ItemStack::new(APPLE, 0).tool_class(), None);
        assert_eq!(ItemStack::new_block(block::DIRT, 0).tool_class(), None);
        assert_eq!(ItemStack::new(IRON_SHOVEL, 0).with_size(0).tool_class(), None);
    }

    #[test]
    fn damage() {

        let shovel = ItemStack::new(IRON_SHOVEL, 0);
        assert_eq!(shovel.inc_damage(2).damage, 2);

        // Exactly at max durability the tool still exists.
        let worn = ItemStack::new(GOLD_SHOVEL, 30);
        assert_eq!(worn.inc_damage(2), ItemStack::new(GOLD_SHOVEL, 32));
        assert!(worn.inc_damage(3).is_empty());

        // Items without durability are untouched.
        let apple = ItemStack::new(APPLE, 0).with_size(5);
        assert_eq!(apple.inc_damage(2), apple);

    }

}
