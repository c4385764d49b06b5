//! Entity data structures, only what blocks need to spawn and count entities.

use glam::{DVec3, Vec2};

use crate::util::BoundingBox;
use crate::item::ItemStack;

pub mod player;
mod spawn;

pub use player::{Player, PlayerInventory, GameMode, Hand};


/// An entity in the world, composed of its common base data and its kind specific data.
#[derive(Debug, Clone)]
pub struct Entity(pub Base, pub Kind);

/// Common data shared by all entities.
#[derive(Debug, Clone, Default)]
pub struct Base {
    /// The unique entity id within its world, given when spawned in the world.
    pub id: u32,
    /// Position of the bottom center of the entity.
    pub pos: DVec3,
    /// Current velocity.
    pub vel: DVec3,
    /// Yaw and pitch angles of the entity's look, in radians.
    pub look: Vec2,
    /// The bounding box, derived from the position and the kind's size.
    pub bb: BoundingBox,
    /// Remaining health points for living entities.
    pub health: u16,
    /// Set to true when the entity must not despawn.
    pub persistent: bool,
}

/// Kind specific data of an entity.
#[derive(Debug, Clone)]
pub enum Kind {
    Item(Item),
    Skeleton,
    Zombie,
    Creeper,
    Spider,
    Bat,
    Pig,
    Cow,
    Chicken,
}

/// Data of an item entity.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// The item stack represented by this entity.
    pub stack: ItemStack,
    /// Remaining ticks before this item can be picked up.
    pub frozen_time: u32,
}

/// Kind of entity, without the associated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Skeleton,
    Zombie,
    Creeper,
    Spider,
    Bat,
    Pig,
    Cow,
    Chicken,
}

impl EntityKind {

    /// Return true if this kind of entity is a hostile mob.
    pub fn is_hostile(self) -> bool {
        matches!(self, Self::Skeleton | Self::Zombie | Self::Creeper | Self::Spider)
    }

    /// Return true if this kind of entity is a living one.
    pub fn is_living(self) -> bool {
        !matches!(self, Self::Item)
    }

    /// Width and height of this entity kind.
    pub fn size(self) -> (f64, f64) {
        match self {
            Self::Item => (0.25, 0.25),
            Self::Skeleton |
            Self::Zombie => (0.6, 1.8),
            Self::Creeper => (0.6, 1.7),
            Self::Spider => (1.4, 0.9),
            Self::Bat => (0.5, 0.9),
            Self::Pig => (0.9, 0.9),
            Self::Cow => (0.9, 1.3),
            Self::Chicken => (0.3, 0.4),
        }
    }

    /// Default health of a freshly spawned entity of this kind.
    pub fn max_health(self) -> u16 {
        match self {
            Self::Item => 5,
            Self::Skeleton |
            Self::Zombie |
            Self::Creeper => 20,
            Self::Spider => 16,
            Self::Bat => 6,
            Self::Pig |
            Self::Cow => 10,
            Self::Chicken => 4,
        }
    }

    /// Create a new default entity of this kind at the given position.
    pub fn new_default(self, pos: DVec3) -> Box<Entity> {
        let kind = match self {
            Self::Item => Kind::Item(Item::default()),
            Self::Skeleton => Kind::Skeleton,
            Self::Zombie => Kind::Zombie,
            Self::Creeper => Kind::Creeper,
            Self::Spider => Kind::Spider,
            Self::Bat => Kind::Bat,
            Self::Pig => Kind::Pig,
            Self::Cow => Kind::Cow,
            Self::Chicken => Kind::Chicken,
        };
        let mut entity = Entity(Base::default(), kind);
        entity.0.health = self.max_health();
        entity.set_pos(pos);
        Box::new(entity)
    }

}

impl Entity {

    /// Get the kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self.1 {
            Kind::Item(_) => EntityKind::Item,
            Kind::Skeleton => EntityKind::Skeleton,
            Kind::Zombie => EntityKind::Zombie,
            Kind::Creeper => EntityKind::Creeper,
            Kind::Spider => EntityKind::Spider,
            Kind::Bat => EntityKind::Bat,
            Kind::Pig => EntityKind::Pig,
            Kind::Cow => EntityKind::Cow,
            Kind::Chicken => EntityKind::Chicken,
        }
    }

    /// Set the position of this entity and recompute its bounding box.
    pub fn set_pos(&mut self, pos: DVec3) {
        let (width, height) = self.kind().size();
        self.0.pos = pos;
        self.0.bb = BoundingBox::new_bottom_centered(pos, width, height);
    }

    /// Get the item stack if this entity is an item entity.
    pub fn item_stack(&self) -> Option<ItemStack> {
        match &self.1 {
            Kind::Item(item) => Some(item.stack),
            _ => None,
        }
    }

}
