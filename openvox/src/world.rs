//! Data structure for storing a world at runtime, with the subset of logic needed by
//! the content blocks: block storage, light, entities, block entities, weather and
//! events.

use std::collections::HashMap;
use std::mem;

use glam::{IVec3, DVec3};
use indexmap::IndexMap;

use tracing::trace;

use crate::block_entity::BlockEntity;
use crate::util::{JavaRandom, BoundingBox};
use crate::config::GraveConfig;
use crate::entity::Entity;
use crate::block;


// Each module adds methods to the world, for a specific concern.
pub mod weather;
pub mod loot;
pub mod place;
pub mod interact;
pub mod tick;
pub mod storage;

pub use weather::{WeatherController, WeatherState};


/// Height of the world, blocks can only be set in `0..HEIGHT`.
pub const HEIGHT: i32 = 128;
/// Maximum light level.
pub const MAX_LIGHT: u8 = 15;


/// # Components
/// 
/// - Blocks, a sparse mapping of block id and metadata, every position not set is air.
/// - Light, a sparse mapping of light level overrides, every position not set has the
///   ambient light level of the world.
/// - Entities, identified by a unique id given on spawn.
/// - Block entities, attached to a block position, their hooks are called by the world
///   when placed, activated, ticked and saved.
/// 
/// # Events
/// 
/// Events listening is disabled by default but can be enabled by swapping a 
/// `Vec<Event>` into the world using [`World::swap_events`].
/// 
/// # Naming convention
/// 
/// Getters are prefixed by `get_`, boolean getters by `can_`, `has_` or `is_`, ticking
/// methods by `tick_`, iterating methods by `iter_`. Other methods use a single verb,
/// such as `spawn_`, `set_`, `place_` or `remove_`.
pub struct World {
    /// Events queue, if enabled.
    events: Option<Vec<Event>>,
    /// The side this world is running on, only the server side runs the logic.
    side: Side,
    /// Difficulty of the world.
    difficulty: Difficulty,
    /// The world time, increasing on each tick.
    time: u64,
    /// The world's global random number generator.
    rand: JavaRandom,
    /// Tunables of the grave block entity.
    grave_config: GraveConfig,
    /// Rain and thunder state and timers.
    weather: WeatherState,
    /// Sparse block storage, absent positions are air.
    blocks: HashMap<IVec3, (u8, u8)>,
    /// Sparse light levels, absent positions have the ambient light.
    light: HashMap<IVec3, u8>,
    /// Light level of positions without specific light.
    ambient_light: u8,
    /// Total entities count spawned since the world is running. Also used to give 
    /// entities a unique id.
    entities_count: u32,
    /// All entities, mapped by their unique id, in spawn order.
    entities: IndexMap<u32, Box<Entity>>,
    /// Block entities mapped to their position, in insertion order. A none value means
    /// that the block entity is currently taken out for one of its hooks to run.
    block_entities: IndexMap<IVec3, Option<Box<BlockEntity>>>,
}

impl World {

    /// Create a new server world, seeded from the system clock.
    pub fn new() -> Self {
        Self::new_with(Side::Server, JavaRandom::new_seeded())
    }

    /// Create a new world for the given side and with a specific random generator.
    pub fn new_with(side: Side, rand: JavaRandom) -> Self {
        Self {
            events: None,
            side,
            difficulty: Difficulty::Normal,
            time: 0,
            rand,
            grave_config: GraveConfig::default(),
            weather: WeatherState::default(),
            blocks: HashMap::new(),
            light: HashMap::new(),
            ambient_light: MAX_LIGHT,
            entities_count: 0,
            entities: IndexMap::new(),
            block_entities: IndexMap::new(),
        }
    }

    /// This function can be used to swap in a new events queue and return the previous
    /// one if relevant. Giving *None* events queue disable events registration using
    /// the [`push_event`] method. Swapping out the events is the only way of reading
    /// them afterward.
    /// 
    /// [`push_event`]: Self::push_event
    pub fn swap_events(&mut self, events: Option<Vec<Event>>) -> Option<Vec<Event>> {
        mem::replace(&mut self.events, events)
    }

    /// Return true if this world has an internal events queue that enables usage of the
    /// [`push_event`] method.
    /// 
    /// [`push_event`]: Self::push_event
    pub fn has_events(&self) -> bool {
        self.events.is_some()
    }

    /// Push an event in this world. This only actually push the event if events are 
    /// enabled. Events queue can be swapped using [`swap_events`](Self::swap_events)
    /// method.
    #[inline]
    pub fn push_event(&mut self, event: Event) {
        if let Some(events) = &mut self.events {
            events.push(event);
        }
    }

    /// Return true if this world is the client side mirror of a server world.
    #[inline]
    pub fn is_remote(&self) -> bool {
        self.side == Side::Client
    }

    pub fn get_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Get the world time, in ticks.
    pub fn get_time(&self) -> u64 {
        self.time
    }

    /// Get a mutable access to this world's random number generator.
    pub fn get_rand_mut(&mut self) -> &mut JavaRandom {
        &mut self.rand
    }

    pub fn get_grave_config(&self) -> &GraveConfig {
        &self.grave_config
    }

    pub fn set_grave_config(&mut self, config: GraveConfig) {
        self.grave_config = config;
    }

    /// Get the current rain and thunder state.
    pub fn get_weather_state(&self) -> &WeatherState {
        &self.weather
    }

    // =================== //
    //       BLOCKS        //
    // =================== //

    /// Set block and metadata at given position in the world, returning the previous
    /// block and metadata, or none if the position is out of the world.
    pub fn set_block(&mut self, pos: IVec3, id: u8, metadata: u8) -> Option<(u8, u8)> {

        if pos.y < 0 || pos.y >= HEIGHT {
            return None;
        }

        let prev = if id == block::AIR {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, (id, metadata))
        }.unwrap_or((block::AIR, 0));

        if prev != (id, metadata) {
            self.push_event(Event::Block { 
                pos, 
                inner: BlockEvent::Set { id, metadata, prev_id: prev.0, prev_metadata: prev.1 },
            });
        }

        Some(prev)

    }

    /// Get block and metadata at given position in the world, none if the position is
    /// out of the world.
    pub fn get_block(&self, pos: IVec3) -> Option<(u8, u8)> {
        if pos.y < 0 || pos.y >= HEIGHT {
            None
        } else {
            Some(self.blocks.get(&pos).copied().unwrap_or((block::AIR, 0)))
        }
    }

    /// Break the block at the given position, replacing it with air and removing its
    /// block entity. Returns the previous block, if any.
    pub fn break_block(&mut self, pos: IVec3) -> Option<(u8, u8)> {
        let prev = self.set_block(pos, block::AIR, 0)?;
        self.remove_block_entity(pos);
        Some(prev)
    }

    /// Get the light level at the given position.
    pub fn get_light(&self, pos: IVec3) -> u8 {
        self.light.get(&pos).copied().unwrap_or(self.ambient_light)
    }

    /// Set the light level of a specific position.
    pub fn set_light(&mut self, pos: IVec3, light: u8) {
        self.light.insert(pos, light.min(MAX_LIGHT));
    }

    /// Set the light level of every position without specific light.
    pub fn set_ambient_light(&mut self, light: u8) {
        self.ambient_light = light.min(MAX_LIGHT);
    }

    /// Iterate over the positions of blocks that may collide with the given box.
    fn iter_blocks_pos_in_box(bb: BoundingBox) -> impl Iterator<Item = IVec3> {
        let min = bb.min.floor().as_ivec3();
        let max = bb.max.ceil().as_ivec3();
        (min.x..max.x).flat_map(move |x| {
            (min.y..max.y).flat_map(move |y| {
                (min.z..max.z).map(move |z| IVec3::new(x, y, z))
            })
        })
    }

    /// Return true if any block's collision box intersects the given box.
    pub fn has_block_colliding(&self, bb: BoundingBox) -> bool {
        Self::iter_blocks_pos_in_box(bb).any(|pos| {
            let Some((id, metadata)) = self.get_block(pos) else { return false };
            block::bound::get_box(id, metadata)
                .is_some_and(|block_bb| (block_bb + pos.as_dvec3()).intersects(bb))
        })
    }

    /// Return true if any fluid block intersects the given box.
    pub fn has_fluid_colliding(&self, bb: BoundingBox) -> bool {
        Self::iter_blocks_pos_in_box(bb).any(|pos| {
            self.get_block(pos).is_some_and(|(id, _)| block::material::is_fluid(id))
        })
    }

    // =================== //
    //      ENTITIES       //
    // =================== //

    /// Spawn an entity in this world, this function gives it a unique id that is also
    /// returned.
    pub fn spawn_entity(&mut self, entity: impl Into<Box<Entity>>) -> u32 {

        let mut entity = entity.into();
        let id = self.entities_count;
        self.entities_count = self.entities_count.wrapping_add(1);

        entity.0.id = id;
        let kind = entity.kind();
        let pos = entity.0.pos;
        self.entities.insert(id, entity);

        trace!("spawn entity #{id} ({kind:?}) at {pos}");

        self.push_event(Event::Entity { id, inner: EntityEvent::Spawn });
        id

    }

    /// Return true if an entity is present from its id.
    pub fn contains_entity(&self, id: u32) -> bool {
        self.entities.contains_key(&id)
    }

    /// Get an entity from its unique id.
    pub fn get_entity(&self, id: u32) -> Option<&Entity> {
        self.entities.get(&id).map(|entity| &**entity)
    }

    /// Get an entity from its unique id.
    pub fn get_entity_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.get_mut(&id).map(|entity| &mut **entity)
    }

    /// Remove an entity with given id, returning true if it existed.
    pub fn remove_entity(&mut self, id: u32) -> bool {
        if self.entities.shift_remove(&id).is_some() {
            trace!("remove entity #{id}");
            self.push_event(Event::Entity { id, inner: EntityEvent::Remove });
            true
        } else {
            false
        }
    }

    /// Get the number of entities in the world.
    pub fn get_entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities of the world, in spawn order.
    pub fn iter_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values().map(|entity| &**entity)
    }

    /// Iterate over all entities whose bounding box intersects the given box.
    pub fn iter_entities_colliding(&self, bb: BoundingBox) -> impl Iterator<Item = &Entity> + '_ {
        self.iter_entities().filter(move |entity| entity.0.bb.intersects(bb))
    }

    /// Return true if any living entity intersects the given box.
    pub fn has_entity_colliding(&self, bb: BoundingBox) -> bool {
        self.iter_entities_colliding(bb).any(|entity| entity.kind().is_living())
    }

    // =================== //
    //   BLOCK ENTITIES    //
    // =================== //

    /// Set the block entity at the given position. If a block entity was already at the
    /// position, it is removed silently.
    pub fn set_block_entity(&mut self, pos: IVec3, block_entity: impl Into<Box<BlockEntity>>) {
        self.block_entities.insert(pos, Some(block_entity.into()));
        self.push_event(Event::BlockEntity { pos, inner: BlockEntityEvent::Set });
    }

    /// Return true if some block entity is present in the world.
    pub fn contains_block_entity(&self, pos: IVec3) -> bool {
        self.block_entities.contains_key(&pos)
    }

    /// Get a block entity from its position. None is returned while the block entity
    /// is running one of its hooks.
    pub fn get_block_entity(&self, pos: IVec3) -> Option<&BlockEntity> {
        self.block_entities.get(&pos)?.as_deref()
    }

    /// Get a block entity from its position. None is returned while the block entity
    /// is running one of its hooks.
    pub fn get_block_entity_mut(&mut self, pos: IVec3) -> Option<&mut BlockEntity> {
        self.block_entities.get_mut(&pos)?.as_deref_mut()
    }

    /// Remove a block entity from a position. Returning true if successful.
    pub fn remove_block_entity(&mut self, pos: IVec3) -> bool {
        if self.block_entities.shift_remove(&pos).is_some() {
            self.push_event(Event::BlockEntity { pos, inner: BlockEntityEvent::Remove });
            true
        } else {
            false
        }
    }

    /// Iterate over the positions of all block entities.
    pub fn iter_block_entities_pos(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.block_entities.keys().copied()
    }

    /// Temporarily take the block entity at the given position out of the world in
    /// order to run a function with mutable access to both. The block entity is put
    /// back afterward, unless its position has been removed or replaced meanwhile.
    pub(crate) fn with_block_entity<R>(&mut self, pos: IVec3, func: impl FnOnce(&mut BlockEntity, &mut World) -> R) -> Option<R> {

        let mut block_entity = self.block_entities.get_mut(&pos)?.take()?;
        let ret = func(&mut block_entity, self);

        if let Some(slot) = self.block_entities.get_mut(&pos) {
            if slot.is_none() {
                *slot = Some(block_entity);
            }
        }

        Some(ret)

    }

    // =================== //
    //       EFFECTS       //
    // =================== //

    /// Play a sound at the given position, for every client around.
    pub fn play_sound(&mut self, pos: DVec3, sound: Sound, category: SoundCategory, volume: f32, pitch: f32) {
        self.push_event(Event::Sound { pos, sound, category, volume, pitch });
    }

    /// Spawn the break particles of the given block at some position.
    pub fn spawn_break_particles(&mut self, pos: IVec3, block: u8) {
        self.push_event(Event::BlockBreakParticle { pos, block });
    }

}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}


/// The side a world is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The authoritative world, running all the logic.
    Server,
    /// A client mirror of the world, only used for prediction of interactions.
    Client,
}

/// Difficulty of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// No hostile mob.
    Peaceful,
    Easy,
    Normal,
    Hard,
}

/// Type of weather currently in the world, derived from the rain and thunder flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    /// The weather is clear.
    Clear,
    /// It is raining.
    Rain,
    /// It is thundering.
    Thunder,
}

/// A sound that can be played in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Played when a grave is robbed and the sky gets angry.
    GraveRob,
}

/// Volume channel a sound is played through on clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCategory {
    Master,
    Weather,
    Blocks,
    Hostile,
    Neutral,
    Players,
}

/// An event that happened in the world.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An event with a block.
    Block {
        /// The position of the block.
        pos: IVec3,
        /// Inner block event.
        inner: BlockEvent,
    },
    /// An event with an entity given its id.
    Entity {
        /// The unique id of the entity.
        id: u32,
        /// Inner entity event.
        inner: EntityEvent,
    },
    /// An event with a block entity.
    BlockEntity {
        /// The block entity position.
        pos: IVec3,
        /// Inner block entity event.
        inner: BlockEntityEvent,
    },
    /// The weather in the world has changed.
    Weather {
        /// Previous weather in the world.
        prev: Weather,
        /// New weather in the world.
        new: Weather,
    },
    /// A sound is played in the world.
    Sound {
        pos: DVec3,
        sound: Sound,
        category: SoundCategory,
        volume: f32,
        pitch: f32,
    },
    /// Spawn the break particles of a block at the given position, the block only
    /// selects the particle texture.
    BlockBreakParticle {
        /// The block position to spawn particles at.
        pos: IVec3,
        /// The block whose texture is used.
        block: u8,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockEvent {
    /// A block has been changed in the world.
    Set {
        /// The new block id.
        id: u8,
        /// The new block metadata.
        metadata: u8,
        /// Previous block id.
        prev_id: u8,
        /// Previous block metadata.
        prev_metadata: u8,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityEvent {
    /// The entity has been spawned.
    Spawn,
    /// The entity has been removed.
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntityEvent {
    /// The block entity has been set at its position.
    Set,
    /// The block entity has been removed at its position.
    Remove,
}


#[cfg(test)]
mod tests {

    use crate::entity::EntityKind;
    use super::*;

    #[test]
    fn blocks() {

        let mut world = World::new();
        world.swap_events(Some(Vec::new()));

        let pos = IVec3::new(3, 10, -4);
        assert_eq!(world.get_block(pos), Some((block::AIR, 0)));
        assert_eq!(world.set_block(pos, block::STONE, 0), Some((block::AIR, 0)));
        assert_eq!(world.get_block(pos), Some((block::STONE, 0)));
        assert_eq!(world.set_block(IVec3::new(0, HEIGHT, 0), block::STONE, 0), None);
        assert_eq!(world.get_block(IVec3::new(0, -1, 0)), None);

        let events = world.swap_events(None).unwrap();
        assert_eq!(events.len(), 1);

    }

    #[test]
    fn block_collisions() {

        let mut world = World::new();
        let pos = IVec3::new(0, 10, 0);
        world.set_block(pos, block::GRAVE, 0);

        // The grave slab is only 0.2 high.
        let above = BoundingBox::new_bottom_centered(DVec3::new(0.5, 10.5, 0.5), 0.6, 1.8);
        assert!(!world.has_block_colliding(above));
        let inside = BoundingBox::new_bottom_centered(DVec3::new(0.5, 10.1, 0.5), 0.6, 1.8);
        assert!(world.has_block_colliding(inside));

        world.set_block(pos + IVec3::Y, block::WATER_STILL, 0);
        assert!(world.has_fluid_colliding(above));
        assert!(!world.has_block_colliding(above));

    }

    #[test]
    fn entities() {

        let mut world = World::new();
        let a = world.spawn_entity(EntityKind::Skeleton.new_default(DVec3::new(0.5, 10.0, 0.5)));
        let b = world.spawn_entity(EntityKind::Bat.new_default(DVec3::new(20.5, 10.0, 0.5)));
        assert_ne!(a, b);
        assert_eq!(world.get_entity_count(), 2);

        let area = (BoundingBox::CUBE + DVec3::new(0.0, 10.0, 0.0)).inflate(DVec3::splat(7.0));
        let colliding = world.iter_entities_colliding(area).map(|e| e.0.id).collect::<Vec<_>>();
        assert_eq!(colliding, [a]);

        assert!(world.remove_entity(a));
        assert!(!world.remove_entity(a));
        assert!(!world.contains_entity(a));
        assert!(world.get_entity(b).is_some());

    }

}
