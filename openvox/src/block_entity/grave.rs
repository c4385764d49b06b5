//! Grave block entity.
//! 
//! A grave keeps the loot, experience and death message of a perished player. Graves
//! occasionally spawn skeletons and bats around them, and robbing one with a shovel 
//! may anger the sky.

use std::f32::consts::TAU;

use glam::{IVec3, DVec3, Vec2};

use tracing::{debug, trace, warn};

use crate::serde::block_entity_nbt::BlockEntityNbtError;
use crate::serde::nbt::{NbtCompound, NbtCompoundParse};
use crate::serde::slot_nbt;
use crate::world::{World, Difficulty, Sound, SoundCategory, WeatherController};
use crate::entity::{Player, Hand, GameMode, EntityKind};
use crate::item::{ItemStack, ToolClass};
use crate::text::TextComponent;
use crate::inventory::Inventory;
use crate::util::BoundingBox;
use crate::block;

use super::BlockEntityHooks;


/// Radius around the grave where hostile mobs are counted.
const HOSTILE_RADIUS: f64 = 7.0;
/// No mob is spawned if this number of hostile mobs are already around.
const MAX_HOSTILE_COUNT: usize = 5;
/// Damage dealt to the shovel used for robbing a non-empty grave.
const ROB_TOOL_DAMAGE: u16 = 2;
/// Ticks of thunder and rain forced when the sky gets angry.
pub const STORM_TIME: u32 = 35 * 20;
/// Maximum number of loot slots, slots are saved as a single byte.
pub const MAX_LOOT_SIZE: usize = 256;
/// Name of the text message tag in NBT.
const TAG_MESSAGE: &str = "Message";


#[derive(Debug, Clone)]
pub struct GraveBlockEntity {
    /// Name of the perished player, empty until set.
    pub username: String,
    /// The message shown to players interacting with the grave.
    death_message: Option<TextComponent>,
    /// The loot of the grave, its capacity is the size of the loot it was given, and
    /// zero once robbed.
    pub inv: Inventory,
    /// Experience stored in the grave.
    pub xp: u32,
}

impl Default for GraveBlockEntity {
    fn default() -> Self {
        Self {
            username: String::new(),
            death_message: None,
            inv: Inventory::new(1),
            xp: 0,
        }
    }
}

impl GraveBlockEntity {

    /// Get the death message, if any.
    pub fn get_death_message(&self) -> Option<&TextComponent> {
        self.death_message.as_ref()
    }

    /// Set the death message, the given message is copied.
    pub fn set_death_message(&mut self, message: &TextComponent) {
        self.death_message = Some(message.clone());
    }

    /// Replace the loot of this grave with a copy of the given stacks, the capacity of
    /// the grave becomes the number of stacks. Stacks past [`MAX_LOOT_SIZE`] are
    /// discarded.
    pub fn set_loot(&mut self, mut stacks: &[ItemStack]) {
        if stacks.len() > MAX_LOOT_SIZE {
            warn!("grave loot truncated from {} to {MAX_LOOT_SIZE} stacks", stacks.len());
            stacks = &stacks[..MAX_LOOT_SIZE];
        }
        self.inv.clear_and_set_size(stacks.len());
        self.inv.copy_from(stacks);
    }

    /// Drop the whole loot of the grave in the world and leave it with no slot at all.
    /// If anything has been dropped the robbery is noticed: dirt particles are spawned,
    /// the sky may get angry and the held shovel is damaged.
    fn rob(&mut self, world: &mut World, pos: IVec3, player: &mut Player, held: ItemStack) {

        let dropped = world.spawn_block_stacks_loot(pos, self.inv.iter().copied());
        self.inv.clear_and_set_size(0);

        if dropped == 0 {
            return;
        }

        debug!("grave of '{}' at {pos} robbed by '{}', {dropped} stacks dropped", self.username, player.username);

        world.spawn_break_particles(pos, block::DIRT);

        let special_action = world.get_grave_config().grave_special_action;
        if world.get_rand_mut().next_double() < special_action {
            anger_sky(world, player);
        }

        player.inv.set_held(Hand::Main, held.inc_damage(ROB_TOOL_DAMAGE));

    }

}

impl BlockEntityHooks for GraveBlockEntity {

    fn tick(&mut self, world: &mut World, pos: IVec3) {

        if world.is_remote() {
            return;
        }

        let config = *world.get_grave_config();
        if !config.spawn_skeletons || world.get_difficulty() == Difficulty::Peaceful {
            return;
        }

        if world.get_rand_mut().next_double() >= config.skeleton_spawn_rate {
            return;
        }

        let bb = BoundingBox::CUBE + pos.as_dvec3();
        let hostile_count = world.iter_entities_colliding(bb.inflate(DVec3::splat(HOSTILE_RADIUS)))
            .filter(|entity| entity.kind().is_hostile())
            .count();

        if hostile_count >= MAX_HOSTILE_COUNT {
            return;
        }

        let rand = world.get_rand_mut();
        let kind = if rand.next_double() < 0.5 { EntityKind::Skeleton } else { EntityKind::Bat };

        let mut entity = kind.new_default(pos.as_dvec3() + 0.5);
        entity.0.look = Vec2::new(rand.next_float() * TAU, 0.0);

        if entity.can_naturally_spawn(world) {
            trace!("grave at {pos} spawning {kind:?}");
            world.spawn_entity(entity);
        }

    }

    fn placed(&mut self, world: &mut World, _pos: IVec3, placer: Option<&Player>, stack_name: Option<&str>) {

        if world.is_remote() {
            return;
        }

        let Some(player) = placer else { return };
        if player.fake {
            return;
        }

        self.username = stack_name.unwrap_or(&player.username).to_string();

        if player.game_mode == GameMode::Creative {
            self.set_loot(&player.inv.to_stacks());
        }

    }

    fn activated(&mut self, world: &mut World, pos: IVec3, player: &mut Player, hand: Hand) -> bool {

        if world.is_remote() {
            return true;
        }

        if hand != Hand::Main {
            return false;
        }

        let held = player.inv.get_held(Hand::Main);
        if held.tool_class() == Some(ToolClass::Shovel) {
            self.rob(world, pos, player, held);
        } else if let Some(message) = &self.death_message {
            player.send_message(message.clone());
        }

        true

    }

    fn to_nbt(&self, comp: &mut NbtCompound) {
        comp.insert("username", self.username.as_str());
        if let Some(message) = &self.death_message {
            comp.insert(TAG_MESSAGE, message.to_json());
        }
        comp.insert("xp", self.xp.min(i32::MAX as u32) as i32);
        slot_nbt::inv_to_nbt(comp, &self.inv);
    }

    fn from_nbt(&mut self, comp: &NbtCompoundParse) -> Result<(), BlockEntityNbtError> {

        self.inv = slot_nbt::inv_from_nbt(comp, self.inv.size())?;
        self.xp = comp.get_opt("xp", |tag| tag.as_int())?.unwrap_or(0).max(0) as u32;
        self.username = comp.get_opt("username", |tag| tag.as_string())?
            .unwrap_or_default()
            .to_string();

        self.death_message = match comp.get_opt(TAG_MESSAGE, |tag| tag.as_string())? {
            Some(json) if !json.is_empty() => Some(TextComponent::from_json(json)?),
            _ => None,
        };

        Ok(())

    }

}


/// Punish a grave robber: a dreadful sound is played where the player stands, and a
/// thunderstorm is brought on the world.
fn anger_sky(world: &mut World, player: &Player) {
    world.play_sound(player.block_pos().as_dvec3() + 0.5, Sound::GraveRob, SoundCategory::Blocks, 1.0, 1.0);
    brew_storm(world);
}

/// Force a thunderstorm for [`STORM_TIME`] ticks, overwriting the current weather.
pub fn brew_storm(weather: &mut impl WeatherController) {
    weather.set_thunder_time(STORM_TIME);
    weather.set_rain_time(STORM_TIME);
    weather.set_thundering(true);
    weather.set_raining(true);
}
