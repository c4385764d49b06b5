//! The simulation owning a world and the players acting on it.

use std::time::{Duration, Instant};

use glam::{IVec3, DVec3};

use tracing::{debug, info, warn};

use openvox::block_entity::BlockEntity;
use openvox::enchant::LevelChangeQueue;
use openvox::enchant::gui::AutoEnchantmentTableGui;
use openvox::config::GraveConfig;
use openvox::entity::{Player, GameMode, Hand};
use openvox::item::{self, ItemStack};
use openvox::text::TextComponent;
use openvox::world::{World, Event};
use openvox::block;


/// Target tick duration. Currently 20 TPS, so 50 ms/tick.
const TICK_DURATION: Duration = Duration::from_millis(50);
/// Half size of the stone floor generated around the origin.
const FLOOR_RADIUS: i32 = 16;
/// Height of the floor's top blocks.
const FLOOR_Y: i32 = 4;


/// A flat world with a grave, a sprinkler and an auto enchantment table, and the 
/// players interacting with them.
pub struct Simulation {
    world: World,
    /// The player whose grave is simulated, it places the grave on creation.
    owner: Player,
    /// The player robbing the grave with a shovel.
    robber: Player,
    /// Position of the grave.
    grave_pos: IVec3,
    /// Position of the auto enchantment table.
    table_pos: IVec3,
}

impl Simulation {

    pub fn new(config: GraveConfig) -> Self {

        let mut world = World::new();
        world.set_grave_config(config);
        world.swap_events(Some(Vec::new()));

        for x in -FLOOR_RADIUS..=FLOOR_RADIUS {
            for z in -FLOOR_RADIUS..=FLOOR_RADIUS {
                world.set_block(IVec3::new(x, 0, z), block::BEDROCK, 0);
                for y in 1..FLOOR_Y {
                    world.set_block(IVec3::new(x, y, z), block::DIRT, 0);
                }
                world.set_block(IVec3::new(x, FLOOR_Y, z), block::GRASS, 0);
            }
        }

        // Night is falling.
        world.set_ambient_light(4);

        let ground = FLOOR_Y + 1;
        let grave_pos = IVec3::new(0, ground, 0);
        let sprinkler_pos = IVec3::new(3, ground, 0);
        let table_pos = IVec3::new(-3, ground, 0);

        let mut owner = Player::new("Alice");
        owner.game_mode = GameMode::Creative;
        owner.pos = DVec3::new(0.5, ground as f64, 1.5);
        owner.inv.main[0] = ItemStack::new(item::DIAMOND_SWORD, 120);
        owner.inv.main[1] = ItemStack::new(item::BREAD, 0).with_size(12);
        owner.inv.main[8] = ItemStack::new_block(block::TORCH, 0).with_size(32);
        owner.inv.off_hand = ItemStack::new(item::BOOK, 0);

        let mut robber = Player::new("Bob");
        robber.pos = DVec3::new(1.5, ground as f64, 0.5);
        robber.inv.set_held(Hand::Main, ItemStack::new(item::IRON_SHOVEL, 0));

        if !world.place_block(grave_pos, block::GRAVE, 0, Some(&owner), None) {
            warn!("cannot place grave at {grave_pos}");
        }

        if let Some(BlockEntity::Grave(grave)) = world.get_block_entity_mut(grave_pos) {
            grave.xp = 42;
            grave.set_death_message(&TextComponent::new_translate("death.attack.arrow", vec![
                TextComponent::new("Alice"),
                TextComponent::new("Skeleton"),
            ]));
        }

        if !world.place_block(sprinkler_pos, block::SPRINKLER, 0, Some(&robber), None) {
            warn!("cannot place sprinkler at {sprinkler_pos}");
        }

        if !world.place_block(table_pos, block::AUTO_ENCHANTMENT_TABLE, 0, Some(&owner), None) {
            warn!("cannot place auto enchantment table at {table_pos}");
        }

        info!("simulation ready with grave at {grave_pos}");

        Self {
            world,
            owner,
            robber,
            grave_pos,
            table_pos,
        }

    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run a single tick on the world. This function also waits for this function to 
    /// approximately last for 50 ms (20 TPS), there is no sleep of the tick was too 
    /// long, in such case a warning is logged.
    pub fn tick_padded(&mut self) {

        let start = Instant::now();
        self.tick();
        let elapsed = start.elapsed();

        if let Some(missing) = TICK_DURATION.checked_sub(elapsed) {
            std::thread::sleep(missing);
        } else {
            warn!("tick too long {:?}, expected {:?}", elapsed, TICK_DURATION);
        }

    }

    /// Run a single tick on the world and log its events.
    pub fn tick(&mut self) {
        self.world.tick();
        self.flush_events();
    }

    /// Log and discard all events of the world.
    fn flush_events(&mut self) {

        let Some(mut events) = self.world.swap_events(None) else { return };

        for event in events.drain(..) {
            match event {
                Event::Entity { id, inner } => {
                    let kind = self.world.get_entity(id).map(|entity| entity.kind());
                    debug!("entity #{id} {inner:?} ({kind:?})");
                }
                Event::Weather { prev, new } => info!("weather changed from {prev:?} to {new:?}"),
                Event::Sound { pos, sound, .. } => info!("sound {sound:?} played at {pos}"),
                Event::BlockBreakParticle { pos, block: id } => debug!("break particles of {} at {pos}", block::name(id)),
                event => debug!("{event:?}"),
            }
        }

        self.world.swap_events(Some(events));

    }

    /// Let the owner read its grave, then the robber rob it.
    pub fn rob_grave(&mut self) {

        self.world.interact_block(self.grave_pos, &mut self.owner, Hand::Main);
        for message in &self.owner.messages {
            info!("'{}' reads the grave: {message}", self.owner.username);
        }

        let held = self.robber.inv.get_held(Hand::Main);
        self.world.interact_block(self.grave_pos, &mut self.robber, Hand::Main);
        info!("'{}' robbed the grave, shovel went from {held:?} to {:?}", 
            self.robber.username, 
            self.robber.inv.get_held(Hand::Main));

        self.flush_events();

    }

    /// Simulate the owner configuring the auto enchantment table through its screen.
    pub fn configure_table(&mut self) {

        let gui = match AutoEnchantmentTableGui::new() {
            Ok(gui) => gui,
            Err(e) => {
                warn!("cannot build auto enchantment table screen: {e}");
                return;
            }
        };

        let Some(BlockEntity::AutoEnchantmentTable(table)) = self.world.get_block_entity_mut(self.table_pos) else {
            warn!("no auto enchantment table at {}", self.table_pos);
            return;
        };

        let mut queue = LevelChangeQueue::default();
        gui.on_power_slider_changed(15.0, &mut queue);
        gui.on_level_button_clicked(table.selected_level, &mut queue);
        table.apply_requests(queue.take_requests());
        table.fill_xp_liquid(2000);

        info!("auto enchantment table configured with power limit {} and level {:?}, tank shows {} levels",
            table.get_power_limit(),
            table.selected_level,
            gui.tank_display_value(table.get_xp_liquid()));

    }

}
