//! Auto enchantment table block entity.

use tracing::trace;

use crate::enchant::{Level, LevelChanger, LevelChangeRequest, MIN_POWER_LIMIT, MAX_POWER_LIMIT};
use crate::serde::block_entity_nbt::BlockEntityNbtError;
use crate::serde::nbt::{NbtCompound, NbtCompoundParse};
use crate::enchant::xp;

use super::BlockEntityHooks;


#[derive(Debug, Clone)]
pub struct AutoEnchantmentTableBlockEntity {
    /// Maximum enchanting power used, in range 1..=30.
    power_limit: i32,
    /// The enchanting level option selected.
    pub selected_level: Level,
    /// Liquid experience stored in the tank.
    xp_liquid: u32,
}

impl Default for AutoEnchantmentTableBlockEntity {
    fn default() -> Self {
        Self {
            power_limit: MAX_POWER_LIMIT,
            selected_level: Level::default(),
            xp_liquid: 0,
        }
    }
}

impl AutoEnchantmentTableBlockEntity {

    pub fn get_power_limit(&self) -> i32 {
        self.power_limit
    }

    pub fn get_xp_liquid(&self) -> u32 {
        self.xp_liquid
    }

    /// Get the number of levels available from the tank.
    pub fn get_stored_levels(&self) -> u32 {
        xp::get_level_for_experience(xp::liquid_to_xp(self.xp_liquid))
    }

    /// Fill the tank with the given amount of liquid experience, returning the amount
    /// actually accepted given the tank's capacity.
    pub fn fill_xp_liquid(&mut self, amount: u32) -> u32 {
        let accepted = amount.min(xp::tank_capacity().saturating_sub(self.xp_liquid));
        self.xp_liquid += accepted;
        accepted
    }

    /// Apply all the given requests received from clients, in order.
    pub fn apply_requests(&mut self, requests: impl IntoIterator<Item = LevelChangeRequest>) {
        for request in requests {
            trace!("applying {request:?}");
            request.apply(self);
        }
    }

}

/// Server side application of clients' requests.
impl LevelChanger for AutoEnchantmentTableBlockEntity {

    fn change_power_limit(&mut self, power: i32) {
        self.power_limit = power.clamp(MIN_POWER_LIMIT, MAX_POWER_LIMIT);
    }

    fn change_level(&mut self, level: Level) {
        self.selected_level = level;
    }

}

impl BlockEntityHooks for AutoEnchantmentTableBlockEntity {

    fn to_nbt(&self, comp: &mut NbtCompound) {
        comp.insert("powerLimit", self.power_limit);
        comp.insert("selectedLevel", self.selected_level.index() as i32);
        comp.insert("xpLiquid", self.xp_liquid.min(i32::MAX as u32) as i32);
    }

    fn from_nbt(&mut self, comp: &NbtCompoundParse) -> Result<(), BlockEntityNbtError> {

        self.power_limit = comp.get_int("powerLimit")?.clamp(MIN_POWER_LIMIT, MAX_POWER_LIMIT);
        self.selected_level = Level::from_index(comp.get_int("selectedLevel")?.max(0) as usize)
            .unwrap_or_default();
        self.xp_liquid = (comp.get_int("xpLiquid")?.max(0) as u32).min(xp::tank_capacity());

        Ok(())

    }

}


#[cfg(test)]
mod tests {

    use crate::enchant::LevelChangeQueue;
    use crate::serde::nbt::Nbt;
    use super::*;

    #[test]
    fn client_requests() {

        let mut client = LevelChangeQueue::default();
        client.change_power_limit(0);
        client.change_level(Level::L2);
        client.change_power_limit(45);

        let mut table = AutoEnchantmentTableBlockEntity::default();
        let requests = client.take_requests();

        table.apply_requests(requests[..2].iter().copied());
        assert_eq!(table.get_power_limit(), MIN_POWER_LIMIT);
        assert_eq!(table.selected_level, Level::L2);

        table.apply_requests(requests[2..].iter().copied());
        assert_eq!(table.get_power_limit(), MAX_POWER_LIMIT);

    }

    #[test]
    fn tank_capacity() {

        let mut table = AutoEnchantmentTableBlockEntity::default();
        assert_eq!(table.fill_xp_liquid(140), 140);
        assert_eq!(table.get_stored_levels(), 1);

        let capacity = xp::tank_capacity();
        assert_eq!(table.fill_xp_liquid(capacity), capacity - 140);
        assert_eq!(table.get_stored_levels(), xp::MAX_STORED_LEVELS);
        assert_eq!(table.fill_xp_liquid(1), 0);

    }

    #[test]
    fn nbt_round_trip() {

        let mut table = AutoEnchantmentTableBlockEntity::default();
        table.change_power_limit(7);
        table.change_level(Level::L3);
        table.fill_xp_liquid(500);

        let mut comp = NbtCompound::new();
        table.to_nbt(&mut comp);
        let nbt = Nbt::Compound(comp);

        let mut read = AutoEnchantmentTableBlockEntity::default();
        read.from_nbt(&nbt.parse().as_compound().unwrap()).unwrap();
        assert_eq!(read.get_power_limit(), 7);
        assert_eq!(read.selected_level, Level::L3);
        assert_eq!(read.get_xp_liquid(), 500);

    }

}
