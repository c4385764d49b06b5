//! Auto enchantment table: enchanting levels, configurable slots, the experience tank
//! and the requests sent by clients to change the table's settings.

use std::mem;

pub mod xp;
pub mod gui;


/// Lowest power limit that can be requested.
pub const MIN_POWER_LIMIT: i32 = 1;
/// Highest power limit that can be requested, also the default one.
pub const MAX_POWER_LIMIT: i32 = 30;


/// Enchantment level option, the same three options as the vanilla enchanting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    L1,
    L2,
    L3,
}

impl Level {

    pub const ALL: [Self; 3] = [Self::L1, Self::L2, Self::L3];

    /// Index of this level in [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get a level from its index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The level selected after this one, cycling back to the first one.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

}

/// Configurable slots of the auto enchantment table, each one can automatically pull
/// or push items from or to neighbor inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoSlot {
    ToolInput,
    LapisInput,
    Xp,
    Output,
}

impl AutoSlot {
    /// All slots, in display order.
    pub const ALL: [Self; 4] = [Self::ToolInput, Self::LapisInput, Self::Xp, Self::Output];
}


/// Field changes a client can request to the server on a table.
pub trait LevelChanger {

    /// Change the maximum enchanting power used by the table.
    fn change_power_limit(&mut self, power: i32);

    /// Change the selected enchanting level.
    fn change_level(&mut self, level: Level);

}

/// A single field change request, as queued on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChangeRequest {
    PowerLimit(i32),
    Level(Level),
}

impl LevelChangeRequest {

    /// Apply this request to the given changer.
    pub fn apply(self, changer: &mut impl LevelChanger) {
        match self {
            LevelChangeRequest::PowerLimit(power) => changer.change_power_limit(power),
            LevelChangeRequest::Level(level) => changer.change_level(level),
        }
    }

}

/// Client side level changer, only queuing requests to be sent to the server.
#[derive(Debug, Clone, Default)]
pub struct LevelChangeQueue {
    requests: Vec<LevelChangeRequest>,
}

impl LevelChangeQueue {

    /// Take all queued requests, in order, leaving the queue empty.
    pub fn take_requests(&mut self) -> Vec<LevelChangeRequest> {
        mem::take(&mut self.requests)
    }

}

impl LevelChanger for LevelChangeQueue {

    fn change_power_limit(&mut self, power: i32) {
        self.requests.push(LevelChangeRequest::PowerLimit(power));
    }

    fn change_level(&mut self, level: Level) {
        self.requests.push(LevelChangeRequest::Level(level));
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn level_cycle() {
        assert_eq!(Level::L1.next(), Level::L2);
        assert_eq!(Level::L2.next(), Level::L3);
        assert_eq!(Level::L3.next(), Level::L1);
        assert_eq!(Level::from_index(2), Some(Level::L3));
        assert_eq!(Level::from_index(3), None);
    }

    #[test]
    fn queue() {

        let mut queue = LevelChangeQueue::default();
        queue.change_power_limit(12);
        queue.change_level(Level::L3);

        assert_eq!(queue.take_requests(), [LevelChangeRequest::PowerLimit(12), LevelChangeRequest::Level(Level::L3)]);
        assert!(queue.take_requests().is_empty());

    }

}
