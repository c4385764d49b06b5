//! Grave, sprinkler and auto enchantment table blocks running on a beta-era voxel world.

pub mod util;

pub mod block;
pub mod item;
pub mod text;
pub mod inventory;
pub mod entity;
pub mod block_entity;
pub mod enchant;

pub mod config;
pub mod world;
pub mod serde;
