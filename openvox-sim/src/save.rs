//! Gzip compressed NBT file holding the block entities of a world.

use std::fs::File;
use std::path::Path;
use std::io;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use openvox::serde::block_entity_nbt::BlockEntityNbtError;
use openvox::serde::nbt::{self, Nbt, NbtCompound, NbtError, NbtParseError};
use openvox::world::World;


/// Error type used together with [`save`] and [`load`].
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("nbt: {0}")]
    Nbt(#[from] NbtError),
    #[error("nbt parse: {0}")]
    NbtParse(#[from] NbtParseError),
    #[error("block entity: {0}")]
    BlockEntity(#[from] BlockEntityNbtError),
}


/// Save all block entities of the world in a new file at the given path, returns the
/// number of block entities saved.
pub fn save(world: &World, path: &Path) -> Result<usize, SaveError> {

    let list = world.save_block_entities();
    let count = list.len();

    let mut root = NbtCompound::new();
    root.insert("BlockEntities", list);

    let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
    nbt::to_writer(&mut encoder, &Nbt::Compound(root))?;
    encoder.finish()?;

    Ok(count)

}

/// Load all block entities of the file at the given path into the world, returns the
/// number of block entities loaded.
pub fn load(world: &mut World, path: &Path) -> Result<usize, SaveError> {

    let root = nbt::from_reader(GzDecoder::new(File::open(path)?))?;
    let root = root.parse().as_compound()?;

    let list = root.get_list("BlockEntities")?;
    Ok(world.load_block_entities(list.inner())?)

}


#[cfg(test)]
mod tests {

    use openvox::block_entity::BlockEntity;
    use openvox::config::GraveConfig;

    use crate::sim::Simulation;
    use super::*;

    #[test]
    fn round_trip() {

        let mut sim = Simulation::new(GraveConfig { spawn_skeletons: false, ..Default::default() });
        sim.configure_table();
        for _ in 0..20 {
            sim.tick();
        }

        let path = std::env::temp_dir().join(format!("openvox-sim-{}.nbt.gz", std::process::id()));
        let saved = save(sim.world(), &path).unwrap();
        assert_eq!(saved, 2);

        let mut world = World::new();
        let loaded = load(&mut world, &path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, 2);

        let graves = world.iter_block_entities_pos()
            .filter(|&pos| matches!(world.get_block_entity(pos), Some(BlockEntity::Grave(_))))
            .count();
        assert_eq!(graves, 1);

        let Some(BlockEntity::Grave(grave)) = world.get_block_entity(glam::IVec3::new(0, 5, 0)) else {
            panic!("expected grave");
        };
        assert_eq!(grave.username, "Alice");
        assert_eq!(grave.xp, 42);
        assert_eq!(grave.inv.size(), 41);
        assert!(grave.get_death_message().is_some());

    }

}
