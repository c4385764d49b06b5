//! Saving and loading of the world's block entities as NBT.

use tracing::{debug, warn};

use crate::serde::block_entity_nbt::{self, BlockEntityNbtError};
use crate::serde::nbt::Nbt;

use super::World;


impl World {

    /// Save every block entity of the world into a list of NBT compounds, in insertion
    /// order. Block entities currently running a hook are not saved.
    pub fn save_block_entities(&self) -> Vec<Nbt> {
        let list = self.block_entities.iter()
            .filter_map(|(&pos, block_entity)| {
                let block_entity = block_entity.as_deref()?;
                Some(Nbt::Compound(block_entity_nbt::to_nbt(pos, block_entity)))
            })
            .collect::<Vec<_>>();
        debug!("saved {} block entities", list.len());
        list
    }

    /// Load every block entity from the given list of NBT compounds, replacing block 
    /// entities already at the same positions. The whole list is parsed before any
    /// block entity is set in the world, so nothing is loaded on error. Returns the
    /// number of loaded block entities.
    pub fn load_block_entities(&mut self, list: &[Nbt]) -> Result<usize, BlockEntityNbtError> {

        let mut loaded = Vec::with_capacity(list.len());
        for tag in list {
            let comp = tag.parse().as_compound()?;
            loaded.push(block_entity_nbt::from_nbt(&comp)?);
        }

        let count = loaded.len();
        for (pos, block_entity) in loaded {
            if self.get_block(pos).is_none() {
                warn!("loading block entity out of the world at {pos}");
            }
            self.set_block_entity(pos, block_entity);
        }

        debug!("loaded {count} block entities");
        Ok(count)

    }

}
