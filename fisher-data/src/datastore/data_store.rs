use anyhow::Result;

use crate::{
    Id,
    ItemData,
    MonsterData,
    MoveData,
    SpeciesData,
};

/// Collection of tables for all catalog data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// Listing methods return IDs in ascending order so that random selection over the result is
/// reproducible for a given seed.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, applying the given filter on the underlying data.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>>;
    /// Gets all monster template IDs, applying the given filter on the underlying data.
    fn all_monster_ids(&self, filter: &dyn Fn(&MonsterData) -> bool) -> Result<Vec<Id>>;

    /// Gets an item by ID.
    fn get_item(&self, id: &Id) -> Result<Option<ItemData>>;
    /// Gets a monster template by ID.
    fn get_monster(&self, id: &Id) -> Result<Option<MonsterData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}
