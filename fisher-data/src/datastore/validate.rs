use ahash::HashMap;
use thiserror::Error;

use crate::{
    Id,
    MonsterData,
    MoveData,
    SpeciesData,
};

/// The deepest floor of the dungeon.
pub const MAX_FLOOR: u32 = 100;

/// A violation of the catalog's internal contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no monster can appear on floor {0}")]
    UncoveredFloor(u32),
    #[error("{owner} references unknown move {move_id}")]
    UnknownMove { owner: Id, move_id: Id },
    #[error("monster {0} has no moves")]
    MonsterWithoutMoves(Id),
    #[error("species {0} starts with no moves")]
    SpeciesWithoutMoves(Id),
}

/// Validates that the catalog tables are consistent with each other.
///
/// Every floor from 1 to [`MAX_FLOOR`] must be covered by at least one monster template, and every
/// move referenced by a species or a monster must exist.
pub fn validate_catalog(
    species: &HashMap<Id, SpeciesData>,
    moves: &HashMap<Id, MoveData>,
    monsters: &HashMap<Id, MonsterData>,
) -> Result<(), CatalogError> {
    let check_move = |owner: &Id, move_id: &Id| {
        if moves.contains_key(move_id) {
            Ok(())
        } else {
            Err(CatalogError::UnknownMove {
                owner: owner.clone(),
                move_id: move_id.clone(),
            })
        }
    };

    let mut species_ids = species.keys().collect::<Vec<_>>();
    species_ids.sort();
    for id in species_ids {
        let data = &species[id];
        if data.starter_moves.is_empty() {
            return Err(CatalogError::SpeciesWithoutMoves(id.clone()));
        }
        for move_id in data
            .starter_moves
            .iter()
            .chain(data.learnset.iter().map(|entry| &entry.move_id))
        {
            check_move(id, move_id)?;
        }
    }

    let mut monster_ids = monsters.keys().collect::<Vec<_>>();
    monster_ids.sort();
    for id in monster_ids {
        let data = &monsters[id];
        if data.moves.is_empty() {
            return Err(CatalogError::MonsterWithoutMoves(id.clone()));
        }
        for move_id in &data.moves {
            check_move(id, move_id)?;
        }
    }

    match (1..=MAX_FLOOR).find(|floor| {
        !monsters
            .values()
            .any(|monster| monster.floor_range.contains(*floor))
    }) {
        Some(floor) => Err(CatalogError::UncoveredFloor(floor)),
        None => Ok(()),
    }
}
