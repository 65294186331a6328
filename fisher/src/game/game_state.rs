use anyhow::Result;
use fisher_data::{
    DataStore,
    Id,
};
use log::info;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    config::MAX_FLOOR,
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
        invalid_input_error,
    },
    party::{
        PartyMember,
        alive_members,
    },
};

/// The state of a run, shared by every scene of the game.
///
/// Serializes to the shape used by save files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub floor: u32,
    pub gold: u32,
    pub party: Vec<PartyMember>,
    /// Item IDs, in the order they were bought.
    pub inventory: Vec<Id>,
    /// The floor returned to after the whole party faints.
    pub camp_floor: u32,
}

impl GameState {
    /// Starts a new run on floor 1 with a single party member.
    pub fn new(starter: PartyMember) -> Self {
        Self {
            floor: 1,
            gold: 0,
            party: vec![starter],
            inventory: Vec::new(),
            camp_floor: 1,
        }
    }

    /// Starts a new run with a starter species from the catalog.
    pub fn with_starter(data: &dyn DataStore, species_id: &Id) -> Result<Self> {
        let species = data
            .get_species(species_id)?
            .wrap_invalid_input(format!("unknown species {species_id}"))?;
        if !species.starter {
            return Err(invalid_input_error(format!(
                "{} cannot be chosen as a starter",
                species.name
            )));
        }
        Ok(Self::new(PartyMember::new(species_id.clone(), &species)))
    }

    /// Restores a run from a save snapshot.
    pub fn from_snapshot(snapshot: &str) -> Result<Self> {
        let state: Self =
            serde_json::from_str(snapshot).wrap_error_with_message("invalid save snapshot")?;
        if state.party.is_empty() {
            return Err(general_error("save snapshot has an empty party"));
        }
        Ok(state)
    }

    /// Serializes the run to a save snapshot.
    pub fn snapshot(&self) -> Result<String> {
        serde_json::to_string(self).wrap_error_with_message("failed to serialize game state")
    }

    /// Fully heals the party and makes the current floor the checkpoint.
    pub fn rest_at_camp(&mut self) {
        for member in &mut self.party {
            member.full_heal();
        }
        self.camp_floor = self.floor;
        info!("rested at camp on floor {}", self.floor);
    }

    /// Moves one floor deeper. Returns `false` if already on the last floor.
    pub fn advance_floor(&mut self) -> bool {
        if self.floor >= MAX_FLOOR {
            return false;
        }
        self.floor += 1;
        true
    }

    /// Whether the last floor has been reached.
    pub fn on_last_floor(&self) -> bool {
        self.floor >= MAX_FLOOR
    }

    /// Recovers from a full party wipe: heals everyone and returns to the checkpoint.
    pub fn wipe_reset(&mut self) {
        for member in &mut self.party {
            member.full_heal();
        }
        info!(
            "party wiped on floor {}; returning to floor {}",
            self.floor, self.camp_floor
        );
        self.floor = self.camp_floor;
    }

    /// Indices of party members able to fight.
    pub fn active_candidates(&self) -> Vec<usize> {
        alive_members(&self.party)
    }
}
