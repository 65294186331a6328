use anyhow::Result;
use fisher::{
    battle::{
        Battle,
        BattleEngineOptions,
    },
    config::MonsterScaling,
    encounter::build_monster,
    error::WrapOptionError,
    game::GameState,
    party::PartyMember,
};
use fisher_data::{
    DataStore,
    Id,
};

use crate::ControlledRandomNumberGenerator;

/// Game and battle builder object for integration tests.
///
/// Party members may be any species, not only starters.
pub struct TestGameBuilder {
    party: Vec<Id>,
    floor: u32,
    camp_floor: Option<u32>,
    gold: u32,
    inventory: Vec<Id>,
    monster: Option<Id>,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestGameBuilder {
    /// Creates a new [`TestGameBuilder`].
    pub fn new() -> Self {
        Self {
            party: Vec::new(),
            floor: 1,
            camp_floor: None,
            gold: 0,
            inventory: Vec::new(),
            monster: None,
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds the [`GameState`] alone.
    ///
    /// A party of a single Guppy is used if no members were added.
    pub fn build_game(&self, data: &dyn DataStore) -> Result<GameState> {
        let species_ids = if self.party.is_empty() {
            vec![Id::from("guppy")]
        } else {
            self.party.clone()
        };
        let party = species_ids
            .into_iter()
            .map(|species_id| {
                let species = data
                    .get_species(&species_id)?
                    .wrap_not_found_error(format!("species {species_id}"))?;
                Ok(PartyMember::new(species_id, &species))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(GameState {
            floor: self.floor,
            gold: self.gold,
            party,
            inventory: self.inventory.clone(),
            camp_floor: self.camp_floor.unwrap_or(1),
        })
    }

    /// Builds a new [`Battle`] for an existing game.
    pub fn build_battle<'d>(self, game: &GameState, data: &'d dyn DataStore) -> Result<Battle<'d>> {
        let mut engine_options = self.engine_options;
        if self.controlled_rng {
            engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        match self.monster {
            Some(monster) => {
                let monster = build_monster(&monster, game.floor, data, &MonsterScaling::default())?;
                Battle::with_monster(game, data, monster, engine_options)
            }
            None => Battle::new(game, data, engine_options),
        }
    }

    /// Builds a new [`GameState`] and a [`Battle`] on its current floor.
    pub fn build<'d>(self, data: &'d dyn DataStore) -> Result<(GameState, Battle<'d>)> {
        let game = self.build_game(data)?;
        let battle = self.build_battle(&game, data)?;
        Ok((game, battle))
    }

    pub fn with_member(mut self, species_id: &str) -> Self {
        self.party.push(Id::from(species_id));
        self
    }

    pub fn with_floor(mut self, floor: u32) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_camp_floor(mut self, camp_floor: u32) -> Self {
        self.camp_floor = Some(camp_floor);
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_item(mut self, item_id: &str) -> Self {
        self.inventory.push(Id::from(item_id));
        self
    }

    /// Fights the given monster template instead of generating one.
    pub fn with_monster(mut self, monster_id: &str) -> Self {
        self.monster = Some(Id::from(monster_id));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine_options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }
}
