use std::ops::{
    Deref,
    DerefMut,
};

use fisher_data::{
    Fraction,
    Id,
    SpeciesData,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    combat::Combatant,
    config::XP_PER_LEVEL,
};

/// A fish owned by the player.
///
/// Dereferences to its [`Combatant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMember {
    pub species_id: Id,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    /// A move unlocked while all move slots were full.
    #[serde(default)]
    pub pending_move: Option<Id>,
    #[serde(flatten)]
    pub combatant: Combatant,
}

impl PartyMember {
    /// Creates a level 1 member of the species.
    pub fn new(species_id: Id, species: &SpeciesData) -> Self {
        Self {
            species_id,
            level: 1,
            xp: 0,
            xp_to_next: XP_PER_LEVEL,
            pending_move: None,
            combatant: Combatant::new(
                species.name.clone(),
                &species.base_stats,
                species.starter_moves.clone(),
            ),
        }
    }

    /// Restores all HP and clears all status.
    pub fn full_heal(&mut self) {
        self.combatant.hp = self.combatant.max_hp;
        self.combatant.clear_status();
    }

    /// Revives a fainted member with the given fraction of maximum HP.
    ///
    /// Returns `false` without changing anything if the member is not fainted.
    pub fn revive(&mut self, fraction: Fraction) -> bool {
        if self.combatant.is_alive() {
            return false;
        }
        self.combatant.hp = fraction.floor_mul(self.combatant.max_hp);
        self.combatant.clear_status();
        true
    }

    /// Clears status effects that only last for a battle.
    pub fn clear_combat_state(&mut self) {
        self.combatant.clear_status();
    }
}

impl Deref for PartyMember {
    type Target = Combatant;

    fn deref(&self) -> &Self::Target {
        &self.combatant
    }
}

impl DerefMut for PartyMember {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.combatant
    }
}

/// Indices of all party members with HP left.
pub fn alive_members(party: &[PartyMember]) -> Vec<usize> {
    party
        .iter()
        .enumerate()
        .filter(|(_, member)| member.is_alive())
        .map(|(i, _)| i)
        .collect()
}

/// Whether every party member has fainted.
pub fn is_party_wiped(party: &[PartyMember]) -> bool {
    party.iter().all(|member| member.is_fainted())
}
