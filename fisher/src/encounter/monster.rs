use std::ops::{
    Deref,
    DerefMut,
};

use fisher_data::Id;
use serde::{
    Deserialize,
    Serialize,
};

use crate::combat::Combatant;

/// A monster encountered on a floor of the dungeon.
///
/// Dereferences to its [`Combatant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// The template the monster was generated from.
    pub id: Id,
    pub floor: u32,
    #[serde(flatten)]
    pub combatant: Combatant,
    pub gold_reward: u32,
    pub xp_reward: u32,
}

impl Deref for Monster {
    type Target = Combatant;

    fn deref(&self) -> &Self::Target {
        &self.combatant
    }
}

impl DerefMut for Monster {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.combatant
    }
}
