use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    StatTable,
};

/// A move unlocked when a species reaches a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub level: u32,
    #[serde(rename = "move")]
    pub move_id: Id,
}

/// Data about a particular fish species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// Flavor text shown in the shop.
    #[serde(default)]
    pub description: String,
    /// Stats of a level 1 member of this species.
    pub base_stats: StatTable,
    /// Moves known at level 1.
    pub starter_moves: Vec<Id>,
    /// Moves unlocked by level.
    #[serde(default)]
    pub learnset: Vec<LevelUpMove>,
    /// Price in the shop; 0 if not sold.
    #[serde(default)]
    pub shop_price: u32,
    /// Whether the species can be chosen at the start of a run.
    #[serde(default)]
    pub starter: bool,
    /// Display color, as a packed RGB value.
    #[serde(default)]
    pub color: u32,
}

impl SpeciesData {
    /// Moves unlocked at exactly the given level, in table order.
    pub fn moves_learned_at(&self, level: u32) -> impl Iterator<Item = &Id> {
        self.learnset
            .iter()
            .filter(move |entry| entry.level == level)
            .map(|entry| &entry.move_id)
    }

    /// Whether the species can be bought in the shop.
    pub fn purchasable(&self) -> bool {
        !self.starter && self.shop_price > 0
    }
}
