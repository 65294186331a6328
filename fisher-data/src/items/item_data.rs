use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Fraction,
    Stat,
};

/// The effect of using an item on a party member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores a flat amount of HP to a conscious member.
    Heal { power: u32 },
    /// Revives a fainted member with a fraction of their maximum HP.
    Revive { fraction: Fraction },
    /// Permanently raises a stat.
    Stat { stat: Stat, amount: u32 },
}

/// Data about a particular item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the shop.
    pub price: u32,
    #[serde(flatten)]
    pub effect: ItemEffect,
}
