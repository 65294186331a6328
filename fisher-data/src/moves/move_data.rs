use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    Stat,
};

/// Poison attached to the target of a damaging move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoisonData {
    /// Damage dealt at the end of each turn.
    pub damage: u32,
    /// Number of turns the poison lasts.
    pub turns: u32,
}

/// A timed stat bonus applied to the user of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffData {
    pub stat: Stat,
    pub amount: i32,
    pub turns: u32,
}

/// The effect of a move, keyed by its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MoveEffect {
    /// Damages the opponent, optionally poisoning it.
    Damage {
        power: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poison: Option<PoisonData>,
    },
    /// Heals the user by a flat amount.
    Heal { power: u32 },
    /// Raises a stat of the user for some turns.
    Buff { buff: BuffData },
}

impl MoveEffect {
    /// The category of the effect.
    pub fn category(&self) -> MoveCategory {
        match self {
            Self::Damage { .. } => MoveCategory::Damage,
            Self::Heal { .. } => MoveCategory::Heal,
            Self::Buff { .. } => MoveCategory::Buff,
        }
    }
}

/// Data about a particular move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move description.
    #[serde(default)]
    pub description: String,
    /// What the move does when used.
    #[serde(flatten)]
    pub effect: MoveEffect,
}

impl MoveData {
    pub fn category(&self) -> MoveCategory {
        self.effect.category()
    }
}
