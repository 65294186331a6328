use std::fmt;

use fisher_data::Stat;
use serde::{
    Deserialize,
    Serialize,
};

use crate::combat::Combatant;

/// One side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Monster,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Player => Self::Monster,
            Self::Monster => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Monster => write!(f, "monster"),
        }
    }
}

/// Orders the two sides for a turn by effective speed.
///
/// The player's side moves first on a tie.
pub fn determine_turn_order(player: &Combatant, monster: &Combatant) -> [Side; 2] {
    if player.effective_stat(Stat::Spd) >= monster.effective_stat(Stat::Spd) {
        [Side::Player, Side::Monster]
    } else {
        [Side::Monster, Side::Player]
    }
}
