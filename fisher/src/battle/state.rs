use std::fmt;

use crate::battle::{
    BattleOutcome,
    Victory,
};

/// The state of a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleState {
    /// Waiting for the active member's action.
    Ready,
    /// A turn is being resolved.
    ResolvingTurn,
    /// The active member fainted and a living member must be switched in.
    AwaitingSwitch,
    /// The monster was defeated and the active member wants to learn a move.
    AwaitingMoveReplacement(Victory),
    /// The battle is over.
    Concluded(BattleOutcome),
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::ResolvingTurn => write!(f, "resolving a turn"),
            Self::AwaitingSwitch => write!(f, "awaiting a switch"),
            Self::AwaitingMoveReplacement(_) => write!(f, "awaiting a move replacement"),
            Self::Concluded(_) => write!(f, "concluded"),
        }
    }
}
