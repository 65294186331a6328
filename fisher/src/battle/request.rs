use fisher_data::Id;
use serde::Serialize;

/// The type of [`Request`] that should be answered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Turn,
    Switch,
    LearnMove,
}

/// A request for the active party member to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRequest {
    /// Party index of the active member.
    pub active: usize,
    /// Moves the active member can use.
    pub moves: Vec<Id>,
}

/// A request for a party member to be switched in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchRequest {
    /// Party indices that are eligible for switch in.
    pub options: Vec<usize>,
}

/// A request to decide on a move that a party member wants to learn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnMoveRequest {
    pub member: usize,
    pub move_id: Id,
}

/// An action the player must take before the battle can continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Turn(TurnRequest),
    Switch(SwitchRequest),
    LearnMove(LearnMoveRequest),
}

impl Request {
    pub fn request_type(&self) -> RequestType {
        match self {
            Self::Turn(_) => RequestType::Turn,
            Self::Switch(_) => RequestType::Switch,
            Self::LearnMove(_) => RequestType::LearnMove,
        }
    }
}
