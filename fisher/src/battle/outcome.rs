use fisher_data::Id;

use crate::{
    battle::Request,
    combat::{
        ActionResult,
        Side,
    },
    party::ExperienceGain,
};

/// Rewards earned by defeating a monster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victory {
    pub monster: Id,
    pub gold: u32,
    pub xp: u32,
    /// Party index of the member that received the experience.
    pub member: usize,
    pub experience: ExperienceGain,
}

/// How a turn ended for the battle as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The monster was defeated. Concludes the battle; the caller should advance the floor.
    MonsterDefeated(Victory),
    /// The active member fainted, but others can still fight. A switch is required.
    PartyMemberFainted { member: usize, options: Vec<usize> },
    /// Every member fainted. Concludes the battle; the party has been healed and sent back to the
    /// given checkpoint floor.
    PartyWiped { floor: u32 },
}

/// A single action taken during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReport {
    Move { side: Side, result: ActionResult },
    Item { target: usize, message: String },
}

/// Everything that happened in response to a single choice.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub actions: Vec<ActionReport>,
    /// Human-readable messages, in the order they happened.
    pub messages: Vec<String>,
    pub outcome: Option<BattleOutcome>,
    /// What the battle needs next, if it has not concluded.
    pub request: Option<Request>,
}
