mod battle;
mod battle_logs;
mod options;
mod outcome;
mod request;
mod state;

pub use battle::Battle;
pub use options::BattleEngineOptions;
pub use outcome::{
    ActionReport,
    BattleOutcome,
    TurnReport,
    Victory,
};
pub use request::{
    LearnMoveRequest,
    Request,
    RequestType,
    SwitchRequest,
    TurnRequest,
};
pub use state::BattleState;
