mod party_member;
mod progression;

pub use party_member::{
    PartyMember,
    alive_members,
    is_party_wiped,
};
pub use progression::{
    ExperienceGain,
    LearnedMove,
    award_experience,
    learn_pending_move,
};
