use anyhow::Result;
use fisher_data::{
    DataStore,
    Id,
    SpeciesData,
};
use log::{
    info,
    warn,
};

use crate::{
    config::{
        LevelUpGrowth,
        MAX_LEVEL,
        MAX_MOVES,
        XP_PER_LEVEL,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        invalid_input_error,
    },
    party::PartyMember,
};

/// A move added to a member's move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedMove {
    pub move_id: Id,
    /// The move that was forgotten to make room, if any.
    pub forgotten: Option<Id>,
}

/// Everything that happened when a member gained experience.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExperienceGain {
    pub messages: Vec<String>,
    pub levels_gained: u32,
    /// Moves learned directly, in order.
    pub learned: Vec<LearnedMove>,
    /// The move now waiting for a replacement decision.
    pub pending: Option<Id>,
    /// Unlocked moves that could not be learned because a move was already pending.
    pub dropped: Vec<Id>,
}

impl ExperienceGain {
    /// Whether the caller must prompt for a move replacement.
    pub fn needs_move_replacement(&self) -> bool {
        self.pending.is_some()
    }
}

fn move_name(data: &dyn DataStore, move_id: &Id) -> Result<String> {
    Ok(data
        .get_move(move_id)
        .wrap_error_with_format(format_args!("failed to look up move {move_id}"))?
        .wrap_not_found_error_with_format(format_args!("move {move_id}"))?
        .name)
}

/// Awards experience to a party member, leveling up as many times as the experience allows.
///
/// Each level up raises stats and checks the species' learnset for the new level. The HP gained is
/// also restored, unless the member has fainted. Moves already known are skipped. A move is
/// learned directly while a slot is free; otherwise it becomes the member's pending move. Only one
/// move can be pending at a time, so further unlocks are dropped and reported.
pub fn award_experience(
    member: &mut PartyMember,
    species: &SpeciesData,
    data: &dyn DataStore,
    xp: u32,
) -> Result<ExperienceGain> {
    let growth = LevelUpGrowth::default();
    let mut gain = ExperienceGain::default();
    member.xp += xp;

    while member.xp >= member.xp_to_next && member.level < MAX_LEVEL {
        member.xp -= member.xp_to_next;
        member.level += 1;
        member.xp_to_next = member.level * XP_PER_LEVEL;

        member.max_hp += growth.max_hp;
        if member.is_alive() {
            member.hp += growth.max_hp;
        }
        member.atk += growth.atk;
        member.def += growth.def;
        member.spd += growth.spd;

        gain.levels_gained += 1;
        gain.messages
            .push(format!("{} grew to level {}!", member.name, member.level));
        info!("{} reached level {}", member.name, member.level);

        for move_id in species.moves_learned_at(member.level) {
            if member.knows_move(move_id) {
                continue;
            }
            let name = move_name(data, move_id)?;
            if member.moves.len() < MAX_MOVES {
                member.moves.push(move_id.clone());
                gain.learned.push(LearnedMove {
                    move_id: move_id.clone(),
                    forgotten: None,
                });
                gain.messages
                    .push(format!("{} learned {name}!", member.name));
            } else if member.pending_move.is_none() {
                member.pending_move = Some(move_id.clone());
                gain.pending = Some(move_id.clone());
                gain.messages
                    .push(format!("{} wants to learn {name}!", member.name));
            } else {
                warn!(
                    "{} could not hold {move_id} as a pending move; {} is already pending",
                    member.name,
                    member.pending_move.as_ref().map(|id| id.as_str()).unwrap_or_default(),
                );
                gain.dropped.push(move_id.clone());
                gain.messages
                    .push(format!("{} could not learn {name}.", member.name));
            }
        }
    }

    Ok(gain)
}

/// Resolves a member's pending move.
///
/// With `Some(index)`, the move at that index is forgotten and replaced by the pending move. With
/// `None`, the pending move is discarded. Fails without changing anything if no move is pending
/// or the index is out of range.
pub fn learn_pending_move(member: &mut PartyMember, replace: Option<usize>) -> Result<LearnedMove> {
    let pending = member
        .pending_move
        .clone()
        .wrap_invalid_input(format!("{} has no pending move", member.name))?;
    let forgotten = match replace {
        Some(index) => {
            if index >= member.moves.len() {
                return Err(invalid_input_error(format!(
                    "{} has no move in slot {index}",
                    member.name
                )));
            }
            let forgotten = std::mem::replace(&mut member.moves[index], pending.clone());
            info!("{} forgot {forgotten} and learned {pending}", member.name);
            Some(forgotten)
        }
        None => None,
    };
    member.pending_move = None;
    Ok(LearnedMove {
        move_id: pending,
        forgotten,
    })
}
