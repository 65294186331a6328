use crate::combat::{
    Buff,
    Combatant,
};

/// What happened to a combatant's status effects at the end of a turn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusTick {
    /// Poison damage taken this turn.
    pub poison_damage: Option<u32>,
    /// Whether the poison ran out this turn.
    pub poison_cured: bool,
    /// Buffs that expired this turn.
    pub expired_buffs: Vec<Buff>,
    pub messages: Vec<String>,
}

/// Advances the combatant's status effects by one turn.
///
/// Poison only ticks while the combatant has HP left. Every buff counts down regardless, and is
/// removed once it reaches zero.
pub fn resolve_end_of_turn(combatant: &mut Combatant) -> StatusTick {
    let mut tick = StatusTick::default();

    if combatant.is_alive()
        && let Some(poison) = combatant.poisoned.as_mut()
    {
        let nominal = poison.damage;
        poison.turns_left = poison.turns_left.saturating_sub(1);
        let cured = poison.turns_left == 0;
        let damage = combatant.take_damage(nominal);
        tick.poison_damage = Some(damage);
        tick.messages
            .push(format!("{} takes {damage} poison damage!", combatant.name));
        if cured {
            combatant.poisoned = None;
            tick.poison_cured = true;
            tick.messages
                .push(format!("{} is no longer poisoned.", combatant.name));
        }
    }

    let (expired, active): (Vec<_>, Vec<_>) = combatant
        .buffs
        .drain(..)
        .map(|mut buff| {
            buff.turns_left = buff.turns_left.saturating_sub(1);
            buff
        })
        .partition(|buff| buff.turns_left == 0);
    combatant.buffs = active;
    for buff in &expired {
        tick.messages.push(format!(
            "{}'s {} boost wore off.",
            combatant.name,
            buff.stat.to_string().to_uppercase()
        ));
    }
    tick.expired_buffs = expired;

    tick
}
