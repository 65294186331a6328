use anyhow::Result;
use fisher_data::{
    BuffData,
    Id,
    MoveCategory,
    MoveData,
    MoveEffect,
    Stat,
};
use fisher_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::Serialize;

use crate::{
    combat::{
        Buff,
        Combatant,
        Poison,
    },
    error::{
        WrapOptionError,
        general_error,
    },
};

/// The outcome of a single move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub category: MoveCategory,
    pub move_name: String,
    /// Damage dealt, HP restored, or stat points gained, depending on the category.
    pub magnitude: u32,
    pub message: String,
    /// Whether the move newly poisoned the defender.
    pub poisoned: bool,
    /// The buff applied to the attacker, if any.
    pub buff: Option<BuffData>,
}

/// Computes the damage a damaging move deals.
///
/// Damage is `atk * power / 50 - def`, rounded down and never less than 1, using the effective
/// attack of the attacker and the effective defense of the defender.
pub fn compute_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
) -> Result<u32> {
    let power = match &move_data.effect {
        MoveEffect::Damage { power, .. } => *power,
        _ => {
            return Err(general_error(format!(
                "{} is not a damaging move",
                move_data.name
            )));
        }
    };
    let atk = attacker.effective_stat(Stat::Atk) as i64;
    let def = defender.effective_stat(Stat::Def) as i64;
    let damage = (atk * power as i64 - def * 50).div_euclid(50);
    Ok(damage.max(1) as u32)
}

/// Applies a move used by the attacker.
///
/// Damaging moves target the defender; healing and buffing moves target the attacker.
pub fn apply_move(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_data: &MoveData,
) -> Result<ActionResult> {
    let mut result = ActionResult {
        category: move_data.category(),
        move_name: move_data.name.clone(),
        magnitude: 0,
        message: String::new(),
        poisoned: false,
        buff: None,
    };
    match &move_data.effect {
        MoveEffect::Damage { poison, .. } => {
            let damage = compute_damage(attacker, defender, move_data)?;
            defender.take_damage(damage);
            result.magnitude = damage;
            result.message = format!(
                "{} uses {}! Deals {damage} damage.",
                attacker.name, move_data.name
            );
            if let Some(poison) = poison
                && defender.poisoned.is_none()
            {
                defender.poisoned = Some(Poison {
                    damage: poison.damage,
                    turns_left: poison.turns,
                });
                result.poisoned = true;
                result.message += &format!(" {} is poisoned!", defender.name);
            }
        }
        MoveEffect::Heal { power } => {
            let healing = attacker.restore_hp(*power);
            result.magnitude = healing;
            result.message = format!(
                "{} uses {}! Restores {healing} HP.",
                attacker.name, move_data.name
            );
        }
        MoveEffect::Buff { buff } => {
            attacker.buffs.push(Buff {
                stat: buff.stat,
                amount: buff.amount,
                turns_left: buff.turns,
            });
            result.magnitude = buff.amount.max(0) as u32;
            result.message = format!(
                "{} uses {}! {} raised!",
                attacker.name,
                move_data.name,
                buff.stat.to_string().to_uppercase()
            );
            result.buff = Some(buff.clone());
        }
    }
    Ok(result)
}

/// Picks the move a monster uses this turn, uniformly at random.
pub fn pick_monster_move<'m>(
    monster: &'m Combatant,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<&'m Id> {
    rand_util::sample_slice(prng, &monster.moves)
        .wrap_expectation(format!("{} has no moves", monster.name))
}
