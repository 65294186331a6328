use anyhow::Result;
use fisher_data::{
    DataStore,
    ItemEffect,
    Stat,
};
use log::debug;

use crate::{
    error::{
        WrapOptionError,
        invalid_input_error,
    },
    game::GameState,
};

/// Uses an item from the inventory on a party member.
///
/// Heal items only work on conscious members missing HP. Revive items only work on fainted
/// members. Stat items raise a stat permanently; raising HP raises maximum HP as well. The item is
/// consumed only if it has an effect, and a rejected use changes nothing.
///
/// Returns a message describing the effect.
pub fn use_item(
    state: &mut GameState,
    data: &dyn DataStore,
    inventory_index: usize,
    target: usize,
) -> Result<String> {
    let item_id = state
        .inventory
        .get(inventory_index)
        .wrap_invalid_input(format!("no item in inventory slot {inventory_index}"))?
        .clone();
    let item = data
        .get_item(&item_id)?
        .wrap_not_found_error_with_format(format_args!("item {item_id}"))?;
    let member = state
        .party
        .get_mut(target)
        .wrap_invalid_input(format!("no party member at index {target}"))?;

    let message = match item.effect {
        ItemEffect::Heal { power } => {
            if member.is_fainted() {
                return Err(invalid_input_error(format!(
                    "{} has fainted and cannot be healed",
                    member.name
                )));
            }
            if member.hp >= member.max_hp {
                return Err(invalid_input_error(format!(
                    "{} is already at full HP",
                    member.name
                )));
            }
            let healing = member.restore_hp(power);
            format!("{} recovered {healing} HP!", member.name)
        }
        ItemEffect::Revive { fraction } => {
            if !member.revive(fraction) {
                return Err(invalid_input_error(format!(
                    "{} has not fainted",
                    member.name
                )));
            }
            format!("{} was revived!", member.name)
        }
        ItemEffect::Stat { stat, amount } => {
            match stat {
                Stat::Hp => {
                    member.max_hp += amount;
                    member.hp += amount;
                }
                Stat::Atk => member.atk += amount,
                Stat::Def => member.def += amount,
                Stat::Spd => member.spd += amount,
            }
            format!(
                "{}'s {} increased by {amount}!",
                member.name,
                stat.to_string().to_uppercase()
            )
        }
    };

    state.inventory.remove(inventory_index);
    debug!("used {item_id} on party member {target}");
    Ok(message)
}
