use anyhow::Result;
use fisher_data::{
    DataStore,
    Id,
    StatTable,
};
use fisher_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::debug;

use crate::{
    combat::Combatant,
    config::MonsterScaling,
    encounter::Monster,
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
};

/// Generates a monster for the floor using the default scaling.
pub fn generate_monster(
    floor: u32,
    data: &dyn DataStore,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<Monster> {
    generate_monster_with_scaling(floor, data, prng, &MonsterScaling::default())
}

/// Generates a monster for the floor.
///
/// A template is picked uniformly among those whose floor range contains the floor. Stats and
/// rewards come from the floor alone.
pub fn generate_monster_with_scaling(
    floor: u32,
    data: &dyn DataStore,
    prng: &mut dyn PseudoRandomNumberGenerator,
    scaling: &MonsterScaling,
) -> Result<Monster> {
    let candidates = data
        .all_monster_ids(&|monster| monster.floor_range.contains(floor))
        .wrap_error_with_format(format_args!("failed to list monsters for floor {floor}"))?;
    let id = rand_util::sample_slice(prng, &candidates)
        .ok_or_else(|| general_error(format!("no monster can appear on floor {floor}")))?
        .clone();
    build_monster(&id, floor, data, scaling)
}

/// Builds a specific monster template as it would appear on the floor.
pub fn build_monster(
    id: &Id,
    floor: u32,
    data: &dyn DataStore,
    scaling: &MonsterScaling,
) -> Result<Monster> {
    let template = data
        .get_monster(id)?
        .wrap_not_found_error_with_format(format_args!("monster {id}"))?;

    let stats = StatTable {
        hp: scaling.hp.at(floor),
        atk: scaling.atk.at(floor),
        def: scaling.def.at(floor),
        spd: scaling.spd.at(floor),
    };
    debug!("generated {id} on floor {floor} with {stats:?}");
    Ok(Monster {
        id: id.clone(),
        floor,
        combatant: Combatant::new(template.name, &stats, template.moves),
        gold_reward: scaling.gold.at(floor),
        xp_reward: scaling.xp.at(floor),
    })
}
