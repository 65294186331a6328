use anyhow::Result;
use fisher_data::{
    DataStore,
    Id,
};
use log::debug;

use crate::{
    config::{
        MAX_INVENTORY,
        MAX_PARTY_SIZE,
    },
    error::{
        WrapOptionError,
        invalid_input_error,
    },
    game::GameState,
    party::PartyMember,
};

/// Buys an item and adds it to the inventory.
pub fn buy_item(state: &mut GameState, data: &dyn DataStore, item_id: &Id) -> Result<()> {
    let item = data
        .get_item(item_id)?
        .wrap_invalid_input(format!("unknown item {item_id}"))?;
    if state.gold < item.price {
        return Err(invalid_input_error(format!(
            "{} costs {} gold, but only {} is available",
            item.name, item.price, state.gold
        )));
    }
    if state.inventory.len() >= MAX_INVENTORY {
        return Err(invalid_input_error("inventory is full"));
    }
    state.gold -= item.price;
    state.inventory.push(item_id.clone());
    debug!("bought {item_id} for {}", item.price);
    Ok(())
}

/// Buys a fish and adds it to the party. Returns the party index of the new member.
pub fn buy_fish(state: &mut GameState, data: &dyn DataStore, species_id: &Id) -> Result<usize> {
    let species = data
        .get_species(species_id)?
        .wrap_invalid_input(format!("unknown species {species_id}"))?;
    if state.gold < species.shop_price {
        return Err(invalid_input_error(format!(
            "{} costs {} gold, but only {} is available",
            species.name, species.shop_price, state.gold
        )));
    }
    if state.party.len() >= MAX_PARTY_SIZE {
        return Err(invalid_input_error("party is full"));
    }
    if state
        .party
        .iter()
        .any(|member| &member.species_id == species_id)
    {
        return Err(invalid_input_error(format!(
            "party already has a {}",
            species.name
        )));
    }
    state.gold -= species.shop_price;
    state
        .party
        .push(PartyMember::new(species_id.clone(), &species));
    debug!("bought {species_id} for {}", species.shop_price);
    Ok(state.party.len() - 1)
}

/// Species for sale: purchasable species that are not already in the party.
pub fn shop_fish(state: &GameState, data: &dyn DataStore) -> Result<Vec<Id>> {
    let owned = state
        .party
        .iter()
        .map(|member| &member.species_id)
        .collect::<Vec<_>>();
    Ok(data
        .all_species_ids(&|species| species.purchasable())?
        .into_iter()
        .filter(|id| !owned.contains(&id))
        .collect())
}
