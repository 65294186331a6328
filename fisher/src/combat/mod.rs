mod combatant;
mod resolver;
mod status;
mod turn_order;

pub use combatant::{
    Buff,
    Combatant,
    Poison,
};
pub use resolver::{
    ActionResult,
    apply_move,
    compute_damage,
    pick_monster_move,
};
pub use status::{
    StatusTick,
    resolve_end_of_turn,
};
pub use turn_order::{
    Side,
    determine_turn_order,
};
