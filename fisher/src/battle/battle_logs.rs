use std::fmt;

use crate::combat::{
    Combatant,
    Side,
};

/// Identifies a combatant in the event log, e.g. `mon:Guppy,player`.
pub struct MonLog<'c> {
    name: &'c str,
    side: Side,
}

impl<'c> MonLog<'c> {
    pub fn new(combatant: &'c Combatant, side: Side) -> Self {
        Self {
            name: &combatant.name,
            side,
        }
    }
}

impl fmt::Display for MonLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mon:{},{}", self.name, self.side)
    }
}

/// The health of a combatant in the event log, e.g. `health:11/16`.
pub struct HealthLog(pub u32, pub u32);

impl HealthLog {
    pub fn of(combatant: &Combatant) -> Self {
        Self(combatant.hp, combatant.max_hp)
    }
}

impl fmt::Display for HealthLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "health:{}/{}", self.0, self.1)
    }
}
