use fisher_data::{
    Id,
    Stat,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Poison afflicting a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poison {
    pub damage: u32,
    pub turns_left: u32,
}

/// A timed stat bonus on a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buff {
    pub stat: Stat,
    pub amount: i32,
    pub turns_left: u32,
}

/// Any participant in a battle, either a party member or a monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
    pub moves: Vec<Id>,
    #[serde(default)]
    pub poisoned: Option<Poison>,
    #[serde(default)]
    pub buffs: Vec<Buff>,
}

impl Combatant {
    /// Creates a new combatant at full health with no status.
    pub fn new(name: String, stats: &StatTable, moves: Vec<Id>) -> Self {
        Self {
            name,
            hp: stats.hp,
            max_hp: stats.hp,
            atk: stats.atk,
            def: stats.def,
            spd: stats.spd,
            moves,
            poisoned: None,
            buffs: Vec::new(),
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_fainted()
    }

    pub fn knows_move(&self, move_id: &Id) -> bool {
        self.moves.contains(move_id)
    }

    /// The stat without any buffs. HP refers to maximum HP.
    pub fn base_stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.max_hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spd => self.spd,
        }
    }

    /// The stat with all active buffs for it added, never below zero.
    pub fn effective_stat(&self, stat: Stat) -> u32 {
        let bonus = self
            .buffs
            .iter()
            .filter(|buff| buff.stat == stat)
            .map(|buff| buff.amount as i64)
            .sum::<i64>();
        (self.base_stat(stat) as i64 + bonus).max(0) as u32
    }

    /// Subtracts HP, flooring at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restores HP up to maximum HP. Returns the HP actually restored.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += restored;
        restored
    }

    /// Clears poison and all buffs.
    pub fn clear_status(&mut self) {
        self.poisoned = None;
        self.buffs.clear();
    }
}
