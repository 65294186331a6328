//! Game rules.

pub use fisher_data::MAX_FLOOR;

/// The highest level a party member can reach.
pub const MAX_LEVEL: u32 = 20;
/// The number of moves a party member can know at once.
pub const MAX_MOVES: usize = 3;
/// Experience needed per level; reaching level `n + 1` from `n` takes `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 25;
/// The number of members in a full party.
pub const MAX_PARTY_SIZE: usize = 3;
/// The number of items the inventory can hold.
pub const MAX_INVENTORY: usize = 10;

/// Stat growth applied on every level up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpGrowth {
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
}

impl Default for LevelUpGrowth {
    fn default() -> Self {
        Self {
            max_hp: 5,
            atk: 2,
            def: 1,
            spd: 1,
        }
    }
}

/// A linear formula, `base + floor * rate`, with the rate expressed as a fraction.
///
/// The result is rounded down and computed in integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearScale {
    pub base: u32,
    pub rate_numerator: u32,
    pub rate_denominator: u32,
}

impl LinearScale {
    pub const fn new(base: u32, rate_numerator: u32, rate_denominator: u32) -> Self {
        Self {
            base,
            rate_numerator,
            rate_denominator,
        }
    }

    pub fn at(&self, floor: u32) -> u32 {
        let scaled =
            (floor as u64 * self.rate_numerator as u64) / self.rate_denominator.max(1) as u64;
        self.base + scaled as u32
    }
}

/// Formulas for the stats and rewards of a monster by floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterScaling {
    pub hp: LinearScale,
    pub atk: LinearScale,
    pub def: LinearScale,
    pub spd: LinearScale,
    pub gold: LinearScale,
    pub xp: LinearScale,
}

impl Default for MonsterScaling {
    fn default() -> Self {
        Self {
            hp: LinearScale::new(15, 18, 10),
            atk: LinearScale::new(4, 35, 100),
            def: LinearScale::new(2, 22, 100),
            spd: LinearScale::new(3, 15, 100),
            gold: LinearScale::new(5, 8, 10),
            xp: LinearScale::new(10, 15, 10),
        }
    }
}
