use serde::{
    Deserialize,
    Serialize,
};

use crate::Id;

/// An inclusive range of dungeon floors.
///
/// Serialized as a two-element array, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct FloorRange {
    pub min: u32,
    pub max: u32,
}

impl FloorRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether the floor lies inside the range.
    pub fn contains(&self, floor: u32) -> bool {
        self.min <= floor && floor <= self.max
    }
}

impl From<(u32, u32)> for FloorRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

impl From<FloorRange> for (u32, u32) {
    fn from(value: FloorRange) -> Self {
        (value.min, value.max)
    }
}

/// A template for monsters encountered in the dungeon.
///
/// Stats are not part of the template; they are derived from the floor the monster appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterData {
    /// Name of the monster.
    pub name: String,
    /// Display color, as a packed RGB value.
    #[serde(default)]
    pub color: u32,
    /// Floors the monster can appear on.
    pub floor_range: FloorRange,
    /// Moves the monster picks from.
    pub moves: Vec<Id>,
}
