use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which decides how it is resolved in battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Deals damage to the opponent.
    #[string = "damage"]
    #[alias = "attack"]
    Damage,
    /// Restores the user's HP.
    #[string = "heal"]
    Heal,
    /// Temporarily raises one of the user's stats.
    #[string = "buff"]
    Buff,
}
