use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid choice: {0}")]
pub struct InvalidChoiceError(String);

/// A choice to use a move known by the active party member.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveChoice {
    /// The ID of the move to use.
    pub move_id: String,
}

impl Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.move_id)
    }
}

impl FromStr for MoveChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::msg("missing move"));
        }
        Ok(Self {
            move_id: s.to_owned(),
        })
    }
}

/// A choice to use an item from the inventory on a party member.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemChoice {
    /// The inventory slot of the item.
    pub slot: usize,
    /// The party index of the target.
    pub target: usize,
}

impl Display for ItemChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.slot, self.target)
    }
}

impl FromStr for ItemChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slot, target) = s
            .split(',')
            .map(|str| str.trim())
            .collect_tuple()
            .context("item choice requires a slot and a target")?;
        Ok(Self {
            slot: slot.parse().context("invalid item slot")?,
            target: target.parse().context("invalid item target")?,
        })
    }
}

/// A choice to switch a party member in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchChoice {
    /// The party index of the member to switch in.
    pub member: usize,
}

impl Display for SwitchChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.member)
    }
}

impl FromStr for SwitchChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            member: s.parse().context("invalid switch target")?,
        })
    }
}

/// A choice to learn a pending move.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LearnMoveChoice {
    /// The index of the move slot to forget.
    ///
    /// If not specified, the pending move is skipped.
    pub forget_move_slot: Option<usize>,
}

impl Display for LearnMoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.forget_move_slot {
            Some(slot) => write!(f, "{slot}"),
            None => write!(f, "skip"),
        }
    }
}

impl FromStr for LearnMoveChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let forget_move_slot = match s {
            "" | "skip" => None,
            _ => Some(s.parse().context("invalid move slot")?),
        };
        Ok(Self { forget_move_slot })
    }
}

/// A choice, which controls how the player responds to a request in a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Use a move.
    Move(MoveChoice),
    /// Use an item.
    Item(ItemChoice),
    /// Switch a party member in.
    Switch(SwitchChoice),
    /// Learn a move.
    LearnMove(LearnMoveChoice),
}

impl Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(choice) => write!(f, "move {choice}"),
            Self::Item(choice) => write!(f, "item {choice}"),
            Self::Switch(choice) => write!(f, "switch {choice}"),
            Self::LearnMove(choice) => write!(f, "learnmove {choice}"),
        }
    }
}

impl FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (choice, data) = s.trim().split_once(' ').unwrap_or((s.trim(), ""));
        let data = data.trim();
        match choice {
            "move" => Ok(Self::Move(MoveChoice::from_str(data)?)),
            "item" => Ok(Self::Item(ItemChoice::from_str(data)?)),
            "switch" => Ok(Self::Switch(SwitchChoice::from_str(data)?)),
            "learnmove" => Ok(Self::LearnMove(LearnMoveChoice::from_str(data)?)),
            _ => Err(Error::new(InvalidChoiceError(choice.to_owned()))),
        }
    }
}

/// Serializes multiple [`Choice`]s to a string.
pub fn choices_to_string<I>(choices: I) -> String
where
    I: IntoIterator<Item = Choice>,
{
    choices
        .into_iter()
        .map(|choice| choice.to_string())
        .join(";")
}

/// Deserializes multiple [`Choice`]s from a string.
pub fn choices_from_string<S>(choices: S) -> Result<Vec<Choice>>
where
    S: AsRef<str>,
{
    choices
        .as_ref()
        .split(';')
        .map(|str| str.trim())
        .filter(|str| !str.is_empty())
        .map(Choice::from_str)
        .collect()
}
