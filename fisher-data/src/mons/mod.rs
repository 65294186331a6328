mod species_data;
mod stat;

pub use species_data::{
    LevelUpMove,
    SpeciesData,
};
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
