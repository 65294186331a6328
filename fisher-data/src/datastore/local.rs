use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    Id,
    ItemData,
    MonsterData,
    MoveData,
    SpeciesData,
    validate_catalog,
};

/// An implementation of [`DataStore`] that holds all catalog tables in memory.
///
/// Tables are read once, either from a directory on disk or from the catalog bundled with this
/// crate, and validated before the store is handed out.
pub struct LocalDataStore {
    pub species: HashMap<Id, SpeciesData>,
    pub moves: HashMap<Id, MoveData>,
    pub monsters: HashMap<Id, MonsterData>,
    pub items: HashMap<Id, ItemData>,
}

impl LocalDataStore {
    /// Species file name.
    pub const SPECIES_FILE: &str = "species.json";
    /// Moves file name.
    pub const MOVES_FILE: &str = "moves.json";
    /// Monsters file name.
    pub const MONSTERS_FILE: &str = "monsters.json";
    /// Items file name.
    pub const ITEMS_FILE: &str = "items.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or contains an invalid
    /// catalog.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }
        Self::from_tables(
            read_table(root.join(Self::SPECIES_FILE), "species")?,
            read_table(root.join(Self::MOVES_FILE), "moves")?,
            read_table(root.join(Self::MONSTERS_FILE), "monsters")?,
            read_table(root.join(Self::ITEMS_FILE), "items")?,
        )
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] from the catalog compiled into this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_tables(
            parse_table(include_str!("../../data/species.json"), "species")?,
            parse_table(include_str!("../../data/moves.json"), "moves")?,
            parse_table(include_str!("../../data/monsters.json"), "monsters")?,
            parse_table(include_str!("../../data/items.json"), "items")?,
        )
    }

    /// Creates a new instance of [`LocalDataStore`] from tables that are already in memory.
    pub fn from_tables(
        species: HashMap<Id, SpeciesData>,
        moves: HashMap<Id, MoveData>,
        monsters: HashMap<Id, MonsterData>,
        items: HashMap<Id, ItemData>,
    ) -> Result<Self> {
        validate_catalog(&species, &moves, &monsters).context("invalid catalog")?;
        Ok(Self {
            species,
            moves,
            monsters,
            items,
        })
    }
}

fn read_table<T: DeserializeOwned>(path: PathBuf, name: &str) -> Result<HashMap<Id, T>> {
    let path_name = path.to_string_lossy().to_string();
    let table: HashMap<String, T> = serde_json::from_reader(
        File::open(&path).context(format!("{path_name} could not be opened"))?,
    )
    .context(format!("failed to read {name} data from {path_name}"))?;
    Ok(into_id_table(table))
}

fn parse_table<T: DeserializeOwned>(data: &str, name: &str) -> Result<HashMap<Id, T>> {
    let table: HashMap<String, T> =
        serde_json::from_str(data).context(format!("failed to parse bundled {name} data"))?;
    Ok(into_id_table(table))
}

fn into_id_table<T>(table: HashMap<String, T>) -> HashMap<Id, T> {
    table
        .into_iter()
        .map(|(key, value)| (Id::from(key), value))
        .collect()
}

fn sorted_ids<T>(table: &HashMap<Id, T>, filter: &dyn Fn(&T) -> bool) -> Vec<Id> {
    let mut ids = table
        .iter()
        .filter(|(_, data)| filter(data))
        .map(|(id, _)| id.clone())
        .collect::<Vec<_>>();
    ids.sort();
    ids
}

impl DataStore for LocalDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>> {
        Ok(sorted_ids(&self.species, filter))
    }

    fn all_monster_ids(&self, filter: &dyn Fn(&MonsterData) -> bool) -> Result<Vec<Id>> {
        Ok(sorted_ids(&self.monsters, filter))
    }

    fn get_item(&self, id: &Id) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }

    fn get_monster(&self, id: &Id) -> Result<Option<MonsterData>> {
        Ok(self.monsters.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}
