mod data_store;
mod local;
mod validate;

pub use data_store::DataStore;
pub use local::LocalDataStore;
pub use validate::{
    CatalogError,
    MAX_FLOOR,
    validate_catalog,
};
