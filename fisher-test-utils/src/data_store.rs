use std::sync::LazyLock;

use fisher_data::LocalDataStore;

static LOCAL_DATA_STORE: LazyLock<LocalDataStore> =
    LazyLock::new(|| LocalDataStore::bundled().expect("bundled catalog failed to load"));

/// The bundled catalog, loaded once per test binary.
pub fn static_local_data_store() -> &'static LocalDataStore {
    &LOCAL_DATA_STORE
}
