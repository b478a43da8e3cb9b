pub mod slot;
pub mod store;

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use slot::FileSlotStorage;
use store::DepartmentStore;

/// Opens the file-backed department store described by `config`.
pub fn open_store(config: &Config) -> Result<DepartmentStore, AppError> {
    let storage = FileSlotStorage::new(&config.data_dir)?;
    DepartmentStore::open(Arc::new(storage), config.slot_name.clone())
}
