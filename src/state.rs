use crate::storage::Store;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            store: Store::new(data_path),
        }
    }
}
