use crate::error::DatasetError;

use super::store::DatasetStore;

/// Names of every stored dataset, in whatever order the store yields them.
pub fn list_datasets(store: &dyn DatasetStore) -> Result<Vec<String>, DatasetError> {
    store.list()
}
