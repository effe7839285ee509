//! localStorage への最新結果保存

use doc_extract_common::{Error, ExtractionResult, Result, ResultStore, STORAGE_KEY};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

/// `localStorage["extractedData"]` を使う [`ResultStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl ResultStore for BrowserStore {
    fn load(&self) -> Result<Option<ExtractionResult>> {
        match LocalStorage::get::<ExtractionResult>(STORAGE_KEY) {
            Ok(result) => Ok(Some(result)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(Error::Json(e)),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }

    fn save(&self, result: &ExtractionResult) -> Result<()> {
        LocalStorage::set(STORAGE_KEY, result).map_err(|e| Error::Storage(e.to_string()))
    }
}
