use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::DatasetError;

/// Suffix a stored entry must carry to count as a dataset.
pub const DATASET_SUFFIX: &str = ".csv";

// ---------------------------------------------------------------------------
// DatasetStore – persistence capability injected into every component
// ---------------------------------------------------------------------------

/// Named CSV blobs. Implementations are shared across request workers.
pub trait DatasetStore: Send + Sync {
    /// Create or replace `name` with `bytes`. Readers see either the old or
    /// the new content, never a mix.
    fn put(&self, name: &str, bytes: &[u8]) -> Result<(), DatasetError>;

    /// Names ending in [`DATASET_SUFFIX`], each exactly once, in no
    /// particular order.
    fn list(&self) -> Result<Vec<String>, DatasetError>;

    /// Stream the full content of `name`.
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, DatasetError>;
}

/// Reject names that would escape the store directory or that cannot be a
/// plain file name.
pub fn check_name(name: &str) -> Result<(), DatasetError> {
    if name.is_empty() {
        return Err(DatasetError::validation("dataset name is empty"));
    }
    if name == "." || name == ".." {
        return Err(DatasetError::validation(format!(
            "'{name}' is not a valid dataset name"
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(DatasetError::validation(format!(
            "dataset name '{name}' must not contain path separators"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// FsStore – flat directory of files
// ---------------------------------------------------------------------------

/// One file per dataset, named exactly like the dataset.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Use `root` as the store, creating it if absent.
    pub fn open_dir(root: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FsStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DatasetStore for FsStore {
    fn put(&self, name: &str, bytes: &[u8]) -> Result<(), DatasetError> {
        check_name(name)?;
        fs::create_dir_all(&self.root)?;

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = tempfile::Builder::new()
            .prefix(".upload-")
            .suffix(".part")
            .tempfile_in(&self.root)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;
        staged
            .persist(self.root.join(name))
            .map_err(|e| DatasetError::Io(e.error))?;

        log::debug!("stored {name} ({} bytes) in {}", bytes.len(), self.root.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, DatasetError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            // Non UTF-8 names cannot be addressed through the API anyway.
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(DATASET_SUFFIX) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, DatasetError> {
        check_name(name)?;
        let path = self.root.join(name);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DatasetError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        if file.metadata()?.is_dir() {
            return Err(DatasetError::NotFound(name.to_string()));
        }
        Ok(Box::new(file))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore – in-process store for component tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::collections::BTreeMap;
    use std::io::{Cursor, Read};
    use std::sync::RwLock;

    use super::{check_name, DatasetStore, DATASET_SUFFIX};
    use crate::error::DatasetError;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        blobs: RwLock<BTreeMap<String, Vec<u8>>>,
    }

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = MemoryStore::default();
            for (name, body) in entries {
                store
                    .blobs
                    .write()
                    .unwrap()
                    .insert(name.to_string(), body.as_bytes().to_vec());
            }
            store
        }

        pub fn get(&self, name: &str) -> Option<Vec<u8>> {
            self.blobs.read().unwrap().get(name).cloned()
        }
    }

    impl DatasetStore for MemoryStore {
        fn put(&self, name: &str, bytes: &[u8]) -> Result<(), DatasetError> {
            check_name(name)?;
            self.blobs
                .write()
                .unwrap()
                .insert(name.to_string(), bytes.to_vec());
            Ok(())
        }

        fn list(&self) -> Result<Vec<String>, DatasetError> {
            Ok(self
                .blobs
                .read()
                .unwrap()
                .keys()
                .filter(|name| name.ends_with(DATASET_SUFFIX))
                .cloned()
                .collect())
        }

        fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, DatasetError> {
            check_name(name)?;
            self.get(name)
                .map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read + Send>)
                .ok_or_else(|| DatasetError::NotFound(name.to_string()))
        }
    }
}
