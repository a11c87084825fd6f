//! Where the catalog lives between runs.
//!
//! The whole collection is read once at startup and written back in full
//! after each mutation. Writes go to a sibling `.tmp` file that is then
//! renamed over the target, so a crash mid-write leaves the previous file
//! intact on most filesystems.

use super::error::AnimeStoreResult;
use super::models::AnimeCollection;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait AnimePersistence: Send + Sync {
    fn load(&self) -> AnimeStoreResult<AnimeCollection>;

    fn save(&self, collection: &AnimeCollection) -> AnimeStoreResult<()>;
}

pub struct JsonFilePersistence {
    file_path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(file_path: impl Into<PathBuf>) -> JsonFilePersistence {
        JsonFilePersistence {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let ext = self
            .file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        self.file_path.with_extension(format!("{ext}.tmp"))
    }
}

impl AnimePersistence for JsonFilePersistence {
    fn load(&self) -> AnimeStoreResult<AnimeCollection> {
        let mut file = File::open(&self.file_path)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, collection: &AnimeCollection) -> AnimeStoreResult<()> {
        let json_string = serde_json::to_string(collection)?;
        let tmp_path = self.tmp_path();

        let mut file = File::create(&tmp_path)?;
        file.write_all(json_string.as_bytes())?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

/// Keeps the "persisted" collection in memory, for tests that should not
/// touch the disk.
#[derive(Default)]
pub struct InMemoryPersistence {
    saved: Mutex<AnimeCollection>,
}

impl InMemoryPersistence {
    pub fn new(initial: AnimeCollection) -> InMemoryPersistence {
        InMemoryPersistence {
            saved: Mutex::new(initial),
        }
    }

    pub fn snapshot(&self) -> AnimeCollection {
        self.saved.lock().unwrap().clone()
    }
}

impl AnimePersistence for InMemoryPersistence {
    fn load(&self) -> AnimeStoreResult<AnimeCollection> {
        Ok(self.saved.lock().unwrap().clone())
    }

    fn save(&self, collection: &AnimeCollection) -> AnimeStoreResult<()> {
        *self.saved.lock().unwrap() = collection.clone();
        Ok(())
    }
}
