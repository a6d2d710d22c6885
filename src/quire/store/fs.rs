use super::{decode_or_seed, DiaryStore};
use crate::error::{QuireError, Result};
use crate::model::Diary;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed key the collection is stored under.
pub const COLLECTION_FILE: &str = "diaries.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self) -> PathBuf {
        self.root.join(COLLECTION_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QuireError::Io)?;
        }
        Ok(())
    }
}

impl DiaryStore for FileStore {
    fn load(&self) -> Vec<Diary> {
        let path = self.collection_path();
        if !path.exists() {
            return decode_or_seed(None);
        }
        match fs::read_to_string(&path) {
            Ok(raw) => decode_or_seed(Some(&raw)),
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                decode_or_seed(None)
            }
        }
    }

    fn save(&mut self, diaries: &[Diary]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(diaries).map_err(QuireError::Serialization)?;

        // Write next to the target then rename, so a crash never leaves half a file.
        let path = self.collection_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(QuireError::Io)?;
        fs::rename(&tmp, &path).map_err(QuireError::Io)?;
        debug!("saved {} diaries to {}", diaries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_collection;

    #[test]
    fn missing_file_loads_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.load(), seed_collection());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        let diaries = vec![Diary::new("Saved")];

        store.save(&diaries).unwrap();

        assert_eq!(store.load(), diaries);
        assert!(!store.collection_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_loads_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.collection_path(), "[{\"id\": 7}]").unwrap();
        assert_eq!(store.load(), seed_collection());
    }
}
