use super::DataStore;
use crate::error::{HenaError, Result};
use crate::model::Record;
use log::debug;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const RECORDS_FILENAME: &str = "records.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn records_path(&self) -> PathBuf {
        self.root.join(RECORDS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HenaError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_records(&self) -> Result<Option<Vec<Record>>> {
        let data_file = self.records_path();
        if !data_file.exists() {
            debug!("no collection at {}", data_file.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&data_file).map_err(HenaError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(HenaError::Serialization)?;
        debug!("loaded {} records from {}", records.len(), data_file.display());
        Ok(Some(records))
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.records_path();
        let content = serde_json::to_string_pretty(records).map_err(HenaError::Serialization)?;

        // Atomic Write
        let tmp_file = self.root.join(format!(".records-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(HenaError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(HenaError::Io(e));
        }

        debug!("saved {} records to {}", records.len(), data_file.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Stoicism", "One", "First").with_id(1),
            Record::new("Eastern", "Two", "Second").with_id(2),
        ]
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_records().unwrap().is_none());
    }

    #[test]
    fn save_creates_directory_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("a").join("b"));

        let mut records = sample();
        records.reverse();
        store.save_records(&records).unwrap();

        let loaded = store.load_records().unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn empty_collection_is_not_missing() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_records(&[]).unwrap();
        assert_eq!(store.load_records().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn writes_leave_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_records(&sample()).unwrap();
        store.save_records(&sample()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        // A non-empty directory where the collection file belongs.
        fs::create_dir(store.records_path()).unwrap();
        fs::write(store.records_path().join("keep"), "x").unwrap();

        assert!(matches!(
            store.save_records(&sample()),
            Err(HenaError::Io(_))
        ));

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.records_path(), "[{\"id\": 1,").unwrap();

        assert!(matches!(
            store.load_records(),
            Err(HenaError::Serialization(_))
        ));
    }

    #[test]
    fn reads_external_format() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(
            store.records_path(),
            r#"[{"id": 7, "category": "Zen", "title": "Mu", "content": "Nothing"}]"#,
        )
        .unwrap();

        let loaded = store.load_records().unwrap().unwrap();
        assert_eq!(loaded, vec![Record::new("Zen", "Mu", "Nothing").with_id(7)]);
    }
}
