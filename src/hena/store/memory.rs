use super::DataStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Option<Vec<Record>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a collection, so no seeding happens.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
        }
    }
}

impl DataStore for InMemoryStore {
    fn load_records(&self) -> Result<Option<Vec<Record>>> {
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.records = Some(records.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u32,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Starts from an empty, already-initialised collection.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_records(Vec::new()),
                next_id: 1,
            }
        }

        pub fn with_records(mut self, count: usize, category: &str) -> Self {
            for i in 0..count {
                let title = format!("Test Thought {}", i + 1);
                let content = format!("Content for thought {}", i + 1);
                self = self.with_record(category, &title, &content);
            }
            self
        }

        pub fn with_record(self, category: &str, title: &str, content: &str) -> Self {
            let id = self.next_id;
            self.with_record_id(id, category, title, content)
        }

        pub fn with_record_id(
            mut self,
            id: u32,
            category: &str,
            title: &str,
            content: &str,
        ) -> Self {
            let mut records = self.store.load_records().unwrap().unwrap_or_default();
            records.push(Record::new(category, title, content).with_id(id));
            self.store.save_records(&records).unwrap();
            self.next_id = self.next_id.max(id.saturating_add(1));
            self
        }
    }
}
