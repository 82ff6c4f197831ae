use crate::bundled::bundled_records;
use crate::error::{HenaError, Result};
use crate::model::Record;
use crate::store::DataStore;
use log::info;

/// Loads the collection, seeding it from the bundled set on first run.
///
/// A store that has never been written is seeded and persisted right away, so
/// seeding happens at most once per store. Unreadable data propagates as an
/// error instead of being replaced by the bundled set.
pub fn load_or_seed<S: DataStore>(store: &mut S) -> Result<Vec<Record>> {
    if let Some(records) = store.load_records()? {
        return Ok(records);
    }

    let seeded = bundled_records()?;
    info!("seeding store with {} bundled records", seeded.len());
    store.save_records(&seeded)?;
    Ok(seeded)
}

/// One past the highest id in use. Fails once `u32::MAX` is taken, since
/// wrapping would hand out the reserved id `0`.
pub fn next_id(records: &[Record]) -> Result<u32> {
    let max = records.iter().map(|r| r.id).max().unwrap_or(0);
    max.checked_add(1)
        .ok_or_else(|| HenaError::Store(format!("No ids left after {}", max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_and_persists_on_first_load() {
        let mut store = InMemoryStore::new();
        assert!(store.load_records().unwrap().is_none());

        let records = load_or_seed(&mut store).unwrap();
        assert_eq!(records, bundled_records().unwrap());
        assert_eq!(store.load_records().unwrap(), Some(records));
    }

    #[test]
    fn existing_empty_collection_is_not_reseeded() {
        let mut store = InMemoryStore::with_records(Vec::new());
        assert!(load_or_seed(&mut store).unwrap().is_empty());
    }

    #[test]
    fn next_id_follows_max() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        let records = vec![
            Record::new("A", "a", "a").with_id(3),
            Record::new("A", "b", "b").with_id(9),
            Record::new("A", "c", "c").with_id(4),
        ];
        assert_eq!(next_id(&records).unwrap(), 10);
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let records = vec![Record::new("A", "a", "a").with_id(u32::MAX)];
        assert!(matches!(next_id(&records), Err(HenaError::Store(_))));
    }
}
