use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_or_seed;

/// Removes every record carrying `id`.
pub fn run<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let records = load_or_seed(store)?;
    let (removed, kept): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| r.id == id);
    store.save_records(&kept)?;

    let mut result = CmdResult::default().with_records(kept);
    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!("No thought with id {}", id)));
    } else {
        for record in &removed {
            result.add_message(CmdMessage::success(format!(
                "Thought deleted (#{}): {}",
                record.id, record.title
            )));
        }
    }
    Ok(result.with_affected_records(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::model::Record;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_record() {
        let mut fixture = StoreFixture::new().with_records(3, "A");
        run(&mut fixture.store, 2).unwrap();

        let listed = list::run(&mut fixture.store).unwrap().records;
        let ids: Vec<u32> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn removes_all_duplicates() {
        let mut fixture = StoreFixture::new()
            .with_record_id(4, "A", "a", "a")
            .with_record_id(1, "A", "b", "b")
            .with_record_id(4, "A", "c", "c");
        let result = run(&mut fixture.store, 4).unwrap();

        assert_eq!(result.affected_records.len(), 2);
        assert!(result.records.iter().all(|r| r.id != 4));
    }

    #[test]
    fn missing_id_leaves_collection_unchanged() {
        let mut fixture = StoreFixture::new().with_records(2, "A");
        let before = fixture.store.load_records().unwrap().unwrap();
        let result = run(&mut fixture.store, 42).unwrap();

        assert_eq!(result.records, before);
        assert!(result.affected_records.is_empty());
    }

    #[test]
    fn deleting_max_id_frees_it_for_reuse() {
        let mut fixture = StoreFixture::new().with_records(3, "A");
        run(&mut fixture.store, 3).unwrap();
        let added = add::run(&mut fixture.store, Record::new("A", "New", "x")).unwrap();
        assert_eq!(added.affected_records[0].id, 3);
    }
}
