use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A single stored thought.
///
/// `id == 0` marks a record that has not been inserted yet; the store assigns
/// the real id on `add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub content: String,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            category: normalize_category(category.into()),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == 0
    }
}

fn normalize_category(category: String) -> String {
    if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unassigned() {
        let record = Record::new("Stoicism", "Title", "Body");
        assert!(record.is_unassigned());
        assert_eq!(record.category, "Stoicism");
    }

    #[test]
    fn blank_category_falls_back() {
        let record = Record::new("   ", "Title", "Body");
        assert_eq!(record.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn serializes_with_content_field() {
        let record = Record::new("A", "T", "C").with_id(4);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["content"], "C");
    }
}
