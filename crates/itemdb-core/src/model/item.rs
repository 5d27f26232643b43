use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned primary key of an item
pub type ItemId = i64;

/// Display format for `created_at`, matching the store clock's text layout
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Item - the single record type managed by the store
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards. Only `name` and `description` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, never reused after deletion
    pub id: ItemId,

    /// Required name (may be empty, never null)
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Store-side insertion time
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Description text for display, empty when absent
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Description: {}, Created: {}",
            self.id,
            self.name,
            self.description_or_empty(),
            self.created_at.format(CREATED_AT_FORMAT)
        )
    }
}
