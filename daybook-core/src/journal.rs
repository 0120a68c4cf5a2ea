use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One saved journal entry. Entries accumulate in an append-only sequence;
/// there is no edit or delete once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    pub date: NaiveDateTime,
}
