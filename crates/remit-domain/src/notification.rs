//! Derived reminder events. Regenerated wholesale on every evaluation
//! cycle; read markers from the previous cycle are merged back by the
//! caller.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Invoice,
    Expense,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Invoice => "invoice",
            EntityKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A deadline reminder tied to a source document. The id is derived from
/// the source, so regenerating the same reminder yields the same id.
pub struct Notification {
    pub id: String,
    pub message: String,
    pub date: NaiveDate,
    pub entity: EntityKind,
    pub entity_id: Uuid,
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    pub fn reminder(
        entity: EntityKind,
        entity_id: Uuid,
        message: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: format!("{entity}-due-{entity_id}"),
            message: message.into(),
            date,
            entity,
            entity_id,
            is_read: false,
        }
    }
}
