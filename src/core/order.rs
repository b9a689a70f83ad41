//! The order record

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An order as stored and returned over HTTP.
///
/// Serialized in camelCase:
/// `{id, entryDate, description, name, isInvoiced, isDeleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub entry_date: DateTime<Utc>,
    pub description: String,
    pub name: String,
    pub is_invoiced: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Order {
    /// Build a fresh, non-deleted order with a new id.
    ///
    /// `entry_date` is provisional; stores stamp the real value on create.
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_invoiced: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_date: Utc::now(),
            description: description.into(),
            name: name.into(),
            is_invoiced,
            is_deleted: false,
        }
    }

    /// Override the entry date, keeping everything else
    pub fn with_entry_date(mut self, entry_date: DateTime<Utc>) -> Self {
        self.entry_date = entry_date;
        self
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn entry_date(&self) -> DateTime<Utc> {
        self.entry_date
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn soft_delete(&mut self) {
        self.is_deleted = true;
    }
}
