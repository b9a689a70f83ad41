//! Entity trait defining identity and soft-delete state for stored records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for records kept by a store.
///
/// Every entity has:
/// - id: Unique identifier, assigned once and never changed
/// - entry_date: Server-assigned creation timestamp
/// - deleted flag: Soft deletion marker; deleted records stay in storage
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "orders")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn entry_date(&self) -> DateTime<Utc>;

    /// Check if the entity has been soft-deleted
    fn is_deleted(&self) -> bool;

    /// Mark the entity as deleted without removing it
    fn soft_delete(&mut self);

    /// Check if the entity should appear in listings
    fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEntity {
        id: Uuid,
        entry_date: DateTime<Utc>,
        deleted: bool,
    }

    impl Entity for TestEntity {
        fn resource_name() -> &'static str {
            "test_entities"
        }

        fn resource_name_singular() -> &'static str {
            "test_entity"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn entry_date(&self) -> DateTime<Utc> {
            self.entry_date
        }

        fn is_deleted(&self) -> bool {
            self.deleted
        }

        fn soft_delete(&mut self) {
            self.deleted = true;
        }
    }

    #[test]
    fn test_entity_soft_delete() {
        let mut entity = TestEntity {
            id: Uuid::new_v4(),
            entry_date: Utc::now(),
            deleted: false,
        };

        assert!(!entity.is_deleted());
        assert!(entity.is_active());

        entity.soft_delete();
        assert!(entity.is_deleted());
        assert!(!entity.is_active());
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(TestEntity::resource_name(), "test_entities");
        assert_eq!(TestEntity::resource_name_singular(), "test_entity");
    }
}
