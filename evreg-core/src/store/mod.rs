//! Event persistence.
//!
//! Persistence is pluggable behind [`EventStore`]: the server runs on
//! [`CsvStore`], while [`MemoryStore`] keeps the same contract without
//! touching disk (contents are lost on restart).

mod csv;
mod memory;

pub use csv::CsvStore;
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::EvRegResult;
use crate::event::Event;

/// The storage contract: list, append, replace, remove, count.
///
/// Callers are responsible for generating fresh unique ids before calling
/// [`EventStore::append`]; the store itself never checks for collisions.
pub trait EventStore {
    /// Prepare the backing storage. Idempotent.
    fn ensure_initialized(&self) -> EvRegResult<()>;

    /// Return every stored event.
    fn list_all(&self) -> EvRegResult<Vec<Event>>;

    /// Add one event at the end.
    fn append(&self, event: &Event) -> EvRegResult<()>;

    /// Replace the event with the given id. Fails with `NotFound` (leaving
    /// the stored set unchanged) when no event matches.
    fn replace_by_id(&self, id: Uuid, new_event: &Event) -> EvRegResult<()>;

    /// Remove the event with the given id. Fails with `NotFound` (leaving
    /// the stored set unchanged) when no event matches.
    fn remove_by_id(&self, id: Uuid) -> EvRegResult<()>;

    /// Number of stored records.
    fn count(&self) -> EvRegResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvRegError;

    fn sample(title: &str) -> Event {
        Event::new(
            title.to_string(),
            "2024-05-01".to_string(),
            "Room A".to_string(),
            30,
            "Tech".to_string(),
        )
    }

    /// The behavioral contract every backend must satisfy.
    fn exercise_crud(store: &dyn EventStore) {
        store.ensure_initialized().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.list_all().unwrap().is_empty());

        let workshop = sample("Workshop");
        store.append(&workshop).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.list_all().unwrap(), vec![workshop.clone()]);

        let second = sample("Second");
        store.append(&second).unwrap();
        assert_eq!(store.count().unwrap(), 2);

        // Update the first event; the second must be untouched
        let mut updated = workshop.clone();
        updated.title = "Updated".to_string();
        store.replace_by_id(workshop.id, &updated).unwrap();
        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Updated");
        assert_eq!(listed[0].id, workshop.id);
        assert_eq!(listed[1], second);

        // Missing ids fail without changing the stored set
        let ghost = sample("Ghost");
        assert!(matches!(
            store.replace_by_id(ghost.id, &ghost),
            Err(EvRegError::NotFound(_))
        ));
        assert!(matches!(
            store.remove_by_id(ghost.id),
            Err(EvRegError::NotFound(_))
        ));
        assert_eq!(store.list_all().unwrap(), listed);
        assert_eq!(store.count().unwrap(), 2);

        // Delete removes exactly the matching record
        store.remove_by_id(workshop.id).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.list_all().unwrap(), vec![second]);
    }

    #[test]
    fn test_csv_store_contract() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("events.csv"));
        exercise_crud(&store);
    }

    #[test]
    fn test_memory_store_contract() {
        exercise_crud(&MemoryStore::new());
    }
}
