//! In-memory event store.

use std::sync::RwLock;

use uuid::Uuid;

use super::EventStore;
use crate::error::{EvRegError, EvRegResult};
use crate::event::Event;

/// Event store backed by a plain in-process list.
///
/// Contents are unbounded and lost on restart. Useful for tests and for
/// running the API without a data file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EvRegResult<std::sync::RwLockReadGuard<'_, Vec<Event>>> {
        self.events
            .read()
            .map_err(|_| EvRegError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> EvRegResult<std::sync::RwLockWriteGuard<'_, Vec<Event>>> {
        self.events
            .write()
            .map_err(|_| EvRegError::Internal("store lock poisoned".to_string()))
    }
}

impl EventStore for MemoryStore {
    fn ensure_initialized(&self) -> EvRegResult<()> {
        Ok(())
    }

    fn list_all(&self) -> EvRegResult<Vec<Event>> {
        Ok(self.read()?.clone())
    }

    fn append(&self, event: &Event) -> EvRegResult<()> {
        self.write()?.push(event.clone());
        Ok(())
    }

    fn replace_by_id(&self, id: Uuid, new_event: &Event) -> EvRegResult<()> {
        let mut events = self.write()?;
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EvRegError::NotFound(id))?;
        *slot = new_event.clone();
        Ok(())
    }

    fn remove_by_id(&self, id: Uuid) -> EvRegResult<()> {
        let mut events = self.write()?;
        let position = events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EvRegError::NotFound(id))?;
        events.remove(position);
        Ok(())
    }

    fn count(&self) -> EvRegResult<usize> {
        Ok(self.read()?.len())
    }
}
