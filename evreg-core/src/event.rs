//! The event record managed by the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EvRegError, EvRegResult};

/// Maximum length of an event title, in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum length of an event location, in characters.
pub const LOCATION_MAX_LEN: usize = 150;

/// A single event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,
    /// Event title (≤ 100 characters)
    pub title: String,
    /// Calendar date as opaque text — the store does not parse or
    /// canonicalize it
    pub date: String,
    /// Venue (≤ 150 characters)
    pub location: String,
    pub capacity: i64,
    pub category: String,
}

impl Event {
    /// Build an event with a freshly generated random id.
    pub fn new(
        title: String,
        date: String,
        location: String,
        capacity: i64,
        category: String,
    ) -> Self {
        Event {
            id: Uuid::new_v4(),
            title,
            date,
            location,
            capacity,
            category,
        }
    }

    /// Check the field-length constraints.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> EvRegResult<()> {
        if self.title.chars().count() > TITLE_MAX_LEN {
            return Err(EvRegError::Validation(format!(
                "title exceeds {} characters",
                TITLE_MAX_LEN
            )));
        }
        if self.location.chars().count() > LOCATION_MAX_LEN {
            return Err(EvRegError::Validation(format!(
                "location exceeds {} characters",
                LOCATION_MAX_LEN
            )));
        }
        Ok(())
    }
}
