//! Event CRUD and file utility endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use evreg_core::{EvRegError, Event, EventStore, integrity};

use crate::routes::{AppError, Envelope};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/", get(list_events).post(create_event))
        .route("/events/count/", get(count_events))
        .route("/events/hash/", get(hash_events_file))
        .route("/events/compress/", get(compress_events_file))
        .route(
            "/events/{id}/",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Request body for creating or updating an event
#[derive(Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub date: String,
    pub location: String,
    pub capacity: i64,
    pub category: String,
}

impl EventPayload {
    fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            location: self.location,
            capacity: self.capacity,
            category: self.category,
        }
    }
}

#[derive(Serialize)]
struct CountData {
    count: usize,
}

#[derive(Serialize)]
struct HashData {
    sha256: String,
}

/// GET /events/ - List all events
async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Event>>>, AppError> {
    let events = state.store().list_all()?;

    let message = if events.is_empty() {
        "No events found.".to_string()
    } else {
        format!("{} event(s) found.", events.len())
    };

    Ok(Json(Envelope::success(message, events)))
}

/// POST /events/ - Create a new event with a fresh id
async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<Envelope<Event>>), AppError> {
    let event = payload.into_event(Uuid::new_v4());
    event.validate()?;

    state.store().append(&event)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Event successfully created.", event)),
    ))
}

/// GET /events/:id/ - Fetch one event
async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Envelope<Event>>, AppError> {
    let event = state
        .store()
        .list_all()?
        .into_iter()
        .find(|event| event.id == event_id)
        .ok_or(AppError::NotFound)?;

    Ok(Json(Envelope::success("Event found.", event)))
}

/// PUT /events/:id/ - Replace all fields of an existing event
async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<Envelope<Event>>, AppError> {
    let updated = payload.into_event(event_id);
    updated.validate()?;

    let exists = state
        .store()
        .list_all()?
        .iter()
        .any(|event| event.id == event_id);
    if !exists {
        return Err(AppError::NotFound);
    }

    state.store().replace_by_id(event_id, &updated)?;

    Ok(Json(Envelope::success("Event successfully updated.", updated)))
}

/// DELETE /events/:id/ - Remove an event
async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, AppError> {
    state.store().remove_by_id(event_id)?;

    Ok(Json(Envelope::success_empty("Event successfully deleted.")))
}

/// GET /events/count/ - Number of stored records
async fn count_events(
    State(state): State<AppState>,
) -> Result<Json<Envelope<CountData>>, AppError> {
    let count = state.store().count()?;

    let message = if count > 0 {
        format!("{} event(s) found in the CSV file.", count)
    } else {
        "No events found in the CSV file.".to_string()
    };

    Ok(Json(Envelope::success(message, CountData { count })))
}

/// GET /events/hash/ - SHA-256 of the CSV file
async fn hash_events_file(
    State(state): State<AppState>,
) -> Result<Json<Envelope<HashData>>, AppError> {
    state.store().ensure_initialized()?;
    let sha256 = integrity::digest(state.store().path())?;

    Ok(Json(Envelope::success(
        "CSV hash calculated successfully.",
        HashData { sha256 },
    )))
}

/// GET /events/compress/ - Download a compressed copy of the CSV file
async fn compress_events_file(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    state.store().ensure_initialized()?;
    let archive_path = integrity::archive(state.store().path())?;

    let bytes = std::fs::read(&archive_path).map_err(EvRegError::from)?;
    let filename = archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("events.tar.gz")
        .to_string();

    let headers = [
        (header::CONTENT_TYPE, "application/gzip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, bytes))
}
