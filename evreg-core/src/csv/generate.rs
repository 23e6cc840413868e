//! CSV writing: `Event` → row.

use crate::event::Event;

/// Render an event as one CSV record (no trailing newline).
///
/// Field order matches the header: id, title, date, location, capacity,
/// category. The id is rendered in its canonical hyphenated form.
pub fn format_row(event: &Event) -> String {
    [
        event.id.to_string(),
        event.title.clone(),
        event.date.clone(),
        event.location.clone(),
        event.capacity.to_string(),
        event.category.clone(),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field when it contains a delimiter, quote or newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_format_row_plain() {
        let id = Uuid::new_v4();
        let event = Event {
            id,
            title: "Workshop".to_string(),
            date: "2024-05-01".to_string(),
            location: "Room A".to_string(),
            capacity: 30,
            category: "Tech".to_string(),
        };
        assert_eq!(
            format_row(&event),
            format!("{},Workshop,2024-05-01,Room A,30,Tech", id)
        );
    }

    #[test]
    fn test_escape_field_quotes_when_needed() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }
}
