//! CSV reading: record splitting, field splitting, row → `Event`.

use uuid::Uuid;

use crate::event::Event;

/// Split file content into records.
///
/// A record ends at a newline that is not inside a quoted field, so quoted
/// fields may span lines. A single trailing `\r` is stripped from each
/// record to tolerate CRLF files.
pub fn split_records(content: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in content.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                records.push(strip_cr(&content[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < content.len() {
        records.push(strip_cr(&content[start..]));
    }

    records
}

fn strip_cr(record: &str) -> &str {
    record.strip_suffix('\r').unwrap_or(record)
}

/// Split one record into its fields, honoring double-quote escaping.
///
/// Returns an error for an unterminated quoted field.
pub fn split_row(record: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    // A doubled quote is a literal quote, a lone one closes
                    // the field
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        current.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => current.push(c),
            }
        } else {
            match c {
                '"' if current.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    fields.push(current);
    Ok(fields)
}

/// Parse one data record into an `Event`.
///
/// The error is a human-readable reason naming the offending field, used by
/// the store's skip-and-log policy.
pub fn parse_event(record: &str) -> Result<Event, String> {
    let fields = split_row(record)?;

    let fields: [String; 6] = match <[String; 6]>::try_from(fields) {
        Ok(fields) => fields,
        Err(fields) => return Err(format!("expected 6 fields, got {}", fields.len())),
    };
    let [id, title, date, location, capacity, category] = fields;

    let id = Uuid::parse_str(&id).map_err(|_| format!("invalid id '{}'", id))?;
    let capacity = capacity
        .parse()
        .map_err(|_| format!("invalid capacity '{}'", capacity))?;

    Ok(Event {
        id,
        title,
        date,
        location,
        capacity,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::format_row;

    #[test]
    fn test_split_row_plain() {
        assert_eq!(
            split_row("a,b,c").unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_row_quoted_comma_and_quote() {
        assert_eq!(
            split_row(r#""Dinner, party","She said ""hi""",x"#).unwrap(),
            vec![
                "Dinner, party".to_string(),
                "She said \"hi\"".to_string(),
                "x".to_string()
            ]
        );
    }

    #[test]
    fn test_split_row_empty_fields() {
        assert_eq!(
            split_row(",,").unwrap(),
            vec![String::new(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_split_row_unterminated_quote() {
        assert!(split_row("\"abc").is_err());
    }

    #[test]
    fn test_split_records_quoted_newline() {
        let content = "id,title\n1,\"line one\nline two\"\n2,plain\n";
        let records = split_records(content);
        assert_eq!(
            records,
            vec!["id,title", "1,\"line one\nline two\"", "2,plain"]
        );
    }

    #[test]
    fn test_split_records_crlf() {
        let records = split_records("a,b\r\nc,d\r\n");
        assert_eq!(records, vec!["a,b", "c,d"]);
    }

    #[test]
    fn test_parse_event_roundtrip() {
        let event = Event::new(
            "Dinner, with \"friends\"".to_string(),
            "01-05-2024".to_string(),
            "Main Hall\nBuilding B".to_string(),
            12,
            "Social".to_string(),
        );
        let parsed = parse_event(&format_row(&event)).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_parse_event_wrong_field_count() {
        let err = parse_event("a,b,c").unwrap_err();
        assert!(err.contains("expected 6 fields"), "got: {}", err);
    }

    #[test]
    fn test_parse_event_bad_id() {
        let err = parse_event("not-a-uuid,t,d,l,10,c").unwrap_err();
        assert!(err.contains("invalid id"), "got: {}", err);
    }

    #[test]
    fn test_parse_event_bad_capacity() {
        let row = format!("{},t,d,l,many,c", uuid::Uuid::new_v4());
        let err = parse_event(&row).unwrap_err();
        assert!(err.contains("invalid capacity"), "got: {}", err);
    }
}
