//! JSON export and combined-snapshot import

use std::io::Write;

use serde::Serialize;

use crate::error::{EventDeskError, EventDeskResult};
use crate::storage::Collections;

/// Serialize any report as JSON
pub fn write_json<T, W>(report: &T, writer: &mut W, pretty: bool) -> EventDeskResult<()>
where
    T: Serialize,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, report)
    } else {
        serde_json::to_writer(&mut *writer, report)
    }
    .map_err(|e| EventDeskError::Export(e.to_string()))?;

    writeln!(writer)
        .map_err(|e| EventDeskError::Export(e.to_string()))?;
    Ok(())
}

/// Parse a combined export `{events, budget_items, guests, vendors}`
pub fn read_collections_json(json_str: &str) -> EventDeskResult<Collections> {
    serde_json::from_str(json_str)
        .map_err(|e| EventDeskError::Validation(format!("Invalid import file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_compact_and_pretty() {
        let value = json!({"total_events": 2});

        let mut compact = Vec::new();
        write_json(&value, &mut compact, false).unwrap();
        assert_eq!(
            String::from_utf8(compact).unwrap(),
            "{\"total_events\":2}\n"
        );

        let mut pretty = Vec::new();
        write_json(&value, &mut pretty, true).unwrap();
        assert!(String::from_utf8(pretty).unwrap().contains("\n  \"total_events\": 2"));
    }

    #[test]
    fn test_read_collections() {
        let collections = read_collections_json(
            r#"{
                "events": [{
                    "id": 3,
                    "name": "Tech Summit",
                    "category": "conference",
                    "date": "2025-11-02",
                    "budget": "12000.00",
                    "expected_guests": 300,
                    "status": "active",
                    "created_at": "2025-05-01T10:00:00Z",
                    "updated_at": "2025-05-01T10:00:00Z"
                }],
                "guests": []
            }"#,
        )
        .unwrap();

        assert_eq!(collections.events.len(), 1);
        assert!(collections.events[0].is_active());
        assert!(collections.vendors.is_empty());
    }

    #[test]
    fn test_read_collections_rejects_garbage() {
        let err = read_collections_json("[1, 2, 3]").unwrap_err();
        assert!(err.is_validation());
    }
}
