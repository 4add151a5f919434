use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the user's calendar list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarListEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

impl CalendarListEntry {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
        }
    }
}

/// The `calendarList` response body, in API order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CalendarListEntry>,
}

impl CalendarList {
    /// Decode a response body. A bare `null` body is an empty list.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }
}

// Treat an explicit JSON null like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_in_order() {
        let body = r#"{
            "kind": "calendar#calendarList",
            "items": [
                {"id": "user@example.com", "summary": "Me", "accessRole": "owner"},
                {"id": "room1@resource.calendar.google.com", "summary": "Room 1"}
            ]
        }"#;

        let list: CalendarList = serde_json::from_str(body).unwrap();
        assert_eq!(
            list.items,
            vec![
                CalendarListEntry::new("user@example.com", "Me"),
                CalendarListEntry::new("room1@resource.calendar.google.com", "Room 1"),
            ]
        );
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let list: CalendarList =
            serde_json::from_str(r#"{"items": [{"id": "a"}, {"summary": null}]}"#).unwrap();
        assert_eq!(list.items[0], CalendarListEntry::new("a", ""));
        assert_eq!(list.items[1], CalendarListEntry::new("", ""));

        let empty: CalendarList = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());

        let null_items: CalendarList = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(null_items.items.is_empty());
    }

    #[test]
    fn null_body_is_an_empty_list() {
        let list = CalendarList::from_json(b"null").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(CalendarList::from_json(br#"{"items": "nope"}"#).is_err());
        assert!(CalendarList::from_json(b"not json").is_err());
        assert!(CalendarList::from_json(b"").is_err());
    }
}
