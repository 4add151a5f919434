use super::models::{CalendarList, CalendarListEntry};

/// Marker Google puts in the id of every resource (room) calendar
pub const RESOURCE_CALENDAR_MARKER: &str = "@resource.calendar.google.com";

/// A calendar is a meeting room when its id contains the resource marker anywhere.
/// Case-sensitive, not anchored to the end of the id.
pub fn is_meeting_room(calendar_id: &str) -> bool {
    calendar_id.contains(RESOURCE_CALENDAR_MARKER)
}

/// Meeting room entries of the list, in list order
pub fn meeting_rooms(list: &CalendarList) -> Vec<&CalendarListEntry> {
    list.items
        .iter()
        .filter(|entry| is_meeting_room(&entry.id))
        .collect()
}
