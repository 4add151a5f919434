use crate::components::google_calendar::{meeting_rooms, CalendarList, CalendarListEntry};

pub const CALENDAR_LIST_HEADER: &str = "📅 Google Calendar List:";
pub const MEETING_ROOMS_HEADER: &str = "🏢 Meeting Rooms:";
pub const NO_MEETING_ROOMS: &str = "No meeting rooms found.";

/// Single report line for an entry
pub fn format_entry(entry: &CalendarListEntry) -> String {
    format!("- ID: {}, Name: {}", entry.id, entry.summary)
}

/// Render the full list followed by the meeting room section
pub fn render(list: &CalendarList) -> String {
    let mut out = format!("{}\n", CALENDAR_LIST_HEADER);
    for entry in &list.items {
        out.push_str(&format!("{}\n", format_entry(entry)));
    }

    out.push_str(&format!("\n{}\n", MEETING_ROOMS_HEADER));
    let rooms = meeting_rooms(list);
    if rooms.is_empty() {
        out.push_str(&format!("{}\n", NO_MEETING_ROOMS));
    }
    for entry in rooms {
        out.push_str(&format!("{}\n", format_entry(entry)));
    }

    out
}
