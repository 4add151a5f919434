mod client;
pub mod models;
pub mod rooms;

pub use client::{CalendarListSource, GoogleCalendarClient};
pub use models::{CalendarList, CalendarListEntry};
pub use rooms::{is_meeting_room, meeting_rooms};
