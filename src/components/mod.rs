// Export components
pub mod google_calendar;

// Re-export the calendar list client
pub use google_calendar::{CalendarListSource, GoogleCalendarClient};
