pub mod components;
pub mod config;
pub mod error;
pub mod report;

use components::CalendarListSource;
use error::RoomsResult;
use std::io::Write;

/// Fetch the calendar list and write the report.
///
/// Nothing is written unless the whole list was fetched and decoded.
pub async fn run<S, W>(source: &S, out: &mut W) -> RoomsResult<()>
where
    S: CalendarListSource + ?Sized,
    W: Write,
{
    let list = source.fetch_calendar_list().await?;
    let rendered = report::render(&list);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
