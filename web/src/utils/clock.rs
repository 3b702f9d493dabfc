use chrono::{Local, NaiveDate};

/// Today's date in the visitor's timezone. On the server this is the host's local date,
/// which only matters for the first paint before hydration.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
