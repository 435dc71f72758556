//! List view: the focused week, condensed to days that have bookings.

use chrono::NaiveDate;

use crate::calendar::grid::week_days;
use crate::calendar::index::EventsByDay;

/// Days of `focus`'s week with at least one event, or just `focus` when the
/// week is empty.
pub fn list_days(index: &EventsByDay<'_>, focus: NaiveDate) -> Vec<NaiveDate> {
    let days: Vec<NaiveDate> = week_days(focus)
        .into_iter()
        .filter(|&d| index.has_events(d))
        .collect();

    if days.is_empty() { vec![focus] } else { days }
}
