//! Events grouped by day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::dates::format_iso;
use crate::events::CalendarEventRecord;

/// Events keyed by their raw `date` string, each day sorted by `time`.
///
/// Events whose date is not a valid ISO date are kept under their raw key
/// and simply never match a rendered day.
#[derive(Debug, Default)]
pub struct EventsByDay<'a> {
    days: BTreeMap<&'a str, Vec<&'a CalendarEventRecord>>,
}

impl<'a> EventsByDay<'a> {
    pub fn new(events: &'a [CalendarEventRecord]) -> Self {
        let mut days: BTreeMap<&'a str, Vec<&'a CalendarEventRecord>> = BTreeMap::new();
        for event in events {
            days.entry(event.date.as_str()).or_default().push(event);
        }
        for day in days.values_mut() {
            day.sort_by(|a, b| a.time.cmp(&b.time));
        }
        EventsByDay { days }
    }

    pub fn on(&self, date: NaiveDate) -> &[&'a CalendarEventRecord] {
        self.days
            .get(format_iso(date).as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, date: NaiveDate) -> usize {
        self.on(date).len()
    }

    pub fn has_events(&self, date: NaiveDate) -> bool {
        self.count(date) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventInput;
    use crate::record::Record;

    fn ev(id: &str, date: &str, time: &str) -> CalendarEventRecord {
        CalendarEventRecord::from_input(id.into(), EventInput::new(date, time))
    }

    #[test]
    fn groups_and_sorts_by_time() {
        let events = vec![
            ev("a", "2026-02-14", "15:00"),
            ev("b", "2026-02-14", "09:30"),
            ev("c", "2026-02-15", "11:00"),
            ev("d", "garbage", "11:00"),
        ];
        let index = EventsByDay::new(&events);
        let day = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();

        let ids: Vec<_> = index.on(day).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(index.count(day.succ_opt().unwrap()), 1);
        assert!(!index.has_events(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()));
    }
}
