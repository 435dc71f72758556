//! Hour bucketing for the day and week views.

use chrono::NaiveDate;

use crate::calendar::dates::hour_from_hhmm;
use crate::calendar::grid::week_days;
use crate::calendar::index::EventsByDay;
use crate::events::CalendarEventRecord;

pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;

/// Where an event lands in a day column.
///
/// `AllDay` collects everything outside the displayed hours as well as
/// events with an unreadable time. It is not an "all-day event" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    AllDay,
    Hour(u32),
}

pub fn bucket_for(time: &str) -> Bucket {
    match hour_from_hhmm(time) {
        Some(h) if (DAY_START_HOUR..=DAY_END_HOUR).contains(&h) => Bucket::Hour(h),
        _ => Bucket::AllDay,
    }
}

/// The displayed hours, in order.
pub fn display_hours() -> impl Iterator<Item = u32> {
    DAY_START_HOUR..=DAY_END_HOUR
}

#[derive(Debug, Clone)]
pub struct HourBucket<'a> {
    pub hour: u32,
    pub events: Vec<&'a CalendarEventRecord>,
}

#[derive(Debug, Clone)]
pub struct DayBuckets<'a> {
    pub date: NaiveDate,
    pub all_day: Vec<&'a CalendarEventRecord>,
    /// One entry per displayed hour, including empty ones.
    pub hours: Vec<HourBucket<'a>>,
}

impl DayBuckets<'_> {
    pub fn total(&self) -> usize {
        self.all_day.len() + self.hours.iter().map(|h| h.events.len()).sum::<usize>()
    }
}

pub fn day_buckets<'a>(index: &EventsByDay<'a>, date: NaiveDate) -> DayBuckets<'a> {
    let mut hours: Vec<HourBucket<'a>> = display_hours()
        .map(|hour| HourBucket { hour, events: Vec::new() })
        .collect();
    let mut all_day = Vec::new();

    for &event in index.on(date) {
        match bucket_for(&event.time) {
            Bucket::AllDay => all_day.push(event),
            Bucket::Hour(h) => hours[(h - DAY_START_HOUR) as usize].events.push(event),
        }
    }

    DayBuckets { date, all_day, hours }
}

pub fn week_buckets<'a>(index: &EventsByDay<'a>, focus: NaiveDate) -> Vec<DayBuckets<'a>> {
    week_days(focus)
        .into_iter()
        .map(|date| day_buckets(index, date))
        .collect()
}

/// A clicked cell in one of the calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Day(NaiveDate),
    AllDay(NaiveDate),
    Hour(NaiveDate, u32),
}

impl Slot {
    pub fn date(&self) -> NaiveDate {
        match *self {
            Slot::Day(d) | Slot::AllDay(d) | Slot::Hour(d, _) => d,
        }
    }
}

/// Events behind a slot, in time order.
pub fn slot_events<'a>(index: &EventsByDay<'a>, slot: Slot) -> Vec<&'a CalendarEventRecord> {
    let day = index.on(slot.date()).iter().copied();
    match slot {
        Slot::Day(_) => day.collect(),
        Slot::AllDay(_) => day.filter(|e| bucket_for(&e.time) == Bucket::AllDay).collect(),
        Slot::Hour(_, h) => day.filter(|e| bucket_for(&e.time) == Bucket::Hour(h)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventInput;
    use crate::record::Record;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ev(id: &str, date: &str, time: &str) -> CalendarEventRecord {
        CalendarEventRecord::from_input(id.into(), EventInput::new(date, time))
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket_for("07:30"), Bucket::Hour(7));
        assert_eq!(bucket_for("06:00"), Bucket::Hour(6));
        assert_eq!(bucket_for("18:00"), Bucket::Hour(18));
        assert_eq!(bucket_for("18:59"), Bucket::Hour(18));
        assert_eq!(bucket_for("05:59"), Bucket::AllDay);
        assert_eq!(bucket_for("19:00"), Bucket::AllDay);
        assert_eq!(bucket_for("23:10"), Bucket::AllDay);
        assert_eq!(bucket_for("abc"), Bucket::AllDay);
        assert_eq!(bucket_for(""), Bucket::AllDay);
    }

    #[test]
    fn day_has_thirteen_hour_buckets() {
        let index = EventsByDay::new(&[]);
        let day = day_buckets(&index, d(2026, 2, 14));
        assert_eq!(day.hours.len(), 13);
        assert_eq!(day.hours[0].hour, 6);
        assert_eq!(day.hours[12].hour, 18);
        assert_eq!(day.total(), 0);
    }

    #[test]
    fn events_land_in_their_buckets() {
        let events = vec![
            ev("a", "2026-02-14", "07:30"),
            ev("b", "2026-02-14", "23:10"),
            ev("c", "2026-02-14", "late"),
            ev("d", "2026-02-14", "07:05"),
            ev("e", "2026-02-15", "07:00"),
        ];
        let index = EventsByDay::new(&events);
        let day = day_buckets(&index, d(2026, 2, 14));

        let seven: Vec<_> = day.hours[1].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(seven, vec!["d", "a"]);
        assert_eq!(day.all_day.len(), 2);
        assert_eq!(day.total(), 4);
    }

    #[test]
    fn week_buckets_cover_monday_to_sunday() {
        let events = vec![ev("a", "2026-02-09", "10:00"), ev("b", "2026-02-15", "10:00")];
        let index = EventsByDay::new(&events);
        let week = week_buckets(&index, d(2026, 2, 12));

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, d(2026, 2, 9));
        assert_eq!(week[0].total(), 1);
        assert_eq!(week[6].total(), 1);
    }

    #[test]
    fn slot_events_filters_by_bucket() {
        let events = vec![
            ev("a", "2026-02-14", "10:15"),
            ev("b", "2026-02-14", "10:45"),
            ev("c", "2026-02-14", "21:00"),
        ];
        let index = EventsByDay::new(&events);
        let day = d(2026, 2, 14);

        assert_eq!(slot_events(&index, Slot::Day(day)).len(), 3);
        assert_eq!(slot_events(&index, Slot::Hour(day, 10)).len(), 2);
        assert_eq!(slot_events(&index, Slot::Hour(day, 11)).len(), 0);
        let all_day = slot_events(&index, Slot::AllDay(day));
        assert_eq!(all_day.len(), 1);
        assert_eq!(all_day[0].id, "c");
    }
}
