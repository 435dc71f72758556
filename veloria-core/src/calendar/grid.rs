//! Month and week grids (weeks start on Monday).

use chrono::{Datelike, NaiveDate};

use crate::calendar::dates::{add_days, is_weekend, start_of_month, start_of_week};
use crate::calendar::index::EventsByDay;

/// Six full weeks: enough to cover any month.
pub const MONTH_GRID_DAYS: usize = 42;

/// The 42 days shown for `cursor`'s month, starting on the Monday on or
/// before the first of the month.
pub fn month_days(cursor: NaiveDate) -> [NaiveDate; MONTH_GRID_DAYS] {
    let start = start_of_week(start_of_month(cursor));
    std::array::from_fn(|i| add_days(start, i as i64))
}

/// The Monday-first week containing `focus`.
pub fn week_days(focus: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(focus);
    std::array::from_fn(|i| add_days(start, i as i64))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Belongs to the previous or next month.
    pub outside: bool,
    pub today: bool,
    pub weekend: bool,
    pub event_count: usize,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub days: Vec<GridDay>,
}

impl MonthGrid {
    pub fn build(cursor: NaiveDate, today: NaiveDate, events: &EventsByDay<'_>) -> Self {
        let month = start_of_month(cursor);
        let days = month_days(cursor)
            .into_iter()
            .map(|date| GridDay {
                date,
                outside: date.month() != month.month() || date.year() != month.year(),
                today: date == today,
                weekend: is_weekend(date),
                event_count: events.count(date),
            })
            .collect();

        MonthGrid { month, days }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridDay]> {
        self.days.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::add_months;
    use crate::events::{CalendarEventRecord, EventInput};
    use crate::record::Record;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_grid_shape_for_many_months() {
        let mut cursor = d(2020, 1, 1);
        for _ in 0..120 {
            let days = month_days(cursor);
            assert_eq!(days.len(), MONTH_GRID_DAYS);
            assert_eq!(days[0].weekday(), Weekday::Mon);
            for pair in days.windows(2) {
                assert_eq!((pair[1] - pair[0]).num_days(), 1);
            }

            // The first of the month sits at its Monday-based offset.
            let offset = cursor.weekday().num_days_from_monday() as usize;
            assert_eq!(days[offset], cursor);
            let last = add_months(cursor, 1).pred_opt().unwrap();
            assert!(days.contains(&last));

            cursor = add_months(cursor, 1);
        }
    }

    #[test]
    fn february_2026_starts_on_january_26() {
        // 2026-02-01 is a Sunday.
        let days = month_days(d(2026, 2, 14));
        assert_eq!(days[0], d(2026, 1, 26));
        assert_eq!(days[6], d(2026, 2, 1));
        assert_eq!(days[41], d(2026, 3, 8));
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_days() {
        // 2026-06-01 is a Monday.
        assert_eq!(month_days(d(2026, 6, 20))[0], d(2026, 6, 1));
    }

    #[test]
    fn week_days_are_consecutive_from_monday() {
        for offset in 0..7 {
            let focus = add_days(d(2026, 2, 9), offset);
            let week = week_days(focus);
            assert_eq!(week[0], d(2026, 2, 9));
            assert_eq!(week[6], d(2026, 2, 15));
            assert!(week.contains(&focus));
        }
    }

    #[test]
    fn grid_marks_outside_today_and_counts() {
        let events = vec![
            CalendarEventRecord::from_input("a".into(), EventInput::new("2026-02-14", "11:00")),
            CalendarEventRecord::from_input("b".into(), EventInput::new("2026-02-14", "12:00")),
        ];
        let index = EventsByDay::new(&events);
        let grid = MonthGrid::build(d(2026, 2, 3), d(2026, 2, 10), &index);

        assert_eq!(grid.month, d(2026, 2, 1));
        assert_eq!(grid.weeks().count(), 6);
        assert!(grid.days[0].outside);
        assert!(!grid.days[6].outside);

        let valentine = grid.days.iter().find(|g| g.date == d(2026, 2, 14)).unwrap();
        assert_eq!(valentine.event_count, 2);
        assert!(valentine.weekend);

        let today: Vec<_> = grid.days.iter().filter(|g| g.today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, d(2026, 2, 10));
    }
}
