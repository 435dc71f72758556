//! Localised headings for the calendar views.

use chrono::{Datelike, NaiveDate};

use crate::calendar::buckets::Slot;
use crate::calendar::dates::capitalize_first;
use crate::calendar::grid::week_days;
use crate::i18n::{Lang, month_name, month_name_after_day, translate, weekday_name};

const WEEKDAY_KEYS: [&str; 7] = [
    "calendar.weekdays.mon",
    "calendar.weekdays.tue",
    "calendar.weekdays.wed",
    "calendar.weekdays.thu",
    "calendar.weekdays.fri",
    "calendar.weekdays.sat",
    "calendar.weekdays.sun",
];

/// "Февраль 2026" / "February 2026".
pub fn month_label(lang: Lang, cursor: NaiveDate) -> String {
    format!("{} {}", capitalize_first(month_name(lang, cursor)), cursor.year())
}

/// "Суббота, 14 февраля 2026 г." / "Saturday, February 14, 2026".
pub fn day_label(lang: Lang, date: NaiveDate) -> String {
    let weekday = weekday_name(lang, date);
    let month = month_name_after_day(lang, date);
    let label = match lang {
        Lang::Ru => format!("{}, {} {} {} г.", weekday, date.day(), month, date.year()),
        Lang::En => format!("{}, {} {}, {}", weekday, month, date.day(), date.year()),
    };
    capitalize_first(&label)
}

/// First and last day of `focus`'s week: "09.02 - 15.02" / "02/09 - 02/15".
pub fn week_label(lang: Lang, focus: NaiveDate) -> String {
    let days = week_days(focus);
    let fmt = match lang {
        Lang::Ru => "%d.%m",
        Lang::En => "%m/%d",
    };
    format!("{} - {}", days[0].format(fmt), days[6].format(fmt))
}

pub fn slot_label(lang: Lang, slot: Slot) -> String {
    let base = day_label(lang, slot.date());
    match slot {
        Slot::Day(_) => base,
        Slot::AllDay(_) => format!("{}, {}", base, translate(lang, "calendar.allDay", &[]).to_lowercase()),
        Slot::Hour(_, h) => format!("{}, {:02}:00", base, h),
    }
}

/// Short Monday-first column headers.
pub fn weekday_headers(lang: Lang) -> [String; 7] {
    WEEKDAY_KEYS.map(|key| translate(lang, key, &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valentine() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(Lang::Ru, valentine()), "Февраль 2026");
        assert_eq!(month_label(Lang::En, valentine()), "February 2026");
    }

    #[test]
    fn day_labels() {
        assert_eq!(day_label(Lang::Ru, valentine()), "Суббота, 14 февраля 2026 г.");
        assert_eq!(day_label(Lang::En, valentine()), "Saturday, February 14, 2026");
    }

    #[test]
    fn week_labels() {
        assert_eq!(week_label(Lang::Ru, valentine()), "09.02 - 15.02");
        assert_eq!(week_label(Lang::En, valentine()), "02/09 - 02/15");
    }

    #[test]
    fn slot_labels() {
        let d = valentine();
        assert_eq!(slot_label(Lang::En, Slot::Day(d)), "Saturday, February 14, 2026");
        assert_eq!(slot_label(Lang::En, Slot::Hour(d, 7)), "Saturday, February 14, 2026, 07:00");
        assert_eq!(
            slot_label(Lang::Ru, Slot::AllDay(d)),
            "Суббота, 14 февраля 2026 г., весь день"
        );
    }

    #[test]
    fn headers_start_on_monday() {
        assert_eq!(weekday_headers(Lang::En)[0], "Mon");
        assert_eq!(weekday_headers(Lang::Ru)[6], "Вс");
    }
}
