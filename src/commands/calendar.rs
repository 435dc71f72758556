use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use veloria_core::calendar::dates::date_from_query;
use veloria_core::calendar::{
    self, EventsByDay, MonthGrid, Slot, day_buckets, day_label, list_days, month_label, slot_events,
    slot_label, week_buckets, week_label, weekday_headers,
};
use veloria_core::i18n::translate;

use super::Ctx;
use crate::render::{render_day, render_event, render_month};

#[derive(Subcommand)]
pub enum CalendarCommand {
    /// Month grid
    Month {
        /// Any day of the month (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Monday-first week, hour by hour
    Week {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// One day, hour by hour
    Day {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Days of the week that have bookings
    List {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Bookings in one cell of the day or week view
    Slot {
        #[arg(short, long)]
        date: Option<String>,

        /// Hour of the cell (6-18)
        #[arg(long, conflicts_with = "all_day")]
        hour: Option<u32>,

        /// The off-hours cell
        #[arg(long)]
        all_day: bool,
    },
}

pub fn run(ctx: &Ctx, command: CalendarCommand) -> Result<()> {
    let events = ctx.app.events.load();
    let index = EventsByDay::new(&events);
    let lang = ctx.lang;
    let all_day = translate(lang, "calendar.allDay", &[]);
    let focus = |date: &Option<String>| date_from_query(date.as_deref(), ctx.today);

    match command {
        CalendarCommand::Month { date } => {
            let grid = MonthGrid::build(focus(&date), ctx.today, &index);
            println!("{}", month_label(lang, grid.month).bold());
            println!("{}", render_month(&grid, &weekday_headers(lang)));
        }
        CalendarCommand::Week { date } => {
            let focus = focus(&date);
            println!("{}", week_label(lang, focus).bold());
            for day in week_buckets(&index, focus) {
                println!();
                println!("{}", day_label(lang, day.date));
                let lines = render_day(&day, lang, &all_day, false);
                if lines.is_empty() {
                    println!("   {}", ctx.t("calendar.sheet.none").dimmed());
                }
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        CalendarCommand::Day { date } => {
            let day = day_buckets(&index, focus(&date));
            println!("{}", day_label(lang, day.date).bold());
            println!("   {}", day_summary(ctx, day.total()).dimmed());
            for line in render_day(&day, lang, &all_day, true) {
                println!("{}", line);
            }
        }
        CalendarCommand::List { date } => {
            for day in list_days(&index, focus(&date)) {
                println!("{}", day_label(lang, day).bold());
                let on_day = index.on(day);
                if on_day.is_empty() {
                    println!("   {}", ctx.t("calendar.dayDetails.noBookings").dimmed());
                }
                for event in on_day {
                    println!("   {}", render_event(event, lang));
                }
            }
        }
        CalendarCommand::Slot { date, hour, all_day } => {
            let date = focus(&date);
            let slot = match (hour, all_day) {
                (Some(h), _) if (calendar::DAY_START_HOUR..=calendar::DAY_END_HOUR).contains(&h) => {
                    Slot::Hour(date, h)
                }
                (Some(h), _) => anyhow::bail!(
                    "Hour {} is outside {}-{}; use --all-day for off-hours bookings",
                    h,
                    calendar::DAY_START_HOUR,
                    calendar::DAY_END_HOUR
                ),
                (None, true) => Slot::AllDay(date),
                (None, false) => Slot::Day(date),
            };

            let found = slot_events(&index, slot);
            println!("{}", slot_label(lang, slot).bold());
            if found.is_empty() {
                println!("   {}", ctx.t("calendar.sheet.none").dimmed());
            }
            for event in found {
                println!("   {}", render_event(event, lang));
            }
        }
    }

    Ok(())
}

fn day_summary(ctx: &Ctx, count: usize) -> String {
    if count == 0 {
        ctx.t("calendar.dayDetails.noBookings")
    } else {
        translate(ctx.lang, "calendar.dayDetails.withBookings", &[("count", &count.to_string())])
    }
}
