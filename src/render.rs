//! Colored terminal rendering for veloria-core types.

use owo_colors::OwoColorize;
use veloria_core::calendar::dates::{display_date, time_range_label};
use veloria_core::calendar::{DayBuckets, GridDay, MonthGrid};
use veloria_core::clients::{ClientRecord, Loyalty};
use veloria_core::events::CalendarEventRecord;
use veloria_core::i18n::Lang;
use veloria_core::services::Service;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Loyalty {
    fn render(&self) -> String {
        match self {
            Loyalty::Vip => self.to_string().magenta().to_string(),
            Loyalty::Regular => self.to_string().green().to_string(),
            Loyalty::New => self.to_string().cyan().to_string(),
            Loyalty::Unset => self.to_string().dimmed().to_string(),
        }
    }
}

impl Render for ClientRecord {
    fn render(&self) -> String {
        let contacts: Vec<&str> = [self.phone.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        format!(
            "{} {} {} {}",
            self.id.dimmed(),
            self.name.bold(),
            self.loyalty.render(),
            contacts.join(", ").dimmed()
        )
    }
}

/// Every stored field of a client, one per line.
pub fn client_details(client: &ClientRecord) -> String {
    let rows = [
        ("Phone", client.phone.as_deref()),
        ("Email", client.email.as_deref()),
        ("Tags", client.tags.as_deref()),
        ("Allergies", client.allergies.as_deref()),
        ("Preferences", client.preferences.as_deref()),
        ("Notes", client.notes.as_deref()),
    ];

    let mut lines = vec![client.render()];
    lines.push(format!("   {:<12} {}", "Birthday".dimmed(), display_date(client.birthday.as_deref())));
    lines.push(format!("   {:<12} {}", "Last visit".dimmed(), display_date(client.last_visit.as_deref())));
    for (label, value) in rows {
        if let Some(value) = value {
            lines.push(format!("   {:<12} {}", label.dimmed(), value));
        }
    }
    lines.join("\n")
}

impl Render for Service {
    fn render(&self) -> String {
        let line = format!(
            "{} {} {} min {} RUB",
            self.id.dimmed(),
            self.name,
            self.duration_min,
            self.price_rub
        );
        if self.active {
            line
        } else {
            format!("{} {}", line.dimmed(), "(inactive)".dimmed())
        }
    }
}

pub fn render_event(event: &CalendarEventRecord, lang: Lang) -> String {
    let mut line = format!("{} {}", event.time.dimmed(), event.display_who(lang).bold());
    if let Some(services) = &event.services {
        line.push_str(&format!(" {}", services.join(", ").cyan()));
    }
    if let Some(status) = &event.status {
        let status = match status.as_str() {
            "confirmed" => status.green().to_string(),
            "cancelled" => status.red().to_string(),
            _ => status.yellow().to_string(),
        };
        line.push_str(&format!(" [{}]", status));
    }
    line
}

fn render_grid_day(day: &GridDay) -> String {
    let marker = if day.event_count > 0 { "•" } else { " " };
    let cell = format!("{:>2}{}", day.date.format("%-d"), marker);

    if day.today {
        cell.reversed().to_string()
    } else if day.outside {
        cell.dimmed().to_string()
    } else if day.weekend {
        cell.red().to_string()
    } else {
        cell
    }
}

pub fn render_month(grid: &MonthGrid, headers: &[String; 7]) -> String {
    let mut lines = vec![
        headers
            .iter()
            .map(|h| format!("{:>3}", h).bold().to_string())
            .collect::<Vec<_>>()
            .join(" "),
    ];
    for week in grid.weeks() {
        lines.push(week.iter().map(render_grid_day).collect::<Vec<_>>().join(" "));
    }
    lines.join("\n")
}

/// One day column as text: off-hours first, then every displayed hour.
pub fn render_day(day: &DayBuckets<'_>, lang: Lang, all_day_label: &str, show_empty: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for event in &day.all_day {
        lines.push(format!("   {:<13} {}", all_day_label.dimmed(), render_event(event, lang)));
    }
    for hour in &day.hours {
        let label = time_range_label(&format!("{:02}:00", hour.hour), 60);
        if hour.events.is_empty() {
            if show_empty {
                lines.push(format!("   {}", label.dimmed()));
            }
            continue;
        }
        for event in &hour.events {
            lines.push(format!("   {:<13} {}", label, render_event(event, lang)));
        }
    }
    lines
}
