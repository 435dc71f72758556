pub mod avatar;
pub mod book;
pub mod calendar;
pub mod clients;
pub mod profile;
pub mod services;
pub mod settings;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use veloria_core::i18n::Lang;
use veloria_core::validation::FieldErrors;
use veloria_core::Veloria;

/// What every command needs: the stores, the language and today's date.
pub struct Ctx {
    pub app: Veloria,
    pub lang: Lang,
    pub today: NaiveDate,
}

impl Ctx {
    pub fn new(app: Veloria) -> Self {
        let locale = system_locale();
        let lang = app.lang(locale.as_deref());
        Ctx {
            app,
            lang,
            today: Local::now().date_naive(),
        }
    }

    pub fn t(&self, key: &str) -> String {
        veloria_core::i18n::translate(self.lang, key, &[])
    }
}

/// Locale from the usual POSIX variables, most specific first.
fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty())
}

/// Print field errors and fail, or do nothing when the form is valid.
pub fn ensure_valid(errors: FieldErrors) -> Result<()> {
    if errors.is_valid() {
        return Ok(());
    }
    for (field, message) in errors.iter() {
        eprintln!("{} {}", format!("{}:", field).red(), message);
    }
    anyhow::bail!("Invalid input");
}

/// Parse a `yyyy-mm-dd` argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    veloria_core::calendar::dates::parse_iso_date(s.trim())
        .ok_or_else(|| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Check an `HH:MM` argument, returning it trimmed.
pub fn parse_time_arg(s: &str) -> Result<&str> {
    let trimmed = s.trim();
    match veloria_core::calendar::dates::hour_from_hhmm(trimmed) {
        Some(_) => Ok(trimmed),
        None => anyhow::bail!("Invalid time '{}', expected HH:MM between 00:00 and 23:59", s),
    }
}
