//! Language preference and translations.
//!
//! The language is always passed explicitly; nothing in this crate reads an
//! ambient "current language".

mod dict;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::constants::LANG_KEY;
use crate::error::{VeloriaError, VeloriaResult};
use crate::notify::{Change, ChangeBus};
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    Ru,
    #[default]
    En,
}

impl Lang {
    pub fn parse(s: &str) -> Option<Lang> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Some(Lang::Ru),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Saved preference first, then the system locale, then English.
    pub fn detect(saved: Option<&str>, system_locale: Option<&str>) -> Lang {
        if let Some(lang) = saved.and_then(Lang::parse) {
            return lang;
        }
        let locale = system_locale.unwrap_or("").trim().to_lowercase();
        if locale.starts_with("ru") { Lang::Ru } else { Lang::En }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    pub fn locale_tag(self) -> &'static str {
        match self {
            Lang::Ru => "ru-RU",
            Lang::En => "en-US",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::Ru => dict::RU,
            Lang::En => dict::EN,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = VeloriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::parse(s).ok_or_else(|| VeloriaError::InvalidInput(format!("unsupported language '{}'", s)))
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    lang.table().iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key itself.
pub fn translate(lang: Lang, key: &str, vars: &[(&str, &str)]) -> String {
    let base = lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key);
    interpolate(base, vars)
}

/// Replace `{name}` placeholders; unknown placeholders are left as they are.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
        match vars.iter().find(|(k, _)| *k == name) {
            Some((_, value)) if is_word => out.push_str(value),
            _ => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Standalone month name ("February" / "февраль").
pub fn month_name(lang: Lang, date: NaiveDate) -> &'static str {
    let i = date.month0() as usize;
    match lang {
        Lang::Ru => dict::MONTHS_RU[i],
        Lang::En => dict::MONTHS_EN[i],
    }
}

/// Month name as written after a day number ("February" / "февраля").
pub fn month_name_after_day(lang: Lang, date: NaiveDate) -> &'static str {
    let i = date.month0() as usize;
    match lang {
        Lang::Ru => dict::MONTHS_RU_GENITIVE[i],
        Lang::En => dict::MONTHS_EN[i],
    }
}

pub fn weekday_name(lang: Lang, date: NaiveDate) -> &'static str {
    let i = date.weekday().num_days_from_monday() as usize;
    match lang {
        Lang::Ru => dict::WEEKDAYS_RU[i],
        Lang::En => dict::WEEKDAYS_EN[i],
    }
}

/// Persisted language preference.
#[derive(Clone)]
pub struct LanguageStore {
    storage: Arc<dyn KeyValueStorage>,
    bus: ChangeBus,
}

impl LanguageStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, bus: ChangeBus) -> Self {
        LanguageStore { storage, bus }
    }

    pub fn load(&self, system_locale: Option<&str>) -> Lang {
        let saved = self.storage.get(LANG_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read language preference");
            None
        });
        Lang::detect(saved.as_deref(), system_locale)
    }

    pub fn save(&self, lang: Lang) -> VeloriaResult<()> {
        self.storage.set(LANG_KEY, lang.code())?;
        self.bus.publish(Change::Language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn detect_prefers_saved_then_locale() {
        assert_eq!(Lang::detect(Some(" EN "), Some("ru-RU")), Lang::En);
        assert_eq!(Lang::detect(Some("de"), Some("ru_RU.UTF-8")), Lang::Ru);
        assert_eq!(Lang::detect(None, Some("en_GB.UTF-8")), Lang::En);
        assert_eq!(Lang::detect(None, None), Lang::En);
    }

    #[test]
    fn translate_falls_back_to_english_then_key() {
        assert_eq!(translate(Lang::Ru, "calendar.allDay", &[]), "Весь день");
        assert_eq!(
            translate(Lang::Ru, "calendar.freeSlots.hint", &[]),
            "Weekends are usually free"
        );
        assert_eq!(translate(Lang::Ru, "no.such.key", &[]), "no.such.key");
    }

    #[test]
    fn translate_interpolates() {
        assert_eq!(
            translate(Lang::Ru, "calendar.dayDetails.withBookings", &[("count", "3")]),
            "Записей: 3"
        );
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("Hi {name}!", &[("name", "Anna")]), "Hi Anna!");
        assert_eq!(interpolate("Hi {who}!", &[("name", "Anna")]), "Hi {who}!");
        assert_eq!(interpolate("{a}{b}", &[("a", "1"), ("b", "2")]), "12");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("{a b}", &[("a b", "x")]), "{a b}");
    }

    #[test]
    fn month_and_weekday_names() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(month_name(Lang::Ru, d), "февраль");
        assert_eq!(month_name_after_day(Lang::Ru, d), "февраля");
        assert_eq!(month_name(Lang::En, d), "February");
        assert_eq!(weekday_name(Lang::En, d), "Saturday");
        assert_eq!(weekday_name(Lang::Ru, d), "суббота");
    }

    #[test]
    fn language_store_roundtrip() {
        let bus = ChangeBus::new();
        let mut rx = bus.subscribe();
        let store = LanguageStore::new(std::sync::Arc::new(MemoryStorage::new()), bus);

        assert_eq!(store.load(Some("ru-RU")), Lang::Ru);
        store.save(Lang::En).unwrap();
        assert_eq!(store.load(Some("ru-RU")), Lang::En);
        assert_eq!(rx.try_recv().unwrap(), Change::Language);
    }
}
