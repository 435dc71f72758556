//! New-booking form state and its conversion into an event.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::calendar::dates::{format_iso, hhmm_from_local_dt, to_local_dt, ymd_from_local_dt};
use crate::clients::ClientRecord;
use crate::error::VeloriaError;
use crate::events::EventInput;
use crate::i18n::{Lang, translate};
use crate::services::Service;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    New,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = VeloriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(BookingStatus::New),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(VeloriaError::InvalidInput(format!("unknown booking status '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingTotals {
    pub price_rub: u64,
    pub duration_min: u64,
}

/// Everything the booking form collects before it is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    /// `yyyy-mm-ddTHH:mm`
    pub planned: String,
    pub client_name: String,
    pub phone: String,
    pub email: String,
    pub master: String,
    pub status: BookingStatus,
    pub note: String,
    pub services: Vec<Service>,
    /// Free-text total typed by the user, replacing the computed sum.
    pub total_override: Option<String>,
}

impl BookingDraft {
    /// Empty draft planned for midnight of `date`, with the current user as
    /// the master.
    pub fn new(lang: Lang, date: NaiveDate) -> Self {
        BookingDraft {
            planned: to_local_dt(&format_iso(date)),
            client_name: String::new(),
            phone: String::new(),
            email: String::new(),
            master: translate(lang, "booking.master.you", &[]),
            status: BookingStatus::New,
            note: String::new(),
            services: Vec::new(),
            total_override: None,
        }
    }

    pub fn prefill_from_client(&mut self, client: &ClientRecord) {
        self.client_name = client.name.clone();
        self.phone = client.phone.clone().unwrap_or_default();
        self.email = client.email.clone().unwrap_or_default();
    }

    pub fn totals(&self) -> BookingTotals {
        self.services.iter().fold(BookingTotals::default(), |acc, s| BookingTotals {
            price_rub: acc.price_rub + u64::from(s.price_rub),
            duration_min: acc.duration_min + u64::from(s.duration_min),
        })
    }

    /// The override when it parses as a number, else the computed price.
    pub fn total_rub(&self) -> u64 {
        let computed = self.totals().price_rub;
        self.total_override
            .as_deref()
            .and_then(parse_amount)
            .unwrap_or(computed)
    }

    pub fn into_event_input(self, lang: Lang, today: NaiveDate) -> EventInput {
        let date = ymd_from_local_dt(&self.planned).unwrap_or(today);
        let time = hhmm_from_local_dt(&self.planned);

        let client_name = non_blank(&self.client_name);
        let master = non_blank(&self.master);
        let title = client_name
            .clone()
            .or_else(|| master.clone())
            .unwrap_or_else(|| translate(lang, "booking.defaultTitle", &[]));

        let services: Vec<String> = self
            .services
            .iter()
            .map(|s| s.name.clone())
            .filter(|n| !n.is_empty())
            .collect();

        EventInput {
            date: format_iso(date),
            time,
            title: Some(title),
            client_name,
            phone: non_blank(&self.phone),
            email: non_blank(&self.email),
            master,
            status: Some(self.status.as_str().to_string()),
            note: non_blank(&self.note),
            services: (!services.is_empty()).then_some(services),
        }
    }
}

/// "1 500,50" -> 1501. Negative amounts clamp to zero.
fn parse_amount(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(' ', "").replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().max(0.0) as u64)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
