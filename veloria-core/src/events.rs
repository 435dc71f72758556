//! Calendar event (booking) records.

use serde::Serialize;
use serde_json::Value;

use crate::constants::{EVENTS_KEY, MAX_EVENTS};
use crate::error::VeloriaResult;
use crate::i18n::{self, Lang};
use crate::notify::Change;
use crate::record::{self, Decoded, DropReason, Record};
use crate::store::{RecordStore, StoreContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventRecord {
    pub id: String,
    /// yyyy-mm-dd
    pub date: String,
    /// HH:mm
    pub time: String,
    /// Display title. Older versions stored only this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Service names copied at booking time. Never `Some` of an empty list:
    /// an empty list is stored as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventInput {
    pub date: String,
    pub time: String,
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub master: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
    pub services: Option<Vec<String>>,
}

impl EventInput {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        EventInput {
            date: date.into(),
            time: time.into(),
            ..Default::default()
        }
    }
}

impl CalendarEventRecord {
    /// Who the booking is for: client name, then title, then master.
    pub fn display_who(&self, lang: Lang) -> String {
        [&self.client_name, &self.title, &self.master]
            .into_iter()
            .filter_map(|field| field.as_deref().map(str::trim))
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| i18n::translate(lang, "calendar.booking", &[]))
    }
}

impl Record for CalendarEventRecord {
    type Input = EventInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: EventInput) -> Self {
        CalendarEventRecord {
            id,
            date: input.date,
            time: input.time,
            title: input.title,
            client_name: input.client_name,
            phone: input.phone,
            email: input.email,
            master: input.master,
            status: input.status,
            note: input.note,
            services: input.services.filter(|s| !s.is_empty()),
        }
    }

    fn decode(value: &Value) -> Decoded<Self> {
        match decode_event(value) {
            Ok(event) => Decoded::Valid(event),
            Err(reason) => Decoded::Dropped(reason),
        }
    }
}

fn decode_event(value: &Value) -> Result<CalendarEventRecord, DropReason> {
    let obj = record::as_object(value)?;

    Ok(CalendarEventRecord {
        id: record::required_str(obj, "id")?,
        date: record::required_str(obj, "date")?,
        time: record::required_str(obj, "time")?,
        title: record::optional_str(obj, "title"),
        client_name: record::optional_str(obj, "clientName"),
        phone: record::optional_str(obj, "phone"),
        email: record::optional_str(obj, "email"),
        master: record::optional_str(obj, "master"),
        status: record::optional_str(obj, "status"),
        note: record::optional_str(obj, "note"),
        services: record::string_list(obj, "services"),
    })
}

/// Bookings, newest first, capped at `MAX_EVENTS`.
#[derive(Clone)]
pub struct EventStore {
    records: RecordStore<CalendarEventRecord>,
}

impl EventStore {
    pub fn new(ctx: StoreContext) -> Self {
        EventStore {
            records: RecordStore::new(ctx, EVENTS_KEY, Change::Events).with_cap(MAX_EVENTS),
        }
    }

    pub fn load(&self) -> Vec<CalendarEventRecord> {
        self.records.load()
    }

    /// Overwrite all bookings. Empty service lists are written as absent,
    /// so what is saved reloads unchanged.
    pub fn save(&self, events: &[CalendarEventRecord]) -> VeloriaResult<()> {
        let normalized: Vec<CalendarEventRecord> = events
            .iter()
            .cloned()
            .map(|mut event| {
                event.services = event.services.filter(|s| !s.is_empty());
                event
            })
            .collect();
        self.records.save(&normalized)
    }

    pub fn add(&self, input: EventInput) -> VeloriaResult<CalendarEventRecord> {
        self.records.add(input)
    }

    pub fn get(&self, id: &str) -> Option<CalendarEventRecord> {
        self.records.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::memory_context;

    #[test]
    fn cap_evicts_oldest_first() {
        let events = EventStore::new(memory_context());
        for i in 0..=MAX_EVENTS {
            events.add(EventInput::new("2026-02-14", format!("{:02}:00", i % 24))).unwrap();
        }

        let loaded = events.load();
        assert_eq!(loaded.len(), MAX_EVENTS);
        // ids are sequential: id-1 was the first added and must be gone.
        assert_eq!(loaded[0].id, format!("id-{}", MAX_EVENTS + 1));
        assert_eq!(loaded.last().unwrap().id, "id-2");
        assert!(loaded.iter().all(|e| e.id != "id-1"));
    }

    #[test]
    fn legacy_title_only_records_load() {
        let ctx = memory_context();
        ctx.storage
            .set(
                EVENTS_KEY,
                r#"[{"id":"1","date":"2026-02-14","time":"11:00","title":"Anna"},
                    {"id":"2","date":"2026-02-14"},
                    {"id":"3","date":"2026-02-15","time":"09:30","services":["Cut",5,"Color"]},
                    {"id":"4","date":"2026-02-15","time":"10:00","services":[1]}]"#,
            )
            .unwrap();

        let loaded = EventStore::new(ctx).load();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].title.as_deref(), Some("Anna"));
        assert_eq!(loaded[1].services, Some(vec!["Cut".to_string(), "Color".to_string()]));
        assert_eq!(loaded[2].services, None);
    }

    #[test]
    fn missing_events_key_is_empty() {
        assert!(EventStore::new(memory_context()).load().is_empty());
    }

    #[test]
    fn empty_service_list_is_not_stored() {
        let events = EventStore::new(memory_context());
        let ev = events
            .add(EventInput {
                services: Some(vec![]),
                ..EventInput::new("2026-02-14", "10:00")
            })
            .unwrap();
        assert_eq!(ev.services, None);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let events = EventStore::new(memory_context());
        let records = vec![CalendarEventRecord::from_input(
            "e1".into(),
            EventInput {
                client_name: Some("Anna".into()),
                status: Some("confirmed".into()),
                services: Some(vec!["Cut".into()]),
                ..EventInput::new("2026-02-14", "not a time")
            },
        )];

        events.save(&records).unwrap();
        assert_eq!(events.load(), records);
    }

    #[test]
    fn saved_empty_service_list_reloads_as_absent() {
        let ctx = memory_context();
        let events = EventStore::new(ctx.clone());
        let mut record = CalendarEventRecord::from_input("e1".into(), EventInput::new("2026-02-14", "10:00"));
        record.services = Some(Vec::new());

        events.save(&[record.clone()]).unwrap();

        let stored = ctx.storage.get(EVENTS_KEY).unwrap().unwrap();
        assert!(!stored.contains("services"));

        let loaded = events.load();
        record.services = None;
        assert_eq!(loaded, vec![record.clone()]);

        events.save(&loaded).unwrap();
        assert_eq!(events.load(), vec![record]);
    }

    #[test]
    fn display_who_fallbacks() {
        let mut ev = CalendarEventRecord::from_input("e".into(), EventInput::new("2026-02-14", "10:00"));
        assert_eq!(ev.display_who(Lang::Ru), "Запись");
        assert_eq!(ev.display_who(Lang::En), "Booking");

        ev.master = Some("Danil".into());
        assert_eq!(ev.display_who(Lang::En), "Danil");

        ev.title = Some("  ".into());
        assert_eq!(ev.display_who(Lang::En), "Danil");

        ev.client_name = Some(" Anna ".into());
        assert_eq!(ev.display_who(Lang::En), "Anna");
    }
}
