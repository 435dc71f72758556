//! Service catalogue.
//!
//! Bookings copy service *names*, so renaming or deleting a service here
//! never changes bookings that were already made.

use serde::Serialize;
use serde_json::Value;

use crate::constants::SERVICES_KEY;
use crate::error::VeloriaResult;
use crate::notify::Change;
use crate::record::{self, Decoded, DropReason, Record};
use crate::store::{RecordStore, StoreContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_min: u32,
    pub price_rub: u32,
    pub description: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub duration_min: u32,
    pub price_rub: u32,
    pub description: String,
    pub active: bool,
}

impl ServiceInput {
    pub fn new(name: impl Into<String>, duration_min: u32, price_rub: u32) -> Self {
        ServiceInput {
            name: name.into(),
            duration_min,
            price_rub,
            description: String::new(),
            active: true,
        }
    }
}

impl From<Service> for ServiceInput {
    fn from(s: Service) -> Self {
        ServiceInput {
            name: s.name,
            duration_min: s.duration_min,
            price_rub: s.price_rub,
            description: s.description,
            active: s.active,
        }
    }
}

impl Record for Service {
    type Input = ServiceInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: ServiceInput) -> Self {
        Service {
            id,
            name: input.name,
            duration_min: input.duration_min,
            price_rub: input.price_rub,
            description: input.description,
            active: input.active,
        }
    }

    fn decode(value: &Value) -> Decoded<Self> {
        match decode_service(value) {
            Ok(service) => Decoded::Valid(service),
            Err(reason) => Decoded::Dropped(reason),
        }
    }
}

fn decode_service(value: &Value) -> Result<Service, DropReason> {
    let obj = record::as_object(value)?;

    Ok(Service {
        id: record::required_str(obj, "id")?,
        name: record::required_str(obj, "name")?,
        duration_min: record::required_u32(obj, "durationMin")?,
        price_rub: record::required_u32(obj, "priceRub")?,
        description: record::optional_str(obj, "description").unwrap_or_default(),
        active: obj.get("active").and_then(Value::as_bool).unwrap_or(true),
    })
}

#[derive(Clone)]
pub struct ServiceStore {
    records: RecordStore<Service>,
}

impl ServiceStore {
    pub fn new(ctx: StoreContext) -> Self {
        ServiceStore {
            records: RecordStore::new(ctx, SERVICES_KEY, Change::Services),
        }
    }

    pub fn load(&self) -> Vec<Service> {
        self.records.load()
    }

    /// Services offered for new bookings.
    pub fn active(&self) -> Vec<Service> {
        self.load().into_iter().filter(|s| s.active).collect()
    }

    pub fn save(&self, services: &[Service]) -> VeloriaResult<()> {
        self.records.save(services)
    }

    pub fn add(&self, input: ServiceInput) -> VeloriaResult<Service> {
        self.records.add(input)
    }

    pub fn get(&self, id: &str) -> Option<Service> {
        self.records.get(id)
    }

    pub fn update(&self, id: &str, input: ServiceInput) -> VeloriaResult<Option<Service>> {
        self.records.update(id, input)
    }

    pub fn toggle_active(&self, id: &str) -> VeloriaResult<Option<Service>> {
        self.records.modify(id, |s| s.active = !s.active)
    }

    pub fn remove(&self, id: &str) -> VeloriaResult<()> {
        self.records.remove(id)
    }

    /// Look active services up by name, as bookings reference them.
    /// Inactive services cannot be booked, so they are never returned.
    pub fn find_by_names(&self, names: &[String]) -> Vec<Service> {
        self.active()
            .into_iter()
            .filter(|s| names.iter().any(|n| n.trim().eq_ignore_ascii_case(s.name.trim())))
            .collect()
    }
}
