//! Client records.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::constants::CLIENTS_KEY;
use crate::error::{VeloriaError, VeloriaResult};
use crate::notify::Change;
use crate::record::{self, Decoded, DropReason, Record};
use crate::store::{RecordStore, StoreContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Loyalty {
    #[default]
    Unset,
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    New,
}

impl Loyalty {
    /// Parse a stored loyalty label, including the legacy Russian labels.
    pub fn parse(s: &str) -> Option<Loyalty> {
        match s.trim() {
            "Unset" | "Не задан" => Some(Loyalty::Unset),
            "VIP" => Some(Loyalty::Vip),
            "Regular" | "Обычный" => Some(Loyalty::Regular),
            "New" | "Новый" => Some(Loyalty::New),
            _ => None,
        }
    }
}

impl fmt::Display for Loyalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loyalty::Unset => write!(f, "Unset"),
            Loyalty::Vip => write!(f, "VIP"),
            Loyalty::Regular => write!(f, "Regular"),
            Loyalty::New => write!(f, "New"),
        }
    }
}

impl FromStr for Loyalty {
    type Err = VeloriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unset" | "none" => Ok(Loyalty::Unset),
            "vip" => Ok(Loyalty::Vip),
            "regular" => Ok(Loyalty::Regular),
            "new" => Ok(Loyalty::New),
            _ => Loyalty::parse(s)
                .ok_or_else(|| VeloriaError::InvalidInput(format!("unknown loyalty '{}'", s))),
        }
    }
}

/// Loyalty filter of the client list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoyaltyFilter {
    #[default]
    All,
    Vip,
    Regular,
    New,
}

impl LoyaltyFilter {
    pub fn accepts(self, loyalty: Loyalty) -> bool {
        match self {
            LoyaltyFilter::All => true,
            LoyaltyFilter::Vip => loyalty == Loyalty::Vip,
            LoyaltyFilter::Regular => loyalty == Loyalty::Regular,
            LoyaltyFilter::New => loyalty == Loyalty::New,
        }
    }
}

impl FromStr for LoyaltyFilter {
    type Err = VeloriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(LoyaltyFilter::All),
            "vip" => Ok(LoyaltyFilter::Vip),
            "regular" => Ok(LoyaltyFilter::Regular),
            "new" => Ok(LoyaltyFilter::New),
            _ => Err(VeloriaError::InvalidInput(format!("unknown loyalty filter '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub loyalty: Loyalty,
    /// ISO yyyy-mm-dd
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// ISO yyyy-mm-dd
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A client without its id: what callers pass to `add` and `update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub loyalty: Loyalty,
    pub birthday: Option<String>,
    pub last_visit: Option<String>,
    pub tags: Option<String>,
    pub allergies: Option<String>,
    pub preferences: Option<String>,
    pub notes: Option<String>,
}

impl ClientInput {
    pub fn new(name: impl Into<String>) -> Self {
        ClientInput {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl From<ClientRecord> for ClientInput {
    fn from(c: ClientRecord) -> Self {
        ClientInput {
            name: c.name,
            phone: c.phone,
            email: c.email,
            loyalty: c.loyalty,
            birthday: c.birthday,
            last_visit: c.last_visit,
            tags: c.tags,
            allergies: c.allergies,
            preferences: c.preferences,
            notes: c.notes,
        }
    }
}

impl ClientRecord {
    /// Case-insensitive match on name, phone or email plus a loyalty filter.
    pub fn matches(&self, query: &str, filter: LoyaltyFilter) -> bool {
        let q = query.trim().to_lowercase();
        let contains = |field: Option<&str>| field.unwrap_or("").to_lowercase().contains(&q);

        let matches_query = q.is_empty()
            || contains(Some(&self.name))
            || contains(self.phone.as_deref())
            || contains(self.email.as_deref());

        matches_query && filter.accepts(self.loyalty)
    }
}

impl Record for ClientRecord {
    type Input = ClientInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: ClientInput) -> Self {
        ClientRecord {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
            loyalty: input.loyalty,
            birthday: input.birthday,
            last_visit: input.last_visit,
            tags: input.tags,
            allergies: input.allergies,
            preferences: input.preferences,
            notes: input.notes,
        }
    }

    fn decode(value: &Value) -> Decoded<Self> {
        match decode_client(value) {
            Ok(client) => Decoded::Valid(client),
            Err(reason) => Decoded::Dropped(reason),
        }
    }
}

fn decode_client(value: &Value) -> Result<ClientRecord, DropReason> {
    let obj = record::as_object(value)?;

    Ok(ClientRecord {
        id: record::required_str(obj, "id")?,
        name: record::required_str(obj, "name")?,
        phone: record::optional_str(obj, "phone"),
        email: record::optional_str(obj, "email"),
        loyalty: record::optional_str(obj, "loyalty")
            .and_then(|s| Loyalty::parse(&s))
            .unwrap_or_default(),
        birthday: record::optional_str(obj, "birthday"),
        last_visit: record::optional_str(obj, "lastVisit"),
        tags: record::optional_str(obj, "tags"),
        allergies: record::optional_str(obj, "allergies"),
        preferences: record::optional_str(obj, "preferences"),
        notes: record::optional_str(obj, "notes"),
    })
}

/// The record shown when nothing usable is stored.
fn default_clients() -> Vec<ClientRecord> {
    vec![ClientRecord {
        phone: Some("+7 900 000-00-00".to_string()),
        email: Some("client@example.com".to_string()),
        ..ClientRecord::from_input("1".to_string(), ClientInput::new("Demo client"))
    }]
}

#[derive(Clone)]
pub struct ClientStore {
    records: RecordStore<ClientRecord>,
}

impl ClientStore {
    pub fn new(ctx: StoreContext) -> Self {
        ClientStore {
            records: RecordStore::new(ctx, CLIENTS_KEY, Change::Clients)
                .with_seed(default_clients, true),
        }
    }

    /// Stored clients, or the seeded default when none are usable.
    pub fn load(&self) -> Vec<ClientRecord> {
        self.records.load()
    }

    pub fn save(&self, clients: &[ClientRecord]) -> VeloriaResult<()> {
        self.records.save(clients)
    }

    pub fn add(&self, input: ClientInput) -> VeloriaResult<ClientRecord> {
        self.records.add(input)
    }

    pub fn get(&self, id: &str) -> Option<ClientRecord> {
        self.records.get(id)
    }

    pub fn update(&self, id: &str, input: ClientInput) -> VeloriaResult<Option<ClientRecord>> {
        self.records.update(id, input)
    }

    pub fn remove(&self, id: &str) -> VeloriaResult<()> {
        self.records.remove(id)
    }

    pub fn search(&self, query: &str, filter: LoyaltyFilter) -> Vec<ClientRecord> {
        self.load()
            .into_iter()
            .filter(|c| c.matches(query, filter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::memory_context;

    fn store() -> (StoreContext, ClientStore) {
        let ctx = memory_context();
        (ctx.clone(), ClientStore::new(ctx))
    }

    #[test]
    fn new_client_has_unset_optionals() {
        let (_, clients) = store();
        let anna = clients.add(ClientInput::new("Anna")).unwrap();

        let found = clients.get(&anna.id).unwrap();
        assert_eq!(found.name, "Anna");
        assert_eq!(found.phone, None);
        assert_eq!(found.email, None);
        assert_eq!(found.loyalty, Loyalty::Unset);
    }

    #[test]
    fn add_prepends_to_seed() {
        let (_, clients) = store();
        clients.add(ClientInput::new("Anna")).unwrap();

        let names: Vec<_> = clients.load().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Anna", "Demo client"]);
    }

    #[test]
    fn corrupt_json_yields_seed() {
        let (ctx, clients) = store();
        ctx.storage.set(CLIENTS_KEY, "{not valid").unwrap();

        let loaded = clients.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
    }

    #[test]
    fn update_unknown_id_leaves_storage_unchanged() {
        let (ctx, clients) = store();
        clients.add(ClientInput::new("Anna")).unwrap();
        let before = ctx.storage.get(CLIENTS_KEY).unwrap();

        let result = clients.update("nonexistent-id", ClientInput::new("Boris")).unwrap();
        assert!(result.is_none());
        assert_eq!(ctx.storage.get(CLIENTS_KEY).unwrap(), before);
    }

    #[test]
    fn legacy_loyalty_labels_are_understood() {
        let (ctx, clients) = store();
        ctx.storage
            .set(
                CLIENTS_KEY,
                r#"[{"id":"a","name":"Anna","loyalty":"Обычный"},
                    {"id":"b","name":"Boris","loyalty":"VIP","phone":42},
                    {"id":"c","name":"Clara","loyalty":"gold"},
                    {"id":"d"}]"#,
            )
            .unwrap();

        let loaded = clients.load();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].loyalty, Loyalty::Regular);
        assert_eq!(loaded[1].loyalty, Loyalty::Vip);
        assert_eq!(loaded[1].phone, None);
        assert_eq!(loaded[2].loyalty, Loyalty::Unset);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (_, clients) = store();
        let records = vec![
            ClientRecord {
                phone: Some("+7 900".into()),
                loyalty: Loyalty::Vip,
                birthday: Some("1990-05-01".into()),
                last_visit: Some("2026-02-14".into()),
                notes: Some("prefers mornings".into()),
                ..ClientRecord::from_input("a".into(), ClientInput::new("Anna"))
            },
            ClientRecord::from_input("b".into(), ClientInput::new("Boris")),
        ];

        clients.save(&records).unwrap();
        assert_eq!(clients.load(), records);
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let record = ClientRecord {
            last_visit: Some("2026-01-01".into()),
            ..ClientRecord::from_input("a".into(), ClientInput::new("Anna"))
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["lastVisit"], "2026-01-01");
        assert_eq!(json["loyalty"], "Unset");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn removing_last_client_brings_back_seed() {
        let (_, clients) = store();
        clients.save(&[ClientRecord::from_input("a".into(), ClientInput::new("Anna"))]).unwrap();
        clients.remove("a").unwrap();

        let loaded = clients.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
    }

    #[test]
    fn search_by_query_and_loyalty() {
        let (_, clients) = store();
        clients
            .add(ClientInput {
                phone: Some("+7 911 222".into()),
                loyalty: Loyalty::Vip,
                ..ClientInput::new("Anna")
            })
            .unwrap();
        clients.add(ClientInput::new("Boris")).unwrap();

        let names = |v: Vec<ClientRecord>| v.into_iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names(clients.search("ANN", LoyaltyFilter::All)), vec!["Anna"]);
        assert_eq!(names(clients.search("911", LoyaltyFilter::All)), vec!["Anna"]);
        assert_eq!(names(clients.search("", LoyaltyFilter::Vip)), vec!["Anna"]);
        assert!(clients.search("boris", LoyaltyFilter::Vip).is_empty());
        assert_eq!(clients.search("  ", LoyaltyFilter::All).len(), 3);
    }

    #[test]
    fn loyalty_from_str() {
        assert_eq!("vip".parse::<Loyalty>().unwrap(), Loyalty::Vip);
        assert_eq!("Новый".parse::<Loyalty>().unwrap(), Loyalty::New);
        assert!("gold".parse::<Loyalty>().is_err());
    }
}
