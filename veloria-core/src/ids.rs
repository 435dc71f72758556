//! Record id generation.

use chrono::Utc;
use uuid::Uuid;

/// Source of fresh record ids. Stores trust it: collisions are not checked.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `{prefix}_{unix millis}_{random hex}` ids.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator {
    prefix: String,
}

impl TimestampIdGenerator {
    pub fn new(prefix: &str) -> Self {
        TimestampIdGenerator {
            prefix: prefix.to_string(),
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        format!("{}_{}_{:x}", self.prefix, millis, random_u64())
    }
}

/// Low half of a v4 UUID: random bits from the OS generator.
fn random_u64() -> u64 {
    Uuid::new_v4().as_u128() as u64
}
