//! Generic record store: one JSON array under one storage key.
//!
//! Every operation loads the whole array, changes it in memory and writes the
//! whole array back. There are no partial writes, no version checks and no
//! transactions spanning more than one key.

use std::sync::Arc;

use crate::error::VeloriaResult;
use crate::ids::IdGenerator;
use crate::notify::{Change, ChangeBus};
use crate::record::{Record, decode_array};
use crate::storage::KeyValueStorage;

/// Shared handles every store is built from.
#[derive(Clone)]
pub struct StoreContext {
    pub storage: Arc<dyn KeyValueStorage>,
    pub bus: ChangeBus,
    pub ids: Arc<dyn IdGenerator>,
}

#[derive(Clone)]
pub struct RecordStore<T: Record> {
    ctx: StoreContext,
    key: &'static str,
    change: Change,
    cap: Option<usize>,
    seed: fn() -> Vec<T>,
    seed_if_empty: bool,
}

impl<T: Record> RecordStore<T> {
    pub fn new(ctx: StoreContext, key: &'static str, change: Change) -> Self {
        RecordStore {
            ctx,
            key,
            change,
            cap: None,
            seed: Vec::new,
            seed_if_empty: false,
        }
    }

    /// Keep at most `cap` records; new records go first, so the oldest go.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Records returned when nothing usable is stored. With `if_empty`, the
    /// seed also replaces a stored array that decodes to nothing.
    pub fn with_seed(mut self, seed: fn() -> Vec<T>, if_empty: bool) -> Self {
        self.seed = seed;
        self.seed_if_empty = if_empty;
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored records for display. A failed read logs a warning and yields
    /// the seed.
    pub fn load(&self) -> Vec<T> {
        match self.read() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "could not read stored records");
                (self.seed)()
            }
        }
    }

    /// Stored records as the base of a write. Storage errors propagate, so a
    /// failed read never turns into an overwrite with the seed. Corrupt JSON
    /// still decodes to the seed.
    fn read(&self) -> VeloriaResult<Vec<T>> {
        let raw = self.ctx.storage.get(self.key)?;
        Ok(self.decode_or_seed(raw.as_deref()))
    }

    fn decode_or_seed(&self, raw: Option<&str>) -> Vec<T> {
        match decode_array::<T>(raw) {
            Some(records) if !(records.is_empty() && self.seed_if_empty) => records,
            _ => (self.seed)(),
        }
    }

    /// Overwrite the stored array and notify subscribers.
    pub fn save(&self, records: &[T]) -> VeloriaResult<()> {
        let text = serde_json::to_string(records)?;
        self.ctx.storage.set(self.key, &text)?;
        tracing::debug!(key = self.key, count = records.len(), "saved records");
        self.ctx.bus.publish(self.change);
        Ok(())
    }

    pub fn add(&self, input: T::Input) -> VeloriaResult<T> {
        let existing = self.read()?;
        let record = T::from_input(self.ctx.ids.next_id(), input);

        let mut next = Vec::with_capacity(existing.len() + 1);
        next.push(record.clone());
        next.extend(existing);
        if let Some(cap) = self.cap {
            next.truncate(cap);
        }

        self.save(&next)?;
        Ok(record)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.load().into_iter().find(|r| r.id() == id)
    }

    /// Replace the record with `id`, keeping the id.
    ///
    /// Returns `None`, without writing, when no record has that id.
    pub fn update(&self, id: &str, input: T::Input) -> VeloriaResult<Option<T>> {
        self.modify(id, |record| *record = T::from_input(id.to_string(), input.clone()))
    }

    /// Apply `f` to every record with `id`; `None` without writing if there is none.
    pub fn modify<F>(&self, id: &str, mut f: F) -> VeloriaResult<Option<T>>
    where
        F: FnMut(&mut T),
    {
        let mut records = self.read()?;
        let mut updated = None;

        for record in records.iter_mut().filter(|r| r.id() == id) {
            f(record);
            updated = Some(record.clone());
        }

        if updated.is_some() {
            self.save(&records)?;
        }
        Ok(updated)
    }

    /// Drop the record with `id`. Unknown ids are harmless.
    pub fn remove(&self, id: &str) -> VeloriaResult<()> {
        let mut records = self.read()?;
        records.retain(|r| r.id() != id);
        self.save(&records)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::storage::MemoryStorage;

    /// Deterministic ids: "id-1", "id-2", ...
    #[derive(Default)]
    pub struct SequentialIds {
        next: AtomicUsize,
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    pub fn memory_context() -> StoreContext {
        StoreContext {
            storage: Arc::new(MemoryStorage::new()),
            bus: ChangeBus::new(),
            ids: Arc::new(SequentialIds::default()),
        }
    }

    /// Storage whose reads always fail.
    pub struct BrokenStorage {
        pub writes: Mutex<Vec<String>>,
    }

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> VeloriaResult<Option<String>> {
            Err(crate::error::VeloriaError::Storage("disk on fire".into()))
        }

        fn set(&self, _key: &str, value: &str) -> VeloriaResult<()> {
            self.writes.lock().unwrap().push(value.to_string());
            Ok(())
        }

        fn remove(&self, _key: &str) -> VeloriaResult<()> {
            Ok(())
        }
    }

    /// Memory storage whose first `failures` reads fail.
    pub struct FlakyStorage {
        pub inner: MemoryStorage,
        pub failures: Mutex<usize>,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> VeloriaResult<Option<String>> {
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(crate::error::VeloriaError::Storage("busy".into()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> VeloriaResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> VeloriaResult<()> {
            self.inner.remove(key)
        }
    }
}
