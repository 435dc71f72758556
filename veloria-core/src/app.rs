//! All stores wired to one pair of storage scopes and one change bus.

use std::sync::Arc;

use crate::avatar::AvatarStore;
use crate::clients::ClientStore;
use crate::config::VeloriaConfig;
use crate::events::EventStore;
use crate::i18n::{Lang, LanguageStore};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::notify::ChangeBus;
use crate::plan::PlanStore;
use crate::profile::ProfileStore;
use crate::services::ServiceStore;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::store::StoreContext;

#[derive(Clone)]
pub struct Veloria {
    pub bus: ChangeBus,
    pub clients: ClientStore,
    pub events: EventStore,
    pub services: ServiceStore,
    pub profile: ProfileStore,
    pub avatar: AvatarStore,
    pub plan: PlanStore,
    pub language: LanguageStore,
    forced_lang: Option<Lang>,
}

impl Veloria {
    /// Durable files under the configured data directory, plus an in-memory
    /// session scope that lives as long as the process.
    pub fn open(config: &VeloriaConfig) -> Self {
        let local = Arc::new(FileStorage::new(config.data_path()));
        tracing::debug!(dir = %local.dir().display(), "opening data directory");

        let mut app = Self::from_parts(local, Arc::new(MemoryStorage::new()), Arc::new(UuidGenerator));
        app.forced_lang = config.language();
        app
    }

    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(MemoryStorage::new()),
            Arc::new(MemoryStorage::new()),
            Arc::new(UuidGenerator),
        )
    }

    pub fn from_parts(
        local: Arc<dyn KeyValueStorage>,
        session: Arc<dyn KeyValueStorage>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let bus = ChangeBus::new();
        let ctx = StoreContext {
            storage: local.clone(),
            bus: bus.clone(),
            ids,
        };

        Veloria {
            clients: ClientStore::new(ctx.clone()),
            events: EventStore::new(ctx.clone()),
            services: ServiceStore::new(ctx),
            profile: ProfileStore::new(local.clone(), session, bus.clone()),
            avatar: AvatarStore::new(local.clone(), bus.clone()),
            plan: PlanStore::new(local.clone(), bus.clone()),
            language: LanguageStore::new(local, bus.clone()),
            bus,
            forced_lang: None,
        }
    }

    /// The configured language if any, else the saved or detected one.
    pub fn lang(&self, system_locale: Option<&str>) -> Lang {
        self.forced_lang
            .unwrap_or_else(|| self.language.load(system_locale))
    }
}
