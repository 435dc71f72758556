//! Profile avatar, stored as a single `data:image/...` URL.

use std::sync::Arc;

use crate::constants::AVATAR_KEY;
use crate::error::{VeloriaError, VeloriaResult};
use crate::notify::{Change, ChangeBus};
use crate::storage::KeyValueStorage;

const DATA_IMAGE_PREFIX: &str = "data:image/";

#[derive(Clone)]
pub struct AvatarStore {
    storage: Arc<dyn KeyValueStorage>,
    bus: ChangeBus,
}

impl AvatarStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, bus: ChangeBus) -> Self {
        AvatarStore { storage, bus }
    }

    /// The stored avatar, ignoring anything that is not an image data URL.
    pub fn load(&self) -> Option<String> {
        let value = self.storage.get(AVATAR_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read avatar");
            None
        })?;

        if value.starts_with(DATA_IMAGE_PREFIX) {
            Some(value)
        } else {
            tracing::debug!("ignoring stored avatar that is not an image data URL");
            None
        }
    }

    pub fn save(&self, data_url: &str) -> VeloriaResult<()> {
        if !data_url.starts_with(DATA_IMAGE_PREFIX) {
            return Err(VeloriaError::InvalidAvatar);
        }
        self.storage.set(AVATAR_KEY, data_url)?;
        self.bus.publish(Change::Avatar);
        Ok(())
    }

    pub fn clear(&self) -> VeloriaResult<()> {
        self.storage.remove(AVATAR_KEY)?;
        self.bus.publish(Change::Avatar);
        Ok(())
    }
}
