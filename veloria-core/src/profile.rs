//! User profile and mock login session.
//!
//! Profile fields live in one of two scopes: `local` (durable, "remember
//! me") or `session` (gone when the process ends). Whichever scope holds an
//! auth token is the active one. Tokens are opaque mock strings.

use std::sync::Arc;

use uuid::Uuid;

use crate::constants::{AUTH_TOKEN_KEY, DEFAULT_PROFILE_NAME, USER_EMAIL_KEY, USER_NAME_KEY};
use crate::error::VeloriaResult;
use crate::notify::{Change, ChangeBus};
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Display name derived from an email: the part before `@`, or the whole
/// string when `@` is missing or first.
pub fn name_from_email(email: &str) -> String {
    match email.find('@') {
        Some(at) if at > 0 => email[..at].to_string(),
        _ => email.to_string(),
    }
}

#[derive(Clone)]
pub struct ProfileStore {
    local: Arc<dyn KeyValueStorage>,
    session: Arc<dyn KeyValueStorage>,
    bus: ChangeBus,
}

impl ProfileStore {
    pub fn new(local: Arc<dyn KeyValueStorage>, session: Arc<dyn KeyValueStorage>, bus: ChangeBus) -> Self {
        ProfileStore { local, session, bus }
    }

    pub fn load(&self) -> UserProfile {
        let email = self.read_from_any(USER_EMAIL_KEY).unwrap_or_default().trim().to_string();
        let name = self.read_from_any(USER_NAME_KEY).unwrap_or_default().trim().to_string();

        let name = if !name.is_empty() {
            name
        } else if !email.is_empty() {
            name_from_email(&email)
        } else {
            DEFAULT_PROFILE_NAME.to_string()
        };

        UserProfile { name, email }
    }

    /// Write the trimmed profile to the active scope and mirror it to `local`.
    pub fn save(&self, profile: &UserProfile) -> VeloriaResult<()> {
        let email = profile.email.trim();
        let name = profile.name.trim();

        let active = self.active_scope();
        active.set(USER_EMAIL_KEY, email)?;
        active.set(USER_NAME_KEY, name)?;

        self.local.set(USER_EMAIL_KEY, email)?;
        self.local.set(USER_NAME_KEY, name)?;

        self.bus.publish(Change::Profile);
        Ok(())
    }

    pub fn clear(&self) -> VeloriaResult<()> {
        for scope in [&self.local, &self.session] {
            scope.remove(USER_EMAIL_KEY)?;
            scope.remove(USER_NAME_KEY)?;
        }
        self.bus.publish(Change::Profile);
        Ok(())
    }

    /// Store a mock token and the email in the chosen scope, clearing stale
    /// values from the other one.
    pub fn login(&self, email: &str, name: Option<&str>, remember: bool) -> VeloriaResult<()> {
        let (scope, other) = if remember {
            (&self.local, &self.session)
        } else {
            (&self.session, &self.local)
        };

        scope.set(AUTH_TOKEN_KEY, &format!("mock-token-{}", Uuid::new_v4()))?;
        scope.set(USER_EMAIL_KEY, email.trim())?;
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            scope.set(USER_NAME_KEY, name)?;
        }

        other.remove(AUTH_TOKEN_KEY)?;
        other.remove(USER_EMAIL_KEY)?;

        tracing::debug!(remember, "logged in");
        self.bus.publish(Change::Profile);
        Ok(())
    }

    pub fn logout(&self) -> VeloriaResult<()> {
        self.local.remove(AUTH_TOKEN_KEY)?;
        self.session.remove(AUTH_TOKEN_KEY)?;
        self.bus.publish(Change::Profile);
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        has_token(self.local.as_ref()) || has_token(self.session.as_ref())
    }

    /// The scope holding a token, `local` first; `local` when neither does.
    fn active_scope(&self) -> &Arc<dyn KeyValueStorage> {
        if has_token(self.local.as_ref()) {
            &self.local
        } else if has_token(self.session.as_ref()) {
            &self.session
        } else {
            &self.local
        }
    }

    fn read_from_any(&self, key: &str) -> Option<String> {
        read(self.local.as_ref(), key).or_else(|| read(self.session.as_ref(), key))
    }
}

fn read(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    storage.get(key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "could not read profile field");
        None
    })
}

fn has_token(storage: &dyn KeyValueStorage) -> bool {
    read(storage, AUTH_TOKEN_KEY).is_some_and(|t| !t.trim().is_empty())
}
