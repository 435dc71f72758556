//! Storage keys and fixed limits shared across the stores.

pub const CLIENTS_KEY: &str = "veloria_clients_v1";
pub const EVENTS_KEY: &str = "veloria_events_v1";
pub const SERVICES_KEY: &str = "services:v1";
pub const AVATAR_KEY: &str = "veloria_avatar_v1";
pub const LANG_KEY: &str = "veloria_lang";
pub const PLAN_KEY: &str = "userPlan";

pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Maximum number of calendar events kept in storage (newest first).
pub const MAX_EVENTS: usize = 500;

/// Display name used when neither a name nor an email is known.
pub const DEFAULT_PROFILE_NAME: &str = "Master";
