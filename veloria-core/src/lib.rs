//! Data core of the Veloria booking app.
//!
//! Clients, bookings, services, profile, avatar, plan and language are each
//! kept as one JSON value in a [`KeyValueStorage`]. Reads are forgiving:
//! malformed stored data degrades to defaults instead of failing. The
//! [`calendar`] module turns the stored bookings into month, week, day and
//! list views.

pub mod app;
pub mod avatar;
pub mod booking;
pub mod calendar;
pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod i18n;
pub mod ids;
pub mod notify;
pub mod plan;
pub mod profile;
pub mod record;
pub mod services;
pub mod storage;
pub mod store;
pub mod validation;

pub use app::Veloria;
pub use config::VeloriaConfig;
pub use error::{VeloriaError, VeloriaResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
