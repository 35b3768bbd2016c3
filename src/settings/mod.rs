//! Persistence of the user's salary settings.
//!
//! The settings are a single JSON record of salary, currency and rate,
//! stored under the namespaced key [`STORAGE_KEY`].

mod store;

pub use store::{STORAGE_KEY, SettingsStore};
