//! Application state for the PayStream API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::format::NumberLocale;
use crate::rates::RateSource;
use crate::scheduler::TickerController;
use crate::settings::SettingsStore;

/// Shared application state.
///
/// Holds a controller for the running ticker (the ticker task itself stays
/// the only writer of the display state), the settings store and the quote
/// source.
#[derive(Clone)]
pub struct AppState {
    ticker: TickerController,
    store: Arc<SettingsStore>,
    rates: Arc<dyn RateSource>,
    locale: NumberLocale,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        ticker: TickerController,
        store: SettingsStore,
        rates: Arc<dyn RateSource>,
        locale: NumberLocale,
    ) -> Self {
        Self {
            ticker,
            store: Arc::new(store),
            rates,
            locale,
        }
    }

    /// Returns the ticker controller.
    pub fn ticker(&self) -> &TickerController {
        &self.ticker
    }

    /// Returns the settings store.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Returns the quote source.
    pub fn rates(&self) -> &dyn RateSource {
        self.rates.as_ref()
    }

    /// Returns the number formatting locale.
    pub fn locale(&self) -> NumberLocale {
        self.locale
    }
}
