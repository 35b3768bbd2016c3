//! ARS/USD exchange-rate lookup.
//!
//! A single GET against a public quote endpoint. Failures never propagate
//! into the calculator: they collapse into the sentinel quote `0`, which
//! [`ExchangeQuote::usable`] refuses to hand out as a rate.

mod client;
mod quote;

pub use client::{DolarApiClient, QuoteFuture, RateSource};
pub use quote::{ExchangeQuote, QuotePayload};
