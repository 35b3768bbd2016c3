//! HTTP client for the quote endpoint.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::config::RateSourceConfig;
use crate::error::{PayStreamError, PayStreamResult};

use super::{ExchangeQuote, QuotePayload};

/// Boxed future returned by [`RateSource::fetch`].
pub type QuoteFuture<'a> = Pin<Box<dyn Future<Output = ExchangeQuote> + Send + 'a>>;

/// Anything that can produce an ARS/USD quote.
///
/// Implementations never fail: on any error they return
/// [`ExchangeQuote::unavailable`].
pub trait RateSource: Send + Sync {
    /// Fetches the current quote.
    fn fetch(&self) -> QuoteFuture<'_>;
}

/// Fetches the official selling quote from dolarapi.com.
#[derive(Debug, Clone)]
pub struct DolarApiClient {
    client: reqwest::Client,
    url: String,
}

impl DolarApiClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: &RateSourceConfig) -> PayStreamResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PayStreamError::RateLookup {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Fetches the quote, reporting failures as errors.
    pub async fn try_fetch(&self) -> PayStreamResult<ExchangeQuote> {
        let lookup_error = |e: reqwest::Error| PayStreamError::RateLookup {
            message: e.to_string(),
        };

        let payload: QuotePayload = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(lookup_error)?
            .json()
            .await
            .map_err(lookup_error)?;

        let quote = ExchangeQuote::from_selling_price(payload.venta);
        debug!(url = %self.url, venta = payload.venta, quote = quote.value(), "Fetched exchange rate");
        Ok(quote)
    }
}

impl RateSource for DolarApiClient {
    fn fetch(&self) -> QuoteFuture<'_> {
        Box::pin(async move {
            match self.try_fetch().await {
                Ok(quote) => quote,
                Err(e) => {
                    warn!(url = %self.url, error = %e, "Error getting exchange rate");
                    ExchangeQuote::unavailable()
                }
            }
        })
    }
}
