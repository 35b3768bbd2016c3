//! Exchange-rate quotes.

use serde::{Deserialize, Serialize};

/// Body returned by the quote endpoint; only the selling price is used.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotePayload {
    /// Selling price, in ARS per USD.
    pub venta: f64,
}

/// An ARS/USD quote, rounded up to a whole peso.
///
/// A value of `0` is the "unknown" sentinel produced by a failed lookup.
///
/// # Example
///
/// ```
/// use paystream::rates::ExchangeQuote;
///
/// assert_eq!(ExchangeQuote::from_selling_price(1374.5).usable(), Some(1375.0));
/// assert_eq!(ExchangeQuote::unavailable().usable(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExchangeQuote(f64);

impl ExchangeQuote {
    /// The sentinel quote.
    pub fn unavailable() -> Self {
        Self(0.0)
    }

    /// Builds a quote from a raw selling price.
    pub fn from_selling_price(price: f64) -> Self {
        if price.is_finite() && price > 0.0 {
            Self(price.ceil())
        } else {
            Self::unavailable()
        }
    }

    /// The raw value, `0` when unavailable.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The quote as a rate, or `None` for the sentinel.
    pub fn usable(self) -> Option<f64> {
        (self.0 > 0.0).then_some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_selling_price_rounds_up() {
        let body = r#"{"moneda":"USD","casa":"oficial","compra":1320.5,"venta":1370.25}"#;
        let payload: QuotePayload = serde_json::from_str(body).unwrap();
        assert_eq!(ExchangeQuote::from_selling_price(payload.venta).value(), 1371.0);
    }

    #[test]
    fn test_payload_without_selling_price_fails() {
        assert!(serde_json::from_str::<QuotePayload>(r#"{"compra":1320}"#).is_err());
    }

    #[test]
    fn test_non_positive_price_is_sentinel() {
        assert_eq!(ExchangeQuote::from_selling_price(0.0).usable(), None);
        assert_eq!(ExchangeQuote::from_selling_price(-5.0).usable(), None);
        assert_eq!(ExchangeQuote::from_selling_price(f64::NAN).usable(), None);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let quote = ExchangeQuote::from_selling_price(1000.0);
        assert_eq!(serde_json::to_string(&quote).unwrap(), "1000.0");
    }
}
