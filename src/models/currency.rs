//! Currency model.

use serde::{Deserialize, Serialize};

/// One of the two currencies PayStream converts between.
///
/// The exchange rate is always quoted as ARS per USD, so converting an ARS
/// amount divides by the rate and converting a USD amount multiplies by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Argentine peso.
    #[serde(rename = "ARS")]
    Ars,
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Returns the currency on the other side of the conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use paystream::models::Currency;
    ///
    /// assert_eq!(Currency::Ars.other(), Currency::Usd);
    /// assert_eq!(Currency::Usd.other(), Currency::Ars);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Currency::Ars => Currency::Usd,
            Currency::Usd => Currency::Ars,
        }
    }

    /// Returns the ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
        }
    }

    /// Converts `amount` held in this currency into the other currency.
    pub fn convert(self, amount: f64, rate: f64) -> f64 {
        match self {
            Currency::Ars => amount / rate,
            Currency::Usd => amount * rate,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARS" => Ok(Currency::Ars),
            "USD" => Ok(Currency::Usd),
            other => Err(format!("unknown currency: {}", other)),
        }
    }
}
