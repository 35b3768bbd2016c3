//! Response types for the PayStream API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{EarningRate, RateUnit, day_at_fraction, earnings_through_day};
use crate::error::PayStreamError;
use crate::format::{
    AMOUNT_DECIMALS, DigitCell, NumberLocale, digit_cells, format_amount, format_number, format_rate,
};
use crate::models::Currency;
use crate::rates::ExchangeQuote;
use crate::scheduler::Frame;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayStreamError> for ApiErrorResponse {
    fn from(error: PayStreamError) -> Self {
        match error {
            PayStreamError::InvalidSettings { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid setting '{}': {}", field, message),
                    "Salary and rate must both be at least 1",
                ),
            },
            PayStreamError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayStreamError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PayStreamError::SettingsIo { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Failed to persist settings",
                    format!("{}: {}", path, message),
                ),
            },
            PayStreamError::RateLookup { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details("RATE_LOOKUP_FAILED", "Exchange rate lookup failed", message),
            },
            PayStreamError::InvalidTickInterval => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CONFIG_ERROR", "Tick interval must be greater than zero"),
            },
            PayStreamError::SchedulerStopped => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new("TICKER_STOPPED", "The earnings ticker is not running"),
            },
        }
    }
}

/// One line of the per-unit earnings breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLine {
    /// The time unit.
    pub unit: RateUnit,
    /// Earnings per unit in the salary currency, formatted.
    pub amount: String,
    /// Earnings per unit in the other currency, formatted.
    pub other_amount: String,
}

/// Response body for `GET /earnings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsResponse {
    /// The raw frame.
    pub frame: Frame,
    /// Salary currency.
    pub currency: Currency,
    /// Currency of the converted amount.
    pub other_currency: Currency,
    /// `displayed_earned`, formatted.
    pub earned_text: String,
    /// `displayed_other`, formatted.
    pub other_text: String,
    /// Month progress as a percentage with one decimal.
    pub progress_percent: f64,
    /// Today's position on the month's day scale, in `[0, 1]`.
    pub day_progress: f64,
    /// Number of days in the month.
    pub last_day: u32,
    /// Earnings by the end of today, in both currencies.
    pub day_earnings: DayEarnings,
    /// `displayed_earned` split into cells for a digit-flip renderer.
    pub earned_cells: Vec<DigitCell>,
    /// `displayed_other` split into cells for a digit-flip renderer.
    pub other_cells: Vec<DigitCell>,
    /// Per-second, per-minute and per-hour earnings.
    pub rates: Vec<RateLine>,
}

/// Earnings accrued by the end of a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEarnings {
    /// Day of the month.
    pub day: u32,
    /// Earned in the salary currency.
    pub earned: f64,
    /// Earned in the other currency.
    pub other: f64,
    /// `earned`, formatted.
    pub earned_text: String,
    /// `other`, formatted.
    pub other_text: String,
}

impl DayEarnings {
    /// Projects the earnings through `day` of the frame's month.
    pub fn project(frame: &Frame, day: u32, locale: NumberLocale) -> Self {
        let (earned, other) = earnings_through_day(&frame.config, day, frame.last_day);
        Self {
            day,
            earned,
            other,
            earned_text: format_amount(earned, frame.currency(), locale),
            other_text: format_amount(other, frame.other_currency(), locale),
        }
    }

    /// Projects the earnings through the day under a pointer placed at
    /// `fraction` along the progress bar.
    pub fn at_fraction(frame: &Frame, fraction: f64, locale: NumberLocale) -> Self {
        Self::project(frame, day_at_fraction(fraction, frame.last_day), locale)
    }
}

impl EarningsResponse {
    /// Builds the response for a frame.
    pub fn from_frame(frame: Frame, locale: NumberLocale) -> Self {
        let currency = frame.currency();
        let other_currency = frame.other_currency();
        let rates = EarningRate::all(&frame.config)
            .into_iter()
            .map(|rate| RateLine {
                unit: rate.unit,
                amount: format_rate(rate.amount, currency, rate.unit, locale),
                other_amount: format_rate(rate.other_amount, other_currency, rate.unit, locale),
            })
            .collect();

        let cells = |value: f64| digit_cells(&format_number(value, AMOUNT_DECIMALS, locale), locale);

        Self {
            currency,
            other_currency,
            earned_text: format_amount(frame.displayed_earned, currency, locale),
            other_text: format_amount(frame.displayed_other, other_currency, locale),
            progress_percent: (frame.month_progress * 1000.0).round() / 10.0,
            day_progress: frame.day_progress(),
            last_day: frame.last_day,
            day_earnings: DayEarnings::project(&frame, frame.day, locale),
            earned_cells: cells(frame.displayed_earned),
            other_cells: cells(frame.displayed_other),
            rates,
            frame,
        }
    }
}

/// Response body for `GET /rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateResponse {
    /// The quote, `0` when unavailable.
    pub quote: f64,
    /// False when the lookup failed and the quote must not be used.
    pub available: bool,
}

impl From<ExchangeQuote> for RateResponse {
    fn from(quote: ExchangeQuote) -> Self {
        Self {
            quote: quote.value(),
            available: quote.usable().is_some(),
        }
    }
}
