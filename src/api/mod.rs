//! HTTP API module for PayStream.
//!
//! This module exposes the live counter, the salary settings and the
//! exchange-rate lookup as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProjectionQuery, SettingsRequest};
pub use response::{ApiError, DayEarnings, EarningsResponse, RateLine, RateResponse};
pub use state::AppState;
