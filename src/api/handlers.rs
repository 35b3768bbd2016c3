//! HTTP request handlers for the PayStream API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayStreamError;
use crate::models::SalaryConfiguration;

use super::request::{ProjectionQuery, SettingsRequest};
use super::response::{ApiError, ApiErrorResponse, DayEarnings, EarningsResponse, RateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/earnings", get(earnings_handler))
        .route("/projection", get(projection_handler))
        .route("/settings", get(get_settings_handler).put(put_settings_handler))
        .route("/rate", get(rate_handler))
        .with_state(state)
}

/// Handler for GET /earnings.
///
/// Returns the most recent frame published by the ticker.
async fn earnings_handler(State(state): State<AppState>) -> impl IntoResponse {
    let frame = state.ticker().latest();
    Json(EarningsResponse::from_frame(frame, state.locale()))
}

/// Handler for GET /projection.
///
/// Earnings by the end of the day under a pointer at `at` along the
/// progress bar.
async fn projection_handler(
    State(state): State<AppState>,
    Query(query): Query<ProjectionQuery>,
) -> impl IntoResponse {
    let frame = state.ticker().latest();
    Json(DayEarnings::at_fraction(&frame, query.at, state.locale()))
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ticker().latest().config)
}

/// Handler for PUT /settings.
///
/// Validates, persists and applies a new salary configuration. The ticker
/// resets to the new values instead of animating toward them.
async fn put_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettingsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settings update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config: SalaryConfiguration = request.into();
    match apply_settings(&state, config) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                salary = config.salary,
                currency = %config.currency,
                rate = config.rate,
                "Settings applied"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(config),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settings update rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates, saves, then resets the ticker.
///
/// Nothing is saved when the ticker has already stopped.
fn apply_settings(
    state: &AppState,
    config: SalaryConfiguration,
) -> Result<(), PayStreamError> {
    config.validate()?;
    if !state.ticker().is_running() {
        return Err(PayStreamError::SchedulerStopped);
    }
    state.store().save(&config)?;
    state.ticker().reconfigure(config)
}

/// Handler for GET /rate.
///
/// Looks up the current ARS/USD quote. A failed lookup is not an error:
/// it returns the sentinel quote with `available: false`.
async fn rate_handler(State(state): State<AppState>) -> impl IntoResponse {
    let quote = state.rates().fetch().await;
    if quote.usable().is_none() {
        warn!("Exchange rate unavailable");
    }
    Json(RateResponse::from(quote))
}
