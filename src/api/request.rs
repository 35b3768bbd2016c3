//! Request types for the PayStream API.

use serde::{Deserialize, Serialize};

use crate::models::{Currency, SalaryConfiguration};

/// Request body for `PUT /settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// Monthly gross salary.
    pub salary: f64,
    /// Currency the salary is paid in.
    pub currency: Currency,
    /// ARS per USD.
    pub rate: f64,
}

/// Query string for `GET /projection`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionQuery {
    /// Pointer position along the progress bar, from `0.0` to `1.0`.
    pub at: f64,
}

impl From<SettingsRequest> for SalaryConfiguration {
    fn from(req: SettingsRequest) -> Self {
        SalaryConfiguration::new(req.salary, req.currency, req.rate)
    }
}
