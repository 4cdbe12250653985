//! DTOs for health check endpoint.

use serde::Serialize;

use crate::domain::entities::Provider;

/// Health check response.
///
/// Upstream providers are not contacted; `providers` lists the configured ones.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub providers: Vec<Provider>,
}
