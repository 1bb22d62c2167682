//! DTOs for the health check endpoint.

use serde::Serialize;

/// Overall service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single component check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Database reachability, with row counts when the query succeeded.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blogs: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn ok(users: i64, blogs: i64) -> Self {
        Self {
            status: CheckState::Ok,
            users: Some(users),
            blogs: Some(blogs),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckState::Error,
            users: None,
            blogs: None,
            message: Some(message.into()),
        }
    }
}

impl HealthResponse {
    /// Builds the response, degraded whenever a check failed.
    pub fn new(database: DatabaseCheck) -> Self {
        let status = match database.status {
            CheckState::Ok => ServiceStatus::Healthy,
            CheckState::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}
