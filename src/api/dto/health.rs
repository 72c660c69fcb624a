//! Health check response.

use serde::Serialize;

/// Overall relay health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayHealth {
    Healthy,
    /// Running, but every submission would be refused.
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: RelayHealth,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub email_provider: ProviderCheck,
}

#[derive(Debug, Serialize)]
pub struct ProviderCheck {
    pub status: CheckState,
    pub message: &'static str,
}

impl ProviderCheck {
    pub fn for_credential(configured: bool) -> Self {
        if configured {
            Self {
                status: CheckState::Ok,
                message: "Credential configured",
            }
        } else {
            Self {
                status: CheckState::Error,
                message: "RESEND_API_KEY is not set",
            }
        }
    }
}

impl HealthResponse {
    pub fn from_check(email_provider: ProviderCheck) -> Self {
        let status = match email_provider.status {
            CheckState::Ok => RelayHealth::Healthy,
            CheckState::Error => RelayHealth::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { email_provider },
        }
    }
}
