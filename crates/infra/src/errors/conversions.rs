//! Conversions from external infrastructure errors into domain errors.

use harvest_domain::HarvestError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub HarvestError);

impl From<InfraError> for HarvestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HarvestError> for InfraError {
    fn from(value: HarvestError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoHarvestError {
    fn into_harvest(self) -> HarvestError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → HarvestError */
/* -------------------------------------------------------------------------- */

impl IntoHarvestError for HttpError {
    fn into_harvest(self) -> HarvestError {
        if self.is_timeout() {
            return HarvestError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return HarvestError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return HarvestError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return HarvestError::Http {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        HarvestError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_harvest())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → HarvestError */
/* -------------------------------------------------------------------------- */

impl IntoHarvestError for std::io::Error {
    fn into_harvest(self) -> HarvestError {
        match self.kind() {
            std::io::ErrorKind::NotFound => HarvestError::Io(format!("file not found: {self}")),
            std::io::ErrorKind::PermissionDenied => {
                HarvestError::Io(format!("permission denied: {self}"))
            }
            _ => HarvestError::Io(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_harvest())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → HarvestError */
/* -------------------------------------------------------------------------- */

impl IntoHarvestError for serde_json::Error {
    fn into_harvest(self) -> HarvestError {
        HarvestError::Internal(format!("JSON serialization failed: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_harvest())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → HarvestError */
/* -------------------------------------------------------------------------- */

impl IntoHarvestError for toml::de::Error {
    fn into_harvest(self) -> HarvestError {
        HarvestError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_harvest())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
