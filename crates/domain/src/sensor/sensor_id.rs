use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Value object identifying a Sensor
///
/// Rules:
/// - Stable for the lifetime of the sensor
/// - Sole basis of sensor equality and lookup
/// - Rendered as a hyphenated UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(Uuid);

impl SensorId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier with validation
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();

        if id.is_empty() {
            return Err(DomainError::InvalidSensorId(
                "Sensor ID cannot be empty".to_string(),
            ));
        }

        Uuid::parse_str(id)
            .map(Self)
            .map_err(|e| DomainError::InvalidSensorId(format!("Sensor ID {id} is not a UUID: {e}")))
    }
}

impl FromStr for SensorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SensorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
