use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of physical sensor reporting to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
            Self::Motion => "motion",
        }
    }
}

impl FromStr for SensorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "motion" => Ok(Self::Motion),
            other => Err(DomainError::InvalidSensorType(other.to_string())),
        }
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
