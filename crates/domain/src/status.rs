use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Monitoring mode of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    /// Nobody is watching; sensor activity never raises an alarm
    Disarmed,
    /// Occupants are home; the camera watches for intruders
    ArmedHome,
    /// Premises are empty
    ArmedAway,
}

impl ArmingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disarmed => "disarmed",
            Self::ArmedHome => "armed_home",
            Self::ArmedAway => "armed_away",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Disarmed => "Disarmed",
            Self::ArmedHome => "Armed - At Home",
            Self::ArmedAway => "Armed - Away",
        }
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self, Self::Disarmed)
    }
}

impl Default for ArmingStatus {
    fn default() -> Self {
        Self::Disarmed
    }
}

impl FromStr for ArmingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disarmed" => Ok(Self::Disarmed),
            "armed_home" => Ok(Self::ArmedHome),
            "armed_away" => Ok(Self::ArmedAway),
            other => Err(DomainError::InvalidStatus(format!(
                "Unknown arming status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current alert level of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    NoAlarm,
    /// A sensor tripped while armed; a second trip escalates to Alarm
    PendingAlarm,
    Alarm,
}

impl AlarmStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoAlarm => "no_alarm",
            Self::PendingAlarm => "pending_alarm",
            Self::Alarm => "alarm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoAlarm => "Cool and Good",
            Self::PendingAlarm => "I'm in Danger...",
            Self::Alarm => "Awooga!",
        }
    }
}

impl Default for AlarmStatus {
    fn default() -> Self {
        Self::NoAlarm
    }
}

impl FromStr for AlarmStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_alarm" => Ok(Self::NoAlarm),
            "pending_alarm" => Ok(Self::PendingAlarm),
            "alarm" => Ok(Self::Alarm),
            other => Err(DomainError::InvalidStatus(format!(
                "Unknown alarm status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
