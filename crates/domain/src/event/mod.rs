use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod publisher;
pub use publisher::EventPublisher;

use crate::sensor::SensorId;
use crate::status::{AlarmStatus, ArmingStatus};

/// Notifications emitted after the controller changed persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityEvent {
    /// The alarm status was written
    AlarmStatusChanged {
        status: AlarmStatus,
        timestamp: DateTime<Utc>,
    },

    /// The arming mode was written
    ArmingStatusChanged {
        status: ArmingStatus,
        timestamp: DateTime<Utc>,
    },

    /// An image was analysed
    CatDetected {
        detected: bool,
        timestamp: DateTime<Utc>,
    },

    /// A sensor's activation state was written
    SensorStatusChanged {
        sensor_id: SensorId,
        active: bool,
        timestamp: DateTime<Utc>,
    },

    SensorAdded {
        sensor_id: SensorId,
        timestamp: DateTime<Utc>,
    },

    SensorRemoved {
        sensor_id: SensorId,
        timestamp: DateTime<Utc>,
    },
}

impl SecurityEvent {
    pub fn alarm_status_changed(status: AlarmStatus) -> Self {
        Self::AlarmStatusChanged {
            status,
            timestamp: Utc::now(),
        }
    }

    pub fn arming_status_changed(status: ArmingStatus) -> Self {
        Self::ArmingStatusChanged {
            status,
            timestamp: Utc::now(),
        }
    }

    pub fn cat_detected(detected: bool) -> Self {
        Self::CatDetected {
            detected,
            timestamp: Utc::now(),
        }
    }

    pub fn sensor_status_changed(sensor_id: SensorId, active: bool) -> Self {
        Self::SensorStatusChanged {
            sensor_id,
            active,
            timestamp: Utc::now(),
        }
    }

    pub fn sensor_added(sensor_id: SensorId) -> Self {
        Self::SensorAdded {
            sensor_id,
            timestamp: Utc::now(),
        }
    }

    pub fn sensor_removed(sensor_id: SensorId) -> Self {
        Self::SensorRemoved {
            sensor_id,
            timestamp: Utc::now(),
        }
    }

    /// Short name of the event, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlarmStatusChanged { .. } => "alarm_status_changed",
            Self::ArmingStatusChanged { .. } => "arming_status_changed",
            Self::CatDetected { .. } => "cat_detected",
            Self::SensorStatusChanged { .. } => "sensor_status_changed",
            Self::SensorAdded { .. } => "sensor_added",
            Self::SensorRemoved { .. } => "sensor_removed",
        }
    }
}
