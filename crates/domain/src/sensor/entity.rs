use super::{SensorId, SensorType};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A door, window or motion sensor known to the controller.
///
/// Two sensors are the same sensor iff their identifiers match; name, type
/// and activation state are mutable attributes of that identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    id: SensorId,
    name: String,
    sensor_type: SensorType,
    active: bool,
}

impl Sensor {
    /// Create a new, inactive sensor with a freshly generated identifier
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self::with_id(SensorId::generate(), name, sensor_type, false)
    }

    /// Rebuild a sensor whose identity is already known (e.g. loaded from storage)
    pub fn with_id(
        id: SensorId,
        name: impl Into<String>,
        sensor_type: SensorType,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sensor_type,
            active,
        }
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_sensor_type(&mut self, sensor_type: SensorType) {
        self.sensor_type = sensor_type;
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
