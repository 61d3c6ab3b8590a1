use async_trait::async_trait;
use domain::{AlarmStatus, ArmingStatus, DomainError, SecurityRepository, Sensor, SensorId};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct SecurityState {
    sensors: BTreeMap<SensorId, Sensor>,
    arming_status: ArmingStatus,
    alarm_status: AlarmStatus,
    previous_cat_detected: bool,
}

/// Volatile repository keyed by sensor ID
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    state: Mutex<SecurityState>,
}

impl InMemorySecurityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an initial sensor set
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        let sensors = sensors.into_iter().map(|s| (s.id(), s)).collect();
        Self {
            state: Mutex::new(SecurityState {
                sensors,
                ..SecurityState::default()
            }),
        }
    }

    pub async fn find_sensor(&self, id: SensorId) -> Option<Sensor> {
        self.state.lock().await.sensors.get(&id).cloned()
    }
}

#[async_trait]
impl SecurityRepository for InMemorySecurityRepository {
    async fn add_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        state.sensors.insert(sensor.id(), sensor.clone());
        Ok(())
    }

    async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        state.sensors.remove(&sensor.id());
        Ok(())
    }

    async fn update_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        // Unknown sensors are ignored, there is nothing to overwrite
        if let Some(stored) = state.sensors.get_mut(&sensor.id()) {
            stored.set_name(sensor.name());
            stored.set_sensor_type(sensor.sensor_type());
            stored.set_active(sensor.is_active());
        } else {
            tracing::debug!(sensor_id = %sensor.id(), "Update for unknown sensor ignored");
        }
        Ok(())
    }

    async fn get_sensors(&self) -> Result<Vec<Sensor>, DomainError> {
        let state = self.state.lock().await;
        let mut sensors: Vec<Sensor> = state.sensors.values().cloned().collect();
        sensors.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        Ok(sensors)
    }

    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), DomainError> {
        self.state.lock().await.alarm_status = status;
        Ok(())
    }

    async fn get_alarm_status(&self) -> Result<AlarmStatus, DomainError> {
        Ok(self.state.lock().await.alarm_status)
    }

    async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), DomainError> {
        self.state.lock().await.arming_status = status;
        Ok(())
    }

    async fn get_arming_status(&self) -> Result<ArmingStatus, DomainError> {
        Ok(self.state.lock().await.arming_status)
    }

    async fn set_previous_cat_detected(&self, detected: bool) -> Result<(), DomainError> {
        self.state.lock().await.previous_cat_detected = detected;
        Ok(())
    }

    async fn is_previous_cat_detected(&self) -> Result<bool, DomainError> {
        Ok(self.state.lock().await.previous_cat_detected)
    }
}
