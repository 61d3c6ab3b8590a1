use crate::{AlarmStatus, ArmingStatus, DomainError, Sensor};
use async_trait::async_trait;

/// Repository interface for the controller's persisted state
///
/// Owns the sensor set, the arming status, the alarm status and the
/// previous-cat-detected flag. Implementations live in the infrastructure
/// layer; the rule engine only ever talks to this trait.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SecurityRepository: Send + Sync {
    /// Register a sensor; an existing sensor with the same ID is replaced
    async fn add_sensor(&self, sensor: &Sensor) -> Result<(), DomainError>;

    /// Forget a sensor by ID
    async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), DomainError>;

    /// Overwrite name, type and activation state of the sensor with the same ID
    async fn update_sensor(&self, sensor: &Sensor) -> Result<(), DomainError>;

    /// All known sensors, ordered by name then ID
    async fn get_sensors(&self) -> Result<Vec<Sensor>, DomainError>;

    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), DomainError>;

    async fn get_alarm_status(&self) -> Result<AlarmStatus, DomainError>;

    async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), DomainError>;

    async fn get_arming_status(&self) -> Result<ArmingStatus, DomainError>;

    /// Record whether the most recent image analysis found a cat
    async fn set_previous_cat_detected(&self, detected: bool) -> Result<(), DomainError>;

    async fn is_previous_cat_detected(&self) -> Result<bool, DomainError>;
}
