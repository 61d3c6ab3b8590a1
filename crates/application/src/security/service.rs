use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use domain::{
    AlarmStatus, ArmingStatus, CameraImage, DomainError, EventPublisher, ImageClassifier,
    SecurityEvent, SecurityRepository, Sensor,
};

/// Confidence (percent) the classifier must reach before an image counts as a cat
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Rule engine deriving alarm-status transitions from sensor activity,
/// arming-mode changes and camera image analysis.
///
/// The service keeps no state of its own: every operation reads the current
/// values from the repository, applies the rules and writes the result back.
/// Operations are serialized through an internal guard so each one sees a
/// consistent snapshot of the repository.
pub struct SecurityService {
    repository: Arc<dyn SecurityRepository>,
    classifier: Arc<dyn ImageClassifier>,
    publishers: Vec<Arc<dyn EventPublisher>>,
    confidence_threshold: f32,
    guard: Mutex<()>,
}

impl SecurityService {
    pub fn new(
        repository: Arc<dyn SecurityRepository>,
        classifier: Arc<dyn ImageClassifier>,
    ) -> Self {
        Self {
            repository,
            classifier,
            publishers: Vec::new(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            guard: Mutex::new(()),
        }
    }

    /// Override the cat-confidence threshold (percent, `0.0..=100.0`)
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Result<Self, DomainError> {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(DomainError::InvalidConfiguration(format!(
                "Confidence threshold must be within 0..=100, got {threshold}"
            )));
        }
        self.confidence_threshold = threshold;
        Ok(self)
    }

    /// Register a publisher notified after every state change
    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publishers.push(publisher);
        self
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    // ── Sensor activity ───────────────────────────────────────

    /// Record a sensor's new activation state and apply the alarm rules.
    ///
    /// `sensor` carries the previously recorded state; the transition is
    /// judged against it. The sensor update is always persisted, even when
    /// the alarm status does not move.
    pub async fn change_sensor_activation_status(
        &self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<(), DomainError> {
        let _guard = self.guard.lock().await;

        let was_active = sensor.is_active();

        let mut updated = sensor.clone();
        updated.set_active(active);
        self.repository.update_sensor(&updated).await?;
        self.publish(SecurityEvent::sensor_status_changed(updated.id(), active))
            .await;

        let alarm_status = self.repository.get_alarm_status().await?;
        if alarm_status == AlarmStatus::Alarm {
            debug!(sensor_id = %sensor.id(), active, "Alarm is firing, sensor change ignored");
            return Ok(());
        }

        match (was_active, active) {
            // Re-activating an already active sensor counts as a fresh trip
            (_, true) => self.handle_sensor_activated(alarm_status).await,
            (true, false) => self.handle_sensor_deactivated(alarm_status).await,
            (false, false) => {
                debug!(sensor_id = %sensor.id(), "Sensor already inactive, alarm untouched");
                Ok(())
            }
        }
    }

    async fn handle_sensor_activated(&self, alarm_status: AlarmStatus) -> Result<(), DomainError> {
        let arming_status = self.repository.get_arming_status().await?;
        if !arming_status.is_armed() {
            debug!("System disarmed, sensor activation does not raise the alarm");
            return Ok(());
        }

        match alarm_status {
            AlarmStatus::NoAlarm => self.set_alarm_status(AlarmStatus::PendingAlarm).await,
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::Alarm).await,
            AlarmStatus::Alarm => Ok(()),
        }
    }

    async fn handle_sensor_deactivated(
        &self,
        alarm_status: AlarmStatus,
    ) -> Result<(), DomainError> {
        if alarm_status == AlarmStatus::PendingAlarm {
            self.set_alarm_status(AlarmStatus::NoAlarm).await?;
        }
        Ok(())
    }

    // ── Arming ────────────────────────────────────────────────

    /// Switch the monitoring mode.
    ///
    /// Disarming always clears the alarm. Arming resets every sensor to
    /// inactive without running the sensor rules, then raises the alarm when
    /// arming at home after a cat has been seen.
    pub async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), DomainError> {
        let _guard = self.guard.lock().await;

        self.repository.set_arming_status(status).await?;
        info!(status = %status, "Arming status changed");
        self.publish(SecurityEvent::arming_status_changed(status))
            .await;

        if status == ArmingStatus::Disarmed {
            return self.set_alarm_status(AlarmStatus::NoAlarm).await;
        }

        let sensors = self.repository.get_sensors().await?;
        debug!(count = sensors.len(), "Resetting sensors after arming");
        for mut sensor in sensors {
            sensor.set_active(false);
            self.repository.update_sensor(&sensor).await?;
            self.publish(SecurityEvent::sensor_status_changed(sensor.id(), false))
                .await;
        }

        // Cats only matter while someone is home
        if status == ArmingStatus::ArmedHome && self.repository.is_previous_cat_detected().await? {
            info!("Cat seen before arming at home");
            self.set_alarm_status(AlarmStatus::Alarm).await?;
        }

        Ok(())
    }

    // ── Camera ────────────────────────────────────────────────

    /// Classify a camera frame and apply the cat rules.
    pub async fn process_image(&self, image: &CameraImage) -> Result<(), DomainError> {
        let _guard = self.guard.lock().await;

        let cat_detected = self
            .classifier
            .image_contains_cat(image, self.confidence_threshold)
            .await?;
        self.repository
            .set_previous_cat_detected(cat_detected)
            .await?;
        debug!(
            cat_detected,
            threshold = self.confidence_threshold,
            bytes = image.data().len(),
            "Image analysed"
        );
        self.publish(SecurityEvent::cat_detected(cat_detected)).await;

        if cat_detected {
            if self.repository.get_arming_status().await? == ArmingStatus::ArmedHome {
                self.set_alarm_status(AlarmStatus::Alarm).await?;
            }
            return Ok(());
        }

        let sensors = self.repository.get_sensors().await?;
        if sensors.iter().any(Sensor::is_active) {
            debug!("No cat, but sensors are still active; alarm untouched");
            return Ok(());
        }

        self.set_alarm_status(AlarmStatus::NoAlarm).await
    }

    // ── Sensor registry ───────────────────────────────────────

    pub async fn add_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let _guard = self.guard.lock().await;

        self.repository.add_sensor(sensor).await?;
        info!(sensor_id = %sensor.id(), name = %sensor.name(), "Sensor added");
        self.publish(SecurityEvent::sensor_added(sensor.id())).await;
        Ok(())
    }

    pub async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let _guard = self.guard.lock().await;

        self.repository.remove_sensor(sensor).await?;
        info!(sensor_id = %sensor.id(), name = %sensor.name(), "Sensor removed");
        self.publish(SecurityEvent::sensor_removed(sensor.id())).await;
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────

    pub async fn get_sensors(&self) -> Result<Vec<Sensor>, DomainError> {
        let _guard = self.guard.lock().await;
        self.repository.get_sensors().await
    }

    pub async fn get_alarm_status(&self) -> Result<AlarmStatus, DomainError> {
        let _guard = self.guard.lock().await;
        self.repository.get_alarm_status().await
    }

    pub async fn get_arming_status(&self) -> Result<ArmingStatus, DomainError> {
        let _guard = self.guard.lock().await;
        self.repository.get_arming_status().await
    }

    // ── Helpers ───────────────────────────────────────────────

    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), DomainError> {
        self.repository.set_alarm_status(status).await?;
        info!(status = %status, "Alarm status changed");
        self.publish(SecurityEvent::alarm_status_changed(status))
            .await;
        Ok(())
    }

    async fn publish(&self, event: SecurityEvent) {
        for publisher in &self.publishers {
            if let Err(e) = publisher.publish(event.clone()).await {
                warn!(event = event.kind(), "Failed to publish security event: {}", e);
            }
        }
    }
}
