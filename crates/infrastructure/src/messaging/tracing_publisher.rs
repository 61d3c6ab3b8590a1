use async_trait::async_trait;
use domain::{EventPublisher, SecurityEvent};
use tracing::info;

/// Writes every event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(
        &self,
        event: SecurityEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match &event {
            SecurityEvent::AlarmStatusChanged { status, .. } => {
                info!(status = %status, "🚨 {}", status.description())
            }
            SecurityEvent::ArmingStatusChanged { status, .. } => {
                info!(status = %status, "🔒 {}", status.description())
            }
            SecurityEvent::CatDetected { detected, .. } => {
                if *detected {
                    info!("🐈 Cat detected by camera")
                } else {
                    info!("📷 No cat in camera frame")
                }
            }
            SecurityEvent::SensorStatusChanged {
                sensor_id, active, ..
            } => info!(sensor_id = %sensor_id, active, "Sensor status changed"),
            SecurityEvent::SensorAdded { sensor_id, .. } => {
                info!(sensor_id = %sensor_id, "Sensor added")
            }
            SecurityEvent::SensorRemoved { sensor_id, .. } => {
                info!(sensor_id = %sensor_id, "Sensor removed")
            }
        }
        Ok(())
    }
}
