use crate::SecurityEvent;
use async_trait::async_trait;

/// Receives status notifications from the rule engine.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        event: SecurityEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
