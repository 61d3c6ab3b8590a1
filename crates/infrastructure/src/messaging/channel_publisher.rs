use async_trait::async_trait;
use domain::{EventPublisher, SecurityEvent};
use tokio::sync::mpsc;

/// Forwards events into an unbounded channel, e.g. towards a UI task
#[derive(Clone)]
pub struct ChannelEventPublisher {
    tx: mpsc::UnboundedSender<SecurityEvent>,
}

impl ChannelEventPublisher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SecurityEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl EventPublisher for ChannelEventPublisher {
    async fn publish(
        &self,
        event: SecurityEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.tx.send(event)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AlarmStatus;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (publisher, mut rx) = ChannelEventPublisher::channel();

        publisher
            .publish(SecurityEvent::cat_detected(true))
            .await
            .unwrap();
        publisher
            .publish(SecurityEvent::alarm_status_changed(AlarmStatus::Alarm))
            .await
            .unwrap();

        assert_eq!(rx.recv().await.unwrap().kind(), "cat_detected");
        assert_eq!(rx.recv().await.unwrap().kind(), "alarm_status_changed");
    }

    #[tokio::test]
    async fn test_closed_receiver_is_an_error() {
        let (publisher, rx) = ChannelEventPublisher::channel();
        drop(rx);

        let result = publisher.publish(SecurityEvent::cat_detected(false)).await;
        assert!(result.is_err());
    }
}
