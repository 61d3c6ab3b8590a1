pub mod channel_publisher;
pub mod tracing_publisher;

pub use channel_publisher::ChannelEventPublisher;
pub use tracing_publisher::TracingEventPublisher;
