//! Infrastructure layer - Storage, image analysis and notification adapters

pub mod config;
pub mod database;
pub mod imaging;
pub mod messaging;
pub mod repositories;

pub use config::{ControllerConfig, RepositoryBackend};
pub use database::SqliteSecurityRepository;
pub use imaging::FakeImageClassifier;
pub use messaging::{ChannelEventPublisher, TracingEventPublisher};
pub use repositories::InMemorySecurityRepository;
