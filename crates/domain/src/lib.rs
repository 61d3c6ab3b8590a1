//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Sensor)
//! - Value Objects (SensorId, SensorType, ArmingStatus, AlarmStatus, CameraImage)
//! - Security events
//! - Collaborator interfaces (SecurityRepository, ImageClassifier, EventPublisher)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Every persisted value lives behind the repository trait
//! - Testable in isolation

pub mod error;
pub mod event;
pub mod image;
pub mod repository;
pub mod sensor;
pub mod status;

// Re-export commonly used types
pub use error::DomainError;
pub use event::{EventPublisher, SecurityEvent};
pub use image::{CameraImage, ImageClassifier};
pub use repository::SecurityRepository;
pub use sensor::{Sensor, SensorId, SensorType};
pub use status::{AlarmStatus, ArmingStatus};
