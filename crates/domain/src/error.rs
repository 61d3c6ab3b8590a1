use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid sensor ID: {0}")]
    InvalidSensorId(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Sensor not found: {0}")]
    SensorNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Image classifier error: {0}")]
    Classifier(String),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Invalid sensor type: {0}")]
    InvalidSensorType(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
