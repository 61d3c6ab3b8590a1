use clap::{Parser, Subcommand, ValueEnum};
use domain::{ArmingStatus, SensorType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Home security alarm controller", long_about = None)]
pub struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show arming mode, alarm status and sensors
    Status,
    /// List sensors
    Sensors,
    /// Arm the system
    Arm {
        #[arg(value_enum)]
        mode: ArmMode,
    },
    /// Disarm the system and clear any alarm
    Disarm,
    /// Register a new sensor
    AddSensor {
        name: String,
        #[arg(value_enum)]
        sensor_type: SensorKind,
    },
    /// Forget a sensor
    RemoveSensor { id: String },
    /// Report a sensor as tripped
    Activate { id: String },
    /// Report a sensor as back to normal
    Deactivate { id: String },
    /// Run a camera frame through the cat detector
    Scan {
        image: PathBuf,
        /// Confidence score the stand-in classifier reports for this frame
        #[arg(long)]
        score: Option<f32>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmMode {
    Home,
    Away,
}

impl From<ArmMode> for ArmingStatus {
    fn from(mode: ArmMode) -> Self {
        match mode {
            ArmMode::Home => ArmingStatus::ArmedHome,
            ArmMode::Away => ArmingStatus::ArmedAway,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Door,
    Window,
    Motion,
}

impl From<SensorKind> for SensorType {
    fn from(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Door => SensorType::Door,
            SensorKind::Window => SensorType::Window,
            SensorKind::Motion => SensorType::Motion,
        }
    }
}
