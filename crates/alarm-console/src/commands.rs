use anyhow::{Context, Result, bail};
use application::SecurityService;
use domain::{ArmingStatus, CameraImage, DomainError, Sensor, SensorId};
use std::io::Write;
use tracing::{debug, info};

use crate::cli::Command;

/// Most sensors the console lets an installation register
pub const MAX_SENSORS: usize = 4;

/// Run one console command against the service, writing the outcome to `out`
pub async fn execute(
    service: &SecurityService,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    debug!(?command, "Executing command");

    match command {
        Command::Status => {
            let arming = service.get_arming_status().await?;
            let alarm = service.get_alarm_status().await?;
            writeln!(out, "Arming: {} ({})", arming.description(), arming)?;
            writeln!(out, "Alarm:  {} ({})", alarm.description(), alarm)?;
            write_sensors(&service.get_sensors().await?, out)?;
        }
        Command::Sensors => {
            write_sensors(&service.get_sensors().await?, out)?;
        }
        Command::Arm { mode } => {
            service.set_arming_status(mode.into()).await?;
            write_alarm(service, out).await?;
        }
        Command::Disarm => {
            service.set_arming_status(ArmingStatus::Disarmed).await?;
            write_alarm(service, out).await?;
        }
        Command::AddSensor { name, sensor_type } => {
            let existing = service.get_sensors().await?.len();
            if existing >= MAX_SENSORS {
                bail!("Sensor limit reached ({MAX_SENSORS}); remove a sensor first");
            }

            let sensor = Sensor::new(name, sensor_type.into());
            service.add_sensor(&sensor).await?;
            writeln!(
                out,
                "Added {} ({}) as {}",
                sensor.name(),
                sensor.sensor_type(),
                sensor.id()
            )?;
        }
        Command::RemoveSensor { id } => {
            let sensor = find_sensor(service, &id).await?;
            service.remove_sensor(&sensor).await?;
            writeln!(out, "Removed {}", sensor.name())?;
        }
        Command::Activate { id } => {
            let sensor = find_sensor(service, &id).await?;
            service.change_sensor_activation_status(&sensor, true).await?;
            write_alarm(service, out).await?;
        }
        Command::Deactivate { id } => {
            let sensor = find_sensor(service, &id).await?;
            service.change_sensor_activation_status(&sensor, false).await?;
            write_alarm(service, out).await?;
        }
        Command::Scan { image, .. } => {
            let data = tokio::fs::read(&image)
                .await
                .with_context(|| format!("Failed to read image {}", image.display()))?;
            info!(path = %image.display(), bytes = data.len(), "📷 Scanning camera frame");

            service.process_image(&CameraImage::new(data)).await?;
            write_alarm(service, out).await?;
        }
    }

    Ok(())
}

async fn find_sensor(service: &SecurityService, id: &str) -> Result<Sensor, DomainError> {
    let id = SensorId::parse(id)?;
    service
        .get_sensors()
        .await?
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| DomainError::SensorNotFound(id.to_string()))
}

async fn write_alarm(service: &SecurityService, out: &mut impl Write) -> Result<()> {
    let alarm = service.get_alarm_status().await?;
    writeln!(out, "Alarm: {} ({})", alarm.description(), alarm)?;
    Ok(())
}

fn write_sensors(sensors: &[Sensor], out: &mut impl Write) -> Result<()> {
    if sensors.is_empty() {
        writeln!(out, "No sensors registered")?;
        return Ok(());
    }

    for sensor in sensors {
        writeln!(
            out,
            "{}  {:<20} {:<7} {}",
            sensor.id(),
            sensor.name(),
            sensor.sensor_type(),
            if sensor.is_active() { "ACTIVE" } else { "inactive" }
        )?;
    }
    Ok(())
}
