use alarm_console::cli::{ArmMode, SensorKind};
use alarm_console::{Command, MAX_SENSORS, execute};
use application::SecurityService;
use domain::{AlarmStatus, DomainError, SecurityRepository, SensorType};
use infrastructure::{FakeImageClassifier, InMemorySecurityRepository};
use std::io::Write;
use std::sync::Arc;

fn setup(score: f32) -> (Arc<InMemorySecurityRepository>, SecurityService) {
    let repo = Arc::new(InMemorySecurityRepository::new());
    let service = SecurityService::new(repo.clone(), Arc::new(FakeImageClassifier::new(score)));
    (repo, service)
}

async fn run(service: &SecurityService, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute(service, command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

async fn add(service: &SecurityService, name: &str) -> String {
    run(
        service,
        Command::AddSensor {
            name: name.to_string(),
            sensor_type: SensorKind::Door,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_status_of_fresh_system() {
    let (_, service) = setup(0.0);

    let output = run(&service, Command::Status).await.unwrap();

    assert!(output.contains("Arming: Disarmed (disarmed)"));
    assert!(output.contains("Alarm:  Cool and Good (no_alarm)"));
    assert!(output.contains("No sensors registered"));
}

#[tokio::test]
async fn test_add_then_trip_sensor_while_armed() {
    let (repo, service) = setup(0.0);
    add(&service, "Front Door").await;
    let id = repo.get_sensors().await.unwrap()[0].id().to_string();

    run(&service, Command::Arm { mode: ArmMode::Away })
        .await
        .unwrap();
    let output = run(&service, Command::Activate { id: id.clone() })
        .await
        .unwrap();

    assert!(output.contains("pending_alarm"));
    let listing = run(&service, Command::Sensors).await.unwrap();
    assert!(listing.contains("Front Door"));
    assert!(listing.contains("ACTIVE"));

    let output = run(&service, Command::Deactivate { id }).await.unwrap();
    assert!(output.contains("no_alarm"));
}

#[tokio::test]
async fn test_sensor_limit_is_enforced() {
    let (repo, service) = setup(0.0);
    for i in 0..MAX_SENSORS {
        add(&service, &format!("Sensor {i}")).await;
    }

    let result = run(
        &service,
        Command::AddSensor {
            name: "One Too Many".to_string(),
            sensor_type: SensorKind::Motion,
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(repo.get_sensors().await.unwrap().len(), MAX_SENSORS);
}

#[tokio::test]
async fn test_unknown_sensor_id_is_reported() {
    let (_, service) = setup(0.0);

    let err = run(
        &service,
        Command::Activate {
            id: "67e55044-10b1-426f-9247-bb680e5fe0c8".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::SensorNotFound(_))
    ));
}

#[tokio::test]
async fn test_remove_sensor_by_id() {
    let (repo, service) = setup(0.0);
    add(&service, "Skylight").await;
    let sensor = repo.get_sensors().await.unwrap().remove(0);
    assert_eq!(sensor.sensor_type(), SensorType::Door);

    let output = run(
        &service,
        Command::RemoveSensor {
            id: sensor.id().to_string(),
        },
    )
    .await
    .unwrap();

    assert!(output.contains("Removed Skylight"));
    assert!(repo.get_sensors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_frame_with_cat_while_armed_home() {
    let (repo, service) = setup(95.0);
    let mut file = tempfile_frame();
    file.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();

    run(&service, Command::Arm { mode: ArmMode::Home })
        .await
        .unwrap();
    let output = run(
        &service,
        Command::Scan {
            image: file.path().to_path_buf(),
            score: Some(95.0),
        },
    )
    .await
    .unwrap();

    assert!(output.contains("Awooga!"));
    assert_eq!(repo.get_alarm_status().await.unwrap(), AlarmStatus::Alarm);
}

#[tokio::test]
async fn test_scan_missing_file_fails() {
    let (_, service) = setup(0.0);

    let result = run(
        &service,
        Command::Scan {
            image: "/definitely/not/here.png".into(),
            score: None,
        },
    )
    .await;

    assert!(result.is_err());
}

fn tempfile_frame() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().unwrap()
}
