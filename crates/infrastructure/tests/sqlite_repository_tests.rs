//! Integration tests for SqliteSecurityRepository
//!
//! Run against an in-memory SQLite database, plus one file-backed database
//! to check that state survives reconnecting.

use domain::{AlarmStatus, ArmingStatus, DomainError, SecurityRepository, Sensor, SensorType};
use infrastructure::SqliteSecurityRepository;

/// Helper to create a fresh in-memory repository
async fn create_test_repo() -> SqliteSecurityRepository {
    SqliteSecurityRepository::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

#[tokio::test]
async fn test_fresh_database_defaults() {
    let repo = create_test_repo().await;

    assert_eq!(repo.get_arming_status().await.unwrap(), ArmingStatus::Disarmed);
    assert_eq!(repo.get_alarm_status().await.unwrap(), AlarmStatus::NoAlarm);
    assert!(!repo.is_previous_cat_detected().await.unwrap());
    assert!(repo.get_sensors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_and_list_sensors() {
    let repo = create_test_repo().await;
    let door = Sensor::new("Front Door", SensorType::Door);
    let motion = Sensor::new("Basement", SensorType::Motion);

    repo.add_sensor(&door).await.unwrap();
    repo.add_sensor(&motion).await.unwrap();

    let sensors = repo.get_sensors().await.unwrap();
    assert_eq!(sensors.len(), 2);
    // Ordered by name
    assert_eq!(sensors[0], motion);
    assert_eq!(sensors[1], door);
    assert_eq!(sensors[1].sensor_type(), SensorType::Door);
    assert!(!sensors[1].is_active());
}

#[tokio::test]
async fn test_add_existing_id_overwrites() {
    let repo = create_test_repo().await;
    let sensor = Sensor::new("Kitchen", SensorType::Window);
    repo.add_sensor(&sensor).await.unwrap();

    let mut renamed = sensor.clone();
    renamed.set_name("Kitchen Window");
    repo.add_sensor(&renamed).await.unwrap();

    let sensors = repo.get_sensors().await.unwrap();
    assert_eq!(sensors.len(), 1);
    assert_eq!(sensors[0].name(), "Kitchen Window");
}

#[tokio::test]
async fn test_update_sensor_matches_by_id() {
    let repo = create_test_repo().await;
    let sensor = Sensor::new("Hall", SensorType::Motion);
    repo.add_sensor(&sensor).await.unwrap();

    let mut changed = sensor.clone();
    changed.set_active(true);
    changed.set_name("Upstairs Hall");
    repo.update_sensor(&changed).await.unwrap();

    let stored = repo.get_sensors().await.unwrap().remove(0);
    assert_eq!(stored.id(), sensor.id());
    assert!(stored.is_active());
    assert_eq!(stored.name(), "Upstairs Hall");
}

#[tokio::test]
async fn test_update_unknown_sensor_is_noop() {
    let repo = create_test_repo().await;

    repo.update_sensor(&Sensor::new("Ghost", SensorType::Door))
        .await
        .unwrap();

    assert!(repo.get_sensors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_sensor() {
    let repo = create_test_repo().await;
    let keep = Sensor::new("Keep", SensorType::Door);
    let drop = Sensor::new("Drop", SensorType::Window);
    repo.add_sensor(&keep).await.unwrap();
    repo.add_sensor(&drop).await.unwrap();

    repo.remove_sensor(&drop).await.unwrap();

    assert_eq!(repo.get_sensors().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_status_fields_round_trip() {
    let repo = create_test_repo().await;

    repo.set_arming_status(ArmingStatus::ArmedAway).await.unwrap();
    repo.set_alarm_status(AlarmStatus::PendingAlarm).await.unwrap();
    repo.set_previous_cat_detected(true).await.unwrap();

    assert_eq!(repo.get_arming_status().await.unwrap(), ArmingStatus::ArmedAway);
    assert_eq!(repo.get_alarm_status().await.unwrap(), AlarmStatus::PendingAlarm);
    assert!(repo.is_previous_cat_detected().await.unwrap());

    repo.set_previous_cat_detected(false).await.unwrap();
    assert!(!repo.is_previous_cat_detected().await.unwrap());
}

#[tokio::test]
async fn test_state_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("security.db").display()
    );
    let sensor = Sensor::new("Porch", SensorType::Door);

    {
        let repo = SqliteSecurityRepository::connect(&url).await.unwrap();
        repo.add_sensor(&sensor).await.unwrap();
        repo.set_arming_status(ArmingStatus::ArmedHome).await.unwrap();
        repo.set_previous_cat_detected(true).await.unwrap();
        repo.close().await;
    }

    let reopened = SqliteSecurityRepository::connect(&url).await.unwrap();
    assert_eq!(reopened.get_sensors().await.unwrap(), vec![sensor]);
    assert_eq!(
        reopened.get_arming_status().await.unwrap(),
        ArmingStatus::ArmedHome
    );
    assert!(reopened.is_previous_cat_detected().await.unwrap());
}

#[tokio::test]
async fn test_corrupt_status_surfaces_repository_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let repo = SqliteSecurityRepository::connect(&url).await.unwrap();
    repo.set_alarm_status(AlarmStatus::Alarm).await.unwrap();
    repo.close().await;

    // Tamper with the stored value behind the repository's back
    let pool = sqlx::SqlitePool::connect(&url).await.unwrap();
    sqlx::query("UPDATE security_state SET value = 'siren' WHERE key = 'alarm_status'")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let repo = SqliteSecurityRepository::connect(&url).await.unwrap();
    assert!(matches!(
        repo.get_alarm_status().await,
        Err(DomainError::Repository(_))
    ));
}
