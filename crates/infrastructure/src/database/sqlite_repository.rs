use async_trait::async_trait;
use domain::{AlarmStatus, ArmingStatus, DomainError, SecurityRepository, Sensor, SensorId};
use sqlx::{Pool, Row, Sqlite, sqlite::SqlitePoolOptions};
use std::str::FromStr;

const ARMING_STATUS_KEY: &str = "arming_status";
const ALARM_STATUS_KEY: &str = "alarm_status";
const PREVIOUS_CAT_KEY: &str = "previous_cat_detected";

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(format!("Database error: {}", e))
}

/// Durable repository backed by a single SQLite file.
///
/// Status fields live in a key/value table so the previous-cat flag
/// survives restarts alongside the arming and alarm status.
#[derive(Clone)]
pub struct SqliteSecurityRepository {
    pool: Pool<Sqlite>,
}

impl SqliteSecurityRepository {
    pub async fn connect(connection_string: &str) -> Result<Self, DomainError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1) // SQLite is single-writer
            // In-memory databases vanish with their connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(connection_string)
            .await
            .map_err(db_error)?;

        let repo = Self { pool };
        repo.init_schema().await?;
        tracing::debug!("SQLite security repository ready");
        Ok(repo)
    }

    /// Wait for the pool to release the database file
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn init_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sensors (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                sensor_type TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS security_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn write_state(&self, key: &str, value: &str) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO security_state (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn read_state<T>(&self, key: &str) -> Result<Option<T>, DomainError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM security_state WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        value
            .map(|raw| {
                raw.parse::<T>().map_err(|e| {
                    DomainError::Repository(format!("Corrupt value for {key}: {e}"))
                })
            })
            .transpose()
    }

    fn row_to_sensor(row: &sqlx::sqlite::SqliteRow) -> Result<Sensor, DomainError> {
        let id: String = row.try_get("id").map_err(db_error)?;
        let name: String = row.try_get("name").map_err(db_error)?;
        let sensor_type: String = row.try_get("sensor_type").map_err(db_error)?;
        let active: bool = row.try_get("active").map_err(db_error)?;

        let id = SensorId::parse(&id)
            .map_err(|e| DomainError::Repository(format!("Corrupt sensor row: {e}")))?;
        let sensor_type = sensor_type
            .parse()
            .map_err(|e| DomainError::Repository(format!("Corrupt sensor row {id}: {e}")))?;

        Ok(Sensor::with_id(id, name, sensor_type, active))
    }
}

#[async_trait]
impl SecurityRepository for SqliteSecurityRepository {
    async fn add_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO sensors (id, name, sensor_type, active) VALUES (?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                sensor_type = excluded.sensor_type,
                active = excluded.active",
        )
        .bind(sensor.id().to_string())
        .bind(sensor.name())
        .bind(sensor.sensor_type().as_str())
        .bind(sensor.is_active())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM sensors WHERE id = ?")
            .bind(sensor.id().to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn update_sensor(&self, sensor: &Sensor) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE sensors SET name = ?, sensor_type = ?, active = ? WHERE id = ?")
                .bind(sensor.name())
                .bind(sensor.sensor_type().as_str())
                .bind(sensor.is_active())
                .bind(sensor.id().to_string())
                .execute(&self.pool)
                .await
                .map_err(db_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(sensor_id = %sensor.id(), "Update for unknown sensor ignored");
        }
        Ok(())
    }

    async fn get_sensors(&self) -> Result<Vec<Sensor>, DomainError> {
        let rows = sqlx::query("SELECT id, name, sensor_type, active FROM sensors ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter().map(Self::row_to_sensor).collect()
    }

    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), DomainError> {
        self.write_state(ALARM_STATUS_KEY, status.as_str()).await
    }

    async fn get_alarm_status(&self) -> Result<AlarmStatus, DomainError> {
        Ok(self.read_state(ALARM_STATUS_KEY).await?.unwrap_or_default())
    }

    async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), DomainError> {
        self.write_state(ARMING_STATUS_KEY, status.as_str()).await
    }

    async fn get_arming_status(&self) -> Result<ArmingStatus, DomainError> {
        Ok(self.read_state(ARMING_STATUS_KEY).await?.unwrap_or_default())
    }

    async fn set_previous_cat_detected(&self, detected: bool) -> Result<(), DomainError> {
        self.write_state(PREVIOUS_CAT_KEY, if detected { "true" } else { "false" })
            .await
    }

    async fn is_previous_cat_detected(&self) -> Result<bool, DomainError> {
        Ok(self.read_state(PREVIOUS_CAT_KEY).await?.unwrap_or(false))
    }
}
