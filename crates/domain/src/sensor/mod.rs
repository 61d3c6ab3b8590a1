mod entity;
mod sensor_id;
mod sensor_type;

pub use entity::Sensor;
pub use sensor_id::SensorId;
pub use sensor_type::SensorType;
