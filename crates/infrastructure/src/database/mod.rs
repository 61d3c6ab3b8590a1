pub mod sqlite_repository;

pub use sqlite_repository::SqliteSecurityRepository;
