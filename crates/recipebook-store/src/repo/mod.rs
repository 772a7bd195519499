//! Repository layer mapping SQLite rows to typed records

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
